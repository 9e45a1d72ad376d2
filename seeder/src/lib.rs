//! # Seeder
//!
//! Loads the sample catalog into a SalonConnect database.
//!
//! Idempotent by default: if any user exists the run is skipped, so it can
//! sit in front of every server start. `--force` wipes the tables first.
//!
//! Every seeded account shares the password `password123` (hashed with the
//! same cost the API uses), which keeps manual smoke runs one login away.

use anyhow::Result;
use catalog::rows::{
    encode_string_list, BookingRow, SalonRow, ServiceRow, UserRow, ROLE_CUSTOMER,
    ROLE_SALON_OWNER, ROLE_STYLIST, STATUS_PENDING,
};
use catalog::Store;
use chrono::{Duration, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use uuid::Uuid;

pub mod data;

use data::{SalonSeed, CUSTOMER_EMAIL, SALONS, SEED_PASSWORD};

const BCRYPT_COST: u32 = 12;

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub salons: usize,
    pub services: usize,
    pub stylists: usize,
    pub schedules: usize,
    pub reviews: usize,
    pub bookings: usize,
}

pub async fn run(database_url: &str, force: bool) -> Result<()> {
    let store = Store::connect(database_url)?;
    store.migrate().await?;

    if force {
        println!("Clearing existing data...");
        store.clear_all().await?;
    } else if store.user_count().await? > 0 {
        println!("Database already seeded, skipping.");
        return Ok(());
    }

    let summary = seed(&store).await?;

    println!("\nSeeded Users: {}", summary.users);
    println!("Seeded Salons: {}", summary.salons);
    println!("Seeded Services: {}", summary.services);
    println!("Seeded Stylists: {}", summary.stylists);
    println!("Seeded Schedules: {}", summary.schedules);
    println!("Seeded Reviews: {}", summary.reviews);
    println!("Seeded Bookings: {}", summary.bookings);

    Ok(())
}

pub async fn seed(store: &Store) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    // One hash for every sample account, like any sane demo fixture.
    let password_hash = bcrypt::hash(SEED_PASSWORD, BCRYPT_COST)?;

    let customer_id = insert_user(
        store,
        &password_hash,
        CUSTOMER_EMAIL,
        ROLE_CUSTOMER,
        "Jessica",
        "Martinez",
        Some("+1 (555) 987-6543"),
    )
    .await?;
    summary.users += 1;

    let pb = ProgressBar::new(SALONS.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for salon_seed in SALONS {
        pb.set_message(format!("Seeding {}", salon_seed.name));

        seed_salon(store, salon_seed, &password_hash, &customer_id, &mut summary).await?;

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    Ok(summary)
}

async fn seed_salon(
    store: &Store,
    seed: &SalonSeed,
    password_hash: &str,
    customer_id: &str,
    summary: &mut SeedSummary,
) -> Result<()> {
    let owner_id = insert_user(
        store,
        password_hash,
        seed.owner_email,
        ROLE_SALON_OWNER,
        seed.owner_first_name,
        seed.owner_last_name,
        None,
    )
    .await?;
    summary.users += 1;

    let now = Utc::now();
    let salon_id = Uuid::new_v4().to_string();
    store
        .insert_salon(&SalonRow {
            id: salon_id.clone(),
            name: seed.name.to_string(),
            description: Some(seed.description.to_string()),
            address: seed.address.to_string(),
            city: seed.city.to_string(),
            state: seed.state.to_string(),
            zip_code: Some(seed.zip_code.to_string()),
            latitude: Some(seed.latitude),
            longitude: Some(seed.longitude),
            phone: Some(seed.phone.to_string()),
            email: Some(seed.email.to_string()),
            images: encode_string_list(seed.images),
            owner_id,
            is_active: true,
            created_at: now,
        })
        .await?;
    summary.salons += 1;

    let mut first_service_id = None;
    for service in seed.services {
        let service_id = Uuid::new_v4().to_string();
        store
            .insert_service(&ServiceRow {
                id: service_id.clone(),
                salon_id: salon_id.clone(),
                name: service.name.to_string(),
                description: Some(service.description.to_string()),
                category: service.category.to_string(),
                duration_minutes: service.duration_minutes,
                price: service.price,
                is_active: true,
            })
            .await?;
        first_service_id.get_or_insert(service_id);
        summary.services += 1;
    }

    let mut first_stylist_id = None;
    for stylist in seed.stylists {
        let user_id = insert_user(
            store,
            password_hash,
            stylist.email,
            ROLE_STYLIST,
            stylist.first_name,
            stylist.last_name,
            None,
        )
        .await?;
        summary.users += 1;

        let stylist_id = Uuid::new_v4().to_string();
        store
            .insert_stylist(
                &stylist_id,
                &user_id,
                &salon_id,
                Some(stylist.bio),
                Some(stylist.experience_years),
                &encode_string_list(stylist.specialties),
            )
            .await?;
        first_stylist_id.get_or_insert(stylist_id.clone());
        summary.stylists += 1;

        // Monday through Friday, 9 to 6.
        for day in 1..=5 {
            store
                .insert_schedule(
                    &Uuid::new_v4().to_string(),
                    &stylist_id,
                    day,
                    "09:00",
                    "18:00",
                )
                .await?;
            summary.schedules += 1;
        }
    }

    for (i, review) in seed.reviews.iter().enumerate() {
        store
            .insert_review(
                &Uuid::new_v4().to_string(),
                &salon_id,
                customer_id,
                None,
                review.rating,
                review.comment,
                now - Duration::days(i as i64 + 1),
            )
            .await?;
        summary.reviews += 1;
    }

    // One upcoming appointment so the bookings surface has data on day one.
    if let (Some(stylist_id), Some(service_id)) = (first_stylist_id, first_service_id) {
        let price = seed.services[0].price;
        store
            .create_booking(
                &BookingRow {
                    id: Uuid::new_v4().to_string(),
                    customer_id: customer_id.to_string(),
                    salon_id,
                    stylist_id,
                    datetime: now + Duration::days(2),
                    total_price: price,
                    status: STATUS_PENDING.to_string(),
                    notes: None,
                    created_at: now,
                },
                &[service_id],
            )
            .await?;
        summary.bookings += 1;
    }

    Ok(())
}

async fn insert_user(
    store: &Store,
    password_hash: &str,
    email: &str,
    role: &str,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> Result<String> {
    let id = Uuid::new_v4().to_string();

    store
        .insert_user(&UserRow {
            id: id.clone(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: role.to_string(),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            phone: phone.map(str::to_string),
            avatar: None,
            created_at: Utc::now(),
        })
        .await?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use catalog::{SalonFilter, Store};

    use super::{data::SALONS, seed};

    #[tokio::test]
    async fn test_seed_populates_every_table() {
        let store = Store::in_memory().await.unwrap();
        let summary = seed(&store).await.unwrap();

        assert_eq!(summary.salons, SALONS.len());
        // Customer + one owner per salon + one user per stylist.
        let stylist_count: usize = SALONS.iter().map(|s| s.stylists.len()).sum();
        assert_eq!(summary.users, 1 + SALONS.len() + stylist_count);
        assert_eq!(summary.bookings, SALONS.len());
        assert!(summary.reviews >= SALONS.len());

        let page = store
            .salon_page(&SalonFilter {
                limit: 10,
                offset: 0,
                ..SalonFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), SALONS.len());
    }
}
