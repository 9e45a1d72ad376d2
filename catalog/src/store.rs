//! Query interface over the SQLite catalog.
//!
//! One [`Store`] per process, cloned freely (the pool is internally
//! reference-counted). The salon page fetch applies the query/category/price
//! constraints and `LIMIT`/`OFFSET` at the SQL level; rating and distance
//! handling happen in the server's search module on the fetched page.

use sqlx::{sqlite::SqlitePoolOptions, QueryBuilder, Sqlite, SqlitePool};

use crate::rows::{
    BookingRow, ReviewRow, SalonRow, ScheduleRow, ServiceRow, StylistRow, UserRow,
};
use crate::schema;

const SALON_COLUMNS: &str = "id, name, description, address, city, state, zip_code, \
     latitude, longitude, phone, email, images, owner_id, is_active, created_at";

const SERVICE_COLUMNS: &str =
    "id, salon_id, name, description, category, duration_minutes, price, is_active";

const BOOKING_COLUMNS: &str =
    "id, customer_id, salon_id, stylist_id, datetime, total_price, status, notes, created_at";

/// Fetch-stage constraints for the salon listing. Only what SQL can answer
/// lives here; radius and minimum rating are post-filters on computed values.
#[derive(Debug, Default, Clone)]
pub struct SalonFilter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Lazy pool: the first query connects, so a missing database surfaces
    /// per-request instead of at startup.
    pub fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new().max_connections(5).connect_lazy(url)?;

        Ok(Self { pool })
    }

    /// Single-connection in-memory database, for tests and smoke runs.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        schema::migrate(&self.pool).await
    }

    // ---- users ----

    pub async fn user_by_email(&self, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn user_by_id(&self, id: &str) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn user_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn insert_user(&self, user: &UserRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, role, first_name, last_name, phone, avatar, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(&user.avatar)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- salons ----

    /// One page of active salons matching the fetch-stage constraints.
    ///
    /// Free text matches name, description, or any active service name
    /// (SQLite `LIKE` is case-insensitive for ASCII). Category and price
    /// bounds are independent existence checks over active services.
    pub async fn salon_page(&self, filter: &SalonFilter) -> Result<Vec<SalonRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {SALON_COLUMNS} FROM salons s
             WHERE s.is_active = 1
               AND (?1 IS NULL
                    OR s.name LIKE '%' || ?1 || '%'
                    OR s.description LIKE '%' || ?1 || '%'
                    OR EXISTS (SELECT 1 FROM services v
                               WHERE v.salon_id = s.id AND v.is_active = 1
                                 AND v.name LIKE '%' || ?1 || '%'))
               AND (?2 IS NULL
                    OR EXISTS (SELECT 1 FROM services v
                               WHERE v.salon_id = s.id AND v.is_active = 1
                                 AND v.category = ?2))
               AND ((?3 IS NULL AND ?4 IS NULL)
                    OR EXISTS (SELECT 1 FROM services v
                               WHERE v.salon_id = s.id AND v.is_active = 1
                                 AND (?3 IS NULL OR v.price >= ?3)
                                 AND (?4 IS NULL OR v.price <= ?4)))
             ORDER BY s.created_at, s.id
             LIMIT ?5 OFFSET ?6"
        );

        sqlx::query_as(&sql)
            .bind(filter.query.as_deref())
            .bind(filter.category.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn active_salon(&self, id: &str) -> Result<Option<SalonRow>, sqlx::Error> {
        let sql = format!("SELECT {SALON_COLUMNS} FROM salons WHERE id = ?1 AND is_active = 1");

        sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await
    }

    /// Unfiltered lookup, used for booking display data where the salon's
    /// active flag is not part of the contract.
    pub async fn salon(&self, id: &str) -> Result<Option<SalonRow>, sqlx::Error> {
        let sql = format!("SELECT {SALON_COLUMNS} FROM salons WHERE id = ?1");

        sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await
    }

    pub async fn insert_salon(&self, salon: &SalonRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO salons (id, name, description, address, city, state, zip_code, latitude,
                                 longitude, phone, email, images, owner_id, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        )
        .bind(&salon.id)
        .bind(&salon.name)
        .bind(&salon.description)
        .bind(&salon.address)
        .bind(&salon.city)
        .bind(&salon.state)
        .bind(&salon.zip_code)
        .bind(salon.latitude)
        .bind(salon.longitude)
        .bind(&salon.phone)
        .bind(&salon.email)
        .bind(&salon.images)
        .bind(&salon.owner_id)
        .bind(salon.is_active)
        .bind(salon.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- services ----

    pub async fn active_services(&self, salon_id: &str) -> Result<Vec<ServiceRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {SERVICE_COLUMNS} FROM services
             WHERE salon_id = ?1 AND is_active = 1 ORDER BY name"
        );

        sqlx::query_as(&sql).bind(salon_id).fetch_all(&self.pool).await
    }

    /// The active services among `ids` that belong to `salon_id`. Callers
    /// compare the returned count against the requested count to reject
    /// foreign, inactive, or duplicated ids in one check.
    pub async fn services_in_salon(
        &self,
        salon_id: &str,
        ids: &[String],
    ) -> Result<Vec<ServiceRow>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE is_active = 1 AND salon_id = "
        ));
        builder.push_bind(salon_id);
        builder.push(" AND id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        builder.build_query_as().fetch_all(&self.pool).await
    }

    pub async fn insert_service(&self, service: &ServiceRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO services (id, salon_id, name, description, category, duration_minutes, price, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&service.id)
        .bind(&service.salon_id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.category)
        .bind(service.duration_minutes)
        .bind(service.price)
        .bind(service.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- stylists ----

    pub async fn active_stylists(&self, salon_id: &str) -> Result<Vec<StylistRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT st.id, st.salon_id, st.bio, st.experience_years, st.specialties, st.is_active,
                    u.first_name, u.last_name, u.avatar
             FROM stylists st
             JOIN users u ON u.id = st.user_id
             WHERE st.salon_id = ?1 AND st.is_active = 1
             ORDER BY st.id",
        )
        .bind(salon_id)
        .fetch_all(&self.pool)
        .await
    }

    /// The stylist, only if it is active and attached to the given salon.
    pub async fn stylist_in_salon(
        &self,
        stylist_id: &str,
        salon_id: &str,
    ) -> Result<Option<StylistRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT st.id, st.salon_id, st.bio, st.experience_years, st.specialties, st.is_active,
                    u.first_name, u.last_name, u.avatar
             FROM stylists st
             JOIN users u ON u.id = st.user_id
             WHERE st.id = ?1 AND st.salon_id = ?2 AND st.is_active = 1",
        )
        .bind(stylist_id)
        .bind(salon_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn stylist(&self, stylist_id: &str) -> Result<Option<StylistRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT st.id, st.salon_id, st.bio, st.experience_years, st.specialties, st.is_active,
                    u.first_name, u.last_name, u.avatar
             FROM stylists st
             JOIN users u ON u.id = st.user_id
             WHERE st.id = ?1",
        )
        .bind(stylist_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert_stylist(
        &self,
        id: &str,
        user_id: &str,
        salon_id: &str,
        bio: Option<&str>,
        experience_years: Option<i64>,
        specialties: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO stylists (id, user_id, salon_id, bio, experience_years, specialties, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
        )
        .bind(id)
        .bind(user_id)
        .bind(salon_id)
        .bind(bio)
        .bind(experience_years)
        .bind(specialties)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn schedules_for_stylist(
        &self,
        stylist_id: &str,
    ) -> Result<Vec<ScheduleRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT day_of_week, start_time, end_time, is_available
             FROM stylist_schedules WHERE stylist_id = ?1 ORDER BY day_of_week",
        )
        .bind(stylist_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_schedule(
        &self,
        id: &str,
        stylist_id: &str,
        day_of_week: i64,
        start_time: &str,
        end_time: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO stylist_schedules (id, stylist_id, day_of_week, start_time, end_time, is_available)
             VALUES (?1, ?2, ?3, ?4, ?5, 1)",
        )
        .bind(id)
        .bind(stylist_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- reviews ----

    pub async fn review_ratings(&self, salon_id: &str) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT rating FROM reviews WHERE salon_id = ?1")
            .bind(salon_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn recent_reviews(
        &self,
        salon_id: &str,
        limit: i64,
    ) -> Result<Vec<ReviewRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT r.id, r.rating, r.comment, r.created_at,
                    u.first_name, u.last_name, u.avatar
             FROM reviews r
             JOIN users u ON u.id = r.customer_id
             WHERE r.salon_id = ?1
             ORDER BY r.created_at DESC
             LIMIT ?2",
        )
        .bind(salon_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_review(
        &self,
        id: &str,
        salon_id: &str,
        customer_id: &str,
        booking_id: Option<&str>,
        rating: i64,
        comment: Option<&str>,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO reviews (id, salon_id, customer_id, booking_id, rating, comment, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(id)
        .bind(salon_id)
        .bind(customer_id)
        .bind(booking_id)
        .bind(rating)
        .bind(comment)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- bookings ----

    /// Inserts the booking and its service links as one transaction; a
    /// failure partway leaves no partial booking behind.
    pub async fn create_booking(
        &self,
        booking: &BookingRow,
        service_ids: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO bookings (id, customer_id, salon_id, stylist_id, datetime, total_price, status, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&booking.id)
        .bind(&booking.customer_id)
        .bind(&booking.salon_id)
        .bind(&booking.stylist_id)
        .bind(booking.datetime)
        .bind(booking.total_price)
        .bind(&booking.status)
        .bind(&booking.notes)
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await?;

        for service_id in service_ids {
            sqlx::query("INSERT INTO booking_services (booking_id, service_id) VALUES (?1, ?2)")
                .bind(&booking.id)
                .bind(service_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }

    pub async fn bookings_for_customer(
        &self,
        customer_id: &str,
    ) -> Result<Vec<BookingRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings
             WHERE customer_id = ?1 ORDER BY created_at DESC"
        );

        sqlx::query_as(&sql).bind(customer_id).fetch_all(&self.pool).await
    }

    /// Scoped to the requesting customer, so a foreign booking id reads as
    /// absent rather than forbidden.
    pub async fn booking_for_customer(
        &self,
        id: &str,
        customer_id: &str,
    ) -> Result<Option<BookingRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1 AND customer_id = ?2"
        );

        sqlx::query_as(&sql)
            .bind(id)
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn booking_services(&self, booking_id: &str) -> Result<Vec<ServiceRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT s.id, s.salon_id, s.name, s.description, s.category, s.duration_minutes,
                    s.price, s.is_active
             FROM booking_services bs
             JOIN services s ON s.id = bs.service_id
             WHERE bs.booking_id = ?1
             ORDER BY s.name",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Empties every table. Used by the seeder's `--force` mode.
    pub async fn clear_all(&self) -> Result<(), sqlx::Error> {
        for table in [
            "booking_services",
            "bookings",
            "reviews",
            "stylist_schedules",
            "stylists",
            "services",
            "salons",
            "users",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}
