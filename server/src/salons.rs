//! Salon listing and detail handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use catalog::rows::decode_string_list;
use catalog::Store;

use super::error::AppError;
use super::payloads::{
    ApiResponse, ReviewEntry, SalonDetails, SalonSearchData, ScheduleEntry, SearchRequest,
    ServiceDetail, StylistDetail, UserSummary,
};
use super::search::{self, mean_rating, SearchSource};
use super::state::AppState;

const DEMO_MESSAGE: &str = "Served demo salons because the database is unavailable";
const DETAIL_REVIEW_LIMIT: i64 = 10;

/// `GET /api/salons` — never hard-fails; see the search module's degraded
/// mode.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchRequest>,
) -> Json<ApiResponse<SalonSearchData>> {
    let outcome = search::search_salons(&state.store, &params).await;

    let data = SalonSearchData {
        salons: outcome.salons,
        pagination: outcome.pagination,
    };

    match outcome.source {
        SearchSource::Live => Json(ApiResponse::new(data)),
        SearchSource::Demo => Json(ApiResponse::with_message(data, DEMO_MESSAGE)),
    }
}

/// `GET /api/salons/{id}` — unlike the listing, a catalog failure here is a
/// plain error to the caller.
pub async fn detail_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SalonDetails>>, AppError> {
    let salon = state
        .store
        .active_salon(&id)
        .await?
        .ok_or(AppError::NotFound("Salon not found"))?;

    let details = load_details(&state.store, salon).await?;

    Ok(Json(ApiResponse::new(details)))
}

async fn load_details(
    store: &Store,
    salon: catalog::rows::SalonRow,
) -> Result<SalonDetails, AppError> {
    let services = store.active_services(&salon.id).await?;
    let stylist_rows = store.active_stylists(&salon.id).await?;
    let ratings = store.review_ratings(&salon.id).await?;
    let reviews = store.recent_reviews(&salon.id, DETAIL_REVIEW_LIMIT).await?;

    let mut stylists = Vec::with_capacity(stylist_rows.len());
    for stylist in stylist_rows {
        let schedules = store.schedules_for_stylist(&stylist.id).await?;

        stylists.push(StylistDetail {
            specialties: decode_string_list(&stylist.specialties),
            id: stylist.id,
            bio: stylist.bio,
            experience: stylist.experience_years,
            user: UserSummary {
                first_name: stylist.first_name,
                last_name: stylist.last_name,
                avatar: stylist.avatar,
            },
            schedules: schedules
                .into_iter()
                .map(|s| ScheduleEntry {
                    day_of_week: s.day_of_week,
                    start_time: s.start_time,
                    end_time: s.end_time,
                    is_available: s.is_available,
                })
                .collect(),
        });
    }

    Ok(SalonDetails {
        rating: mean_rating(&ratings),
        review_count: ratings.len(),
        images: decode_string_list(&salon.images),
        services: services
            .into_iter()
            .map(|s| ServiceDetail {
                id: s.id,
                name: s.name,
                description: s.description,
                category: s.category,
                duration: s.duration_minutes,
                price: s.price,
            })
            .collect(),
        stylists,
        reviews: reviews
            .into_iter()
            .map(|r| ReviewEntry {
                id: r.id,
                rating: r.rating,
                comment: r.comment,
                created_at: r.created_at,
                customer: UserSummary {
                    first_name: r.first_name,
                    last_name: r.last_name,
                    avatar: r.avatar,
                },
            })
            .collect(),
        id: salon.id,
        name: salon.name,
        description: salon.description,
        address: salon.address,
        city: salon.city,
        state: salon.state,
        zip_code: salon.zip_code,
        latitude: salon.latitude,
        longitude: salon.longitude,
        phone: salon.phone,
        email: salon.email,
        is_active: salon.is_active,
        created_at: salon.created_at,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use axum::extract::{Path, Query, State};
    use catalog::rows::{SalonRow, ServiceRow, UserRow, ROLE_CUSTOMER, ROLE_STYLIST};
    use catalog::Store;
    use chrono::{TimeZone, Utc};

    use super::{detail_handler, search_handler, DEMO_MESSAGE};
    use crate::config::Config;
    use crate::error::AppError;
    use crate::payloads::SearchRequest;
    use crate::state::AppState;

    fn test_state(store: Store) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                port: 0,
                database_url: String::new(),
                jwt_secret: "test-secret".to_string(),
                token_days: 7,
            },
            store,
            started: Instant::now(),
        })
    }

    fn user(id: &str, email: &str, role: &str, first: &str) -> UserRow {
        UserRow {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: "x".to_string(),
            role: role.to_string(),
            first_name: Some(first.to_string()),
            last_name: Some("Johnson".to_string()),
            phone: None,
            avatar: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    async fn seeded_state() -> Arc<AppState> {
        let store = Store::in_memory().await.unwrap();

        store
            .insert_user(&user("cust", "customer@example.com", ROLE_CUSTOMER, "Jessica"))
            .await
            .unwrap();
        store
            .insert_user(&user("sty-user", "sarah@example.com", ROLE_STYLIST, "Sarah"))
            .await
            .unwrap();

        store
            .insert_salon(&SalonRow {
                id: "salon-1".to_string(),
                name: "Elite Hair Studio".to_string(),
                description: Some("Premium cuts".to_string()),
                address: "123 Main Street".to_string(),
                city: "Downtown".to_string(),
                state: "NY".to_string(),
                zip_code: Some("10001".to_string()),
                latitude: Some(40.7589),
                longitude: Some(-73.9851),
                phone: None,
                email: None,
                images: "[]".to_string(),
                owner_id: "owner".to_string(),
                is_active: true,
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            })
            .await
            .unwrap();
        store
            .insert_service(&ServiceRow {
                id: "svc-1".to_string(),
                salon_id: "salon-1".to_string(),
                name: "Women's Haircut".to_string(),
                description: Some("Cut and style".to_string()),
                category: "HAIRCUT".to_string(),
                duration_minutes: 45,
                price: 65.0,
                is_active: true,
            })
            .await
            .unwrap();
        store
            .insert_stylist("sty-1", "sty-user", "salon-1", Some("Senior stylist"), Some(8), "[\"Styling\"]")
            .await
            .unwrap();
        store
            .insert_schedule("sch-1", "sty-1", 1, "09:00", "18:00")
            .await
            .unwrap();
        store
            .insert_review(
                "rev-1",
                "salon-1",
                "cust",
                None,
                5,
                Some("Fantastic experience! Highly recommend."),
                Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            )
            .await
            .unwrap();
        store
            .insert_review(
                "rev-2",
                "salon-1",
                "cust",
                None,
                4,
                None,
                Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            )
            .await
            .unwrap();

        test_state(store)
    }

    #[tokio::test]
    async fn test_search_handler_wraps_live_results_without_message() {
        let state = seeded_state().await;
        let response = search_handler(State(state), Query(SearchRequest::default())).await;

        assert!(response.0.success);
        assert!(response.0.message.is_none());
        assert_eq!(response.0.data.salons.len(), 1);
        assert_eq!(response.0.data.salons[0].rating, 4.5);
        assert_eq!(response.0.data.salons[0].review_count, 2);
    }

    #[tokio::test]
    async fn test_search_handler_flags_demo_fallback() {
        let state = test_state(
            Store::connect("sqlite:///no/such/directory/salonconnect.db").unwrap(),
        );
        let response = search_handler(State(state), Query(SearchRequest::default())).await;

        assert!(response.0.success);
        assert_eq!(response.0.message.as_deref(), Some(DEMO_MESSAGE));
        assert_eq!(response.0.data.salons.len(), 2);
    }

    #[tokio::test]
    async fn test_detail_handler_assembles_reviews_and_schedules() {
        let state = seeded_state().await;
        let response = detail_handler(State(state), Path("salon-1".to_string()))
            .await
            .unwrap();

        let details = response.0.data;
        assert_eq!(details.rating, 4.5);
        assert_eq!(details.review_count, 2);
        // Newest review first.
        assert_eq!(details.reviews[0].id, "rev-2");
        assert_eq!(details.stylists.len(), 1);
        assert_eq!(details.stylists[0].schedules.len(), 1);
        assert_eq!(details.stylists[0].user.first_name.as_deref(), Some("Sarah"));
    }

    #[tokio::test]
    async fn test_detail_handler_404s_unknown_and_inactive_salons() {
        let state = seeded_state().await;

        let missing = detail_handler(State(state.clone()), Path("nope".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound("Salon not found"))));

        let inactive = SalonRow {
            id: "salon-2".to_string(),
            name: "Closed Salon".to_string(),
            description: None,
            address: "9 Side St".to_string(),
            city: "Downtown".to_string(),
            state: "NY".to_string(),
            zip_code: None,
            latitude: None,
            longitude: None,
            phone: None,
            email: None,
            images: "[]".to_string(),
            owner_id: "owner".to_string(),
            is_active: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };
        state.store.insert_salon(&inactive).await.unwrap();

        let hidden = detail_handler(State(state), Path("salon-2".to_string())).await;
        assert!(matches!(hidden, Err(AppError::NotFound("Salon not found"))));
    }
}
