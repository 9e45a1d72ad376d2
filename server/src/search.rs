//! # Salon search & ranking
//!
//! Turns a [`SearchRequest`] into an ordered, filtered page of
//! [`SalonResult`]s plus a pagination echo.
//!
//! ## Pipeline
//! 1. Fetch one page of active salons from the catalog (free text, category
//!    and price constraints plus `LIMIT`/`OFFSET` are resolved in SQL).
//! 2. Annotate each salon: mean review rating (1 decimal), great-circle
//!    distance from the requester where both coordinates are known.
//! 3. Post-filter by radius (only where a distance exists) and by minimum
//!    rating.
//! 4. Stable sort under the requested key.
//!
//! ## Pagination quirk
//! `LIMIT`/`OFFSET` are applied at the fetch stage, before the radius and
//! rating post-filters. A page can therefore come back short even when more
//! matching salons exist past the fetched window, and `total` reflects the
//! post-filter count of this page only. This mirrors the behavior the web
//! client was built against; correcting it to filter-then-paginate would
//! change page boundaries under the client's feet.
//!
//! ## Degraded mode
//! When the catalog fetch fails the listing answers with a fixed demo
//! payload instead of an error. The fallback is a visible state
//! ([`SearchSource::Demo`]) rather than a buried catch, so the handler and
//! the tests can see which path produced a response.

use std::cmp::Ordering;

use catalog::rows::{decode_string_list, SalonRow, ServiceRow, StylistRow};
use catalog::{SalonFilter, Store};
use chrono::{Duration, Utc};
use tracing::warn;

use super::payloads::{
    Pagination, SalonResult, SearchRequest, ServiceSummary, StylistSummary, UserSummary,
};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    Live,
    Demo,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub salons: Vec<SalonResult>,
    pub pagination: Pagination,
    pub source: SearchSource,
}

/// Great-circle distance in kilometers between two lat/lon points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean review rating rounded to one decimal; 0.0 with no reviews.
pub fn mean_rating(ratings: &[i64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let total: i64 = ratings.iter().sum();
    round1(total as f64 / ratings.len() as f64)
}

/// Mean price of the listed services; `None` when there are none, so the
/// price comparator can order such salons last instead of comparing NaN.
fn mean_price(salon: &SalonResult) -> Option<f64> {
    if salon.services.is_empty() {
        return None;
    }

    let total: f64 = salon.services.iter().map(|s| s.price).sum();
    Some(total / salon.services.len() as f64)
}

/// Closed set of sort keys; anything unrecognized falls back to distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
    Price,
    Name,
}

impl SortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("rating") => SortKey::Rating,
            Some("price") => SortKey::Price,
            Some("name") => SortKey::Name,
            _ => SortKey::Distance,
        }
    }
}

fn compare_names(a: &SalonResult, b: &SalonResult) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare(key: SortKey, a: &SalonResult, b: &SalonResult) -> Ordering {
    match key {
        SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        SortKey::Price => match (mean_price(a), mean_price(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Name => compare_names(a, b),
        // Distance when both sides have one, name otherwise.
        SortKey::Distance => match (a.distance, b.distance) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => compare_names(a, b),
        },
    }
}

/// Builds the annotated result for one fetched salon.
pub fn annotate(
    salon: SalonRow,
    services: Vec<ServiceRow>,
    stylists: Vec<StylistRow>,
    ratings: Vec<i64>,
    origin: Option<(f64, f64)>,
) -> SalonResult {
    let distance = match (origin, salon.latitude, salon.longitude) {
        (Some((lat, lon)), Some(salon_lat), Some(salon_lon)) => {
            Some(round1(haversine_km(lat, lon, salon_lat, salon_lon)))
        }
        _ => None,
    };

    SalonResult {
        rating: mean_rating(&ratings),
        review_count: ratings.len(),
        distance,
        images: decode_string_list(&salon.images),
        services: services.into_iter().map(service_summary).collect(),
        stylists: stylists.into_iter().map(stylist_summary).collect(),
        next_available: Utc::now() + Duration::hours(24),
        id: salon.id,
        name: salon.name,
        description: salon.description,
        address: salon.address,
        city: salon.city,
        state: salon.state,
        latitude: salon.latitude,
        longitude: salon.longitude,
        phone: salon.phone,
    }
}

fn service_summary(service: ServiceRow) -> ServiceSummary {
    ServiceSummary {
        id: service.id,
        name: service.name,
        category: service.category,
        duration: service.duration_minutes,
        price: service.price,
    }
}

fn stylist_summary(stylist: StylistRow) -> StylistSummary {
    StylistSummary {
        specialties: decode_string_list(&stylist.specialties),
        id: stylist.id,
        bio: stylist.bio,
        experience: stylist.experience_years,
        user: UserSummary {
            first_name: stylist.first_name,
            last_name: stylist.last_name,
            avatar: stylist.avatar,
        },
    }
}

/// Radius and rating post-filters plus the stable sort.
pub fn rank(mut salons: Vec<SalonResult>, params: &SearchRequest) -> Vec<SalonResult> {
    let radius = params.radius.unwrap_or(DEFAULT_RADIUS_KM);
    salons.retain(|salon| salon.distance.is_none_or(|d| d <= radius));

    let min_rating = params.min_rating.unwrap_or(0.0);
    salons.retain(|salon| salon.rating >= min_rating);

    let key = SortKey::parse(params.sort_by.as_deref());
    salons.sort_by(|a, b| compare(key, a, b));

    salons
}

pub async fn search_salons(store: &Store, params: &SearchRequest) -> SearchOutcome {
    let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    match fetch_page(store, params, page, limit).await {
        Ok(fetched) => {
            let salons = rank(fetched, params);
            let pagination = Pagination {
                page,
                limit,
                total: salons.len(),
            };

            SearchOutcome {
                salons,
                pagination,
                source: SearchSource::Live,
            }
        }
        Err(e) => {
            warn!("Salon search falling back to demo data: {e}");
            let salons = demo_salons();
            let pagination = Pagination {
                page: 1,
                limit: salons.len() as u32,
                total: salons.len(),
            };

            SearchOutcome {
                salons,
                pagination,
                source: SearchSource::Demo,
            }
        }
    }
}

async fn fetch_page(
    store: &Store,
    params: &SearchRequest,
    page: u32,
    limit: u32,
) -> Result<Vec<SalonResult>, sqlx::Error> {
    let filter = SalonFilter {
        query: params.query.clone(),
        category: params.category.clone(),
        min_price: params.min_price,
        max_price: params.max_price,
        limit: i64::from(limit),
        offset: i64::from((page - 1) * limit),
    };

    let origin = match (params.latitude, params.longitude) {
        (Some(lat), Some(lon)) => Some((lat, lon)),
        _ => None,
    };

    let rows = store.salon_page(&filter).await?;

    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let services = store.active_services(&row.id).await?;
        let stylists = store.active_stylists(&row.id).await?;
        let ratings = store.review_ratings(&row.id).await?;

        results.push(annotate(row, services, stylists, ratings, origin));
    }

    Ok(results)
}

/// Fixed render-able payload for when the catalog is unreachable.
pub fn demo_salons() -> Vec<SalonResult> {
    let now = Utc::now();

    vec![
        SalonResult {
            id: "demo-1".to_string(),
            name: "Elite Hair Studio (Demo)".to_string(),
            description: Some("Professional hair studio - demo data".to_string()),
            address: "123 Main Street".to_string(),
            city: "Downtown".to_string(),
            state: "CA".to_string(),
            latitude: None,
            longitude: None,
            phone: Some("+1 (555) 123-4567".to_string()),
            images: vec![
                "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=800".to_string(),
            ],
            rating: 4.8,
            review_count: 124,
            distance: None,
            services: vec![
                ServiceSummary {
                    id: "s1".to_string(),
                    name: "Women's Haircut".to_string(),
                    category: "HAIRCUT".to_string(),
                    duration: 60,
                    price: 65.0,
                },
                ServiceSummary {
                    id: "s2".to_string(),
                    name: "Men's Haircut".to_string(),
                    category: "HAIRCUT".to_string(),
                    duration: 45,
                    price: 35.0,
                },
            ],
            stylists: vec![],
            next_available: now + Duration::hours(24),
        },
        SalonResult {
            id: "demo-2".to_string(),
            name: "Urban Barber (Demo)".to_string(),
            description: Some("Modern barbershop - demo data".to_string()),
            address: "456 Market Ave".to_string(),
            city: "Uptown".to_string(),
            state: "NY".to_string(),
            latitude: None,
            longitude: None,
            phone: Some("+1 (555) 987-6543".to_string()),
            images: vec![
                "https://images.unsplash.com/photo-1556228724-4a3aa6458a27?w=800".to_string(),
            ],
            rating: 4.5,
            review_count: 89,
            distance: None,
            services: vec![
                ServiceSummary {
                    id: "s3".to_string(),
                    name: "Beard Trim".to_string(),
                    category: "OTHER".to_string(),
                    duration: 30,
                    price: 20.0,
                },
                ServiceSummary {
                    id: "s4".to_string(),
                    name: "Fade Cut".to_string(),
                    category: "HAIRCUT".to_string(),
                    duration: 45,
                    price: 40.0,
                },
            ],
            stylists: vec![],
            next_available: now + Duration::hours(48),
        },
    ]
}

#[cfg(test)]
mod tests {
    use catalog::rows::{SalonRow, ServiceRow};
    use catalog::Store;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::payloads::{SearchRequest, ServiceSummary};

    fn result(name: &str, rating: f64, prices: &[f64], distance: Option<f64>) -> SalonResult {
        SalonResult {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: None,
            address: "1 Main St".to_string(),
            city: "Downtown".to_string(),
            state: "NY".to_string(),
            latitude: None,
            longitude: None,
            phone: None,
            images: vec![],
            rating,
            review_count: 0,
            distance,
            services: prices
                .iter()
                .enumerate()
                .map(|(i, price)| ServiceSummary {
                    id: format!("svc-{i}"),
                    name: format!("Service {i}"),
                    category: "HAIRCUT".to_string(),
                    duration: 30,
                    price: *price,
                })
                .collect(),
            stylists: vec![],
            next_available: Utc::now(),
        }
    }

    fn names(salons: &[SalonResult]) -> Vec<&str> {
        salons.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_haversine_is_zero_at_the_same_point() {
        assert_eq!(haversine_km(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let out = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
        let back = haversine_km(34.0522, -118.2437, 40.7128, -74.0060);

        assert!((out - back).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_matches_known_distance() {
        // New York to Los Angeles is roughly 3936 km great-circle.
        let km = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);

        assert!((km - 3936.0).abs() < 5.0, "got {km}");
    }

    #[test]
    fn test_mean_rating_rounds_to_one_decimal() {
        assert_eq!(mean_rating(&[]), 0.0);
        assert_eq!(mean_rating(&[5, 4]), 4.5);
        assert_eq!(mean_rating(&[5, 4, 4]), 4.3);
        assert_eq!(mean_rating(&[1]), 1.0);
    }

    #[test]
    fn test_sort_key_parse_falls_back_to_distance() {
        assert_eq!(SortKey::parse(Some("rating")), SortKey::Rating);
        assert_eq!(SortKey::parse(Some("price")), SortKey::Price);
        assert_eq!(SortKey::parse(Some("name")), SortKey::Name);
        assert_eq!(SortKey::parse(Some("popularity")), SortKey::Distance);
        assert_eq!(SortKey::parse(None), SortKey::Distance);
    }

    #[test]
    fn test_radius_filter_only_applies_where_distance_exists() {
        let params = SearchRequest {
            radius: Some(10.0),
            ..SearchRequest::default()
        };
        let ranked = rank(
            vec![
                result("Near", 4.0, &[], Some(3.0)),
                result("Far", 4.0, &[], Some(25.0)),
                result("Unknown", 4.0, &[], None),
            ],
            &params,
        );

        assert_eq!(names(&ranked), vec!["Near", "Unknown"]);
    }

    #[test]
    fn test_min_rating_is_a_post_filter() {
        let params = SearchRequest {
            min_rating: Some(4.0),
            ..SearchRequest::default()
        };
        let ranked = rank(
            vec![result("Good", 4.5, &[], None), result("Poor", 3.9, &[], None)],
            &params,
        );

        assert_eq!(names(&ranked), vec!["Good"]);
    }

    #[test]
    fn test_rating_sort_descends_and_preserves_ties() {
        let params = SearchRequest {
            sort_by: Some("rating".to_string()),
            ..SearchRequest::default()
        };
        let ranked = rank(
            vec![
                result("First Tie", 4.0, &[], None),
                result("Second Tie", 4.0, &[], None),
                result("Top", 4.8, &[], None),
            ],
            &params,
        );

        assert_eq!(names(&ranked), vec!["Top", "First Tie", "Second Tie"]);
    }

    #[test]
    fn test_price_sort_uses_mean_and_places_serviceless_last() {
        let params = SearchRequest {
            sort_by: Some("price".to_string()),
            ..SearchRequest::default()
        };
        // A means 15, B means 5, C has nothing to price.
        let ranked = rank(
            vec![
                result("Salon C", 4.0, &[], None),
                result("Salon A", 4.0, &[10.0, 20.0], None),
                result("Salon B", 4.0, &[5.0], None),
            ],
            &params,
        );

        assert_eq!(names(&ranked), vec!["Salon B", "Salon A", "Salon C"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let params = SearchRequest {
            sort_by: Some("name".to_string()),
            ..SearchRequest::default()
        };
        let ranked = rank(
            vec![
                result("urban barber", 4.0, &[], None),
                result("Elite Hair", 4.0, &[], None),
                result("aura Spa", 4.0, &[], None),
            ],
            &params,
        );

        assert_eq!(names(&ranked), vec!["aura Spa", "Elite Hair", "urban barber"]);
    }

    #[test]
    fn test_distance_sort_falls_back_to_names_without_distances() {
        let params = SearchRequest::default();
        let ranked = rank(
            vec![
                result("Beta", 4.0, &[], None),
                result("Alpha", 4.0, &[], None),
                result("Close", 4.0, &[], Some(1.0)),
                result("Closer", 4.0, &[], Some(0.5)),
            ],
            &params,
        );

        // Pairs with two distances order by distance; mixed pairs by name.
        assert_eq!(names(&ranked), vec!["Alpha", "Beta", "Closer", "Close"]);
    }

    #[test]
    fn test_annotate_computes_distance_only_with_both_coordinates() {
        let salon = SalonRow {
            id: "s1".to_string(),
            name: "Elite Hair Studio".to_string(),
            description: None,
            address: "123 Main Street".to_string(),
            city: "Downtown".to_string(),
            state: "NY".to_string(),
            zip_code: None,
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            phone: None,
            email: None,
            images: "[]".to_string(),
            owner_id: "owner".to_string(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };

        // Requester standing in the salon: distance 0.0, inside any radius.
        let annotated = annotate(
            salon.clone(),
            vec![],
            vec![],
            vec![5, 4],
            Some((40.7128, -74.0060)),
        );
        assert_eq!(annotated.distance, Some(0.0));
        assert_eq!(annotated.rating, 4.5);
        assert_eq!(annotated.review_count, 2);

        let no_origin = annotate(salon, vec![], vec![], vec![], None);
        assert_eq!(no_origin.distance, None);
        assert_eq!(no_origin.rating, 0.0);
        assert_eq!(no_origin.review_count, 0);
    }

    async fn seeded_store() -> Store {
        let store = Store::in_memory().await.unwrap();

        for (i, (name, price)) in [("Elite Hair Studio", 65.0), ("Urban Barber", 35.0)]
            .iter()
            .enumerate()
        {
            let id = format!("s{i}");
            store
                .insert_salon(&SalonRow {
                    id: id.clone(),
                    name: name.to_string(),
                    description: None,
                    address: "1 Main St".to_string(),
                    city: "Downtown".to_string(),
                    state: "NY".to_string(),
                    zip_code: None,
                    latitude: None,
                    longitude: None,
                    phone: None,
                    email: None,
                    images: "[]".to_string(),
                    owner_id: "owner".to_string(),
                    is_active: true,
                    created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, i as u32, 0).unwrap(),
                })
                .await
                .unwrap();
            store
                .insert_service(&ServiceRow {
                    id: format!("v{i}"),
                    salon_id: id,
                    name: "Haircut".to_string(),
                    description: None,
                    category: "HAIRCUT".to_string(),
                    duration_minutes: 45,
                    price: *price,
                    is_active: true,
                })
                .await
                .unwrap();
        }

        store
    }

    #[tokio::test]
    async fn test_search_echoes_pagination_and_tags_live_source() {
        let store = seeded_store().await;
        let outcome = search_salons(&store, &SearchRequest::default()).await;

        assert_eq!(outcome.source, SearchSource::Live);
        assert_eq!(outcome.pagination.page, DEFAULT_PAGE);
        assert_eq!(outcome.pagination.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(outcome.pagination.total, 2);
    }

    #[tokio::test]
    async fn test_search_with_no_matches_is_empty_with_zero_total() {
        let store = seeded_store().await;
        let params = SearchRequest {
            query: Some("taxidermy".to_string()),
            page: Some(3),
            limit: Some(5),
            ..SearchRequest::default()
        };
        let outcome = search_salons(&store, &params).await;

        assert!(outcome.salons.is_empty());
        assert_eq!(outcome.pagination.page, 3);
        assert_eq!(outcome.pagination.limit, 5);
        assert_eq!(outcome.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_fetch_stage_pagination_happens_before_post_filters() {
        let store = seeded_store().await;
        // Page size 1 fetches only the earliest salon; the second salon
        // would also match but sits past the fetched window.
        let params = SearchRequest {
            limit: Some(1),
            ..SearchRequest::default()
        };
        let outcome = search_salons(&store, &params).await;

        assert_eq!(names(&outcome.salons), vec!["Elite Hair Studio"]);
        assert_eq!(outcome.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_unreachable_catalog_serves_the_demo_payload() {
        let store = Store::connect("sqlite:///no/such/directory/salonconnect.db").unwrap();
        let outcome = search_salons(&store, &SearchRequest::default()).await;

        assert_eq!(outcome.source, SearchSource::Demo);
        assert_eq!(outcome.salons.len(), 2);
        assert_eq!(outcome.pagination.total, 2);
        assert_eq!(outcome.salons[0].name, "Elite Hair Studio (Demo)");
    }
}
