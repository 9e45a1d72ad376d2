//! Wire types for the JSON surface.
//!
//! Field names are camelCase to stay compatible with the original web
//! client. Success payloads ride in [`ApiResponse`]; error bodies are built
//! by the error type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

// ---- search ----

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Kilometers; only enforced where a distance could be computed.
    pub radius: Option<f64>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub duration: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistSummary {
    pub id: String,
    pub bio: Option<String>,
    pub experience: Option<i64>,
    pub specialties: Vec<String>,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonResult {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub images: Vec<String>,
    /// Mean review rating rounded to one decimal; 0.0 with no reviews.
    pub rating: f64,
    pub review_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub services: Vec<ServiceSummary>,
    pub stylists: Vec<StylistSummary>,
    /// Placeholder (now + 24h); real availability would come from stylist
    /// schedules, which this surface does not compute.
    pub next_available: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SalonSearchData {
    pub salons: Vec<SalonResult>,
    pub pagination: Pagination,
}

// ---- salon detail ----

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistDetail {
    pub id: String,
    pub bio: Option<String>,
    pub experience: Option<i64>,
    pub specialties: Vec<String>,
    pub user: UserSummary,
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub customer: UserSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonDetails {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub images: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub rating: f64,
    pub review_count: usize,
    pub services: Vec<ServiceDetail>,
    pub stylists: Vec<StylistDetail>,
    pub reviews: Vec<ReviewEntry>,
}

// ---- auth ----

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserData {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: AuthUserData,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub id: String,
    pub email: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---- bookings ----

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub salon_id: Option<String>,
    pub stylist_id: Option<String>,
    pub service_ids: Option<Vec<String>>,
    pub datetime: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSalon {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStylist {
    pub id: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: String,
    pub datetime: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub salon: BookingSalon,
    pub stylist: BookingStylist,
    pub services: Vec<ServiceSummary>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_salon_result_serializes_camel_case_and_skips_missing_distance() {
        let result = SalonResult {
            id: "s1".to_string(),
            name: "Elite Hair Studio".to_string(),
            description: None,
            address: "123 Main Street".to_string(),
            city: "Downtown".to_string(),
            state: "NY".to_string(),
            latitude: None,
            longitude: None,
            phone: None,
            images: vec![],
            rating: 4.5,
            review_count: 2,
            distance: None,
            services: vec![],
            stylists: vec![],
            next_available: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["reviewCount"], 2);
        assert!(json.get("distance").is_none());
        assert!(json.get("nextAvailable").is_some());
    }

    #[test]
    fn test_search_request_accepts_camel_case_params() {
        let params: SearchRequest = serde_json::from_str(
            r#"{"minPrice": 10, "sortBy": "rating", "latitude": 40.7128}"#,
        )
        .unwrap();

        assert_eq!(params.min_price, Some(10.0));
        assert_eq!(params.sort_by.as_deref(), Some("rating"));
        assert_eq!(params.latitude, Some(40.7128));
        assert!(params.page.is_none());
    }

    #[test]
    fn test_envelope_message_is_omitted_when_absent() {
        let body = serde_json::to_value(ApiResponse::new(1)).unwrap();
        assert_eq!(body["success"], true);
        assert!(body.get("message").is_none());

        let body = serde_json::to_value(ApiResponse::with_message(1, "demo")).unwrap();
        assert_eq!(body["message"], "demo");
    }
}
