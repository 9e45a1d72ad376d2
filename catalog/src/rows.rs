use chrono::{DateTime, Utc};

pub const ROLE_CUSTOMER: &str = "CUSTOMER";
pub const ROLE_SALON_OWNER: &str = "SALON_OWNER";
pub const ROLE_STYLIST: &str = "STYLIST";

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const SERVICE_CATEGORIES: &[&str] = &[
    "HAIRCUT", "COLORING", "STYLING", "TREATMENT", "NAILS", "SKINCARE", "MASSAGE", "OTHER",
];

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SalonRow {
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
    pub images: String,
    pub owner_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceRow {
    pub id: String,
    pub salon_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration_minutes: i64,
    pub price: f64,
    pub is_active: bool,
}

/// Stylist joined with the display fields of its user account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StylistRow {
    pub id: String,
    pub salon_id: String,
    pub bio: Option<String>,
    pub experience_years: Option<i64>,
    pub specialties: String,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScheduleRow {
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

/// Review joined with the reviewer's display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingRow {
    pub id: String,
    pub customer_id: String,
    pub salon_id: String,
    pub stylist_id: String,
    pub datetime: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `images` and `specialties` are stored as JSON arrays in TEXT columns.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn encode_string_list(items: &[&str]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
