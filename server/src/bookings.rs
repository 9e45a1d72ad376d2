//! Booking creation and retrieval.
//!
//! The write path enforces the referential contract: the stylist must be an
//! active member of the salon, and every requested service must be an active
//! service of that salon (an exact-count match, so foreign, inactive, or
//! duplicated ids are all rejected). The total price is always computed
//! server-side from the resolved services.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use catalog::rows::{BookingRow, STATUS_PENDING};
use catalog::Store;
use chrono::Utc;
use uuid::Uuid;

use super::auth::AuthUser;
use super::error::AppError;
use super::payloads::{
    ApiResponse, BookingDetails, BookingRequest, BookingSalon, BookingStylist, ServiceSummary,
    UserSummary,
};
use super::state::AppState;
use super::validate;

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDetails>>), AppError> {
    let valid = validate::validate_booking(&request)?;

    state
        .store
        .stylist_in_salon(&valid.stylist_id, &valid.salon_id)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid stylist for this salon"))?;

    let services = state
        .store
        .services_in_salon(&valid.salon_id, &valid.service_ids)
        .await?;
    if services.len() != valid.service_ids.len() {
        return Err(AppError::bad_request(
            "Some selected services are invalid for this salon",
        ));
    }

    let total_price: f64 = services.iter().map(|s| s.price).sum();

    let booking = BookingRow {
        id: Uuid::new_v4().to_string(),
        customer_id: auth.id,
        salon_id: valid.salon_id,
        stylist_id: valid.stylist_id,
        datetime: valid.datetime,
        total_price,
        status: STATUS_PENDING.to_string(),
        notes: valid.notes,
        created_at: Utc::now(),
    };
    state.store.create_booking(&booking, &valid.service_ids).await?;

    let details = booking_details(&state.store, booking).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(details))))
}

pub async fn my_bookings_handler(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<BookingDetails>>>, AppError> {
    let rows = state.store.bookings_for_customer(&auth.id).await?;

    let mut bookings = Vec::with_capacity(rows.len());
    for row in rows {
        bookings.push(booking_details(&state.store, row).await?);
    }

    Ok(Json(ApiResponse::new(bookings)))
}

pub async fn booking_handler(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingDetails>>, AppError> {
    let booking = state
        .store
        .booking_for_customer(&id, &auth.id)
        .await?
        .ok_or(AppError::NotFound("Booking not found"))?;

    let details = booking_details(&state.store, booking).await?;

    Ok(Json(ApiResponse::new(details)))
}

/// Joins the display data the client renders next to a booking. The salon is
/// looked up without the active filter: an appointment at a since-disabled
/// salon still belongs to its history.
async fn booking_details(store: &Store, booking: BookingRow) -> Result<BookingDetails, AppError> {
    let salon = store
        .salon(&booking.salon_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("booking {} references a missing salon", booking.id)))?;
    let stylist = store
        .stylist(&booking.stylist_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("booking {} references a missing stylist", booking.id)))?;
    let services = store.booking_services(&booking.id).await?;

    Ok(BookingDetails {
        id: booking.id,
        datetime: booking.datetime,
        total_price: booking.total_price,
        status: booking.status,
        notes: booking.notes,
        salon: BookingSalon {
            id: salon.id,
            name: salon.name,
            address: salon.address,
            phone: salon.phone,
        },
        stylist: BookingStylist {
            id: stylist.id,
            user: UserSummary {
                first_name: stylist.first_name,
                last_name: stylist.last_name,
                avatar: stylist.avatar,
            },
        },
        services: services
            .into_iter()
            .map(|s| ServiceSummary {
                id: s.id,
                name: s.name,
                category: s.category,
                duration: s.duration_minutes,
                price: s.price,
            })
            .collect(),
        created_at: booking.created_at,
    })
}
