//! Accounts and bearer-token authentication.
//!
//! Tokens are HS256 JWTs carrying `{id, email, role}` plus expiry (7 days
//! by default). The extractor re-checks that the user row still exists, so
//! a token outliving its account stops working immediately.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    Json,
};
use catalog::rows::{UserRow, ROLE_CUSTOMER};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::task;
use uuid::Uuid;

use super::config::Config;
use super::error::AppError;
use super::payloads::{
    ApiResponse, AuthResponse, AuthUserData, LoginRequest, ProfileData, RegisterRequest,
};
use super::state::AppState;
use super::validate;

const BCRYPT_COST: u32 = 12;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// The authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized("Access token required"))?;

        let claims = decode_token(&state.config, token)?;

        let user = state
            .store
            .user_by_id(&claims.id)
            .await?
            .ok_or(AppError::Unauthorized("Invalid token"))?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

pub fn sign_token(config: &Config, user: &UserRow) -> Result<String, AppError> {
    let expiry = Utc::now() + Duration::days(config.token_days);
    let claims = Claims {
        id: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

pub fn decode_token(config: &Config, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid token"))
}

fn auth_user_data(user: &UserRow) -> AuthUserData {
    AuthUserData {
        id: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), AppError> {
    let valid = validate::validate_register(&request)?;

    if state.store.user_by_email(&valid.email).await?.is_some() {
        return Err(AppError::bad_request("User already exists with this email"));
    }

    let password = valid.password;
    let password_hash = task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)?;

    // Public signup never honors a caller-supplied role.
    let user = UserRow {
        id: Uuid::new_v4().to_string(),
        email: valid.email,
        password_hash,
        role: ROLE_CUSTOMER.to_string(),
        first_name: valid.first_name,
        last_name: valid.last_name,
        phone: valid.phone,
        avatar: None,
        created_at: Utc::now(),
    };
    state.store.insert_user(&user).await?;

    let token = sign_token(&state.config, &user)?;
    let response = AuthResponse {
        user: auth_user_data(&user),
        token,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(response, "User registered successfully")),
    ))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let valid = validate::validate_login(&request)?;

    let user = state
        .store
        .user_by_email(&valid.email)
        .await?
        .ok_or(AppError::Unauthorized("Invalid email or password"))?;

    let password = valid.password;
    let hash = user.password_hash.clone();
    let password_matches = task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)?;

    if !password_matches {
        return Err(AppError::Unauthorized("Invalid email or password"));
    }

    let token = sign_token(&state.config, &user)?;
    let response = AuthResponse {
        user: auth_user_data(&user),
        token,
    };

    Ok(Json(ApiResponse::with_message(response, "Login successful")))
}

pub async fn profile_handler(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileData>>, AppError> {
    let user = state
        .store
        .user_by_id(&auth.id)
        .await?
        .ok_or(AppError::NotFound("User not found"))?;

    Ok(Json(ApiResponse::new(ProfileData {
        id: user.id,
        email: user.email,
        role: user.role,
        first_name: user.first_name,
        last_name: user.last_name,
        phone: user.phone,
        avatar: user.avatar,
        created_at: user.created_at,
    })))
}
