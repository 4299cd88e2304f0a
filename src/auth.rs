use crate::errors::{AppError, FieldError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::state::AppState;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::Json;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const TOKEN_TTL_DAYS: i64 = 7;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// The authenticated caller, decoded from the bearer token. Handlers take
/// this as an extractor; it is the only source of a user id, so requests can
/// never act on another user's rows.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::auth("Missing authorization token"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth("Missing authorization token"))?;

        let claims = decode_token(&state.config.jwt_secret, token)?;
        let id = claims
            .sub
            .parse()
            .map_err(|_| AppError::auth("Invalid or expired token"))?;

        Ok(Self {
            id,
            email: claims.email,
        })
    }
}

pub fn issue_token(secret: &str, user: &User) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::auth("Invalid or expired token"))
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        errors.push(FieldError::new("email", "A valid email is required"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_credentials(&payload.email, &payload.password)?;

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;
    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(payload.email.trim())
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(&state.pool)
    .await;

    let user = match result {
        Ok(user) => user,
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Err(AppError::duplicate("User already exists with this email"));
        }
        Err(err) => return Err(err.into()),
    };

    let token = issue_token(&state.config.jwt_secret, &user)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(payload.email.trim())
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::auth("Invalid credentials"))?;

    if !bcrypt::verify(&payload.password, &user.password_hash)? {
        return Err(AppError::auth("Invalid credentials"));
    }

    let token = issue_token(&state.config.jwt_secret, &user)?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
