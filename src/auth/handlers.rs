use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, GoogleLoginRequest, LoginRequest, PublicUser, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::AppError,
    state::AppState,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/google", post(google))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.username = payload.username.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();

    if payload.username.is_empty() {
        warn!("register without username");
        return Err(AppError::Validation("Username is required".into()));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    // Ensure neither unique column is taken
    if User::exists_by_username_or_email(&state.db, &payload.username, &payload.email).await? {
        warn!(email = %payload.email, "username or email already registered");
        return Err(AppError::Conflict("User exists".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create_local(
        &state.db,
        &payload.username,
        &payload.email,
        payload.phone.as_deref(),
        &hash,
    )
    .await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.identifier = payload.identifier.trim().to_string();

    let user = User::find_by_identifier(&state.db, &payload.identifier)
        .await?
        .ok_or_else(|| {
            warn!(identifier = %payload.identifier, "login unknown identifier");
            AppError::Unauthorized
        })?;

    // OAuth-only accounts carry no hash; treat like a wrong password.
    let ok = match user.password_hash.as_deref() {
        Some(hash) => verify_password(&payload.password, hash)?,
        None => false,
    };

    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Unauthorized);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn google(
    State(state): State<AppState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let identity = state.identity.verify(&payload.token).await?;

    let user = match User::find_by_email(&state.db, &identity.email).await? {
        Some(user) => user,
        None => {
            let username = identity
                .name
                .clone()
                .unwrap_or_else(|| identity.email.clone());
            let user =
                User::create_google(&state.db, &username, &identity.email, &identity.subject)
                    .await?;
            info!(user_id = %user.id, "google user provisioned");
            user
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "google login");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, AppError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user.into()))
}
