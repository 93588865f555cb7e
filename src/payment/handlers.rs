use std::time::Duration;

use axum::{extract::State, routing::post, Json, Router};
use rand::{distributions::Alphanumeric, Rng};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    payment::dto::{VerifyPaymentRequest, VerifyPaymentResponse},
    state::AppState,
};

pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/payment/verify", post(verify_payment))
}

/// Mocked gateway: no external call. Simulates processing with a fixed
/// delay, then always succeeds for any request carrying an amount.
#[instrument(skip(state, payload))]
pub async fn verify_payment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, AppError> {
    if payload.amount.is_none() {
        warn!(%user_id, "payment verify without amount");
        return Err(AppError::Validation("Amount required".into()));
    }

    tokio::time::sleep(Duration::from_millis(state.config.payment_delay_ms)).await;

    let transaction_id = format!("mock_{}", mock_reference());
    info!(%user_id, %transaction_id, "payment verified");
    Ok(Json(VerifyPaymentResponse {
        success: true,
        transaction_id,
        message: "Payment successful".into(),
    }))
}

fn mock_reference() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
