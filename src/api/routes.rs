//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{AccountType, TransactionStatus, TransactionType, UserRole};
use crate::error::{AppError, AppResult};
use crate::util::validate_contact;

use super::state::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountNumberRequest {
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountNumberResponse {
    pub account_number: String,
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactValidationRequest {
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactValidationResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub account_types: &'static [AccountType],
    pub transaction_types: &'static [TransactionType],
    pub transaction_statuses: &'static [TransactionStatus],
    pub user_roles: &'static [UserRole],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from: TransactionStatus,
    pub to: TransactionStatus,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/account-numbers", post(allocate_account_number))
        .route("/contacts/validate", post(validate_contact_details))
        .route("/reference", get(reference))
        .route("/transactions/status-transition", get(status_transition))
}

fn invalid_json(rejection: JsonRejection) -> AppError {
    AppError::InvalidRequest(rejection.body_text())
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    AppError::InvalidRequest(rejection.body_text())
}

// =========================================================================
// POST /account-numbers
// =========================================================================

/// Issue a fresh account number
async fn allocate_account_number(
    State(state): State<AppState>,
    payload: Result<Json<AccountNumberRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AccountNumberResponse>)> {
    let Json(request) = payload.map_err(invalid_json)?;

    let account_number = state.allocate_account_number()?;

    tracing::info!(
        account_type = %request.account_type,
        "Issued account number"
    );

    Ok((
        StatusCode::CREATED,
        Json(AccountNumberResponse {
            account_number,
            account_type: request.account_type,
        }),
    ))
}

// =========================================================================
// POST /contacts/validate
// =========================================================================

/// Check a customer's email address and phone number
async fn validate_contact_details(
    payload: Result<Json<ContactValidationRequest>, JsonRejection>,
) -> AppResult<Json<ContactValidationResponse>> {
    let Json(request) = payload.map_err(invalid_json)?;

    validate_contact(&request.email, &request.phone_number)?;

    Ok(Json(ContactValidationResponse { valid: true }))
}

// =========================================================================
// GET /reference
// =========================================================================

/// List the wire names of every domain vocabulary
async fn reference() -> Json<ReferenceResponse> {
    Json(ReferenceResponse {
        account_types: AccountType::ALL,
        transaction_types: TransactionType::ALL,
        transaction_statuses: TransactionStatus::ALL,
        user_roles: UserRole::ALL,
    })
}

// =========================================================================
// GET /transactions/status-transition
// =========================================================================

/// Check a transaction lifecycle step
async fn status_transition(
    query: Result<Query<StatusTransition>, QueryRejection>,
) -> AppResult<Json<StatusTransition>> {
    let Query(step) = query.map_err(invalid_query)?;

    let to = step.from.transition_to(step.to)?;

    Ok(Json(StatusTransition { from: step.from, to }))
}
