//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use axum::{Json, response::IntoResponse};
use moneybox_types::domain::AccountId;
use moneybox_types::dto::{AccountResponse, TransferRequest, TransferResponse, WithdrawRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = "accounts",
    params(
        ("id" = AccountId, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 400, description = "Malformed account ID"),
        (status = 404, description = "Account not found")
    )
)]
async fn get_account() {}

/// Withdraw money from an account
#[utoipa::path(
    post,
    path = "/api/withdrawals",
    tag = "money",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "Withdrawal applied", body = AccountResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Insufficient funds")
    )
)]
async fn withdraw() {}

/// Transfer money between accounts
#[utoipa::path(
    post,
    path = "/api/transfers",
    tag = "money",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer applied", body = TransferResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Insufficient funds or pay in limit exceeded")
    )
)]
async fn transfer() {}

/// OpenAPI documentation for the Moneybox API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Moneybox API",
        version = "1.0.0",
        description = "Withdrawals and transfers between moneybox accounts.\n\nAmounts are decimal strings. Owners are alerted when a withdrawal leaves less than 500 in the account, or when a pay-in leaves less than 500 of headroom under the pay-in limit.",
        license(name = "MIT"),
    ),
    paths(health, get_account, withdraw, transfer),
    components(
        schemas(
            AccountId,
            AccountResponse,
            WithdrawRequest,
            TransferRequest,
            TransferResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account lookup"),
        (name = "money", description = "Withdraw and transfer operations"),
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document as JSON.
pub async fn serve_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
