//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use moneybox_types::{
    AccountId, AccountRepository, AccountResponse, AppError, NotificationService,
    TransferRequest, TransferResponse, WithdrawRequest,
};

use crate::MoneyboxService;

/// Application state shared across handlers.
pub struct AppState<R: AccountRepository, N: NotificationService> {
    pub service: MoneyboxService<R, N>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientFunds { .. } | AppError::PayInLimitExceeded { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Get account by ID.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_account<R: AccountRepository, N: NotificationService + 'static>(
    State(state): State<Arc<AppState<R, N>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account_id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let account = state.service.get_account(account_id).await?;
    Ok(Json(AccountResponse::from(&account)))
}

/// Withdraw money from an account.
#[tracing::instrument(skip(state), fields(account_id = %req.account_id, amount = %req.amount))]
pub async fn withdraw<R: AccountRepository, N: NotificationService + 'static>(
    State(state): State<Arc<AppState<R, N>>>,
    Json(req): Json<WithdrawRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.service.withdraw(req).await?;
    Ok(Json(AccountResponse::from(&account)))
}

/// Transfer money between accounts.
#[tracing::instrument(skip(state), fields(from = %req.from_account_id, to = %req.to_account_id, amount = %req.amount))]
pub async fn transfer<R: AccountRepository, N: NotificationService + 'static>(
    State(state): State<Arc<AppState<R, N>>>,
    Json(req): Json<TransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.service.transfer(req).await?;
    Ok(Json(TransferResponse {
        from: AccountResponse::from(&outcome.from),
        to: AccountResponse::from(&outcome.to),
    }))
}
