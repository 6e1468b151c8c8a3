use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use credit_purchase_application::error::AppError;
use serde_json::Value;
use tracing::instrument;

use crate::incoming::http_axum::{
    dto::{requests::PurchaseRequest, responses::ApiResponse},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::{
    common_responses::{BadRequestResponse, InternalServerErrorResponse, RemoteRejectedResponse},
    responses::ApiResponseValue,
};

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/purchases",
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Purchase accepted; data is the backend payload", body = ApiResponseValue,
         example = json!({"ok": true, "data": {"orderId": 42}})),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = RemoteRejectedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "purchases",
    summary = "Purchase on credit",
    description = "Validates the request and forwards it to the backend's purchase_on_credit procedure. Backend error messages are returned unchanged."
))]
#[instrument(skip(state))]
pub async fn purchase_on_credit(
    State(state): State<AppState>,
    request: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Value>>, HttpError> {
    let Json(request) = request.map_err(|rejection| AppError::InvalidArgument {
        message: rejection.body_text(),
    })?;

    let payload = state
        .purchase_use_case
        .purchase_on_credit(request.into())
        .await?;

    Ok(Json(ApiResponse::success_with_data(Some(payload))))
}
