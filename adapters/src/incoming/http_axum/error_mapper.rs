use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

use credit_purchase_application::error::AppError;

pub struct HttpError(pub AppError);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        match app_error {
            AppError::InvalidArgument { .. } => {
                debug!("Client error response generated: {}", app_error);
            }
            AppError::RemoteOperationFailed { .. } => {
                warn!("Remote rejection response generated: {}", app_error);
            }
            AppError::ConfigError { .. } => {
                error!("Server error response generated: {}", app_error);
            }
        }

        let (status_code, message) = match app_error {
            AppError::InvalidArgument { .. } => (StatusCode::BAD_REQUEST, app_error.to_string()),

            AppError::RemoteOperationFailed { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }

            AppError::ConfigError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
        };

        let error_response = json!({
            "ok": false,
            "error": message,
            "status": status_code.as_u16()
        });

        (status_code, Json(error_response)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
