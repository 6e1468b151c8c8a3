use crate::incoming::http_axum::{dto, handlers};
use domain::purchase::Identifier;
use dto::common_responses::{
    BadRequestResponse, InternalServerErrorResponse, RemoteRejectedResponse,
};
use dto::requests::PurchaseRequest;
use dto::responses::{ApiResponseValue, HealthResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::purchases::purchase_on_credit,
        handlers::health::health_check,
    ),
    components(
        schemas(
            PurchaseRequest,
            Identifier,
            ApiResponseValue,
            HealthResponse
        ),
        responses(
            BadRequestResponse,
            RemoteRejectedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "purchases", description = "Credit purchases forwarded to the backend's purchase_on_credit procedure"),
        (name = "system", description = "System health and status monitoring")
    ),
    info(
        title = "Credit Purchase Gateway API",
        description = "Validates purchase requests and forwards them to a hosted PostgREST backend. Business rules such as credit limits and stock live in the backend.",
        contact(
            name = "Credit Purchase Gateway",
        ),
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
    )
)]
pub struct ApiDoc;
