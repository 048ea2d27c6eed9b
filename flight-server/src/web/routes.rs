//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::debug;

use crate::planner::{PlanError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Header carrying the client api key.
pub const CLIENT_API_KEY_HEADER: &str = "x-client-api-key";

// Error codes returned by the server. The E1 prefix marks the first
// generation of codes; an evolution of the api may introduce E2.
const CLIENT_API_KEY_HEADER_MISSING: &str = "E1-1100";
const CLIENT_NOT_WHITELISTED: &str = "E1-1110";
const SERVER_ERROR: &str = "E1-2500";
const MANDATORY_PARAMETER_MISSING: &str = "E1-7000";
const MANDATORY_PARAMETER_INVALID: &str = "E1-7010";

/// Create the application router.
///
/// `/health` stays outside the api-key filter so load balancers can
/// probe without credentials.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/v1/routes/plan", get(plan_route))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            client_api_key,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan routes from a start airport to a destination.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    let request = SearchRequest::new(query.start, query.destination, query.k);
    debug!(?request, "planning route");

    let plan = state.planner.plan(&request)?;
    Ok(Json(PlanResponse::from_plan(&plan)))
}

/// Require a matching client api key on every api request.
///
/// Disabled entirely when no key is configured.
async fn client_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(request).await;
    };

    let provided = headers
        .get(CLIENT_API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        None => AppError::Unauthorized {
            message: format!("{CLIENT_API_KEY_HEADER} header is mandatory"),
        }
        .into_response(),
        Some(key) if key != expected => AppError::Forbidden {
            message: "client is not allowed to consume this api".to_string(),
        }
        .into_response(),
        Some(_) => next.run(request).await,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        code: &'static str,
        message: String,
        details: Vec<ErrorDetail>,
    },
    Unauthorized {
        message: String,
    },
    Forbidden {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let code = match &e {
            PlanError::MissingParameter { .. } => MANDATORY_PARAMETER_MISSING,
            PlanError::InvalidParameter { .. } => MANDATORY_PARAMETER_INVALID,
        };
        AppError::BadRequest {
            code,
            message: e.to_string(),
            details: vec![ErrorDetail {
                field: e.field().to_string(),
                message: e.to_string(),
            }],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::BadRequest {
                code,
                message,
                details,
            } => (StatusCode::BAD_REQUEST, code, message, details),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                CLIENT_API_KEY_HEADER_MISSING,
                message,
                vec![],
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                CLIENT_NOT_WHITELISTED,
                message,
                vec![],
            ),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR, message, vec![])
            }
        };

        debug!(%status, code, message, "request failed");

        let body = Json(ErrorResponse {
            code: code.to_string(),
            message,
            details,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_maps_to_400_with_field_detail() {
        let error: AppError = PlanError::MissingParameter { field: "start" }.into();

        let AppError::BadRequest {
            code,
            details,
            ..
        } = &error
        else {
            panic!("expected BadRequest");
        };
        assert_eq!(*code, MANDATORY_PARAMETER_MISSING);
        assert_eq!(details[0].field, "start");

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_parameter_maps_to_invalid_code() {
        let error: AppError = PlanError::InvalidParameter {
            field: "k",
            message: "k should be greater than 0".to_string(),
        }
        .into();

        let AppError::BadRequest { code, details, .. } = &error else {
            panic!("expected BadRequest");
        };
        assert_eq!(*code, MANDATORY_PARAMETER_INVALID);
        assert_eq!(details[0].field, "k");
    }

    #[test]
    fn error_statuses() {
        let unauthorized = AppError::Unauthorized {
            message: "missing".to_string(),
        };
        assert_eq!(
            unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );

        let forbidden = AppError::Forbidden {
            message: "nope".to_string(),
        };
        assert_eq!(forbidden.into_response().status(), StatusCode::FORBIDDEN);

        let internal = AppError::Internal {
            message: "boom".to_string(),
        };
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
