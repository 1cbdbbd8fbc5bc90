use crate::storage::{Catalog, RestaurantFilter};
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, query_timeout: Duration) -> Self {
        Self {
            catalog,
            query_timeout,
        }
    }
}

/// Query string of `/restaurants/filter`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilterQuery {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

/// Query string of `/dishes/filter`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishFilterQuery {
    pub is_veg: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub restaurants: usize,
    pub dishes: usize,
}

/// Body of a 404 response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every other error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RestaurantFilterQuery {
    /// Parse all three flags; each one is required
    pub fn parse(&self) -> Result<RestaurantFilter, String> {
        Ok(RestaurantFilter {
            is_veg: parse_flag("isVeg", self.is_veg.as_deref())?,
            has_outdoor_seating: parse_flag(
                "hasOutdoorSeating",
                self.has_outdoor_seating.as_deref(),
            )?,
            is_luxury: parse_flag("isLuxury", self.is_luxury.as_deref())?,
        })
    }
}

impl DishFilterQuery {
    pub fn parse(&self) -> Result<bool, String> {
        parse_flag("isVeg", self.is_veg.as_deref())
    }
}

/// Parse a path id segment
pub fn parse_id(raw: &str) -> Result<i64, String> {
    raw.parse()
        .map_err(|_| format!("Invalid ID: '{}' (expected an integer)", raw))
}

/// Parse a boolean-like query parameter. Only `true` and `false` are accepted.
pub fn parse_flag(name: &str, raw: Option<&str>) -> Result<bool, String> {
    match raw {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(format!(
            "Invalid value for {}: '{}' (expected 'true' or 'false')",
            name, other
        )),
        None => Err(format!("Missing query parameter: {}", name)),
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Timeout(String),
    Internal(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(message) => {
                return (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Timeout(msg) => {
                warn!("Query timeout: {}", msg);
                (StatusCode::GATEWAY_TIMEOUT, msg)
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn test_parse_flag_accepts_true_false(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag("isVeg", Some(raw)), Ok(expected));
    }

    // Legacy behavior bound these strings as-is and silently matched nothing.
    #[rstest]
    #[case("yes")]
    #[case("TRUE")]
    #[case("1")]
    #[case("")]
    fn test_parse_flag_rejects_other_strings(#[case] raw: &str) {
        let err = parse_flag("isVeg", Some(raw)).unwrap_err();
        assert!(err.contains("isVeg"));
        assert!(err.contains("expected 'true' or 'false'"));
    }

    #[test]
    fn test_parse_flag_missing() {
        assert_eq!(
            parse_flag("isLuxury", None),
            Err("Missing query parameter: isLuxury".to_string())
        );
    }

    #[rstest]
    #[case("2", 2)]
    #[case("999", 999)]
    #[case("-1", -1)]
    fn test_parse_id(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_id(raw), Ok(expected));
    }

    // Legacy parseInt accepted "2abc" as 2 and turned "abc" into NaN.
    #[rstest]
    #[case("abc")]
    #[case("2abc")]
    #[case("1.5")]
    fn test_parse_id_rejects_non_integers(#[case] raw: &str) {
        assert!(parse_id(raw).is_err());
    }

    #[test]
    fn test_restaurant_filter_query_reports_first_bad_flag() {
        let query = RestaurantFilterQuery {
            is_veg: Some("true".to_string()),
            has_outdoor_seating: Some("maybe".to_string()),
            is_luxury: None,
        };
        let err = query.parse().unwrap_err();
        assert!(err.contains("hasOutdoorSeating"));
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Timeout("x".into()), StatusCode::GATEWAY_TIMEOUT),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
