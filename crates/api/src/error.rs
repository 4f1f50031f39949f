use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use riskreturn_core::service::QueryError;
use serde_json::json;

/// Rendered as `{status: "error", message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound { .. } | QueryError::AllNotFound => {
                ApiError::NotFound(err.to_string())
            }
            QueryError::EmptyRequest => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_map_to_http_status() {
        let not_found = ApiError::from(QueryError::NotFound {
            name: "x".into(),
            available: vec!["A".into()],
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            not_found.to_string(),
            "Company \"x\" not found. Available companies: A"
        );

        let empty = ApiError::from(QueryError::EmptyRequest);
        assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);

        let none = ApiError::from(QueryError::AllNotFound);
        assert_eq!(none.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(none.to_string(), "None of the provided companies were found");
    }
}
