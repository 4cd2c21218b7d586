//! HTTP-boundary error type.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Error returned from HTTP handlers, mapped to a status code and a
/// minimal HTML error page.
#[derive(Debug)]
pub enum ApiError {
    Database(quill_core::Error),
    NotFound(String),
    Render(String),
}

impl From<quill_core::Error> for ApiError {
    fn from(err: quill_core::Error) -> Self {
        match err {
            quill_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            quill_core::Error::NoteNotFound(id) => {
                ApiError::NotFound(format!("Note not found: {}", id))
            }
            quill_core::Error::Render(msg) => ApiError::Render(msg),
            other => ApiError::Database(other),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Render(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => {
                tracing::error!(subsystem = "web", error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Render(msg) => {
                tracing::error!(subsystem = "web", error = %msg, "Template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Html(format!(
            "<!DOCTYPE html><html><head><title>{status}</title></head>\
             <body><h1>{status}</h1><p>{message}</p><p><a href=\"/\">Back to notes</a></p></body></html>",
            status = status,
            message = message
        ));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_note_not_found_maps_to_404() {
        let err: ApiError = quill_core::Error::NoteNotFound(Uuid::nil()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_error_maps_to_500() {
        let err: ApiError = quill_core::Error::Internal("store unavailable".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_render_error_maps_to_500() {
        let err = ApiError::Render("broken template".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
