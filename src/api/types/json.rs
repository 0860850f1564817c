//! JSON body extractor whose rejections use the API error body

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::ApiError;

/// Error code attached to every body rejection
pub const JSON_PARSE_ERROR_CODE: &str = "json_parse_error";

/// `axum::Json` with rejections rendered as `{"message", "code"}`
///
/// The status axum picks for the rejection is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_api_error)?;

        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

fn rejection_to_api_error(rejection: JsonRejection) -> ApiError {
    let message = match &rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        JsonRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid JSON request".to_string(),
    };

    tracing::debug!(status = %rejection.status(), message = %message, "Rejected JSON body");

    ApiError::new(rejection.status(), message).with_code(JSON_PARSE_ERROR_CODE)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, StatusCode},
    };
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Track {
        title: String,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Json<Track>, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/tracks");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        Json::<Track>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let Json(track) = extract(Some("application/json"), r#"{"title": "Moment's Notice"}"#)
            .await
            .unwrap();

        assert_eq!(track.title, "Moment's Notice");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = extract(Some("application/json"), "{\"title\":").await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.code.as_deref(), Some(JSON_PARSE_ERROR_CODE));
        assert!(err.response.message.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_data_error_is_unprocessable() {
        let err = extract(Some("application/json"), r#"{"name": "x"}"#).await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.response.message.starts_with("Invalid JSON data"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let err = extract(None, r#"{"title": "x"}"#).await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.response.code.as_deref(), Some(JSON_PARSE_ERROR_CODE));
    }
}
