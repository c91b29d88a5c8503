use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
    #[error("Invalid header value {0}")]
    HeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        (self.as_status_code(), format!("{self}")).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_as_server_error() {
        let err = axum::http::HeaderValue::from_str("bad\nvalue").unwrap_err();
        let response = WebError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
