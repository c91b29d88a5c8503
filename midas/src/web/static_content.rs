use std::time::Duration;

use axum::{
    body::Body,
    extract::Path,
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};
use axum_extra::headers::{CacheControl, HeaderMapExt};

use crate::web::error::WebError;

/// In release mode, return the files from a statically included dir
#[cfg(not(debug_assertions))]
fn get_static_file(path: &str) -> Option<&'static [u8]> {
    use include_dir::include_dir;
    static STATIC_DIR: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
    let file = STATIC_DIR.get_file(path)?;
    Some(file.contents())
}

/// In debug mode, just load the files from disk
#[cfg(debug_assertions)]
fn get_static_file(path: &str) -> Option<Vec<u8>> {
    use std::path::{Component, PathBuf};

    let path = PathBuf::from(path);
    // keep lookups inside the static dir
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    std::fs::read(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")).join(path)).ok()
}

fn cache_control() -> CacheControl {
    if cfg!(debug_assertions) {
        CacheControl::new().with_no_cache()
    } else {
        CacheControl::new()
            .with_public()
            .with_max_age(Duration::from_secs(60 * 60 * 24))
    }
}

pub(crate) async fn get_file(path: &str) -> Result<Response<Body>, WebError> {
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    match get_static_file(path) {
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::new(http_body_util::Empty::new()))?),
        Some(file) => {
            let mut response = Response::builder()
                .status(StatusCode::OK)
                .header(
                    header::CONTENT_TYPE,
                    HeaderValue::from_str(mime_type.as_ref())?,
                )
                .body(Body::new(http_body_util::Full::from(file)))?;
            response.headers_mut().typed_insert(cache_control());
            Ok(response)
        }
    }
}

pub(crate) async fn robots() -> impl IntoResponse {
    get_file("robots.txt").await
}

pub(crate) async fn static_path(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    get_file(path).await
}
