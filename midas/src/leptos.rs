//! Midas UI server: the axum side of the leptos app. Renders the page and
//! serves the wasm/js/css bundle built by cargo-leptos.
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
#[cfg(not(debug_assertions))]
use axum::http::{header, HeaderValue};
use leptos::config::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use midas_app::{shell, App};
#[cfg(not(debug_assertions))]
use tower_http::set_header::SetResponseHeader;
use tower_http::services::ServeDir;
use tracing::instrument;

use crate::web::WebState;

#[instrument(skip(state, req), fields(path = %req.uri().path()))]
pub(crate) async fn render_page(State(state): State<WebState>, req: Request<Body>) -> Response {
    let options = state.leptos_options;
    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
    handler(req).await.into_response()
}

/// The pkg dir is versioned with the crate version so release builds can cache it forever.
pub(crate) fn versioned_pkg_dir(pkg_dir: &str) -> String {
    [pkg_dir.trim_end_matches('/'), "/", env!("CARGO_PKG_VERSION")].concat()
}

pub(crate) fn create_leptos_app(leptos_options: &mut LeptosOptions) -> Router<WebState> {
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;

    // The URL path of the generated JS/WASM bundle from cargo-leptos
    let bundle_path = format!("/{pkg_dir}");
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");
    leptos_options.site_pkg_dir = versioned_pkg_dir(pkg_dir).into();

    let cargo_leptos_service = ServeDir::new(&bundle_filepath);
    #[cfg(not(debug_assertions))]
    let cargo_leptos_service = SetResponseHeader::appending(
        cargo_leptos_service,
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400, immutable"),
    );
    tracing::info!("Serving pkg dir: {bundle_filepath}");

    let routes = generate_route_list(App);

    Router::new()
        .nest_service(
            &["/", &leptos_options.site_pkg_dir].concat(),
            cargo_leptos_service.clone(),
        )
        .nest_service(&bundle_path, cargo_leptos_service)
        .leptos_routes_with_handler(routes, render_page)
}
