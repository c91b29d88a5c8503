pub(crate) mod error;
pub(crate) mod state;
mod static_content;

use std::net::SocketAddr;

use axum::{middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub(crate) use self::state::WebState;
use crate::leptos::{create_leptos_app, render_page};
use crate::web_metrics::track_metrics;

pub(crate) fn router(mut state: WebState) -> Router {
    let leptos_app = create_leptos_app(&mut state.leptos_options);
    Router::new()
        .route("/robots.txt", get(static_content::robots))
        .route("/static/{*path}", get(static_content::static_path))
        .merge(leptos_app)
        // unmatched paths go through the app router, which renders the 404 page
        .fallback(render_page)
        .route_layer(middleware::from_fn(track_metrics))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState) -> anyhow::Result<()> {
    let addr: SocketAddr = state.leptos_options.site_addr;
    let token = state.token.clone();
    let app = router(state);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;
    Ok(())
}
