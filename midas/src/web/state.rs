use axum::extract::FromRef;
use leptos::config::LeptosOptions;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) leptos_options: LeptosOptions,
    pub(crate) token: CancellationToken,
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}
