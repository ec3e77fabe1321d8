//! Root application component and shared context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::net::http::{FetchClient, HttpClient};
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthState, ui::UiState};

/// Shared handle to the HTTP capability; pages pull it from context so
/// request flows stay decoupled from the concrete transport.
#[derive(Clone)]
pub struct ApiClient(pub Arc<dyn HttpClient + Send + Sync>);

impl Default for ApiClient {
    fn default() -> Self {
        Self(Arc::new(FetchClient))
    }
}

/// Root application component.
///
/// Provides all shared contexts and selects the visible screen from the
/// session phase.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(AppConfig::load());
    provide_context(ApiClient::default());

    view! {
        <Title text="Data Platform"/>

        <main class="app-container">
            {move || match auth.get() {
                AuthState::Authenticated(user) => view! { <DashboardPage user=user/> }.into_any(),
                AuthState::Unauthenticated | AuthState::Authenticating | AuthState::Error(_) => {
                    view! { <LoginPage/> }.into_any()
                }
            }}
        </main>
    }
}
