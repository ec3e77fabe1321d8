//! Login page gating access to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::app::ApiClient;
#[cfg(feature = "csr")]
use crate::config::AppConfig;
use crate::state::auth::AuthState;

/// Trim the username and require both fields before a submit goes out.
///
/// The password is kept verbatim; only the username is display text.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Option<(String, String)> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "csr")]
    let config = expect_context::<AppConfig>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let busy = move || auth.get().is_authenticating();
    let message = move || {
        auth.get()
            .error_message()
            .map(str::to_owned)
            .unwrap_or_else(|| info.get())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let Some((username_value, password_value)) =
            validate_credentials(&username.get(), &password.get())
        else {
            info.set("Enter a username and password.".to_owned());
            return;
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::run_login(
                    auth,
                    api.0.as_ref(),
                    &config,
                    &username_value,
                    &password_value,
                )
                .await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (username_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Data Platform"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="login-input"
                        type="text"
                        placeholder="Ken"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Connecting..." } else { "Enter Platform" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="login-message">{message}</p>
                </Show>
            </div>
        </div>
    }
}
