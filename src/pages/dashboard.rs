//! Dashboard page embedding generated charts above a resizable prompt panel.
//!
//! ARCHITECTURE
//! ============
//! The page owns the generation signals and panel geometry; the prompt bar
//! renders the input row and reports submissions back through a callback.
//! Pointer capture keeps resize drags alive when the cursor leaves the
//! handle.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::app::ApiClient;
#[cfg(feature = "csr")]
use crate::config::AppConfig;
use crate::net::types::User;
use crate::pages::dashboard_prompt_bar::DashboardPromptBar;
use crate::state::generation::PromptStatus;
use crate::state::ui::{self, UiState};

#[component]
pub fn DashboardPage(user: User) -> impl IntoView {
    let ui_state = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "csr")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "csr")]
    let config = expect_context::<AppConfig>();

    let User { username, access_token } = user;

    let prompt_input = RwSignal::new(String::new());
    let prompt_status = RwSignal::new(PromptStatus::Idle);
    let prompt_error = RwSignal::new(None::<String>);
    let chart_url = RwSignal::new(None::<String>);

    let dragging = RwSignal::new(false);
    let drag_start_y = RwSignal::new(0.0_f64);
    let drag_start_height = RwSignal::new(ui::PANEL_DEFAULT_HEIGHT);

    let panel_height_style = move || format!("height: {:.0}px;", ui_state.get().prompt_panel_height);

    let on_resize_pointer_down = move |ev: leptos::ev::PointerEvent| {
        dragging.set(true);
        drag_start_y.set(f64::from(ev.client_y()));
        drag_start_height.set(ui_state.get().prompt_panel_height);
        #[cfg(feature = "csr")]
        {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_resize_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !dragging.get() {
            return;
        }
        let next = ui::resolve_drag_height(
            drag_start_height.get(),
            drag_start_y.get(),
            f64::from(ev.client_y()),
        );
        ui_state.update(|u| u.prompt_panel_height = next);
    };

    let on_resize_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        dragging.set(false);
    };

    let on_execute = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let config = config.clone();
            let token = access_token.clone();
            let input = prompt_input.get_untracked();
            leptos::task::spawn_local(async move {
                crate::state::generation::run_generation(
                    prompt_status,
                    chart_url,
                    prompt_error,
                    api.0.as_ref(),
                    &config,
                    &token,
                    &input,
                )
                .await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = &access_token;
    });

    view! {
        <div
            class="dashboard-page"
            on:pointermove=on_resize_pointer_move
            on:pointerup=on_resize_pointer_up
            on:pointercancel=on_resize_pointer_up
        >
            <header class="dashboard-page__header">
                <h1>"Data Platform"</h1>
                <span class="dashboard-page__user">{username}</span>
            </header>

            <section class="dashboard-page__viewer">
                {move || match chart_url.get() {
                    Some(url) => view! {
                        <iframe
                            class="dashboard-page__frame"
                            src=url
                            title="Apache Superset Explore"
                        ></iframe>
                    }
                        .into_any(),
                    None => view! {
                        <div class="dashboard-page__empty">
                            <p>"No chart yet. Describe one below and hit Execute."</p>
                        </div>
                    }
                        .into_any(),
                }}
            </section>

            <div class="dashboard-page__resize-handle" on:pointerdown=on_resize_pointer_down></div>

            <footer class="dashboard-page__prompt-panel" style=panel_height_style>
                <DashboardPromptBar
                    prompt_input=prompt_input
                    prompt_status=prompt_status
                    prompt_error=prompt_error
                    on_execute=on_execute
                />
            </footer>
        </div>
    }
}
