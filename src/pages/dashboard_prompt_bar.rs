//! Prompt input row with execute control and request status.

use leptos::prelude::*;

use crate::state::generation::{self, PromptStatus};

#[component]
pub(crate) fn DashboardPromptBar(
    prompt_input: RwSignal<String>,
    prompt_status: RwSignal<PromptStatus>,
    prompt_error: RwSignal<Option<String>>,
    on_execute: Callback<()>,
) -> impl IntoView {
    let can_execute = move || {
        generation::prepare_prompt(&prompt_input.get(), prompt_status.get()).is_some()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_execute.run(());
        }
    };

    view! {
        <div class="prompt-bar">
            <textarea
                class="prompt-bar__input"
                placeholder="Enter your prompt for the data platform..."
                prop:value=move || prompt_input.get()
                on:input=move |ev| prompt_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <div class="prompt-bar__controls">
                <button
                    class="prompt-bar__execute"
                    disabled=move || !can_execute()
                    on:click=move |_| on_execute.run(())
                >
                    "Execute"
                </button>
                <div class="prompt-bar__status" aria-live="polite">
                    {move || match prompt_status.get() {
                        PromptStatus::Idle => view! { <span class="prompt-bar__icon-spacer"></span> }.into_any(),
                        PromptStatus::Loading => view! { <span class="prompt-bar__spinner"></span> }.into_any(),
                        PromptStatus::Success => view! {
                            <svg class="prompt-bar__icon prompt-bar__icon--success" viewBox="0 0 20 20" aria-hidden="true">
                                <path d="M4 10.5 8 14.5 16 6.5"></path>
                            </svg>
                        }.into_any(),
                        PromptStatus::Error => view! {
                            <svg class="prompt-bar__icon prompt-bar__icon--error" viewBox="0 0 20 20" aria-hidden="true">
                                <path d="M5.5 5.5 14.5 14.5"></path>
                                <path d="M14.5 5.5 5.5 14.5"></path>
                            </svg>
                        }.into_any(),
                    }}
                </div>
            </div>
            <Show when=move || prompt_error.get().is_some()>
                <p class="prompt-bar__error">{move || prompt_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
