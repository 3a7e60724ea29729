//! Login Page
//!
//! Exchanges credentials for a session and sends the user to their role's
//! dashboard.

use leptos::*;
use leptos_router::*;

use almazara::api::ApiError;

use crate::api;
use crate::state::global::use_global;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Leave as soon as there is a session, including one restored on load
    create_effect(move |_| {
        if let Some(home) = state.session.with(|s| s.as_ref().map(|s| s.home_path())) {
            navigate(home, Default::default());
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            state.show_error("Enter your username and password");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(session) => {
                    state.show_success(&format!("Welcome, {}", session.user.username));
                    state.start_session(session);
                }
                Err(ApiError::Unauthorized) => state.show_error("Invalid username or password"),
                Err(e) => state.show_error(&e.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <form
                class="w-full max-w-sm bg-gray-800 border border-gray-700 rounded-lg p-8 space-y-6"
                on:submit=on_submit
            >
                <div class="text-center">
                    <div class="text-5xl mb-2">"🫒"</div>
                    <h1 class="text-2xl font-bold">"Almazara"</h1>
                    <p class="text-gray-400 text-sm mt-1">"Sign in to continue"</p>
                </div>

                <label class="block">
                    <span class="block text-sm text-gray-400 mb-1">"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="block text-sm text-gray-400 mb-1">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    type="submit"
                    class="w-full py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium disabled:opacity-50"
                    disabled=submitting
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <label class="block text-xs text-gray-500">
                    <span class="block mb-1">"API server"</span>
                    <input
                        type="url"
                        class="w-full bg-gray-900 border border-gray-700 rounded px-2 py-1"
                        value=api::get_api_base()
                        on:change=move |ev| api::set_api_base(&event_target_value(&ev))
                    />
                </label>
            </form>
        </div>
    }
}
