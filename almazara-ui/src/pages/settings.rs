//! Settings Page
//!
//! API address and table preferences, kept in local storage.

use leptos::*;

use almazara::session::DEFAULT_INACTIVITY_TIMEOUT_MS;

use crate::api;
use crate::state::global::use_global;

const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-2xl">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Stored in this browser only"</p>
            </div>

            <ApiSettings />
            <DisplaySettings />
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_global();
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save = move |_| {
        let url = api_url.get_untracked();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            state.show_error("The API URL must start with http:// or https://");
            return;
        }
        api::set_api_base(&url);
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-lg p-6 border border-gray-700 space-y-4">
            <h2 class="text-xl font-semibold">"API connection"</h2>
            <label class="block">
                <span class="block text-sm text-gray-400 mb-1">"Base URL"</span>
                <input
                    type="url"
                    class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                    prop:value=api_url
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
            </label>
            <button class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium" on:click=save>
                "Save"
            </button>
        </section>
    }
}

/// Table display settings
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = use_global();

    view! {
        <section class="bg-gray-800 rounded-lg p-6 border border-gray-700 space-y-4">
            <h2 class="text-xl font-semibold">"Tables"</h2>
            <label class="block">
                <span class="block text-sm text-gray-400 mb-1">"Rows per page"</span>
                <select
                    class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            state.set_page_size(size);
                        }
                    }
                >
                    {PAGE_SIZES.iter().map(|size| {
                        let size = *size;
                        view! {
                            <option value=size.to_string() selected=move || state.page_size.get() == size>
                                {size}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-6 border border-gray-700 text-sm text-gray-400 space-y-1">
            <h2 class="text-xl font-semibold text-white mb-2">"About"</h2>
            <p>{format!("Almazara web client {}", env!("CARGO_PKG_VERSION"))}</p>
            <p>{format!(
                "Sessions close after {} minutes without activity.",
                DEFAULT_INACTIVITY_TIMEOUT_MS / 60_000
            )}</p>
        </section>
    }
}
