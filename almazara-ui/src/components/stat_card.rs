//! Stat Card Component
//!
//! A labelled figure on a dashboard.

use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(default = "")]
    icon: &'static str,
    /// Secondary line under the figure
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-2xl font-bold mt-2">{move || value.get()}</div>
            {hint.map(|hint| view! {
                <div class="text-gray-500 text-xs mt-1">{move || hint.get()}</div>
            })}
        </div>
    }
}
