//! Loading placeholders
//!
//! Spinner for pages waiting on a list, skeletons for dashboards.

use leptos::*;

/// Centered spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <span class="text-gray-400 text-sm">{m}</span> })}
        </div>
    }
}

/// Grid of stat card placeholders
#[component]
pub fn CardSkeleton(#[prop(default = 4)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 border border-gray-700 rounded-lg p-4 animate-pulse space-y-3">
                    <div class="h-3 bg-gray-700 rounded w-2/5" />
                    <div class="h-7 bg-gray-700 rounded w-3/5" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Bar chart placeholder, one grey bar per month
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    const HEIGHTS: [u8; 12] = [30, 45, 25, 60, 80, 55, 35, 20, 40, 70, 90, 50];

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 animate-pulse">
            <div class="h-5 bg-gray-700 rounded w-48 mb-6" />
            <div class="flex items-end h-56 space-x-2">
                {HEIGHTS.iter().map(|h| view! {
                    <div class="flex-1 bg-gray-700 rounded-t" style=format!("height: {}%", h) />
                }).collect_view()}
            </div>
        </div>
    }
}
