//! Toasts
//!
//! The latest success and error messages, bottom right. Both clear
//! themselves after a few seconds or when clicked.

use leptos::*;

use crate::state::global::use_global;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn classes(self) -> &'static str {
        match self {
            Tone::Success => "bg-green-600",
            Tone::Error => "bg-red-600",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✓",
            Tone::Error => "⚠",
        }
    }
}

/// Toast container, mounted once next to the router outlet
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col items-end space-y-2" role="status">
            {move || state.error.get().map(|text| view! { <Bubble text=text tone=Tone::Error /> })}
            {move || state.success.get().map(|text| view! { <Bubble text=text tone=Tone::Success /> })}
        </div>
    }
}

#[component]
fn Bubble(text: String, tone: Tone) -> impl IntoView {
    let state = use_global();
    let slot = match tone {
        Tone::Success => state.success,
        Tone::Error => state.error,
    };

    view! {
        <button
            class=format!(
                "flex items-center space-x-3 {} text-white text-left px-4 py-3 rounded-lg shadow-lg max-w-sm animate-slide-in",
                tone.classes()
            )
            on:click=move |_| slot.set(None)
        >
            <span class="text-lg">{tone.icon()}</span>
            <span class="text-sm font-medium">{text}</span>
        </button>
    }
}
