//! Modal dialogs
//!
//! A titled overlay for forms, and a yes/no confirmation built on it.
//! Whether a modal is open is a plain boolean signal owned by the page.

use leptos::*;

/// Overlay with a title bar and a close button
#[component]
pub fn Modal(
    #[prop(into)]
    title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4">
            <div class="bg-gray-800 border border-gray-700 rounded-lg shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-700">
                    <h2 class="text-lg font-semibold">{move || title.get()}</h2>
                    <button
                        class="text-gray-400 hover:text-white text-xl"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for destructive actions
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into)]
    busy: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Modal title="Please confirm" on_close=on_cancel>
            <p class="text-gray-300 mb-6">{message}</p>
            <div class="flex justify-end space-x-3">
                <button
                    class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    class="px-4 py-2 rounded-lg bg-red-600 hover:bg-red-700 disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || if busy.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Modal>
    }
}
