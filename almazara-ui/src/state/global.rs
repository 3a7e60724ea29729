//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use almazara::api::ApiError;
use almazara::model::Profile;
use almazara::session::{Session, TokenStore};

use crate::api::{self, LocalStorageStore};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Logged-in user, `None` sends every shell to `/login`
    pub session: RwSignal<Option<Session>>,
    /// `GET /profile`, fetched once per login
    pub profile: RwSignal<Option<Profile>>,
    /// Rows per table page
    pub page_size: RwSignal<usize>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

const SUCCESS_TOAST_MS: u32 = 3000;
const ERROR_TOAST_MS: u32 = 5000;

/// Show `message` in `slot` until `millis` pass, unless a newer message
/// replaced it meanwhile
fn flash(slot: RwSignal<Option<String>>, message: &str, millis: u32) {
    let message = message.to_string();
    slot.set(Some(message.clone()));
    gloo_timers::callback::Timeout::new(millis, move || {
        if slot.with_untracked(|current| current.as_deref() == Some(message.as_str())) {
            slot.set(None);
        }
    })
    .forget();
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        session: create_rw_signal(None),
        profile: create_rw_signal(None),
        page_size: create_rw_signal(api::get_page_size()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Global state from context
pub fn use_global() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Display name for the topbar
    pub fn display_name(&self) -> String {
        if let Some(profile) = self.profile.get() {
            return profile.display_name();
        }
        self.session
            .get()
            .map(|s| s.user.username)
            .unwrap_or_default()
    }

    pub fn start_session(&self, session: Session) {
        self.profile.set(None);
        self.session.set(Some(session));
    }

    /// Forget the session locally; the shells redirect to `/login`
    pub fn end_session(&self) {
        if let Err(e) = LocalStorageStore.clear() {
            web_sys::console::warn_1(&format!("Cannot clear session: {}", e).into());
        }
        self.profile.set(None);
        self.session.set(None);
    }

    /// Log out on the server, then locally
    pub fn logout(&self) {
        let state = *self;
        spawn_local(async move {
            api::logout().await;
            state.end_session();
            state.show_success("Logged out");
        });
    }

    /// Show an API failure. A 401 also ends the session.
    pub fn report(&self, err: &ApiError) {
        if err.is_unauthorized() || matches!(err, ApiError::NotLoggedIn) {
            self.end_session();
        }
        self.show_error(&err.user_message());
    }

    pub fn show_success(&self, message: &str) {
        flash(self.success, message, SUCCESS_TOAST_MS);
    }

    pub fn show_error(&self, message: &str) {
        flash(self.error, message, ERROR_TOAST_MS);
    }

    pub fn set_page_size(&self, size: usize) {
        let size = size.max(1);
        api::set_page_size(size);
        self.page_size.set(size);
    }
}
