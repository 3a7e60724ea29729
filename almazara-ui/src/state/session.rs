//! Inactivity logout
//!
//! One `gloo_timers` timeout, re-armed whenever the user clicks or types.
//! When it fires the session is dropped and the shells send the user back
//! to `/login`. The stored activity stamp is refreshed as well, so a reload
//! after a long pause is caught by [`resume`] too.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use almazara::session::{
    resume, Session, SessionError, TokenStore, DEFAULT_INACTIVITY_TIMEOUT_MS,
};
use gloo_timers::callback::Timeout;

use crate::api::LocalStorageStore;
use crate::state::global::GlobalState;

pub const INACTIVITY_MESSAGE: &str = "Session closed after 15 minutes of inactivity";

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Clone)]
struct IdleWatch {
    state: GlobalState,
    timeout_ms: i64,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl IdleWatch {
    /// Replace the running timeout; dropping the old one cancels it
    fn arm(&self) {
        let millis = u32::try_from(self.timeout_ms).unwrap_or(u32::MAX);
        let watch = self.clone();
        let timeout = Timeout::new(millis, move || watch.fired());
        self.pending.replace(Some(timeout));
    }

    fn disarm(&self) {
        self.pending.replace(None);
    }

    /// Called from inside the timeout's own callback, which must not be
    /// dropped while it runs
    fn fired(&self) {
        if let Some(timeout) = self.pending.take() {
            timeout.forget();
        }
        self.expire();
    }

    fn expire(&self) {
        if self.state.session.get_untracked().is_some() {
            self.state.end_session();
            self.state.show_error(INACTIVITY_MESSAGE);
        }
    }

    fn activity(&self) {
        let now = now_ms();
        let outcome = self
            .state
            .session
            .try_update_untracked(|slot| record_activity(slot, self.timeout_ms, now))
            .unwrap_or(Activity::Idle);

        match outcome {
            Activity::Idle => {}
            // Timers are throttled in background tabs
            Activity::Expired => {
                self.disarm();
                self.expire();
            }
            Activity::Touched(session) => {
                if let Err(e) = LocalStorageStore.save(&session) {
                    web_sys::console::warn_1(&format!("Cannot store activity: {}", e).into());
                }
                self.arm();
            }
        }
    }
}

/// What a click or key press did to the current session
#[derive(Debug, Clone, PartialEq)]
enum Activity {
    /// Nobody is logged in
    Idle,
    Expired,
    /// Stamp moved forward; the copy is what gets persisted
    Touched(Session),
}

/// Move the activity stamp of the session in `slot`, in place
fn record_activity(slot: &mut Option<Session>, timeout_ms: i64, now_ms: i64) -> Activity {
    let Some(session) = slot.as_mut() else {
        return Activity::Idle;
    };
    match session.register_activity(timeout_ms, now_ms) {
        Ok(()) => Activity::Touched(session.clone()),
        Err(_) => Activity::Expired,
    }
}

/// Restore a stored session and start watching for inactivity
pub fn init_inactivity_watch(state: GlobalState) {
    match resume(&LocalStorageStore, DEFAULT_INACTIVITY_TIMEOUT_MS, now_ms()) {
        Ok(session) => state.session.set(Some(session)),
        Err(SessionError::Missing) => {}
        Err(SessionError::Expired) => state.show_error(INACTIVITY_MESSAGE),
        Err(e) => {
            web_sys::console::warn_1(&format!("Discarding stored session: {}", e).into());
            if let Err(e) = LocalStorageStore.clear() {
                web_sys::console::warn_1(&format!("Cannot clear stored session: {}", e).into());
            }
        }
    }

    let watch = IdleWatch {
        state,
        timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
        pending: Rc::new(RefCell::new(None)),
    };

    let on_login = watch.clone();
    create_effect(move |_| {
        if state.session.with(Option::is_some) {
            on_login.arm();
        } else {
            on_login.disarm();
        }
    });

    let on_click = watch.clone();
    let _ = window_event_listener(ev::click, move |_| on_click.activity());
    let on_key = watch;
    let _ = window_event_listener(ev::keydown, move |_| on_key.activity());
}

#[cfg(test)]
mod tests {
    use super::*;
    use almazara::model::User;

    const MINUTE: i64 = 60_000;

    fn logged_in(at: i64) -> Option<Session> {
        let user = User {
            id: 4,
            username: "lucia".to_string(),
            email: None,
            role_id: None,
            role: None,
        };
        Some(Session::new("tok", user, None, at))
    }

    #[test]
    fn test_steady_activity_never_expires() {
        let t0 = 10 * MINUTE;
        let mut slot = logged_in(t0);

        for minute in [5, 14, 20, 29, 40] {
            let outcome = record_activity(&mut slot, DEFAULT_INACTIVITY_TIMEOUT_MS, t0 + minute * MINUTE);
            assert!(matches!(outcome, Activity::Touched(_)), "minute {}", minute);
        }
        let stamp = slot.as_ref().map(|s| s.last_activity_ms);
        assert_eq!(stamp, Some(t0 + 40 * MINUTE));
    }

    #[test]
    fn test_stamp_is_written_back_to_slot() {
        let t0 = 0;
        let mut slot = logged_in(t0);

        let outcome = record_activity(&mut slot, DEFAULT_INACTIVITY_TIMEOUT_MS, t0 + 14 * MINUTE);
        let Activity::Touched(saved) = outcome else {
            panic!("expected the session to be touched");
        };
        assert_eq!(saved.last_activity_ms, t0 + 14 * MINUTE);
        assert_eq!(slot.as_ref(), Some(&saved));

        let later = record_activity(&mut slot, DEFAULT_INACTIVITY_TIMEOUT_MS, t0 + 16 * MINUTE);
        assert!(matches!(later, Activity::Touched(_)));
    }

    #[test]
    fn test_long_pause_expires() {
        let mut slot = logged_in(0);
        let outcome = record_activity(&mut slot, DEFAULT_INACTIVITY_TIMEOUT_MS, 15 * MINUTE);
        assert_eq!(outcome, Activity::Expired);
    }

    #[test]
    fn test_no_session_is_idle() {
        let mut slot = None;
        assert_eq!(record_activity(&mut slot, DEFAULT_INACTIVITY_TIMEOUT_MS, 0), Activity::Idle);
    }
}
