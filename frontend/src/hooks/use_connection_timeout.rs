//! Hook guarding the initial connection with a single-shot timeout.

use crate::session::timeout::ConnectTimeout;
use crate::session::SessionHandle;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long the view waits for a connected signal before reporting a
/// connection failure.
pub const SESSION_CONNECT_TIMEOUT_MS: u32 = 200_000;

/// Report a connection failure if the session does not reach
/// `Connected` within `duration_ms` of mount.
///
/// The timer is armed once on mount and cancelled on unmount by the
/// effect destructor dropping it. A connected signal disarms the guard
/// permanently; the failure report fires at most once.
#[hook]
pub fn use_connection_timeout(duration_ms: u32) {
    let session = use_context::<SessionHandle>().expect("no session context");
    let guard = use_mut_ref(ConnectTimeout::default);

    {
        let session = session.clone();
        let guard = guard.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(duration_ms, move || {
                if guard.borrow_mut().on_expired() {
                    log::warn!("No connection after {}ms, reporting failure", duration_ms);
                    session.fail("connection timed out");
                }
            });
            move || drop(timer)
        });
    }

    {
        let guard = guard.clone();
        let connected = session.connection().is_connected();
        use_effect_with(connected, move |connected| {
            if *connected {
                guard.borrow_mut().on_connected();
            }
            || ()
        });
    }
}
