//! Hook exposing the chat feed snapshot for the current render.

use crate::session::SessionHandle;
use shared::ChatMessage;
use std::rc::Rc;
use yew::prelude::*;

/// Current ordered chat feed. The transport replaces the `Rc`
/// wholesale whenever the feed changes, so the returned reference can
/// key `use_effect_with`.
#[hook]
pub fn use_chat_messages() -> Rc<Vec<ChatMessage>> {
    let session = use_context::<SessionHandle>().expect("no session context");
    session.messages()
}
