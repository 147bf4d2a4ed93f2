//! Custom Yew hooks for the client.
//!
//! These encapsulate the session-adjacent effects so the view itself
//! stays declarative.

mod use_app_config;
mod use_chat_messages;
mod use_connection_timeout;
mod use_debug_mode;

pub use use_app_config::use_app_config;
pub use use_chat_messages::use_chat_messages;
pub use use_connection_timeout::{use_connection_timeout, SESSION_CONNECT_TIMEOUT_MS};
pub use use_debug_mode::use_debug_mode;
