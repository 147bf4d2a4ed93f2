use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant in the call, either the local user or a remote
/// participant (including the agent itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    /// Stable identity string assigned by the signaling server
    pub identity: String,
    /// Human-readable display name
    pub name: String,
    /// Whether this participant is the local user
    #[serde(default)]
    pub is_local: bool,
}

impl ParticipantInfo {
    /// The agent's well-known identity on the chat channel
    pub const AGENT_IDENTITY: &'static str = "agent";

    pub fn is_agent(&self) -> bool {
        self.identity == Self::AGENT_IDENTITY
    }
}

/// One chat transcript entry. Created by the transport when a message
/// arrives or is sent; never mutated afterwards. Insertion order in the
/// feed is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub from: ParticipantInfo,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a fresh message from `from`, stamped now.
    pub fn now(from: ParticipantInfo, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Coarse agent activity, used by the tile layout to annotate the agent
/// tile. The media pipeline that produces these lives server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Initializing,
    Listening,
    Thinking,
    Speaking,
}

impl AgentState {
    pub fn label(&self) -> &'static str {
        match self {
            AgentState::Initializing => "initializing",
            AgentState::Listening => "listening",
            AgentState::Thinking => "thinking",
            AgentState::Speaking => "speaking",
        }
    }
}

/// Envelope for the chat/roster WebSocket channel. Used in both
/// directions:
/// - server -> client: chat history and live messages, roster changes,
///   agent activity
/// - client -> server: locally authored chat messages
///
/// Media and auth signaling travel on separate channels and are not
/// part of this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SignalMessage {
    /// A chat message, either direction
    Chat { message: ChatMessage },

    /// A participant joined the room
    ParticipantJoined { participant: ParticipantInfo },

    /// A participant left the room
    ParticipantLeft { identity: String },

    /// Agent activity changed
    AgentState { state: AgentState },

    /// Server-side error surfaced to the client
    Error { message: String },
}

/// Client feature configuration served by `/api/config`. Read once per
/// render by the view and never mutated there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Whether the transcript offers a text input
    #[serde(default = "default_true")]
    pub supports_chat_input: bool,
    /// Whether camera / screen-share controls are offered
    #[serde(default = "default_true")]
    pub supports_video_input: bool,
    /// Whether the pre-connect agent greeting panel is shown
    #[serde(default)]
    pub is_pre_connect_buffer_enabled: bool,
    /// Whether the debug introspection hook attaches at startup.
    /// Defaults to on for debug builds only.
    #[serde(default = "default_debug_mode")]
    pub debug_mode: bool,
}

fn default_true() -> bool {
    true
}

fn default_debug_mode() -> bool {
    cfg!(debug_assertions)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supports_chat_input: true,
            supports_video_input: true,
            is_pre_connect_buffer_enabled: false,
            debug_mode: default_debug_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_envelope_is_tagged() {
        let msg = SignalMessage::Chat {
            message: ChatMessage::now(
                ParticipantInfo {
                    identity: "user-1".into(),
                    name: "User".into(),
                    is_local: true,
                },
                "hello",
            ),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "Chat");
        assert_eq!(json["message"]["body"], "hello");
        assert_eq!(json["message"]["from"]["is_local"], true);
    }

    #[test]
    fn roster_messages_parse() {
        let parsed: SignalMessage = serde_json::from_str(
            r#"{"type":"ParticipantJoined","participant":{"identity":"agent","name":"Agent"}}"#,
        )
        .unwrap();
        match parsed {
            SignalMessage::ParticipantJoined { participant } => {
                assert!(participant.is_agent());
                // is_local is defaulted, remote participants never set it
                assert!(!participant.is_local);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn agent_state_uses_snake_case() {
        let parsed: SignalMessage =
            serde_json::from_str(r#"{"type":"AgentState","state":"thinking"}"#).unwrap();
        match parsed {
            SignalMessage::AgentState { state } => assert_eq!(state, AgentState::Thinking),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn config_fields_default_when_missing() {
        let config: AppConfig = serde_json::from_str(r#"{"supports_video_input":false}"#).unwrap();
        assert!(config.supports_chat_input);
        assert!(!config.supports_video_input);
        assert!(!config.is_pre_connect_buffer_enabled);
    }
}
