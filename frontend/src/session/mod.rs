//! Session state shared across the view: connection status, the chat
//! feed, and the participant roster.

pub mod timeout;
mod transport;

pub use transport::{connect_signaling, send_signal, SignalEvent, SignalSender};

use shared::{AgentState, ChatMessage, ParticipantInfo, SignalMessage};
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Connection status of the signaling channel. Owned by the provider,
/// only observed by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Reducer-held session state. `messages` and `participants` are
/// replaced wholesale on every change so consumers can key effects on
/// the sequence reference.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub connection: ConnectionState,
    pub messages: Rc<Vec<ChatMessage>>,
    pub participants: Rc<Vec<ParticipantInfo>>,
    pub agent_state: AgentState,
}

impl SessionState {
    fn new(local: ParticipantInfo) -> Self {
        Self {
            connection: ConnectionState::Connecting,
            messages: Rc::new(Vec::new()),
            participants: Rc::new(vec![local]),
            agent_state: AgentState::Initializing,
        }
    }
}

pub enum SessionAction {
    Connected,
    Failed(String),
    Append(ChatMessage),
    ParticipantJoined(ParticipantInfo),
    ParticipantLeft(String),
    AgentState(AgentState),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Connected => {
                next.connection = ConnectionState::Connected;
            }
            SessionAction::Failed(reason) => {
                next.connection = ConnectionState::Failed { reason };
            }
            SessionAction::Append(message) => {
                let mut messages = (*next.messages).clone();
                messages.push(message);
                next.messages = Rc::new(messages);
            }
            SessionAction::ParticipantJoined(participant) => {
                let already_known = next
                    .participants
                    .iter()
                    .any(|p| p.identity == participant.identity);
                if !already_known {
                    let mut roster = (*next.participants).clone();
                    roster.push(participant);
                    next.participants = Rc::new(roster);
                }
            }
            SessionAction::ParticipantLeft(identity) => {
                let mut roster = (*next.participants).clone();
                roster.retain(|p| p.identity != identity);
                next.participants = Rc::new(roster);
            }
            SessionAction::AgentState(state) => {
                next.agent_state = state;
            }
        }
        Rc::new(next)
    }
}

/// Context handle for session consumers. Cheap to clone.
#[derive(Clone)]
pub struct SessionHandle {
    state: UseReducerHandle<SessionState>,
    sender: SignalSender,
    local: ParticipantInfo,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.sender, &other.sender)
    }
}

impl SessionHandle {
    pub fn connection(&self) -> ConnectionState {
        self.state.connection.clone()
    }

    pub fn messages(&self) -> Rc<Vec<ChatMessage>> {
        self.state.messages.clone()
    }

    pub fn participants(&self) -> Rc<Vec<ParticipantInfo>> {
        self.state.participants.clone()
    }

    pub fn agent_state(&self) -> AgentState {
        self.state.agent_state
    }

    /// Append a locally authored message and transmit it. Empty and
    /// whitespace-only drafts are dropped.
    pub fn send_chat(&self, body: &str) {
        let body = body.trim();
        if body.is_empty() {
            return;
        }
        let message = ChatMessage::now(self.local.clone(), body);
        send_signal(
            &self.sender,
            SignalMessage::Chat {
                message: message.clone(),
            },
        );
        self.state.dispatch(SessionAction::Append(message));
    }

    /// Report a connection failure upward. The page decides how to
    /// present it.
    pub fn fail(&self, reason: impl Into<String>) {
        self.state.dispatch(SessionAction::Failed(reason.into()));
    }
}

fn apply_signal(state: &UseReducerHandle<SessionState>, msg: SignalMessage) {
    match msg {
        SignalMessage::Chat { message } => state.dispatch(SessionAction::Append(message)),
        SignalMessage::ParticipantJoined { participant } => {
            state.dispatch(SessionAction::ParticipantJoined(participant))
        }
        SignalMessage::ParticipantLeft { identity } => {
            state.dispatch(SessionAction::ParticipantLeft(identity))
        }
        SignalMessage::AgentState { state: agent_state } => {
            state.dispatch(SessionAction::AgentState(agent_state))
        }
        SignalMessage::Error { message } => {
            log::error!("Session error from server: {}", message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the signaling socket for one call and provides a
/// [`SessionHandle`] to the subtree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let local = (*use_memo((), |_| ParticipantInfo {
        identity: format!("user-{}", Uuid::new_v4()),
        name: "You".to_string(),
        is_local: true,
    }))
    .clone();

    let state = {
        let local = local.clone();
        use_reducer(move || SessionState::new(local))
    };
    let sender: SignalSender = use_mut_ref(|| None);

    {
        let state = state.clone();
        let sender = sender.clone();
        use_effect_with((), move |_| {
            let on_event = Callback::from(move |event: SignalEvent| match event {
                SignalEvent::Open(sink) => {
                    *sender.borrow_mut() = Some(sink);
                    state.dispatch(SessionAction::Connected);
                }
                SignalEvent::Incoming(msg) => apply_signal(&state, msg),
                SignalEvent::Closed(reason) => state.dispatch(SessionAction::Failed(reason)),
            });
            connect_signaling(&crate::utils::ws_url("/ws/session"), on_event);
            || ()
        });
    }

    let handle = SessionHandle {
        state,
        sender,
        local,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_participant() -> ParticipantInfo {
        ParticipantInfo {
            identity: "user-1".into(),
            name: "You".into(),
            is_local: true,
        }
    }

    fn remote(identity: &str) -> ParticipantInfo {
        ParticipantInfo {
            identity: identity.into(),
            name: identity.into(),
            is_local: false,
        }
    }

    fn message(from: ParticipantInfo, body: &str) -> ChatMessage {
        ChatMessage::now(from, body)
    }

    #[test]
    fn append_replaces_the_feed_reference() {
        let state = Rc::new(SessionState::new(local_participant()));
        let before = state.messages.clone();

        let state = state.reduce(SessionAction::Append(message(remote("agent"), "hi")));

        assert!(!Rc::ptr_eq(&before, &state.messages));
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].body, "hi");
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut state = Rc::new(SessionState::new(local_participant()));
        for body in ["one", "two", "three"] {
            state = state.reduce(SessionAction::Append(message(remote("agent"), body)));
        }

        let bodies: Vec<&str> = state.messages.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["one", "two", "three"]);
    }

    #[test]
    fn roster_ignores_duplicate_joins() {
        let state = Rc::new(SessionState::new(local_participant()));
        let state = state.reduce(SessionAction::ParticipantJoined(remote("agent")));
        let state = state.reduce(SessionAction::ParticipantJoined(remote("agent")));

        assert_eq!(state.participants.len(), 2);
    }

    #[test]
    fn participant_left_removes_only_that_identity() {
        let state = Rc::new(SessionState::new(local_participant()));
        let state = state.reduce(SessionAction::ParticipantJoined(remote("agent")));
        let state = state.reduce(SessionAction::ParticipantLeft("agent".into()));

        assert_eq!(state.participants.len(), 1);
        assert!(state.participants[0].is_local);
    }

    #[test]
    fn failure_after_connect_surfaces_the_drop() {
        let state = Rc::new(SessionState::new(local_participant()));
        let state = state.reduce(SessionAction::Connected);
        assert!(state.connection.is_connected());

        let state = state.reduce(SessionAction::Failed("socket closed".into()));
        assert_eq!(
            state.connection,
            ConnectionState::Failed {
                reason: "socket closed".into()
            }
        );
    }
}
