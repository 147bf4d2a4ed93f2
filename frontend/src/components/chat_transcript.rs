//! Chat transcript: the scrollable log of messages.

use super::markdown::render_markdown;
use shared::ChatMessage;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatTranscriptProps {
    /// Whether the overlay currently hides the transcript. The
    /// component stays mounted either way so scrollback survives
    /// visibility toggles.
    pub hidden: bool,
    pub messages: Rc<Vec<ChatMessage>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChatTranscript)]
pub fn chat_transcript(props: &ChatTranscriptProps) -> Html {
    let aria_hidden = props.hidden.then(|| AttrValue::from("true"));

    html! {
        <div
            class={classes!("chat-transcript", props.class.clone())}
            aria-hidden={aria_hidden}
        >
            { for props.messages.iter().map(render_entry) }
        </div>
    }
}

fn render_entry(message: &ChatMessage) -> Html {
    let side = if message.from.is_local {
        "chat-entry-local"
    } else {
        "chat-entry-remote"
    };
    let body = if message.from.is_agent() {
        render_markdown(&message.body)
    } else {
        html! { <>{ &message.body }</> }
    };

    html! {
        <div key={message.id.to_string()} class={classes!("chat-entry", side)}>
            <span class="chat-entry-sender">{ &message.from.name }</span>
            <div class="chat-entry-body">{ body }</div>
        </div>
    }
}
