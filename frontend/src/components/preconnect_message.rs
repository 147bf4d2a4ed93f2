//! Pre-connect buffer: surfaces the agent's greeting while the
//! connection is still being established.

use shared::ChatMessage;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreConnectMessageProps {
    pub messages: Rc<Vec<ChatMessage>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PreConnectMessage)]
pub fn preconnect_message(props: &PreConnectMessageProps) -> Html {
    let latest_agent_line = props.messages.iter().rev().find(|m| m.from.is_agent());

    html! {
        <div class={classes!("preconnect-message", props.class.clone())}>
            {
                match latest_agent_line {
                    Some(message) => html! { <p>{ &message.body }</p> },
                    None => html! {
                        <p class="preconnect-placeholder">
                            { "Connecting you to the agent..." }
                        </p>
                    },
                }
            }
        </div>
    }
}
