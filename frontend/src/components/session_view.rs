//! The in-call view: transcript overlay, tile grid, and the animated
//! bottom control bar.

use crate::components::{
    ChatTranscript, ControlBar, ControlBarControls, PreConnectMessage, ScrollArea, TileLayout,
};
use crate::hooks::{
    use_chat_messages, use_connection_timeout, use_debug_mode, SESSION_CONNECT_TIMEOUT_MS,
};
use crate::motion::{MotionState, BOTTOM_BAR_TRANSITION};
use shared::{AppConfig, ChatMessage};
use web_sys::Element;
use yew::prelude::*;

/// True when the newest message was authored locally. Remote bursts
/// must not yank the viewport away from scrollback, so only local
/// sends jump the transcript to the bottom.
fn wants_autoscroll(messages: &[ChatMessage]) -> bool {
    messages.last().is_some_and(|m| m.from.is_local)
}

#[derive(Properties, PartialEq)]
pub struct FadeProps {
    #[prop_or(false)]
    pub top: bool,
    #[prop_or(false)]
    pub bottom: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Gradient edge fade above or below the transcript
#[function_component(Fade)]
pub fn fade(props: &FadeProps) -> Html {
    html! {
        <div class={classes!(
            "fade",
            props.top.then_some("fade-top"),
            props.bottom.then_some("fade-bottom"),
            props.class.clone(),
        )} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionViewProps {
    pub app_config: AppConfig,
}

#[function_component(SessionView)]
pub fn session_view(props: &SessionViewProps) -> Html {
    use_connection_timeout(SESSION_CONNECT_TIMEOUT_MS);
    use_debug_mode(props.app_config.debug_mode);

    let messages = use_chat_messages();
    let chat_open = use_state(|| false);
    let scroll_ref = use_node_ref();

    let controls = ControlBarControls::from_config(&props.app_config);

    // Jump to the bottom whenever the feed changes and ends on a local
    // message. Keyed on the feed reference, so the check always sees
    // this render's snapshot; a missing viewport handle is a no-op.
    {
        let scroll_ref = scroll_ref.clone();
        use_effect_with(messages.clone(), move |messages| {
            if wants_autoscroll(messages.as_slice()) {
                if let Some(viewport) = scroll_ref.cast::<Element>() {
                    viewport.set_scroll_top(viewport.scroll_height());
                }
            }
            || ()
        });
    }

    // The bottom bar slides in after mount
    let bar_motion = use_state(|| MotionState::Hidden);
    {
        let bar_motion = bar_motion.clone();
        use_effect_with((), move |_| {
            bar_motion.set(MotionState::Visible);
            || ()
        });
    }

    let on_chat_open_change = {
        let chat_open = chat_open.clone();
        Callback::from(move |open: bool| chat_open.set(open))
    };

    html! {
        <section class="session-view">
            <div class="session-backdrop" />
            <div class="session-fog" />

            // The transcript stays mounted so scrollback survives
            // visibility toggles; only opacity and pointer events gate it.
            <div class={classes!(
                "transcript-overlay",
                if *chat_open { "transcript-overlay-open" } else { "transcript-overlay-closed" },
            )}>
                <Fade top={true} class="transcript-fade-top" />
                <ScrollArea node_ref={scroll_ref.clone()} class="transcript-scroll">
                    <ChatTranscript
                        hidden={!*chat_open}
                        messages={messages.clone()}
                        class="transcript-log"
                    />
                </ScrollArea>
            </div>

            <TileLayout chat_open={*chat_open} />

            <div class="bottom-bar" style={bar_motion.style(&BOTTOM_BAR_TRANSITION)}>
                if props.app_config.is_pre_connect_buffer_enabled {
                    <PreConnectMessage messages={messages.clone()} class="bottom-bar-preconnect" />
                }
                <div class="bottom-bar-panel">
                    <Fade bottom={true} class="bottom-bar-fade" />
                    <ControlBar
                        controls={controls}
                        on_chat_open_change={on_chat_open_change}
                        class="bottom-bar-controls"
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ParticipantInfo;

    fn message(is_local: bool) -> ChatMessage {
        ChatMessage::now(
            ParticipantInfo {
                identity: if is_local { "user-1" } else { "agent" }.into(),
                name: "x".into(),
                is_local,
            },
            "hello",
        )
    }

    #[test]
    fn local_tail_triggers_autoscroll() {
        let feed = vec![message(false), message(true)];
        assert!(wants_autoscroll(&feed));
    }

    #[test]
    fn remote_tail_leaves_the_viewport_alone() {
        let feed = vec![message(true), message(false)];
        assert!(!wants_autoscroll(&feed));
    }

    #[test]
    fn empty_feed_never_scrolls() {
        assert!(!wants_autoscroll(&[]));
    }
}
