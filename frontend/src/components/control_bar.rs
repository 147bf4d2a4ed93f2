//! Bottom control bar: leave / microphone / camera / screen share /
//! chat, plus the chat input when the transcript is open.

use crate::session::SessionHandle;
use crate::Route;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

/// Which affordances the bar offers. Derived once per render from the
/// app configuration and immutable for that render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBarControls {
    pub leave: bool,
    pub microphone: bool,
    pub chat: bool,
    pub camera: bool,
    pub screen_share: bool,
}

impl ControlBarControls {
    /// Leave and microphone are always offered; chat follows the chat
    /// input flag, camera and screen share follow the video input flag.
    pub fn from_config(config: &shared::AppConfig) -> Self {
        Self {
            leave: true,
            microphone: true,
            chat: config.supports_chat_input,
            camera: config.supports_video_input,
            screen_share: config.supports_video_input,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub controls: ControlBarControls,
    /// Reports the new chat visibility whenever the user toggles it
    pub on_chat_open_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let session = use_context::<SessionHandle>().expect("no session context");
    let navigator = use_navigator();

    let chat_open = use_state(|| false);
    let mic_enabled = use_state(|| true);
    let camera_enabled = use_state(|| false);
    let screen_share_enabled = use_state(|| false);
    let draft = use_state(String::new);

    let connected = session.connection().is_connected();

    let toggle_chat = {
        let chat_open = chat_open.clone();
        let on_chat_open_change = props.on_chat_open_change.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*chat_open;
            chat_open.set(next);
            on_chat_open_change.emit(next);
        })
    };

    let on_leave = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    let submit_draft = {
        let draft = draft.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            session.send_chat(&draft);
            draft.set(String::new());
        })
    };

    let on_submit = {
        let submit_draft = submit_draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_draft.emit(());
        })
    };

    let on_keydown = {
        let submit_draft = submit_draft.clone();
        Callback::from(move |e: KeyboardEvent| {
            // Enter without Shift submits; Shift+Enter inserts a newline
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit_draft.emit(());
            }
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    html! {
        <div class={classes!("control-bar", props.class.clone())}>
            if *chat_open && props.controls.chat {
                <form class="chat-input-row" onsubmit={on_submit}>
                    <textarea
                        class="chat-input"
                        rows="1"
                        placeholder="Message the agent..."
                        value={(*draft).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        disabled={!connected}
                    />
                    <button type="submit" class="chat-send" disabled={!connected}>
                        { "Send" }
                    </button>
                </form>
            }
            <div class="control-bar-buttons">
                if props.controls.microphone {
                    { toggle_button("Mic", *mic_enabled, &mic_enabled) }
                }
                if props.controls.camera {
                    { toggle_button("Camera", *camera_enabled, &camera_enabled) }
                }
                if props.controls.screen_share {
                    { toggle_button("Share", *screen_share_enabled, &screen_share_enabled) }
                }
                if props.controls.chat {
                    <button
                        type="button"
                        class={classes!("control-button", (*chat_open).then_some("control-button-active"))}
                        onclick={toggle_chat}
                    >
                        { "Chat" }
                    </button>
                }
                if props.controls.leave {
                    <button type="button" class="control-button control-button-leave" onclick={on_leave}>
                        { "Leave" }
                    </button>
                }
            </div>
        </div>
    }
}

fn toggle_button(label: &'static str, active: bool, state: &UseStateHandle<bool>) -> Html {
    let state = state.clone();
    let onclick = Callback::from(move |_: MouseEvent| state.set(!*state));
    html! {
        <button
            type="button"
            class={classes!("control-button", active.then_some("control-button-active"))}
            {onclick}
        >
            { label }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AppConfig;

    #[test]
    fn leave_and_microphone_are_always_offered() {
        let config = AppConfig {
            supports_chat_input: false,
            supports_video_input: false,
            ..AppConfig::default()
        };
        let controls = ControlBarControls::from_config(&config);
        assert!(controls.leave);
        assert!(controls.microphone);
    }

    #[test]
    fn video_flag_gates_camera_and_screen_share_together() {
        let config = AppConfig {
            supports_video_input: false,
            ..AppConfig::default()
        };
        let controls = ControlBarControls::from_config(&config);
        assert!(!controls.camera);
        assert!(!controls.screen_share);

        let config = AppConfig {
            supports_video_input: true,
            ..AppConfig::default()
        };
        let controls = ControlBarControls::from_config(&config);
        assert!(controls.camera);
        assert!(controls.screen_share);
    }

    #[test]
    fn chat_follows_the_chat_input_flag() {
        let config = AppConfig {
            supports_chat_input: false,
            ..AppConfig::default()
        };
        assert!(!ControlBarControls::from_config(&config).chat);
    }
}
