//! Tile layout: the video/avatar grid. Media tracks attach elsewhere;
//! this arranges one tile per participant and badges the agent tile
//! with its current activity.

use crate::session::SessionHandle;
use shared::{AgentState, ParticipantInfo};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TileLayoutProps {
    /// Compresses the grid while the transcript overlay is open
    pub chat_open: bool,
}

#[function_component(TileLayout)]
pub fn tile_layout(props: &TileLayoutProps) -> Html {
    let session = use_context::<SessionHandle>().expect("no session context");
    let participants = session.participants();
    let agent_state = session.agent_state();

    html! {
        <div class={classes!(
            "tile-layout",
            props.chat_open.then_some("tile-layout-compact"),
        )}>
            { for participants.iter().map(|p| render_tile(p, agent_state)) }
        </div>
    }
}

fn render_tile(participant: &ParticipantInfo, agent_state: AgentState) -> Html {
    let initial = participant.name.chars().next().unwrap_or('?');

    html! {
        <div
            key={participant.identity.clone()}
            class={classes!("tile", participant.is_local.then_some("tile-local"))}
        >
            <div class="tile-avatar">{ initial.to_string() }</div>
            <span class="tile-name">{ &participant.name }</span>
            if participant.is_agent() {
                <span class={classes!("tile-agent-state", agent_state.label())}>
                    { agent_state.label() }
                </span>
            }
        </div>
    }
}
