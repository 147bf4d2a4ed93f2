mod chat_transcript;
mod control_bar;
mod markdown;
mod preconnect_message;
mod scroll_area;
mod session_view;
mod tile_layout;

pub use chat_transcript::ChatTranscript;
pub use control_bar::{ControlBar, ControlBarControls};
pub use preconnect_message::PreConnectMessage;
pub use scroll_area::ScrollArea;
pub use session_view::SessionView;
pub use tile_layout::TileLayout;
