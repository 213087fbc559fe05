//! Renderer-independent navigation state

pub mod active_path;
pub mod layout;
pub mod settle;
pub mod shell;

pub use active_path::ActivePath;
pub use layout::{back_href, frame_offset, join_href, ItemAction, LevelLayout};
pub use settle::{HeightArbiter, SettleOutcome, SettleTicket};
pub use shell::{panel_height, PanelPhase, PanelStyle, PanelTransition, ShellState};
