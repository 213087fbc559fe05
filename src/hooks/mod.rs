pub mod use_nav_state;
pub mod use_settle_report;
pub mod use_window_events;

pub use use_nav_state::{use_nav_state, NavHandle};
pub use use_settle_report::use_settle_report;
pub use use_window_events::{use_window_events, WindowEvent};
