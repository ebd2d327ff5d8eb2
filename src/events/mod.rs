pub mod controls;
pub mod scroll;

pub use controls::{wire_bar_buttons, wire_manual_input};
pub use scroll::{wire_resize, wire_scroll_sync, ScrollSync};
