// ABOUTME: Pure formatters for compact table cells.
// ABOUTME: Durations, byte sizes, width-bounded strings and port lists.

mod duration;
mod ports;
mod shorten;
mod size;

pub use duration::{pretty_duration, since};
pub use ports::format_ports;
pub use shorten::{NEWLINE_GLYPH, shorten, shorten_middle};
pub use size::pretty_size;
