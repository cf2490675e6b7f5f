//! Console output

pub mod console;
pub mod sink;

/// Enable or disable ANSI colors for everything this crate prints
pub fn init_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
