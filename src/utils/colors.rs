/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// In times green, out times red, a running punch yellow.
pub fn colorize_in_out(value: &str, is_in: bool, running: bool) -> String {
    if value.trim().is_empty() {
        return format!("{GREY}{value}{RESET}");
    }

    let color = match (is_in, running) {
        (true, _) => GREEN,
        (false, true) => YELLOW,
        (false, false) => RED,
    };
    format!("{color}{value}{RESET}")
}

/// Status line color.
pub fn color_for_state(active: bool) -> &'static str {
    if active { GREEN } else { GREY }
}
