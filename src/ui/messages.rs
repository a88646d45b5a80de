use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

/// Warnings go to stdout: they are expected outcomes, not failures.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", Level::Info.color(), BOLD, msg, RESET);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_icon_and_message() {
        let l = line(Level::Warning, "Not currently clocked in");
        assert!(l.contains("⚠️"));
        assert!(l.ends_with("Not currently clocked in"));
    }
}
