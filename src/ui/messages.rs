use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

/// Colors only when the stream is a terminal, so piped output stays plain.
fn render<T: fmt::Display>(level: Level, msg: T, tty: bool) -> String {
    let (color, icon) = level.style();
    if tty {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg, std::io::stdout().is_terminal()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        render(Level::Success, msg, std::io::stdout().is_terminal())
    );
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        render(Level::Warning, msg, std::io::stdout().is_terminal())
    );
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!(
        "{}",
        render(Level::Error, msg, std::io::stderr().is_terminal())
    );
}
