//! Styled terminal messages.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Message categories and the tags printed in front of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Warn,
    Error,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn styled(self) -> StyledObject<&'static str> {
        let tag = style(self.label()).bold();
        match self {
            Self::Warn => tag.yellow(),
            Self::Error => tag.red(),
        }
    }
}

fn tagged(tag: Tag, text: &str, plain: bool) -> String {
    if plain {
        format!("{} {text}", tag.label())
    } else {
        format!("{} {text}", tag.styled())
    }
}

/// Print a selector name as a section header on stdout.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("== {text}");
    } else {
        println!("{} {}", style("==").cyan(), style(text).bold());
    }
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged(Tag::Warn, text, is_color_disabled()));
}

/// Print an error to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged(Tag::Error, text, is_color_disabled()));
}
