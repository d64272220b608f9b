//! Textual UI events.
//!
//! The driver reads one event per line:
//!
//! ```text
//! check <group_id> <id> <name...>
//! uncheck <group_id> <id> <name...>
//! search | status | render | quit
//! ```
//!
//! Blank lines and `#` comments are skipped. The group id is passed through
//! untouched; unknown groups are the filter tracker's concern.

use std::str::FromStr;

use thiserror::Error;

use crate::filters::CheckboxChange;

/// A UI interaction fed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A filter checkbox changed.
    Toggle(CheckboxChange),
    /// The search button was clicked.
    Search,
    /// Re-check the API status.
    Status,
    /// Write the page now.
    Render,
    /// Write the page and stop.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    #[error("unknown event `{0}`")]
    UnknownVerb(String),

    #[error("`{verb}` expects: {verb} <group_id> <id> <name>")]
    MissingArguments { verb: String },

    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(String),
}

/// Parse one input line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<UiEvent>, EventParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

impl FromStr for UiEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s, ""),
        };

        match verb {
            "check" | "uncheck" => {
                let (group_id, rest) = next_token(rest);
                let (id, rest) = next_token(rest);
                let name = Some(rest.trim()).filter(|n| !n.is_empty());

                match (group_id, id, name) {
                    (Some(group_id), Some(id), Some(name)) => Ok(UiEvent::Toggle(
                        CheckboxChange::new(group_id, name, id, verb == "check"),
                    )),
                    _ => Err(EventParseError::MissingArguments { verb: verb.to_string() }),
                }
            }
            "search" | "status" | "render" | "quit" if !rest.is_empty() => {
                Err(EventParseError::UnexpectedArguments(verb.to_string()))
            }
            "search" => Ok(UiEvent::Search),
            "status" => Ok(UiEvent::Status),
            "render" => Ok(UiEvent::Render),
            "quit" => Ok(UiEvent::Quit),
            other => Err(EventParseError::UnknownVerb(other.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> (Option<&str>, &str) {
    let s = s.trim_start();
    if s.is_empty() {
        return (None, s);
    }
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => (Some(token), rest),
        None => (Some(s), ""),
    }
}
