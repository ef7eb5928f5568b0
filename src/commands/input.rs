//! Chat input parsing
//!
//! Plain text goes to the interpreter. Lines starting with `/` are local
//! commands.

use std::path::PathBuf;

use tabsplit::core::models::ItemId;

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Free text for the interpreter
    Message(String),
    /// Show the item table
    Items,
    /// Show who owes what
    Summary,
    /// Take a person off an item
    Unassign {
        /// Person name
        person: String,
        /// Item id
        item: ItemId,
    },
    /// Start over
    Reset,
    /// Load a new receipt after a reset
    Upload(PathBuf),
    /// Show commands
    Help,
    /// Leave
    Quit,
    /// Blank line
    Empty,
    /// A malformed command, with the reason
    Invalid(String),
}

/// Help text for the prompt
pub const HELP: &str = "\
Type who had what, e.g. \"David had the burger, Jane and John shared the fries\".

Commands:
  /items                     show the receipt and who is on each item
  /summary                   show what everyone owes
  /unassign <person> <item>  take someone off an item (item number from /items)
  /reset                     clear everything and start over
  /upload <path>             read a new receipt (after /reset)
  /help                      show this help
  /quit                      print the summary and exit";

/// Parse one line of input
pub fn parse(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Input::Message(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    match (name.as_str(), args.as_slice()) {
        ("items" | "list", []) => Input::Items,
        ("summary" | "total", []) => Input::Summary,
        ("reset", []) => Input::Reset,
        ("help" | "?", []) => Input::Help,
        ("quit" | "exit" | "q", []) => Input::Quit,
        ("upload", [_, ..]) => Input::Upload(PathBuf::from(args.join(" "))),
        ("unassign", [person @ .., item]) if !person.is_empty() => match item.parse::<ItemId>() {
            Ok(item) => Input::Unassign {
                person: person.join(" "),
                item,
            },
            Err(e) => Input::Invalid(e),
        },
        ("unassign", _) => Input::Invalid("Usage: /unassign <person> <item>".to_string()),
        ("upload", []) => Input::Invalid("Usage: /upload <path>".to_string()),
        _ => Input::Invalid(format!("Unknown command: /{name}. Type /help for commands")),
    }
}
