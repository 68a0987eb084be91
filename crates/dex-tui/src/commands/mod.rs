// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use dex_core::SortMode;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Pick the ranking mode explicitly
    Sort(SortMode),
    // Flip the "max CP" checkbox
    ToggleStrength,
    // Empty the search bar
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "strength" | "cp" => Ok(Command::ToggleStrength),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "sort" => match rest {
                "alpha" | "alphabetical" | "name" => Ok(Command::Sort(SortMode::Alphabetical)),
                "strength" | "cp" => Ok(Command::Sort(SortMode::Strength)),
                _ => Err("usage: sort <alpha|strength>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns an error message for the command bar when the command cannot be
/// applied.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name).ok_or_else(|| format!("unknown theme: {name}"))?;
            tracing::debug!(theme = %name, "theme switched");
        }
        Command::Sort(mode) => {
            s.session.set_mode(mode);
            s.results.reset();
        }
        Command::ToggleStrength => {
            s.session.toggle_mode();
            s.results.reset();
        }
        Command::Clear => {
            s.query.handle(&crate::event::AppEvent::ClearInput);
            s.sync_query();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("q", Command::Quit)]
    #[case("  quit  ", Command::Quit)]
    #[case("help", Command::Help)]
    #[case("strength", Command::ToggleStrength)]
    #[case("clear", Command::Clear)]
    #[case("sort alpha", Command::Sort(SortMode::Alphabetical))]
    #[case("sort strength", Command::Sort(SortMode::Strength))]
    #[case("theme gruvbox", Command::Theme("gruvbox".to_string()))]
    fn parses(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("theme")]
    #[case("sort")]
    #[case("sort sideways")]
    fn usage_errors(#[case] input: &str) {
        let err = Command::parse(input).unwrap_err();
        assert!(err.starts_with("usage:"), "{err}");
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
