//! Console line parsing

/// One line of console input, mapped onto the timer's controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Type text into the duration input field
    Input(String),
    /// Press Set, optionally typing into the input first
    Set(Option<String>),
    Start,
    Pause,
    Reset,
    Status,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => ConsoleCommand::Nothing,
            "input" => ConsoleCommand::Input(rest.to_string()),
            "set" if rest.is_empty() => ConsoleCommand::Set(None),
            "set" => ConsoleCommand::Set(Some(rest.to_string())),
            "start" | "resume" => ConsoleCommand::Start,
            "pause" => ConsoleCommand::Pause,
            "reset" => ConsoleCommand::Reset,
            "status" => ConsoleCommand::Status,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Input(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_buttons() {
        assert_eq!(ConsoleCommand::parse("start"), ConsoleCommand::Start);
        assert_eq!(ConsoleCommand::parse("Resume"), ConsoleCommand::Start);
        assert_eq!(ConsoleCommand::parse(" PAUSE "), ConsoleCommand::Pause);
        assert_eq!(ConsoleCommand::parse("reset"), ConsoleCommand::Reset);
        assert_eq!(ConsoleCommand::parse("status"), ConsoleCommand::Status);
        assert_eq!(ConsoleCommand::parse("?"), ConsoleCommand::Help);
        assert_eq!(ConsoleCommand::parse("exit"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("   "), ConsoleCommand::Nothing);
    }

    #[test]
    fn set_takes_optional_input() {
        assert_eq!(ConsoleCommand::parse("set"), ConsoleCommand::Set(None));
        assert_eq!(
            ConsoleCommand::parse("set  90 "),
            ConsoleCommand::Set(Some("90".to_string()))
        );
    }

    #[test]
    fn other_text_goes_to_the_input_field() {
        assert_eq!(ConsoleCommand::parse("90"), ConsoleCommand::Input("90".to_string()));
        assert_eq!(ConsoleCommand::parse("-5"), ConsoleCommand::Input("-5".to_string()));
        assert_eq!(
            ConsoleCommand::parse("input 1.5"),
            ConsoleCommand::Input("1.5".to_string())
        );
        assert_eq!(ConsoleCommand::parse("input"), ConsoleCommand::Input(String::new()));
    }
}
