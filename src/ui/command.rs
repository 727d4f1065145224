use std::str::FromStr;

use crate::error::CommandError;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a disc; the index is range-checked by the game, not here
    Drop(isize),
    Reset,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }
        match input.to_ascii_lowercase().as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => input
                .parse::<isize>()
                .map(Command::Drop)
                .map_err(|_| CommandError::NotAColumn(input.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        assert_eq!(Command::parse("3"), Ok(Command::Drop(3)));
        assert_eq!(Command::parse("  0\n"), Ok(Command::Drop(0)));
        assert_eq!(Command::parse("-1"), Ok(Command::Drop(-1)));
        assert_eq!(Command::parse("42"), Ok(Command::Drop(42)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("r"), Ok(Command::Reset));
        assert_eq!(Command::parse("R\n"), Ok(Command::Reset));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!("Exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   \n"), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("three"),
            Err(CommandError::NotAColumn("three".to_string()))
        );
        assert_eq!(
            Command::parse("1.5"),
            Err(CommandError::NotAColumn("1.5".to_string()))
        );
    }
}
