use thiserror::Error;

/// Category of a failed command, for hosts that style errors differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    UnknownCommand,
    DomainError,
}

// RUST CONCEPT: Every failure path of the interpreter is a value
// Hosts render these as text; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Malformed or missing numeric/date argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// First token is not a known keyword; carries the whole input line
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Well-formed value outside the range the engine can represent
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CommandError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            CommandError::DomainError(_) => ErrorKind::DomainError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_display() {
        let err = CommandError::UnknownCommand("bogus".to_string());
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
        assert_eq!(err.to_string(), "Unknown command: bogus");

        let err = CommandError::InvalidArgument("expected an integer, got 'abc'".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().starts_with("Invalid argument"));

        let err = CommandError::DomainError("slot out of range".to_string());
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }
}
