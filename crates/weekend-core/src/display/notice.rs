//! Short messages shown to the user after a command.

use std::fmt;

/// A one-line message, either informational or a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    warning: bool,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            warning: false,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            warning: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_warning(&self) -> bool {
        self.warning
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.warning {
            writeln!(f, "> **Warning:** {}", self.message)
        } else {
            writeln!(f, "> {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::info("Weekend plan deleted").to_string(),
            "> Weekend plan deleted\n"
        );
        let warning = Notice::warning("Please enter a plan name");
        assert!(warning.is_warning());
        assert_eq!(warning.to_string(), "> **Warning:** Please enter a plan name\n");
    }
}
