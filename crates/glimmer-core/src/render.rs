//! Render output handed to the display surface.
//!
//! The engine produces one string per tick; the surface splits it on
//! line breaks and inserts a forced break between lines (none after the
//! last). Classes and fade duration are styling hints passed through
//! untouched.

use serde::{Deserialize, Serialize};

/// Default styling classes applied when none are configured.
pub const DEFAULT_CLASSES: &str = "thin xlarge bright pre-line";

/// One render tick's worth of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    /// The selected message. May be empty when no candidates exist.
    pub text: String,
    /// Styling hint for the display surface.
    pub classes: String,
    /// Transition duration hint in milliseconds.
    pub fade_ms: u64,
}

impl RenderOutput {
    /// The message split on line breaks, in display order.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(text: &str) -> RenderOutput {
        RenderOutput {
            text: text.to_string(),
            classes: DEFAULT_CLASSES.to_string(),
            fade_ms: 4000,
        }
    }

    #[test]
    fn single_line_stays_whole() {
        assert_eq!(output("Enjoy your day!").lines(), ["Enjoy your day!"]);
    }

    #[test]
    fn multi_line_splits_without_trailing_entry() {
        assert_eq!(output("line one\nline two").lines(), ["line one", "line two"]);
    }

    #[test]
    fn empty_text_renders_one_empty_line() {
        assert_eq!(output("").lines(), [""]);
    }
}
