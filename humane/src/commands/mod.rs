/// Config command handlers
pub mod config;

/// Date command handlers: interval, friendly, range, date
pub mod date;

/// Text command handlers: title, widont, slug
pub mod text;

/// Version command handlers
pub mod version;

use crate::format::Formattable;
use serde::Serialize;

/// One humanized value together with the input that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Input as given on the command line
    pub input: String,
    /// Humanized output
    pub output: String,
}

impl Rendered {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Formattable for Rendered {
    fn format_pretty(&self) -> String {
        self.output.clone()
    }
}
