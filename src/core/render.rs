//! Rendering of `ConversionParameters` into one shell command line:
//! `<executable> [--bibliography=..] [--include-in-header=..] <inputs> --output=..`
use std::fmt;

use crate::core::params::ConversionParameters;

impl ConversionParameters {
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = vec![self.executable.as_str()];
        if let Some(bib) = &self.bibliography {
            parts.push(bib.as_str());
        }
        if let Some(header) = &self.header {
            parts.push(header.as_str());
        }
        parts.push(self.inputs.as_str());
        parts.push(self.output.as_str());
        parts.join(" ")
    }
}

impl fmt::Display for ConversionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Characters that never need quoting in a shell word
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_./=:,+@%-".contains(c)
}

/// Quote `arg` for the platform shell unless every character is shell-safe.
/// Plain arguments pass through untouched.
pub fn quote_arg(arg: &str) -> String {
    let needs_quoting = arg.is_empty() || !arg.chars().all(is_shell_safe);
    if !needs_quoting {
        return arg.to_string();
    }

    if cfg!(windows) {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
