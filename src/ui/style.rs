use crate::expiry::Severity;
use console::style;
use std::fmt::Display;

/// Green bold — success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold — section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim — subtitles, secondary text, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow — warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold — expired/critical
pub fn critical<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green — confirmed values, paths, names
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold — step numbers, bullet points
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Render `text` in the color conventionally attached to an expiry severity.
pub fn severity<D: Display>(text: D, severity: Severity) -> String {
    match severity {
        Severity::Neutral => dim(text),
        Severity::Critical => critical(text),
        Severity::Warning => yellow(text),
        Severity::Healthy => value(text),
    }
}
