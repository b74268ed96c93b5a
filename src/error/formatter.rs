use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::rich::RichError;

/// Formats RichError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &RichError) -> String {
        let plain = if self.verbose {
            self.format_verbose_plain(error)
        } else {
            self.format_simple_plain(error)
        };

        if self.use_color {
            self.apply_color(&plain)
        } else {
            plain
        }
    }

    fn format_simple_plain(&self, error: &RichError) -> String {
        let mut output = format!("error[{}]: {}", error.code().as_str(), error.message());

        let context_lines = self.format_context(error);
        if !context_lines.is_empty() {
            output.push('\n');
            output.push_str(&context_lines);
        }

        output
    }

    fn format_verbose_plain(&self, error: &RichError) -> String {
        let mut output = self.format_simple_plain(error);

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in error.code().remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let source_chain = self.format_source_chain(error);
        if !source_chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `kyc --help` for more information");

        output
    }

    fn format_context(&self, error: &RichError) -> String {
        let ctx = error.context();
        let mut lines = Vec::new();

        // file_path -> url -> additional
        if let Some(path) = &ctx.file_path {
            lines.push(format!("  --> {}", path.to_string_lossy()));
        }

        if let Some(url) = &ctx.url {
            lines.push(format!("  --> {}", url));
        }

        for (key, value) in &ctx.additional {
            lines.push(format!("  --> {}: {}", key, value));
        }

        lines.join("\n")
    }

    fn format_source_chain(&self, error: &RichError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    fn apply_color(&self, text: &str) -> String {
        let mut result = String::new();

        for line in text.lines() {
            if !result.is_empty() {
                result.push('\n');
            }

            if line.starts_with("error[") {
                let bracket_end = line.find(']').map_or(0, |i| i + 1);
                let (error_prefix, rest) = line.split_at(bracket_end);
                result.push_str(&format!("{}{}", error_prefix.red().bold(), rest.bold()));
            } else if line.starts_with("  -->") {
                result.push_str(&line.blue().to_string());
            } else if line.starts_with("  | Cause:") {
                result.push_str(&line.yellow().to_string());
            } else if line.starts_with("  | Remediation:") {
                result.push_str(&line.green().to_string());
            } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                result.push_str(&line.dimmed().to_string());
            } else {
                result.push_str(line);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ErrorContext};

    fn no_color() -> bool {
        false
    }

    #[test]
    fn format_simple_with_context() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let context = ErrorContext::new().with_url("https://restcountries.com/v2/all");
        let error = RichError::new(ErrorCode::Net001, "Connection failed").with_context(context);

        let output = formatter.format(&error);
        assert!(output.starts_with("error[NET001]: Connection failed"));
        assert!(output.contains("  --> https://restcountries.com/v2/all"));
        assert!(!output.contains("Cause:"));
    }

    #[test]
    fn format_verbose() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RichError::new(ErrorCode::Api003, "Countries API error");

        let output = formatter.format(&error);
        assert!(output.contains("error[API003]"));
        assert!(output.contains("Cause:"));
        assert!(output.contains("Remediation:"));
        assert!(output.contains("note: use `kyc --help`"));
    }

    #[test]
    fn context_display_order() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let context = ErrorContext::new()
            .with_url("https://example.com")
            .with_file_path("/path/to/countries.json")
            .with_additional("status", "500");

        let error = RichError::new(ErrorCode::Int001, "Test error").with_context(context);
        let output = formatter.format(&error);

        let file_pos = output.find("/path/to/countries.json").unwrap();
        let url_pos = output.find("https://example.com").unwrap();
        let extra_pos = output.find("status: 500").unwrap();

        assert!(file_pos < url_pos, "file_path should come before url");
        assert!(url_pos < extra_pos, "url should come before additional");
    }

    #[test]
    fn verbose_includes_source_chain() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "underlying error");
        let error = RichError::new(ErrorCode::Io001, "Failed to read file").with_source(io_error);

        let output = formatter.format(&error);
        assert!(output.contains("Source chain:"));
        assert!(output.contains("underlying error"));
    }

    #[test]
    fn no_color_produces_no_escape_codes() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RichError::new(ErrorCode::Net001, "Test");
        assert!(!formatter.format(&error).contains("\x1b["));
    }

    #[test]
    fn color_wraps_error_line() {
        let formatter = ErrorFormatter::with_color_detection(false, || true);
        let error = RichError::new(ErrorCode::Net001, "Test");
        assert!(formatter.format(&error).contains("\x1b["));
    }
}
