//! Error types for theme loading

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeError {
    /// Format the error with source context using ariadne
    ///
    /// Parse errors carry a span into the TOML source; IO errors have
    /// nothing to point at and fall back to the plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ThemeError::Parse(err) => {
                let span = err.span().unwrap_or(0..0);
                let mut buf = Vec::new();
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(err.message())
                    .with_label(
                        Label::new((filename, span))
                            .with_message(err.message())
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
                String::from_utf8(buf).unwrap()
            }
            ThemeError::Io(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_format_includes_location() {
        let source = "[component]\nname = 42\n";
        let err = match crate::theme::Theme::from_str(source) {
            Err(e) => e,
            Ok(_) => panic!("expected a parse error"),
        };
        let formatted = err.format(source, "theme.toml");
        assert!(formatted.contains("theme.toml"));
    }
}
