use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::AnalysisFormatter;

/// Factory for creating analysis formatters
///
/// Belongs in the application layer as it selects infrastructure adapters
/// based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_impact::application::dto::OutputFormat;
    /// use dep_impact::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn AnalysisFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_impact::application::dto::OutputFormat;
    /// use dep_impact::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Generating Markdown output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ImpactResponse;

    fn empty_impact() -> ImpactResponse {
        ImpactResponse {
            vulnerable_dependency: "lib-1.0.0.jar".to_string(),
            simulations: vec![],
            impact: vec![],
        }
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format_impact(&empty_impact())
            .unwrap();
        assert!(output.contains("\"vulnerableDependency\": \"lib-1.0.0.jar\""));
    }

    #[test]
    fn test_create_markdown_formatter() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format_impact(&empty_impact())
            .unwrap();
        assert!(output.starts_with("# Upgrade Impact"));
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON output..."
        );
    }
}
