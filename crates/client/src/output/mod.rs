//! Output formatting functions.

pub mod json;
pub mod pretty;

use chatline_core::ApiResponse;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::ClientError;

/// Renders envelopes and errors in the chosen format.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a response.
    ///
    /// JSON prints the whole envelope. Pretty prints `data` through `pretty`,
    /// or the server message when there is no data. Returns `None` when
    /// there is nothing worth printing in quiet mode.
    pub fn response<T: Serialize>(
        &self,
        response: &ApiResponse<T>,
        pretty: impl FnOnce(&T) -> String,
    ) -> Option<String> {
        match (self.format, &response.data) {
            (OutputFormat::Json, _) => Some(json::format_json(response)),
            (OutputFormat::Pretty, Some(data)) => Some(pretty(data)),
            (OutputFormat::Pretty, None) if self.quiet => None,
            (OutputFormat::Pretty, None) => Some(pretty::format_message(&response.message)),
        }
    }

    /// Render a failed call. Cancellations render as nothing.
    pub fn error(&self, error: &ClientError) -> Option<String> {
        if error.api_error().is_some_and(|e| e.is_silent()) {
            return None;
        }
        Some(match self.format {
            OutputFormat::Json => json::format_error(error),
            OutputFormat::Pretty => pretty::format_error(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use chatline_core::ApiError;
    use serde_json::{json, Value};

    use super::*;

    fn response(data: Option<Value>) -> ApiResponse<Value> {
        ApiResponse {
            success: true,
            message: "Chat deleted".to_string(),
            data,
            meta: None,
        }
    }

    #[test]
    fn test_json_prints_envelope() {
        let printer = Printer::new(OutputFormat::Json, false);
        let output = printer.response(&response(Some(json!(1))), |_| unreachable!());

        let parsed: Value = serde_json::from_str(&output.unwrap()).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"], 1);
    }

    #[test]
    fn test_pretty_without_data_prints_message() {
        let printer = Printer::new(OutputFormat::Pretty, false);
        let output = printer.response(&response(None), |_| unreachable!());
        assert_eq!(output.as_deref(), Some("Chat deleted"));
    }

    #[test]
    fn test_quiet_suppresses_message_only_output() {
        let printer = Printer::new(OutputFormat::Pretty, true);
        assert_eq!(printer.response(&response(None), |_| unreachable!()), None);
        assert_eq!(
            printer.response(&response(Some(json!("x"))), |v| v.to_string()),
            Some("\"x\"".to_string())
        );
    }

    #[test]
    fn test_cancelled_is_silent() {
        let printer = Printer::new(OutputFormat::Pretty, false);
        assert_eq!(printer.error(&ClientError::Api(ApiError::RequestCancelled)), None);
        assert!(printer
            .error(&ClientError::Api(ApiError::Timeout))
            .is_some());
    }
}
