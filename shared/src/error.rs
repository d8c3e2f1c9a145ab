//! Error types for the finance form.
//!
//! [`FormError`] covers every way a submit or download can fail. Its
//! `Display` output is the exact text shown to the user.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Location used when a field error carries no path
const UNKNOWN_LOCATION: &str = "Field";
const UNKNOWN_ERROR: &str = "Unknown error";
const LOCATION_SEPARATOR: &str = " → ";

/// Why a submit or download did not complete
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// Expense or income list was empty; nothing was sent
    #[error("❌ Please fill at least one expense and one income entry")]
    MissingEntries,

    /// Download requested before any successful validation; nothing was sent
    #[error("❌ Please validate the finance data first!")]
    NotValidated,

    /// Validation endpoint answered with a non-2xx status
    #[error("❌ Validation Error:\n\n{}", .0.render())]
    ValidationRejected(ErrorDetail),

    /// Report endpoint answered with a non-2xx status
    #[error("❌ Failed to generate PDF: {}", .0.render())]
    ReportRejected(ErrorDetail),

    /// Transport failure or unreadable response while validating
    #[error("❌ Error submitting form: {0}")]
    SubmitFailed(String),

    /// Transport failure or unreadable response while downloading
    #[error("❌ Error downloading PDF: {0}")]
    DownloadFailed(String),

    /// The payload could not be encoded as JSON
    #[error("❌ Could not encode request: {0}")]
    Encode(String),
}

/// The `detail` member of an error response body
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// Structured per-field validation errors
    FieldErrors(Vec<FieldError>),
    /// A single message
    Message(String),
    /// Missing, empty, or of an unexpected shape
    Unknown,
}

impl ErrorDetail {
    /// Parse an error response body. Fails only if the body is not JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_detail(value.get("detail")))
    }

    pub fn from_detail(detail: Option<&Value>) -> Self {
        match detail {
            Some(Value::Array(items)) => {
                ErrorDetail::FieldErrors(items.iter().map(FieldError::from_value).collect())
            }
            Some(Value::String(message)) if !message.is_empty() => {
                ErrorDetail::Message(message.clone())
            }
            _ => ErrorDetail::Unknown,
        }
    }

    /// Text shown to the user: one line per field error
    pub fn render(&self) -> String {
        match self {
            ErrorDetail::FieldErrors(errors) => errors
                .iter()
                .map(FieldError::render)
                .collect::<Vec<_>>()
                .join("\n"),
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Unknown => UNKNOWN_ERROR.to_string(),
        }
    }
}

/// One entry of a structured validation error list
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub loc: Vec<LocSegment>,
    pub msg: String,
}

impl FieldError {
    fn from_value(value: &Value) -> Self {
        if let Value::String(msg) = value {
            return Self {
                loc: Vec::new(),
                msg: msg.clone(),
            };
        }

        let loc = value
            .get("loc")
            .and_then(Value::as_array)
            .map(|segments| segments.iter().map(LocSegment::from_value).collect())
            .unwrap_or_default();
        let msg = value
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self { loc, msg }
    }

    /// `body → expenses → 0 → amount: must be positive`
    pub fn render(&self) -> String {
        let location = if self.loc.is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            self.loc
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(LOCATION_SEPARATOR)
        };
        format!("{}: {}", location, self.msg)
    }
}

/// One step of a field error path: an object key or a list index
#[derive(Debug, Clone, PartialEq)]
pub enum LocSegment {
    Key(String),
    Index(i64),
}

impl LocSegment {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(key) => LocSegment::Key(key.clone()),
            Value::Number(number) => match number.as_i64() {
                Some(index) => LocSegment::Index(index),
                None => LocSegment::Key(number.to_string()),
            },
            other => LocSegment::Key(other.to_string()),
        }
    }
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Key(key) => write!(f, "{}", key),
            LocSegment::Index(index) => write!(f, "{}", index),
        }
    }
}
