use serde::{Deserialize, Serialize};

pub mod collect;
pub mod config;
pub mod controller;
pub mod disposition;
pub mod error;
mod ledger;

pub use collect::{collect_payload, collect_rows, FarmerFields, FormSnapshot, RawRow};
pub use config::ApiConfig;
pub use controller::{FinanceApi, FormController, RawResponse};
pub use disposition::{parse_content_disposition_filename, report_filename};
pub use error::{ErrorDetail, FieldError, FormError, LocSegment};

/// Farmer and crop information, sent verbatim as entered in the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmerDetails {
    pub farmer_name: String,
    pub crop_name: String,
    /// One of Kharif, Rabi, Summer or Other
    pub season: String,
    /// `None` when the input was blank or not a number; serialized as `null`
    pub total_acres: Option<f64>,
    /// YYYY-MM-DD as produced by a date input (may be empty)
    pub sowing_date: String,
    pub harvest_date: String,
    pub village: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
}

/// One expense or income row.
///
/// Both kinds share this shape. On the wire the date key is `expense_date`
/// or `income_date` depending on which list the entry belongs to, see
/// [`FinancePayload`].
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub category: String,
    pub amount: f64,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Full submission unit sent to both the validation and report endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancePayload {
    pub farmer_details: FarmerDetails,
    #[serde(serialize_with = "ledger::expense_rows::serialize")]
    pub expenses: Vec<LedgerEntry>,
    #[serde(serialize_with = "ledger::income_rows::serialize")]
    pub income: Vec<LedgerEntry>,
}

impl FinancePayload {
    /// Both lists must hold at least one entry before anything is sent
    pub fn has_entries(&self) -> bool {
        !self.expenses.is_empty() && !self.income.is_empty()
    }
}

/// Totals computed by the validation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub net_profit: f64,
    /// The server answers `"valid"` here on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Summary values formatted for the summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDisplay {
    pub total_expenses: String,
    pub total_income: String,
    pub net_profit: String,
}

impl From<&FinanceSummary> for SummaryDisplay {
    fn from(summary: &FinanceSummary) -> Self {
        Self {
            total_expenses: format_amount(summary.total_expenses),
            total_income: format_amount(summary.total_income),
            net_profit: format_amount(summary.net_profit),
        }
    }
}

/// A generated report ready to be saved by the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Response body of the health route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Format a number with exactly two decimals for display.
///
/// Halfway values round away from zero, so `1.125` shows as `1.13`.
pub fn format_amount(value: f64) -> String {
    // Only multiples of 1/8 with an odd numerator sit exactly halfway
    let eighths = value.abs() * 8.0;
    if eighths < 1e15 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (value.abs() * 100.0 + 0.5) as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}
