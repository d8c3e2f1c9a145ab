//! # Form Controller
//!
//! Orchestrates the two calls the finance form makes: validation of the
//! collected payload, then report generation for the last payload the server
//! accepted. The controller owns that last-validated payload; nothing else
//! writes it.
//!
//! Network access goes through [`FinanceApi`] so the controller can run
//! against the browser client in the frontend or a scripted API in tests.

use std::cell::RefCell;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::collect::{collect_payload, FormSnapshot};
use crate::disposition::report_filename;
use crate::error::{ErrorDetail, FormError};
use crate::{FinancePayload, FinanceSummary, ReportFile, SummaryDisplay};

/// Status, disposition header and body of an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP calls made by the finance form.
///
/// Both methods POST a JSON body. `Err` means the request never produced a
/// response (network failure); any HTTP status comes back as `Ok`.
#[async_trait(?Send)]
pub trait FinanceApi {
    async fn validate_finance(&self, body: &str) -> Result<RawResponse, String>;

    async fn generate_report(&self, body: &str) -> Result<RawResponse, String>;
}

/// Page-lifetime controller for the finance form
pub struct FormController<A> {
    api: A,
    /// Never borrowed across an await
    validated: RefCell<Option<FinancePayload>>,
}

impl<A: FinanceApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            validated: RefCell::new(None),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// Last payload the validation endpoint accepted
    pub fn validated_payload(&self) -> Option<FinancePayload> {
        self.validated.borrow().clone()
    }

    pub fn is_validated(&self) -> bool {
        self.validated.borrow().is_some()
    }

    /// Submit handler: collect the form, then validate it
    pub async fn on_submit(&self, snapshot: &FormSnapshot) -> Result<SummaryDisplay, FormError> {
        self.submit_validation(collect_payload(snapshot)).await
    }

    /// Validate a payload and remember it on success.
    ///
    /// On any failure the previously validated payload stays in place.
    pub async fn submit_validation(
        &self,
        payload: FinancePayload,
    ) -> Result<SummaryDisplay, FormError> {
        if !payload.has_entries() {
            warn!(
                expenses = payload.expenses.len(),
                income = payload.income.len(),
                "refusing to submit without expense and income entries"
            );
            return Err(FormError::MissingEntries);
        }

        let body = encode(&payload)?;
        debug!(%body, "submitting payload");

        let response = self.api.validate_finance(&body).await.map_err(|e| {
            error!(error = %e, "validation request failed");
            FormError::SubmitFailed(e)
        })?;
        info!(status = response.status, "validation response");

        let summary = interpret_validation(&response)?;
        info!(
            total_expenses = summary.total_expenses,
            total_income = summary.total_income,
            net_profit = summary.net_profit,
            "finance data validated"
        );

        *self.validated.borrow_mut() = Some(payload);
        Ok(SummaryDisplay::from(&summary))
    }

    /// Download handler: generate the report for the validated payload
    pub async fn on_download(&self) -> Result<ReportFile, FormError> {
        let payload = self.validated_payload().ok_or_else(|| {
            warn!("download requested before validation");
            FormError::NotValidated
        })?;

        let body = encode(&payload)?;
        info!("generating report");

        let response = self.api.generate_report(&body).await.map_err(|e| {
            error!(error = %e, "report request failed");
            FormError::DownloadFailed(e)
        })?;
        info!(status = response.status, "report response");

        let report = interpret_report(response)?;
        info!(filename = %report.filename, bytes = report.bytes.len(), "report ready");
        Ok(report)
    }
}

/// Read a validation response: totals on 2xx, error detail otherwise
pub fn interpret_validation(response: &RawResponse) -> Result<FinanceSummary, FormError> {
    if response.is_success() {
        return serde_json::from_slice::<FinanceSummary>(&response.body)
            .map_err(|e| FormError::SubmitFailed(e.to_string()));
    }

    let detail = ErrorDetail::from_body(&response.body)
        .map_err(|e| FormError::SubmitFailed(e.to_string()))?;
    error!(status = response.status, ?detail, "server rejected finance data");
    Err(FormError::ValidationRejected(detail))
}

/// Read a report response: file bytes on 2xx, error detail otherwise
pub fn interpret_report(response: RawResponse) -> Result<ReportFile, FormError> {
    if response.is_success() {
        return Ok(ReportFile {
            filename: report_filename(response.content_disposition.as_deref()),
            bytes: response.body,
        });
    }

    let detail = ErrorDetail::from_body(&response.body)
        .map_err(|e| FormError::DownloadFailed(e.to_string()))?;
    error!(status = response.status, ?detail, "report generation failed");
    Err(FormError::ReportRejected(detail))
}

fn encode(payload: &FinancePayload) -> Result<String, FormError> {
    serde_json::to_string(payload).map_err(|e| FormError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{FarmerFields, RawRow};
    use crate::error::{FieldError, LocSegment};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct MockApi {
        responses: RefCell<VecDeque<Result<RawResponse, String>>>,
        calls: RefCell<Vec<(&'static str, String)>>,
    }

    impl MockApi {
        fn with_responses(responses: Vec<Result<RawResponse, String>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn respond(&self, endpoint: &'static str, body: &str) -> Result<RawResponse, String> {
            self.calls.borrow_mut().push((endpoint, body.to_string()));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    #[async_trait(?Send)]
    impl FinanceApi for MockApi {
        async fn validate_finance(&self, body: &str) -> Result<RawResponse, String> {
            self.respond("validate-finance", body)
        }

        async fn generate_report(&self, body: &str) -> Result<RawResponse, String> {
            self.respond("generate-report", body)
        }
    }

    fn json_response(status: u16, body: &str) -> Result<RawResponse, String> {
        Ok(RawResponse {
            status,
            content_disposition: None,
            body: body.as_bytes().to_vec(),
        })
    }

    fn summary_ok() -> Result<RawResponse, String> {
        json_response(
            200,
            r#"{"status": "valid", "total_expenses": 1200.5, "total_income": 3000, "net_profit": 1799.5}"#,
        )
    }

    fn pdf_response(disposition: Option<&str>) -> Result<RawResponse, String> {
        Ok(RawResponse {
            status: 200,
            content_disposition: disposition.map(str::to_string),
            body: b"%PDF-1.4 test".to_vec(),
        })
    }

    fn snapshot(crop: &str) -> FormSnapshot {
        FormSnapshot {
            farmer: FarmerFields {
                farmer_name: "Ramesh Patil".to_string(),
                crop_name: crop.to_string(),
                season: "Kharif".to_string(),
                total_acres: "2.5".to_string(),
                sowing_date: "2024-06-15".to_string(),
                harvest_date: "2024-10-10".to_string(),
                village: "Wadgaon".to_string(),
                taluka: "Haveli".to_string(),
                district: "Pune".to_string(),
                state: "Maharashtra".to_string(),
            },
            expenses: vec![
                RawRow::new("Seeds", "1200.5", "2024-06-14", ""),
                RawRow::new("", "999", "", "ignored"),
            ],
            income: vec![RawRow::new("Crop Sale", "3000", "2024-10-20", "Mandi")],
        }
    }

    #[tokio::test]
    async fn test_submit_without_income_makes_no_request() {
        let controller = FormController::new(MockApi::default());
        let mut form = snapshot("Soybean");
        form.income = vec![RawRow::new("", "3000", "", "")];

        let result = controller.on_submit(&form).await;

        assert_eq!(result, Err(FormError::MissingEntries));
        assert_eq!(controller.api().call_count(), 0);
        assert!(!controller.is_validated());
    }

    #[tokio::test]
    async fn test_submit_without_expenses_makes_no_request() {
        let controller = FormController::new(MockApi::default());
        let mut form = snapshot("Soybean");
        form.expenses.clear();

        assert_eq!(controller.on_submit(&form).await, Err(FormError::MissingEntries));
        assert_eq!(controller.api().call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_validation_formats_and_stores() {
        let controller = FormController::new(MockApi::with_responses(vec![summary_ok()]));

        let display = controller.on_submit(&snapshot("Soybean")).await.unwrap();

        assert_eq!(display.total_expenses, "1200.50");
        assert_eq!(display.total_income, "3000.00");
        assert_eq!(display.net_profit, "1799.50");

        let stored = controller.validated_payload().unwrap();
        assert_eq!(stored.expenses.len(), 1);
        assert_eq!(stored.expenses[0].amount, 1200.5);

        let calls = controller.api().calls.borrow();
        assert_eq!(calls[0].0, "validate-finance");
        let sent: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(sent["expenses"][0]["expense_date"], "2024-06-14");
        assert_eq!(sent["income"][0]["income_date"], "2024-10-20");
    }

    #[tokio::test]
    async fn test_field_errors_reported_and_nothing_stored() {
        let controller = FormController::new(MockApi::with_responses(vec![json_response(
            422,
            r#"{"detail": [{"loc": ["body", "expenses", 0, "amount"], "msg": "must be positive"}]}"#,
        )]));

        let err = controller.on_submit(&snapshot("Soybean")).await.unwrap_err();

        assert_eq!(
            err,
            FormError::ValidationRejected(ErrorDetail::FieldErrors(vec![FieldError {
                loc: vec![
                    LocSegment::Key("body".to_string()),
                    LocSegment::Key("expenses".to_string()),
                    LocSegment::Index(0),
                    LocSegment::Key("amount".to_string()),
                ],
                msg: "must be positive".to_string(),
            }]))
        );
        assert!(err
            .to_string()
            .contains("body → expenses → 0 → amount: must be positive"));
        assert!(!controller.is_validated());
    }

    #[tokio::test]
    async fn test_string_detail_rejection() {
        let controller = FormController::new(MockApi::with_responses(vec![json_response(
            500,
            r#"{"detail": "division by zero"}"#,
        )]));

        let err = controller.on_submit(&snapshot("Soybean")).await.unwrap_err();
        assert_eq!(err.to_string(), "❌ Validation Error:\n\ndivision by zero");
    }

    #[tokio::test]
    async fn test_network_failure_leaves_state_alone() {
        let controller = FormController::new(MockApi::with_responses(vec![Err(
            "Failed to fetch".to_string(),
        )]));

        let err = controller.on_submit(&snapshot("Soybean")).await.unwrap_err();

        assert_eq!(err, FormError::SubmitFailed("Failed to fetch".to_string()));
        assert!(!controller.is_validated());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_submit_failure() {
        let controller = FormController::new(MockApi::with_responses(vec![json_response(
            200,
            r#"{"status": "valid"}"#,
        )]));

        let err = controller.on_submit(&snapshot("Soybean")).await.unwrap_err();
        assert!(matches!(err, FormError::SubmitFailed(_)));
        assert!(!controller.is_validated());
    }

    #[tokio::test]
    async fn test_repeated_validation_overwrites_stored_payload() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            summary_ok(),
            summary_ok(),
        ]));

        let first = controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let second = controller.on_submit(&snapshot("Soybean")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            controller.validated_payload().unwrap().farmer_details.crop_name,
            "Soybean"
        );

        controller.on_submit(&snapshot("Cotton")).await.unwrap();
        let stored = controller.validated_payload().unwrap();
        assert_eq!(stored.farmer_details.crop_name, "Cotton");
        assert_eq!(stored.expenses.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_revalidation_keeps_previous_payload() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            json_response(422, r#"{"detail": "bad"}"#),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        assert!(controller.on_submit(&snapshot("Cotton")).await.is_err());

        assert_eq!(
            controller.validated_payload().unwrap().farmer_details.crop_name,
            "Soybean"
        );
    }

    #[tokio::test]
    async fn test_download_before_validation_makes_no_request() {
        let controller = FormController::new(MockApi::default());

        assert_eq!(controller.on_download().await, Err(FormError::NotValidated));
        assert_eq!(controller.api().call_count(), 0);
    }

    #[tokio::test]
    async fn test_download_uses_disposition_filename() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            pdf_response(Some("attachment; filename=Report_2024.pdf")),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let report = controller.on_download().await.unwrap();

        assert_eq!(report.filename, "Report_2024.pdf");
        assert_eq!(report.bytes, b"%PDF-1.4 test".to_vec());

        let calls = controller.api().calls.borrow();
        assert_eq!(calls[1].0, "generate-report");
        assert_eq!(calls[0].1, calls[1].1);
    }

    #[tokio::test]
    async fn test_download_without_header_uses_default_name() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            pdf_response(None),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let report = controller.on_download().await.unwrap();
        assert_eq!(report.filename, "Finance_Report.pdf");
    }

    #[tokio::test]
    async fn test_download_is_repeatable() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            pdf_response(None),
            pdf_response(None),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        assert!(controller.on_download().await.is_ok());
        assert!(controller.on_download().await.is_ok());
        assert!(controller.is_validated());
    }

    #[tokio::test]
    async fn test_report_rejection_surfaces_detail() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            json_response(500, r#"{"detail": "Failed to generate PDF: font missing"}"#),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let err = controller.on_download().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "❌ Failed to generate PDF: Failed to generate PDF: font missing"
        );
    }

    #[tokio::test]
    async fn test_report_field_errors_render_like_validation() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            json_response(
                500,
                r#"{"detail": [{"loc": ["body", "income", 0, "amount"], "msg": "value is not a valid float"}]}"#,
            ),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let err = controller.on_download().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "❌ Failed to generate PDF: body → income → 0 → amount: value is not a valid float"
        );
        assert!(matches!(
            err,
            FormError::ReportRejected(ErrorDetail::FieldErrors(_))
        ));
        assert!(controller.is_validated());
    }

    #[tokio::test]
    async fn test_report_rejection_without_detail_is_generic() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            json_response(502, "{}"),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let err = controller.on_download().await.unwrap_err();
        assert_eq!(err, FormError::ReportRejected(ErrorDetail::Unknown));
    }

    #[tokio::test]
    async fn test_report_network_failure() {
        let controller = FormController::new(MockApi::with_responses(vec![
            summary_ok(),
            Err("NetworkError when attempting to fetch resource.".to_string()),
        ]));

        controller.on_submit(&snapshot("Soybean")).await.unwrap();
        let err = controller.on_download().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "❌ Error downloading PDF: NetworkError when attempting to fetch resource."
        );
        assert!(controller.is_validated());
    }

    #[test]
    fn test_interpret_report_non_json_error_body() {
        let response = RawResponse {
            status: 504,
            content_disposition: None,
            body: b"Gateway Timeout".to_vec(),
        };
        assert!(matches!(
            interpret_report(response),
            Err(FormError::DownloadFailed(_))
        ));
    }
}
