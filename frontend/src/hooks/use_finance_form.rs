use std::rc::Rc;

use shared::{FormController, SummaryDisplay};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::dom;
use crate::services::download;
use crate::services::logging::Logger;

const COMPONENT: &str = "finance-form";

/// Stable keys for the repeated ledger rows of one section
#[derive(Clone, Debug, PartialEq)]
pub struct RowList {
    ids: Vec<u32>,
    next_id: u32,
}

impl RowList {
    /// A list holding one empty row
    pub fn new() -> Self {
        Self {
            ids: vec![0],
            next_id: 1,
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn added(&self) -> Self {
        let mut next = self.clone();
        next.ids.push(next.next_id);
        next.next_id += 1;
        next
    }

    /// The last remaining row is never removed
    pub fn removed(&self, id: u32) -> Self {
        let mut next = self.clone();
        if next.ids.len() > 1 {
            next.ids.retain(|row| *row != id);
        }
        next
    }

    pub fn can_remove(&self) -> bool {
        self.ids.len() > 1
    }
}

impl Default for RowList {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub struct FinanceFormState {
    /// Present once a validation has succeeded; enables the download
    pub summary: Option<SummaryDisplay>,
    pub submitting: bool,
    pub downloading: bool,
    pub expense_rows: RowList,
    pub income_rows: RowList,
}

#[derive(Clone, PartialEq)]
pub struct FinanceFormActions {
    pub on_submit: Callback<SubmitEvent>,
    pub on_download: Callback<()>,
    pub add_expense_row: Callback<()>,
    pub remove_expense_row: Callback<u32>,
    pub add_income_row: Callback<()>,
    pub remove_income_row: Callback<u32>,
}

pub struct UseFinanceFormResult {
    pub state: FinanceFormState,
    pub actions: FinanceFormActions,
}

#[hook]
pub fn use_finance_form(api_client: &ApiClient) -> UseFinanceFormResult {
    // One controller per page session; it owns the last validated payload
    let controller = use_memo(api_client.clone(), |api_client| {
        FormController::new(api_client.clone())
    });

    let summary = use_state(|| Option::<SummaryDisplay>::None);
    let submitting = use_state(|| false);
    let downloading = use_state(|| false);
    let expense_rows = use_state(RowList::new);
    let income_rows = use_state(RowList::new);

    let on_submit = {
        let controller = controller.clone();
        let summary = summary.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let snapshot = match dom::read_form_snapshot(&form) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    Logger::error_with_component(COMPONENT, &format!("Could not read form: {:#}", err));
                    dom::alert(&format!("❌ Error submitting form: {}", err));
                    return;
                }
            };

            let controller = Rc::clone(&controller);
            let summary = summary.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            spawn_local(async move {
                match controller.on_submit(&snapshot).await {
                    Ok(display) => {
                        Logger::debug_with_component(COMPONENT, "Summary updated");
                        summary.set(Some(display));
                    }
                    Err(err) => dom::alert(&err.to_string()),
                }
                submitting.set(false);
            });
        })
    };

    let on_download = {
        let controller = controller.clone();
        let downloading = downloading.clone();

        Callback::from(move |_| {
            let controller = Rc::clone(&controller);
            let downloading = downloading.clone();
            downloading.set(true);

            spawn_local(async move {
                match controller.on_download().await {
                    Ok(report) => match download::save_report(&report) {
                        Ok(()) => Logger::info_with_component(
                            COMPONENT,
                            &format!("PDF downloaded successfully: {}", report.filename),
                        ),
                        Err(err) => {
                            Logger::error_with_component(COMPONENT, &format!("Could not save report: {:#}", err));
                            dom::alert(&format!("❌ Error downloading PDF: {}", err));
                        }
                    },
                    Err(err) => dom::alert(&err.to_string()),
                }
                downloading.set(false);
            });
        })
    };

    let add_expense_row = {
        let expense_rows = expense_rows.clone();
        Callback::from(move |_| expense_rows.set(expense_rows.added()))
    };

    let remove_expense_row = {
        let expense_rows = expense_rows.clone();
        Callback::from(move |id: u32| expense_rows.set(expense_rows.removed(id)))
    };

    let add_income_row = {
        let income_rows = income_rows.clone();
        Callback::from(move |_| income_rows.set(income_rows.added()))
    };

    let remove_income_row = {
        let income_rows = income_rows.clone();
        Callback::from(move |id: u32| income_rows.set(income_rows.removed(id)))
    };

    UseFinanceFormResult {
        state: FinanceFormState {
            summary: (*summary).clone(),
            submitting: *submitting,
            downloading: *downloading,
            expense_rows: (*expense_rows).clone(),
            income_rows: (*income_rows).clone(),
        },
        actions: FinanceFormActions {
            on_submit,
            on_download,
            add_expense_row,
            remove_expense_row,
            add_income_row,
            remove_income_row,
        },
    }
}
