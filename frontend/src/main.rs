use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    ConnectionStatus, DownloadButton, FarmerDetailsSection, LedgerKind, LedgerSection,
    SummaryPanel,
};
use hooks::use_finance_form::use_finance_form;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::from_page());
    let form = use_finance_form(&api_client);
    let state = form.state;
    let actions = form.actions;
    let busy = state.submitting;

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"🚜 Farm Finance Report"}</h1>
                </div>
            </header>

            <main class="container">
                <form id="financeForm" class="finance-form" onsubmit={actions.on_submit.clone()}>
                    <FarmerDetailsSection disabled={busy} />

                    <LedgerSection
                        kind={LedgerKind::Expense}
                        rows={state.expense_rows.clone()}
                        disabled={busy}
                        on_add={actions.add_expense_row.clone()}
                        on_remove={actions.remove_expense_row.clone()}
                    />

                    <LedgerSection
                        kind={LedgerKind::Income}
                        rows={state.income_rows.clone()}
                        disabled={busy}
                        on_add={actions.add_income_row.clone()}
                        on_remove={actions.remove_income_row.clone()}
                    />

                    <button type="submit" class="btn btn-primary submit-btn" disabled={busy}>
                        {if busy {
                            "Validating..."
                        } else {
                            "✅ Validate & Calculate"
                        }}
                    </button>
                </form>

                <SummaryPanel summary={state.summary.clone()} />

                <DownloadButton
                    visible={state.summary.is_some()}
                    downloading={state.downloading}
                    on_click={actions.on_download.clone()}
                />
            </main>

            <ConnectionStatus api_client={(*api_client).clone()} />
        </>
    }
}

fn main() {
    services::logging::init();
    yew::Renderer::<App>::new().render();
}
