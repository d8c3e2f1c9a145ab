use shared::SummaryDisplay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: Option<SummaryDisplay>,
}

/// Totals returned by the last successful validation; hidden until then
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let (style, total_expenses, total_income, net_profit) = match &props.summary {
        Some(summary) => (
            "display: block",
            summary.total_expenses.clone(),
            summary.total_income.clone(),
            summary.net_profit.clone(),
        ),
        None => ("display: none", String::new(), String::new(), String::new()),
    };

    html! {
        <div id="summaryBox" class="summary-box" {style}>
            <h2>{"📊 Summary"}</h2>
            <div class="summary-row">
                <span class="summary-label">{"Total Expenses: ₹"}</span>
                <span id="totalExpenses" class="summary-value negative">{total_expenses}</span>
            </div>
            <div class="summary-row">
                <span class="summary-label">{"Total Income: ₹"}</span>
                <span id="totalIncome" class="summary-value positive">{total_income}</span>
            </div>
            <div class="summary-row">
                <span class="summary-label">{"Net Profit: ₹"}</span>
                <span id="netProfit" class="summary-value">{net_profit}</span>
            </div>
        </div>
    }
}
