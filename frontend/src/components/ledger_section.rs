use yew::prelude::*;

use crate::hooks::use_finance_form::RowList;

/// Which ledger a section edits
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LedgerKind {
    Expense,
    Income,
}

impl LedgerKind {
    /// Prefix of the row and field class markers, e.g. `expense-item`
    pub fn class_prefix(self) -> &'static str {
        match self {
            LedgerKind::Expense => "expense",
            LedgerKind::Income => "income",
        }
    }

    fn title(self) -> &'static str {
        match self {
            LedgerKind::Expense => "💸 Expenses",
            LedgerKind::Income => "💰 Income",
        }
    }

    fn add_label(self) -> &'static str {
        match self {
            LedgerKind::Expense => "+ Add Expense",
            LedgerKind::Income => "+ Add Income",
        }
    }

    fn suggestions(self) -> &'static [&'static str] {
        match self {
            LedgerKind::Expense => &[
                "Seeds",
                "Fertilizer",
                "Pesticide",
                "Labour",
                "Irrigation",
                "Machinery Rent",
                "Transport",
            ],
            LedgerKind::Income => &["Crop Sale", "By-product Sale", "Government Subsidy", "Other"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LedgerSectionProps {
    pub kind: LedgerKind,
    pub rows: RowList,
    pub disabled: bool,
    pub on_add: Callback<()>,
    pub on_remove: Callback<u32>,
}

/// Repeated category/amount/date/description rows for one ledger
#[function_component(LedgerSection)]
pub fn ledger_section(props: &LedgerSectionProps) -> Html {
    let prefix = props.kind.class_prefix();
    let datalist_id = format!("{}-categories", prefix);
    let can_remove = props.rows.can_remove() && !props.disabled;

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <section class={format!("{}-section", prefix)}>
            <h2>{props.kind.title()}</h2>

            <datalist id={datalist_id.clone()}>
                {for props.kind.suggestions().iter().map(|category| html! {
                    <option value={*category} />
                })}
            </datalist>

            {for props.rows.ids().iter().map(|id| {
                let id = *id;
                let on_remove = {
                    let on_remove = props.on_remove.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(id))
                };

                html! {
                    <div class={format!("{}-item ledger-row", prefix)} key={id}>
                        <input
                            type="text"
                            class={format!("{}-category", prefix)}
                            list={datalist_id.clone()}
                            placeholder="Category"
                            disabled={props.disabled}
                        />
                        <input
                            type="number"
                            class={format!("{}-amount", prefix)}
                            placeholder="Amount (₹)"
                            step="0.01"
                            min="0"
                            disabled={props.disabled}
                        />
                        <input
                            type="date"
                            class={format!("{}-date", prefix)}
                            disabled={props.disabled}
                        />
                        <input
                            type="text"
                            class={format!("{}-description", prefix)}
                            placeholder="Description (optional)"
                            maxlength="200"
                            disabled={props.disabled}
                        />
                        <button
                            type="button"
                            class="btn btn-secondary remove-row-btn"
                            title="Remove row"
                            onclick={on_remove}
                            disabled={!can_remove}
                        >
                            {"✕"}
                        </button>
                    </div>
                }
            })}

            <button
                type="button"
                class="btn btn-secondary add-row-btn"
                onclick={on_add}
                disabled={props.disabled}
            >
                {props.kind.add_label()}
            </button>
        </section>
    }
}
