//! Conversion of raw form values into a [`FinancePayload`].
//!
//! The frontend reads input values into a [`FormSnapshot`] without any
//! interpretation; everything about which rows count and how numbers are read
//! lives here so it can be tested without a browser.

use tracing::warn;

use crate::{FarmerDetails, FinancePayload, LedgerEntry};

/// Raw values of the farmer and crop inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmerFields {
    pub farmer_name: String,
    pub crop_name: String,
    pub season: String,
    pub total_acres: String,
    pub sowing_date: String,
    pub harvest_date: String,
    pub village: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
}

/// Raw values of one repeated expense or income row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl RawRow {
    pub fn new(category: &str, amount: &str, date: &str, description: &str) -> Self {
        Self {
            category: category.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }
}

/// Everything the form holds at the moment of submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub farmer: FarmerFields,
    pub expenses: Vec<RawRow>,
    pub income: Vec<RawRow>,
}

/// Build the submission payload from a form snapshot
pub fn collect_payload(snapshot: &FormSnapshot) -> FinancePayload {
    FinancePayload {
        farmer_details: collect_farmer(&snapshot.farmer),
        expenses: collect_rows(&snapshot.expenses),
        income: collect_rows(&snapshot.income),
    }
}

/// Keep rows with a category, in order. Blank amounts become 0.
pub fn collect_rows(rows: &[RawRow]) -> Vec<LedgerEntry> {
    rows.iter()
        .filter(|row| !row.category.is_empty())
        .map(|row| LedgerEntry {
            category: row.category.clone(),
            amount: parse_amount(&row.amount),
            date: non_empty(&row.date),
            description: non_empty(&row.description),
        })
        .collect()
}

fn collect_farmer(fields: &FarmerFields) -> FarmerDetails {
    FarmerDetails {
        farmer_name: fields.farmer_name.clone(),
        crop_name: fields.crop_name.clone(),
        season: fields.season.clone(),
        total_acres: parse_number(&fields.total_acres),
        sowing_date: fields.sowing_date.clone(),
        harvest_date: fields.harvest_date.clone(),
        village: fields.village.clone(),
        taluka: fields.taluka.clone(),
        district: fields.district.clone(),
        state: fields.state.clone(),
    }
}

fn parse_amount(input: &str) -> f64 {
    if input.trim().is_empty() {
        return 0.0;
    }
    match parse_number(input) {
        Some(amount) => amount,
        None => {
            warn!(input, "unreadable amount, sending 0");
            0.0
        }
    }
}

fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
