//! Wire encoding for ledger rows.
//!
//! Expense and income rows share [`LedgerEntry`] in memory, but the server
//! models name the date field after the row kind. Each module here is used
//! as `#[serde(serialize_with = ...)]` on one of the payload lists.

use serde::{Serialize, Serializer};

use crate::LedgerEntry;

macro_rules! ledger_rows {
    ($module:ident, $date_key:tt) => {
        pub mod $module {
            use super::*;

            #[derive(Serialize)]
            struct RowRef<'a> {
                category: &'a str,
                amount: f64,
                #[serde(rename = $date_key)]
                date: Option<&'a str>,
                description: Option<&'a str>,
            }

            pub fn serialize<S: Serializer>(
                rows: &[LedgerEntry],
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(rows.iter().map(|row| RowRef {
                    category: &row.category,
                    amount: row.amount,
                    date: row.date.as_deref(),
                    description: row.description.as_deref(),
                }))
            }
        }
    };
}

ledger_rows!(expense_rows, "expense_date");
ledger_rows!(income_rows, "income_date");

#[cfg(test)]
mod tests {
    use crate::{FarmerDetails, FinancePayload, LedgerEntry};
    use serde_json::json;

    fn payload() -> FinancePayload {
        FinancePayload {
            farmer_details: FarmerDetails {
                farmer_name: "Ramesh Patil".to_string(),
                crop_name: "Soybean".to_string(),
                season: "Kharif".to_string(),
                total_acres: Some(2.5),
                sowing_date: "2024-06-15".to_string(),
                harvest_date: "2024-10-10".to_string(),
                village: "Wadgaon".to_string(),
                taluka: "Haveli".to_string(),
                district: "Pune".to_string(),
                state: "Maharashtra".to_string(),
            },
            expenses: vec![LedgerEntry {
                category: "Seeds".to_string(),
                amount: 1200.5,
                date: Some("2024-06-14".to_string()),
                description: None,
            }],
            income: vec![LedgerEntry {
                category: "Crop Sale".to_string(),
                amount: 3000.0,
                date: None,
                description: Some("Mandi".to_string()),
            }],
        }
    }

    #[test]
    fn test_rows_use_kind_specific_date_keys() {
        let value = serde_json::to_value(payload()).unwrap();

        assert_eq!(
            value["expenses"][0],
            json!({
                "category": "Seeds",
                "amount": 1200.5,
                "expense_date": "2024-06-14",
                "description": null
            })
        );
        assert_eq!(
            value["income"][0],
            json!({
                "category": "Crop Sale",
                "amount": 3000.0,
                "income_date": null,
                "description": "Mandi"
            })
        );
        assert!(value["expenses"][0].get("date").is_none());
    }

    #[test]
    fn test_blank_acres_serializes_as_null() {
        let mut payload = payload();
        payload.farmer_details.total_acres = None;

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["farmer_details"]["total_acres"].is_null());
    }
}
