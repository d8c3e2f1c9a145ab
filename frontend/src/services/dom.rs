//! Thin adapters between the page and the form controller.
//!
//! Reads input values by the ids and class markers the form components
//! render. No interpretation happens here; see `shared::collect`.

use anyhow::{anyhow, Result};
use shared::{FarmerFields, FormSnapshot, RawRow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, HtmlMetaElement, HtmlSelectElement};

/// Read every farmer field and ledger row under `root`
pub fn read_form_snapshot(root: &Element) -> Result<FormSnapshot> {
    Ok(FormSnapshot {
        farmer: FarmerFields {
            farmer_name: field_value(root, "farmerName")?,
            crop_name: field_value(root, "cropName")?,
            season: field_value(root, "season")?,
            total_acres: field_value(root, "totalAcres")?,
            sowing_date: field_value(root, "sowingDate")?,
            harvest_date: field_value(root, "harvestDate")?,
            village: field_value(root, "village")?,
            taluka: field_value(root, "taluka")?,
            district: field_value(root, "district")?,
            state: field_value(root, "state")?,
        },
        expenses: read_rows(root, "expense")?,
        income: read_rows(root, "income")?,
    })
}

/// Show a blocking browser alert
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Content of `<meta name="...">` in the page head
pub fn meta_content(name: &str) -> Option<String> {
    gloo::utils::document()
        .query_selector(&format!("meta[name='{}']", name))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

fn read_rows(root: &Element, kind: &str) -> Result<Vec<RawRow>> {
    let items = root
        .query_selector_all(&format!(".{}-item", kind))
        .map_err(js_error)?;

    let mut rows = Vec::with_capacity(items.length() as usize);
    for index in 0..items.length() {
        let Some(item) = items
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        rows.push(RawRow {
            category: row_value(&item, kind, "category")?,
            amount: row_value(&item, kind, "amount")?,
            date: row_value(&item, kind, "date")?,
            description: row_value(&item, kind, "description")?,
        });
    }
    Ok(rows)
}

fn field_value(root: &Element, id: &str) -> Result<String> {
    control_value(root, &format!("#{}", id))
}

fn row_value(item: &Element, kind: &str, field: &str) -> Result<String> {
    control_value(item, &format!(".{}-{}", kind, field))
}

fn control_value(root: &Element, selector: &str) -> Result<String> {
    let element = root
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("form field {} not found", selector))?;

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Ok(input.value())
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        Ok(select.value())
    } else {
        Err(anyhow!("{} is not an input or select", selector))
    }
}
