use anyhow::{anyhow, Result};
use gloo::file::{Blob, ObjectUrl};
use shared::ReportFile;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::services::dom::js_error;

const PDF_MIME: &str = "application/pdf";

/// Hand the report to the browser as a file download.
///
/// The object URL is revoked when `url` drops at the end of this function.
pub fn save_report(report: &ReportFile) -> Result<()> {
    let blob = Blob::new_with_options(report.bytes.as_slice(), Some(PDF_MIME));
    let url = ObjectUrl::from(blob);

    let document = gloo::utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(&report.filename);

    let body = document
        .body()
        .ok_or_else(|| anyhow!("document has no body"))?;
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;

    Ok(())
}
