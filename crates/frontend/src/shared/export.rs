//! Client-side export of the selected day's orders as a PDF download.

use contracts::domain::orders::Order;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::pdf::PdfReport;

/// Builds the daily report and hands it to the browser as a download. Runs
/// entirely on the client; no backend round-trip.
pub fn export_orders_pdf(orders: &[Order], day: &str) -> Result<(), String> {
    if orders.is_empty() {
        return Err("No orders to export".to_string());
    }

    let report = PdfReport {
        title: "Kebab Order Report".to_string(),
        subtitle: format!("Orders for: {}", day),
        headers: ["Imie", "Typ", "Rozmiar", "Sos", "Mieso"]
            .map(String::from)
            .to_vec(),
        rows: orders
            .iter()
            .map(|order| {
                vec![
                    order.customer_name.clone(),
                    order.kebab_type.clone(),
                    order.size.clone(),
                    order.sauce.clone(),
                    order.meat_type.clone(),
                ]
            })
            .collect(),
    };

    let blob = create_pdf_blob(&report.to_bytes())?;
    download_blob(&blob, &format!("kebab-order-report-{}.pdf", day))
}

/// Wraps raw PDF bytes in a Blob.
fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Triggers a browser download through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
