//! CSV download
//!
//! Serializes table rows with the `csv` crate and hands them to the browser
//! through a temporary `Blob` URL.

use wasm_bindgen::JsCast;

/// Offer `rows` under `headers` as a downloadable `filename`
pub fn download_csv(filename: &str, headers: &[&str], rows: &[Vec<String>]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers).map_err(|e| e.to_string())?;
    for row in rows {
        writer.write_record(row).map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    let data = String::from_utf8(bytes).map_err(|e| e.to_string())?;

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&data.into()),
        &options,
    )
    .map_err(|_| "Cannot create file")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Cannot create download link")?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "Cannot create download link")?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", filename);
    if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
