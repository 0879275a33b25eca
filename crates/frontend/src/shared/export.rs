//! Browser download helpers: blob object URLs and a detached anchor click.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// MIME type of `.xlsx` workbooks
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Wraps `content` in a Blob and returns an object URL for it.
///
/// The URL stays alive until [`revoke_object_url`] is called.
pub fn create_object_url(content: &[u8], mime: &str) -> Result<String, String> {
    let blob = create_blob(content, mime)?;
    Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))
}

fn create_blob(content: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a temporary `<a download>` pointing at `url`.
///
/// The anchor is never attached to the document.
pub fn click_download(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();

    Ok(())
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke object URL {}: {:?}", url, e);
    }
}
