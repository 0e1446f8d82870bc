use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DownloadError(String);

/// Hands `bytes` to the browser as a file download.
pub fn trigger_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    let err = |msg: &str| DownloadError(msg.to_string());

    let data = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&data.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|_| err("Failed to create blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| err("Failed to create object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| err("No document"))?;
    let a = document
        .create_element("a")
        .map_err(|_| err("Failed to create link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| err("Failed to cast anchor"))?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| err("No body"))?
        .append_child(&a)
        .map_err(|_| err("Append failed"))?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
