// Yew state handles acting as the controller's view

use plantuml_preview_core::{DownloadFile, Mode, PreviewView, RenderedArtifact};
use wasm_bindgen::JsCast;
use yew::UseStateHandle;

use crate::errors::UiError;

/// Setters only; the handles dispatch to the component even when the
/// controller holds clones from the first render.
#[derive(Clone)]
pub struct YewView {
    pub mode: UseStateHandle<Mode>,
    pub source: UseStateHandle<String>,
    pub loading: UseStateHandle<bool>,
    pub image_url: UseStateHandle<Option<String>>,
    pub error: UseStateHandle<Option<String>>,
    pub placeholder: UseStateHandle<bool>,
    pub busy: UseStateHandle<bool>,
}

impl PreviewView for YewView {
    fn show_mode(&self, mode: Mode) {
        self.mode.set(mode);
    }

    fn show_source(&self, source: &str) {
        self.source.set(source.to_string());
    }

    fn show_loading(&self) {
        self.image_url.set(None);
        self.error.set(None);
        self.placeholder.set(false);
        self.loading.set(true);
    }

    fn show_result(&self, artifact: &RenderedArtifact) {
        self.image_url.set(Some(artifact.display_url().to_string()));
        self.error.set(None);
        self.placeholder.set(false);
        self.loading.set(false);
    }

    fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
        self.loading.set(false);
    }

    fn show_placeholder(&self) {
        self.image_url.set(None);
        self.error.set(None);
        self.loading.set(false);
        self.placeholder.set(true);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn save_file(&self, file: &DownloadFile) {
        if let Err(e) = trigger_download(file) {
            tracing::warn!("{}", e);
            self.error.set(Some(e.to_string()));
        }
    }
}

/// Download `file` through a temporary object URL.
///
/// The URL is revoked right after the click, whether or not it succeeded.
pub fn trigger_download(file: &DownloadFile) -> Result<(), UiError> {
    let blob_parts = js_sys::Array::new();
    let uint8_array = js_sys::Uint8Array::from(&file.bytes[..]);
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime_type);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(|_| UiError::DownloadError("could not create blob".to_string()))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| UiError::DownloadError("could not create object URL".to_string()))?;

    let result = click_download_link(&url, &file.file_name);

    if web_sys::Url::revoke_object_url(&url).is_err() {
        tracing::warn!("failed to revoke object URL {}", url);
    }

    result
}

fn click_download_link(url: &str, file_name: &str) -> Result<(), UiError> {
    let missing = |what: &str| UiError::DownloadError(format!("{} unavailable", what));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("document body"))?;

    let anchor = document
        .create_element("a")
        .map_err(|_| missing("anchor element"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| missing("anchor element"))?;

    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|_| missing("document body"))?;
    anchor.click();
    anchor.remove();

    Ok(())
}
