//! Upload controller for the finance screening page.
//!
//! The controller knows nothing about the DOM or `fetch`: the page is reached
//! through [`UploadView`] and the backend through [`Transport`], both handed
//! in at construction. Browser implementations live in `view.rs` and
//! `api.rs`.

use contracts::usecases::u508_finance_screening::{
    Endpoint, PreviewResponse, TransformOptions, DOWNLOAD_FILE_NAME,
};
use serde_json::Value;

use super::error::UploadError;
use super::table::{render_table, PreviewTable};

/// Summary text after the workbook was handed to the browser
pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "File downloaded successfully";

/// Multipart body of every request: the chosen file plus the JSON config
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPayload<F> {
    pub file: F,
    pub config: String,
}

/// Status and body of a response, undecoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a payload to one of the backend endpoints
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File;

    async fn post(
        &self,
        endpoint: Endpoint,
        payload: RequestPayload<Self::File>,
    ) -> Result<RawResponse, UploadError>;
}

/// The page as the controller sees it
pub trait UploadView {
    type File;

    fn selected_file(&self) -> Option<Self::File>;

    fn duplicate_mode(&self) -> String;

    fn finance_sent_item_label(&self) -> String;

    fn finance_broker_item_label(&self) -> String;

    /// Enables or disables the three action buttons
    fn set_busy(&self, busy: bool);

    fn show_summary(&self, text: String);

    /// Replaces the whole preview grid
    fn show_table(&self, table: PreviewTable);

    fn create_object_url(&self, content: Vec<u8>) -> Result<String, UploadError>;

    fn trigger_download(&self, url: &str, filename: &str) -> Result<(), UploadError>;

    fn revoke_object_url(&self, url: &str);
}

/// Holds the view busy until dropped
struct BusyGuard<'a, V: UploadView> {
    view: &'a V,
}

impl<'a, V: UploadView> BusyGuard<'a, V> {
    fn acquire(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: UploadView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

#[derive(Debug, Clone)]
pub struct UploadController<V, T> {
    view: V,
    transport: T,
}

impl<V, T> UploadController<V, T>
where
    V: UploadView,
    T: Transport<File = V::File>,
{
    pub fn new(view: V, transport: T) -> Self {
        Self { view, transport }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Configuration from the current control values; nothing is validated
    pub fn build_configuration(&self) -> TransformOptions {
        TransformOptions::from_controls(
            self.view.duplicate_mode(),
            self.view.finance_sent_item_label(),
            self.view.finance_broker_item_label(),
        )
    }

    pub fn build_request_payload(&self) -> Result<RequestPayload<V::File>, UploadError> {
        let file = self.view.selected_file().ok_or(UploadError::MissingFile)?;
        let config = serde_json::to_string(&self.build_configuration())
            .map_err(|e| UploadError::Encode(e.to_string()))?;
        Ok(RequestPayload { file, config })
    }

    /// Shows the transformation stats and the first rows of the result
    pub async fn preview(&self) {
        self.run_action(Endpoint::Preview, decode_json, |view, body| {
            let preview: PreviewResponse =
                serde_json::from_value(body).map_err(|e| UploadError::Decode(e.to_string()))?;
            let summary = match &preview.stats {
                Some(stats) => pretty_json(stats)?,
                None => String::new(),
            };
            view.show_summary(summary);
            view.show_table(render_table(&preview.columns, &preview.rows));
            Ok(())
        })
        .await
    }

    /// Saves the transformed workbook as [`DOWNLOAD_FILE_NAME`]
    pub async fn download(&self) {
        self.run_action(Endpoint::Transform, decode_binary, |view, content| {
            let url = view.create_object_url(content)?;
            let triggered = view.trigger_download(&url, DOWNLOAD_FILE_NAME);
            view.revoke_object_url(&url);
            triggered?;
            view.show_summary(DOWNLOAD_SUCCESS_MESSAGE.to_string());
            Ok(())
        })
        .await
    }

    /// Shows the import result body as returned by the backend
    pub async fn transform_and_import(&self) {
        self.run_action(Endpoint::TransformImport, decode_json, |view, body| {
            view.show_summary(pretty_json(&body)?);
            Ok(())
        })
        .await
    }

    async fn run_action<B, H>(
        &self,
        endpoint: Endpoint,
        decode: fn(RawResponse) -> Result<B, UploadError>,
        on_success: H,
    ) where
        H: FnOnce(&V, B) -> Result<(), UploadError>,
    {
        let _busy = BusyGuard::acquire(&self.view);

        let outcome = match self.dispatch(endpoint, decode).await {
            Ok(body) => on_success(&self.view, body),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => log::debug!("{} finished", endpoint.path()),
            Err(e) => {
                log::debug!("{} failed", endpoint.path());
                self.view.show_summary(e.to_string());
            }
        }
    }

    async fn dispatch<B>(
        &self,
        endpoint: Endpoint,
        decode: fn(RawResponse) -> Result<B, UploadError>,
    ) -> Result<B, UploadError> {
        let payload = self.build_request_payload()?;
        log::debug!("POST {}", endpoint.path());
        let response = self.transport.post(endpoint, payload).await?;
        log::debug!("{} -> {}", endpoint.path(), response.status);
        decode(response)
    }
}

/// JSON body; a non-2xx body becomes the error message as compact JSON
fn decode_json(response: RawResponse) -> Result<Value, UploadError> {
    let body: Value =
        serde_json::from_slice(&response.body).map_err(|e| UploadError::Decode(e.to_string()))?;
    if !response.is_success() {
        return Err(UploadError::Http(body.to_string()));
    }
    Ok(body)
}

/// Raw bytes; a non-2xx body becomes the error message as text
fn decode_binary(response: RawResponse) -> Result<Vec<u8>, UploadError> {
    if !response.is_success() {
        return Err(UploadError::Http(
            String::from_utf8_lossy(&response.body).into_owned(),
        ));
    }
    Ok(response.body)
}

fn pretty_json(value: &Value) -> Result<String, UploadError> {
    serde_json::to_string_pretty(value).map_err(|e| UploadError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
        assert!(!RawResponse::new(422, "").is_success());
    }

    #[test]
    fn json_error_body_is_restringified_compact() {
        let err = decode_json(RawResponse::new(400, "{ \"detail\" : \"bad file\" }")).unwrap_err();
        assert_eq!(err, UploadError::Http("{\"detail\":\"bad file\"}".to_string()));
    }

    #[test]
    fn json_error_keeps_server_key_order() {
        let err = decode_json(RawResponse::new(422, r#"{"z":1,"a":2}"#)).unwrap_err();
        assert_eq!(err.to_string(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn malformed_json_is_a_decode_error_even_on_failure_status() {
        let err = decode_json(RawResponse::new(500, "Internal Server Error")).unwrap_err();
        assert!(matches!(err, UploadError::Decode(_)));
    }

    #[test]
    fn binary_error_body_is_plain_text() {
        let err = decode_binary(RawResponse::new(422, "issues found")).unwrap_err();
        assert_eq!(err.to_string(), "issues found");
    }

    #[test]
    fn binary_success_passes_bytes_through() {
        let bytes = decode_binary(RawResponse::new(200, vec![0x50u8, 0x4b, 3, 4])).unwrap();
        assert_eq!(bytes, vec![0x50u8, 0x4b, 3, 4]);
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let text = pretty_json(&json!({"n": 3})).unwrap();
        assert_eq!(text, "{\n  \"n\": 3\n}");
    }
}
