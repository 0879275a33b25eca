use contracts::usecases::u508_finance_screening::Endpoint;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::controller::{RawResponse, RequestPayload, Transport};
use super::error::UploadError;
use crate::shared::api_utils::api_url;

/// Sends the multipart payload with `fetch`
#[derive(Debug, Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for GlooTransport {
    type File = File;

    async fn post(
        &self,
        endpoint: Endpoint,
        payload: RequestPayload<File>,
    ) -> Result<RawResponse, UploadError> {
        let form = multipart_form(&payload)?;

        let response = Request::post(&api_url(endpoint.path()))
            .body(form)
            .map_err(|e| UploadError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// `file` keeps the original file name, `config` is the JSON text
fn multipart_form(payload: &RequestPayload<File>) -> Result<FormData, UploadError> {
    let form =
        FormData::new().map_err(|e| UploadError::Transport(format!("FormData: {:?}", e)))?;
    form.append_with_blob_and_filename("file", &payload.file, &payload.file.name())
        .map_err(|e| UploadError::Transport(format!("Failed to attach file: {:?}", e)))?;
    form.append_with_str("config", &payload.config)
        .map_err(|e| UploadError::Transport(format!("Failed to attach config: {:?}", e)))?;
    Ok(form)
}
