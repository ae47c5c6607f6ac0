//! Pin endpoints and the pin image payload source.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use pin_core::error::Result;
use pin_models::{Pin, ResourceKind};

use super::require;
use crate::client::ApiClient;
use crate::request::RequestDescriptor;
use crate::response::ApiResponse;

/// The image payload for pin creation. The three modes are mutually
/// exclusive and select the outgoing parameter key.
#[derive(Debug, Clone)]
pub enum PinImage {
    /// Remote image reference, sent as `image_url`.
    Url(String),
    /// Already base64-encoded payload, sent as `image_base64`.
    Base64(String),
    /// Raw binary payload, sent as `image`. Transmitted base64-encoded in
    /// the request body.
    Raw(Vec<u8>),
}

impl PinImage {
    /// The outgoing parameter key and value for this payload mode.
    pub(crate) fn param(&self) -> (&'static str, String) {
        match self {
            PinImage::Url(url) => ("image_url", url.clone()),
            PinImage::Base64(data) => ("image_base64", data.clone()),
            PinImage::Raw(bytes) => ("image", BASE64.encode(bytes)),
        }
    }
}

impl ApiClient {
    /// Get a pin by id.
    pub async fn get_pin(&self, pin_id: &str) -> Result<ApiResponse> {
        require(pin_id, "pin id")?;
        let descriptor =
            RequestDescriptor::get(&format!("pins/{pin_id}/")).with_fields(Pin::FIELDS);
        self.execute_for_single(descriptor, ResourceKind::Pin).await
    }

    /// Create a pin on a board. The board id is an opaque string and is
    /// transmitted as-is; identifiers may exceed the 32-bit range.
    pub async fn create_pin(
        &self,
        board_id: &str,
        note: &str,
        image: &PinImage,
        link: Option<&str>,
    ) -> Result<ApiResponse> {
        require(board_id, "board id")?;
        require(note, "note")?;

        let (image_key, image_value) = image.param();
        let mut descriptor = RequestDescriptor::post("pins/")
            .with_fields(Pin::FIELDS)
            .with_param("board", board_id)
            .with_param("note", note)
            .with_param(image_key, image_value);
        if let Some(link) = link {
            descriptor = descriptor.with_param("link", link);
        }
        self.execute_for_single(descriptor, ResourceKind::Pin).await
    }

    /// Delete a pin.
    pub async fn delete_pin(&self, pin_id: &str) -> Result<ApiResponse> {
        require(pin_id, "pin id")?;
        let descriptor = RequestDescriptor::delete(&format!("pins/{pin_id}/"));
        self.execute(descriptor).await
    }
}
