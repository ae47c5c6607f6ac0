//! Board endpoints.

use pin_core::error::{Error, Result};
use pin_models::{Board, ResourceKind};

use super::require;
use crate::client::ApiClient;
use crate::request::RequestDescriptor;
use crate::response::ApiResponse;

impl ApiClient {
    /// Get a board by id.
    pub async fn get_board(&self, board_id: &str) -> Result<ApiResponse> {
        require(board_id, "board id")?;
        let descriptor =
            RequestDescriptor::get(&format!("boards/{board_id}/")).with_fields(Board::FIELDS);
        self.execute_for_single(descriptor, ResourceKind::Board).await
    }

    /// List the pins on a board.
    pub async fn get_board_pins(&self, board_id: &str, fields: &[&str]) -> Result<ApiResponse> {
        require(board_id, "board id")?;
        self.fetch_list(&format!("boards/{board_id}/pins/"), ResourceKind::Pin, fields)
            .await
    }

    /// Create a board.
    pub async fn create_board(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ApiResponse> {
        require(name, "board name")?;
        let mut descriptor = RequestDescriptor::post("boards/")
            .with_fields(Board::FIELDS)
            .with_param("name", name);
        if let Some(description) = description {
            descriptor = descriptor.with_param("description", description);
        }
        self.execute_for_single(descriptor, ResourceKind::Board).await
    }

    /// Update a board's name and/or description. The board must carry a
    /// populated server-assigned id.
    pub async fn update_board(&self, board: &Board) -> Result<ApiResponse> {
        let id = board
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::InvalidArgument("board id must be populated".into()))?;

        let mut descriptor =
            RequestDescriptor::patch(&format!("boards/{id}/")).with_fields(Board::FIELDS);
        if let Some(ref name) = board.name {
            descriptor = descriptor.with_param("name", name.clone());
        }
        if let Some(ref description) = board.description {
            descriptor = descriptor.with_param("description", description.clone());
        }
        self.execute_for_single(descriptor, ResourceKind::Board).await
    }

    /// Delete a board.
    pub async fn delete_board(&self, board_id: &str) -> Result<ApiResponse> {
        require(board_id, "board id")?;
        let descriptor = RequestDescriptor::delete(&format!("boards/{board_id}/"));
        self.execute(descriptor).await
    }
}
