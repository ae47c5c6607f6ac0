//! User endpoints.

use pin_core::error::Result;
use pin_models::{Board, ResourceKind, User};

use super::require;
use crate::client::ApiClient;
use crate::request::RequestDescriptor;
use crate::response::ApiResponse;

impl ApiClient {
    /// Get a user by username or id.
    pub async fn get_user(&self, username_or_id: &str) -> Result<ApiResponse> {
        require(username_or_id, "username or user id")?;
        let descriptor =
            RequestDescriptor::get(&format!("users/{username_or_id}/")).with_fields(User::FIELDS);
        self.execute_for_single(descriptor, ResourceKind::User).await
    }

    /// Get the authenticated user.
    pub async fn get_current_user(&self) -> Result<ApiResponse> {
        let descriptor = RequestDescriptor::get("me/").with_fields(User::FIELDS);
        self.execute_for_single(descriptor, ResourceKind::User).await
    }

    /// List the authenticated user's boards. An empty `fields` slice selects
    /// the default board projection.
    pub async fn get_user_boards(&self, fields: &[&str]) -> Result<ApiResponse> {
        self.fetch_list("me/boards/", ResourceKind::Board, fields).await
    }

    /// List the authenticated user's pins.
    pub async fn get_user_pins(&self, fields: &[&str]) -> Result<ApiResponse> {
        self.fetch_list("me/pins/", ResourceKind::Pin, fields).await
    }

    /// List the users following the authenticated user.
    pub async fn get_user_followers(&self, fields: &[&str]) -> Result<ApiResponse> {
        self.fetch_list("me/followers/", ResourceKind::User, fields).await
    }

    /// List the boards the authenticated user follows.
    pub async fn get_user_following_boards(&self, fields: &[&str]) -> Result<ApiResponse> {
        self.fetch_list("me/following/boards/", ResourceKind::Board, fields)
            .await
    }

    /// List the users the authenticated user follows.
    pub async fn get_user_following(&self, fields: &[&str]) -> Result<ApiResponse> {
        self.fetch_list("me/following/users/", ResourceKind::User, fields)
            .await
    }

    /// List the authenticated user's interests. The server returns
    /// board-shaped records projected to id and name only.
    pub async fn get_user_interests(&self) -> Result<ApiResponse> {
        self.fetch_list(
            "me/following/interests/",
            ResourceKind::Board,
            Board::INTEREST_FIELDS,
        )
        .await
    }

    /// Follow a user.
    pub async fn follow_user(&self, username: &str) -> Result<ApiResponse> {
        require(username, "username")?;
        let descriptor =
            RequestDescriptor::post("me/following/users/").with_param("user", username);
        self.execute(descriptor).await
    }
}
