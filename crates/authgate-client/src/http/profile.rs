/*
[INPUT]:  Profile data and token authentication
[OUTPUT]: Current user profile data and account lifecycle outcomes
[POS]:    HTTP layer - profile endpoints (require token auth)
[UPDATE]: When adding new profile endpoints or changing side effects
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::client::{AuthgateClient, RequestOptions};
use crate::http::{AuthgateError, Outcome};

impl AuthgateClient {
    /// Fetch the current user's profile
    ///
    /// GET /api/auth/profile/me/
    pub async fn get_profile(&self) -> Outcome {
        self.request("/auth/profile/me/", RequestOptions::new()).await
    }

    /// Replace the current user's profile
    ///
    /// PUT /api/auth/profile/update_profile/
    pub async fn update_profile(&self, profile_data: &Value) -> Outcome {
        let options = RequestOptions::new()
            .method(Method::PUT)
            .body(profile_data.to_string());
        self.request("/auth/profile/update_profile/", options).await
    }

    /// Update a subset of the current user's profile fields
    ///
    /// PATCH /api/auth/profile/partial_update_profile/
    pub async fn partial_update_profile(&self, profile_data: &Value) -> Outcome {
        let options = RequestOptions::new()
            .method(Method::PATCH)
            .body(profile_data.to_string());
        self.request("/auth/profile/partial_update_profile/", options)
            .await
    }

    /// Delete the current user's account and clear the local session
    ///
    /// DELETE /api/auth/profile/delete_account/
    pub async fn delete_account(&self) -> Outcome {
        let options = RequestOptions::new().method(Method::DELETE);
        let outcome = self.request("/auth/profile/delete_account/", options).await;

        if outcome.is_success() {
            if let Err(err) = self.session().clear() {
                return Outcome::failure(AuthgateError::Storage(err).to_string());
            }
        }

        outcome
    }
}
