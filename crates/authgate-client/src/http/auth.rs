/*
[INPUT]:  Registration data and login credentials
[OUTPUT]: Normalized outcomes plus session persistence on login/logout
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When auth endpoints or session side effects change
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::client::{AuthgateClient, RequestOptions};
use crate::http::{AuthgateError, Outcome};

impl AuthgateClient {
    /// Register a new user
    ///
    /// POST /api/auth/register/
    pub async fn register(&self, user_data: &Value) -> Outcome {
        let options = RequestOptions::new()
            .method(Method::POST)
            .body(user_data.to_string());
        self.request("/auth/register/", options).await
    }

    /// Log in and persist the returned session
    ///
    /// POST /api/auth/login/
    ///
    /// On success, if the response carries a `token`, the token and the
    /// `user` record are written to the session store.
    pub async fn login(&self, email: &str, password: &str) -> Outcome {
        let body = json!({ "email": email, "password": password });
        let options = RequestOptions::new()
            .method(Method::POST)
            .body(body.to_string());

        let outcome = self.request("/auth/login/", options).await;

        if let Some(data) = outcome.json() {
            if let Some(token) = data.get("token").and_then(Value::as_str) {
                let user = data.get("user").cloned().unwrap_or(Value::Null);
                if let Err(err) = self.session().store(token, &user) {
                    return Outcome::failure(AuthgateError::Storage(err).to_string());
                }
            }
        }

        outcome
    }

    /// Log out and clear the local session
    ///
    /// POST /api/auth/logout/
    pub async fn logout(&self) -> Outcome {
        let options = RequestOptions::new().method(Method::POST);
        let outcome = self.request("/auth/logout/", options).await;

        if outcome.is_success() {
            if let Err(err) = self.session().clear() {
                return Outcome::failure(AuthgateError::Storage(err).to_string());
            }
        }

        outcome
    }
}
