//! # API crate — HTTP client for the remote user collection
//!
//! The frontends talk to an external CRUD API for the user resource. This
//! crate wraps that API in [`UsersClient`] and normalizes its outcomes into
//! [`ApiError`].
//!
//! The wire contract is small: every request and response is JSON, success is
//! decided solely by the HTTP status class (2xx), successful reads come
//! wrapped in `{data: ...}`, and failures carry `{error: string}` when the
//! server has something to say.
//!
//! There is no retry, no client-side timeout, and no request de-duplication;
//! each call runs to completion or failure exactly once.

use serde::Deserialize;

use store::{User, UserDraft, UserPatch};

mod error;
pub use error::ApiError;

/// Base URL of the remote API. Overridable at compile time.
pub fn api_base() -> &'static str {
    option_env!("ROSTER_API_BASE").unwrap_or("/api")
}

/// Successful responses wrap their payload in `{data: ...}`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Failure responses carry `{error: string}` when the server reports one.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: String,
}

/// Client for the user collection endpoint.
#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    base: String,
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl UsersClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn collection(&self) -> String {
        format!("{}/users", self.base.trim_end_matches('/'))
    }

    /// Fetch the full record collection.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.collection()).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_failure(response).await);
        }
        let envelope: DataEnvelope<Vec<User>> = response.json().await?;
        Ok(envelope.data)
    }

    /// Create a new record from `draft`. The success body is not used.
    pub async fn create(&self, draft: &UserDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.collection())
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::from_failure(response).await);
        }
        Ok(())
    }

    /// Update the record with `id` from `draft`. Returns the partial record
    /// the server echoed back, to be merged into the local copy.
    pub async fn update(&self, id: &str, draft: &UserDraft) -> Result<UserPatch, ApiError> {
        let response = self
            .http
            .put(self.collection())
            .query(&[("id", id)])
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::from_failure(response).await);
        }
        let envelope: DataEnvelope<UserPatch> = response.json().await?;
        Ok(envelope.data)
    }

    /// Delete the record with `id`. The success body is unused.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.collection())
            .query(&[("id", id)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::from_failure(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_joins_base_and_resource() {
        assert_eq!(UsersClient::new("/api").collection(), "/api/users");
        assert_eq!(
            UsersClient::new("https://api.example.com/").collection(),
            "https://api.example.com/users"
        );
    }

    #[test]
    fn data_envelope_unwraps_user_list() {
        let body = r#"{"data":[
            {"id":"1","name":"Ann","email":"a@x.com","image_url":"","video_url":""},
            {"id":"2","name":"Bea","email":"b@x.com","image_url":"","video_url":""}
        ]}"#;

        let envelope: DataEnvelope<Vec<User>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].id, "1");
        assert_eq!(envelope.data[1].name, "Bea");
    }

    #[test]
    fn data_envelope_unwraps_partial_patch() {
        let body = r#"{"data":{"name":"Ann B."}}"#;

        let envelope: DataEnvelope<UserPatch> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.name.as_deref(), Some("Ann B."));
        assert!(envelope.data.email.is_none());
    }
}
