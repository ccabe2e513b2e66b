//! # Domain models for the user resource
//!
//! Defines the data structures shared by the API client and the UI. These
//! types are `Serialize + Deserialize` so they map directly onto the JSON
//! bodies the remote collection endpoint speaks.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A persisted user record as returned by the server. Carries the server-assigned `id`, the required `name` and `email`, optional media URLs (empty string when absent, matching the wire shape), and opaque server-assigned timestamps. |
//! | [`UserDraft`] | An in-progress create or edit payload. All fields default to empty strings and there is no id until the server assigns one. |
//! | [`UserPatch`] | The partial record a successful update returns. Only the fields the server echoed back are present; merging is handled by [`User::apply`]. |

use serde::{Deserialize, Serialize};

/// A user record as persisted by the remote collection endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier. Never changes client-side.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar URL, empty when the user has none.
    #[serde(default)]
    pub image_url: String,
    /// Intro video URL, empty when the user has none.
    #[serde(default)]
    pub video_url: String,
    /// Opaque server-assigned timestamp, not interpreted client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Merge a server-returned patch into this record. Fields the server did
    /// not return keep their current values; the id is never taken from a
    /// patch.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = Some(created_at);
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = Some(updated_at);
        }
    }
}

/// An in-progress create or edit payload. Serializes to the exact body shape
/// the collection endpoint expects: `{name, email, image_url, video_url}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub video_url: String,
}

impl UserDraft {
    /// Seed a draft from an existing record, for inline editing.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            image_url: user.image_url.clone(),
            video_url: user.video_url.clone(),
        }
    }
}

/// The partial record a successful update returns in `{data: ...}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
