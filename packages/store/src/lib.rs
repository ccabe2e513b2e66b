pub mod models;

mod roster;
pub use roster::Roster;

pub use models::{User, UserDraft, UserPatch};
