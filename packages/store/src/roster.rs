//! The list-reconciliation core: local user list state plus the single
//! inline-editing slot.
//!
//! The roster is a cache of server state. It is only mutated in response to a
//! confirmed server response: a load replaces it wholesale, an update merge or
//! a delete removes happen after the server said yes. Nothing here is
//! speculative, so there is never anything to roll back.

use crate::models::{User, UserDraft, UserPatch};

/// Local state for the user list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    users: Vec<User>,
    editing_id: Option<String>,
    edit_draft: UserDraft,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the cached list wholesale after a successful load.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// The identifier of the record currently being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    pub fn edit_draft(&self) -> &UserDraft {
        &self.edit_draft
    }

    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.edit_draft
    }

    /// Enter edit mode for `user`, seeding the draft from its current fields.
    /// There is a single editing slot: switching to another record discards
    /// any unsaved draft for the previous one.
    pub fn begin_edit(&mut self, user: &User) {
        self.editing_id = Some(user.id.clone());
        self.edit_draft = UserDraft::from_user(user);
    }

    /// Leave edit mode and discard the unsaved draft.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_draft = UserDraft::default();
    }

    /// Merge a server-confirmed update into the matching record.
    pub fn confirm_update(&mut self, id: &str, patch: UserPatch) {
        if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
            user.apply(patch);
        }
    }

    /// Remove the record with `id` after the server confirmed its deletion.
    pub fn confirm_delete(&mut self, id: &str) {
        self.users.retain(|user| user.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{name}@x.com"),
            image_url: String::new(),
            video_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded() -> Roster {
        let mut roster = Roster::new();
        roster.replace_all(vec![user("1", "ann"), user("2", "bea"), user("3", "cy")]);
        roster
    }

    #[test]
    fn starts_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.editing_id().is_none());
    }

    #[test]
    fn replace_all_is_idempotent() {
        let mut roster = Roster::new();
        let users = vec![user("1", "ann"), user("2", "bea")];

        roster.replace_all(users.clone());
        let first = roster.users().to_vec();
        roster.replace_all(users);

        assert_eq!(roster.users(), first.as_slice());
    }

    #[test]
    fn begin_edit_seeds_draft_from_record() {
        let mut roster = loaded();
        roster.begin_edit(&user("2", "bea"));

        assert!(roster.is_editing("2"));
        assert!(!roster.is_editing("1"));
        assert_eq!(roster.edit_draft().name, "bea");
        assert_eq!(roster.edit_draft().email, "bea@x.com");
    }

    #[test]
    fn switching_edit_target_discards_previous_draft() {
        let mut roster = loaded();
        roster.begin_edit(&user("1", "ann"));
        roster.draft_mut().name = "ann (unsaved)".to_string();

        roster.begin_edit(&user("3", "cy"));

        assert_eq!(roster.editing_id(), Some("3"));
        assert_eq!(roster.edit_draft().name, "cy");
    }

    #[test]
    fn cancel_edit_clears_slot_and_draft() {
        let mut roster = loaded();
        roster.begin_edit(&user("1", "ann"));
        roster.draft_mut().email = "changed@x.com".to_string();

        roster.cancel_edit();

        assert!(roster.editing_id().is_none());
        assert_eq!(*roster.edit_draft(), UserDraft::default());
    }

    #[test]
    fn confirm_update_changes_exactly_one_record() {
        let mut roster = loaded();
        roster.confirm_update(
            "2",
            UserPatch {
                name: Some("Bea B.".to_string()),
                ..UserPatch::default()
            },
        );

        assert_eq!(roster.users()[0].name, "ann");
        assert_eq!(roster.users()[1].name, "Bea B.");
        assert_eq!(roster.users()[1].email, "bea@x.com");
        assert_eq!(roster.users()[2].name, "cy");
    }

    #[test]
    fn confirm_update_for_unknown_id_is_a_no_op() {
        let mut roster = loaded();
        let before = roster.users().to_vec();

        roster.confirm_update(
            "99",
            UserPatch {
                name: Some("ghost".to_string()),
                ..UserPatch::default()
            },
        );

        assert_eq!(roster.users(), before.as_slice());
    }

    #[test]
    fn confirm_delete_removes_only_the_matching_record() {
        let mut roster = loaded();
        roster.confirm_delete("2");

        assert_eq!(roster.users().len(), 2);
        assert!(roster.users().iter().all(|user| user.id != "2"));
    }

    #[test]
    fn confirm_delete_for_unknown_id_leaves_list_unchanged() {
        let mut roster = loaded();
        roster.confirm_delete("99");

        assert_eq!(roster.users().len(), 3);
    }
}
