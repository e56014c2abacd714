//! ProfileStore: one ordered roster per role, newest first.
//!
//! Besides the profiles themselves the store owns the role's pending form
//! input (`Draft`) and the current edit selection, because `add`, `select`,
//! `update` and `cancel` all act on them.

use tracing::{debug, warn};

use crate::profiles::models::{Draft, Profile, Role};

#[derive(Debug, Clone)]
pub struct ProfileStore {
    role: Role,
    profiles: Vec<Profile>,
    draft: Draft,
    selected: Option<u32>,
}

impl ProfileStore {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            profiles: Vec::new(),
            draft: Draft::default(),
            selected: None,
        }
    }

    /// Builds a store pre-filled with `profiles`, kept in the given order.
    pub fn seeded(role: Role, profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            ..Self::new(role)
        }
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Creates a profile with `id = len + 1`, prepends it and clears the draft.
    ///
    /// Ids are derived from the current length, so after a delete the new id
    /// can collide with a surviving profile. The collision is logged, not
    /// prevented.
    pub fn add(&mut self, title: &str, content: &str, sport: &str) -> Profile {
        let id = self.profiles.len() as u32 + 1;
        if self.get(id).is_some() {
            warn!(
                "{} roster already holds id {id}; new profile '{title}' shares it",
                self.role
            );
        }

        let profile = Profile::new(id, title, content, sport);
        self.profiles.insert(0, profile.clone());
        self.draft = Draft::default();

        debug!("Added {} profile {id} ('{title}')", self.role);
        profile
    }

    /// Marks `id` as the edit target and seeds the draft from it.
    pub fn select(&mut self, id: u32) -> Option<Profile> {
        let profile = self.get(id)?.clone();
        self.selected = Some(id);
        self.draft = Draft {
            title: profile.title.clone(),
            content: profile.content.clone(),
            sport: profile.sport.clone(),
        };
        Some(profile)
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Replaces title/content of the selected profile in place.
    ///
    /// Silently does nothing unless `id` is the current selection. On success
    /// the selection and the draft are cleared.
    pub fn update(&mut self, id: u32, title: &str, content: &str) -> Option<Profile> {
        if self.selected != Some(id) {
            debug!(
                "Ignoring update of {} profile {id}: selection is {:?}",
                self.role, self.selected
            );
            return None;
        }

        let updated = self.profiles.iter_mut().find(|p| p.id == id).map(|p| {
            p.title = title.to_string();
            p.content = content.to_string();
            p.clone()
        });

        self.cancel();
        updated
    }

    /// Drops the selection and the draft.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.draft = Draft::default();
    }

    /// Removes one profile with the given id, keeping the order of the rest.
    /// Returns the removed profile, or `None` when the id is unknown.
    pub fn delete(&mut self, id: u32) -> Option<Profile> {
        let index = self.profiles.iter().position(|p| p.id == id)?;
        let removed = self.profiles.remove(index);
        if self.selected == Some(id) {
            self.cancel();
        }
        debug!("Deleted {} profile {id}", self.role);
        Some(removed)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Empties the roster, the draft and the selection.
    pub fn reset(&mut self) {
        self.profiles.clear();
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> ProfileStore {
        let mut store = ProfileStore::new(Role::Student);
        for title in titles {
            store.add(title, "content", "soccer");
        }
        store
    }

    fn titles(store: &ProfileStore) -> Vec<&str> {
        store.list().iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_len_plus_one_and_prepends() {
        let mut store = store_with(&["Alice", "Bob"]);
        let before = store.len();

        let profile = store.add("Cara", "9 years old", "swimming");

        assert_eq!(store.len(), before + 1);
        assert_eq!(profile.id, before as u32 + 1);
        assert_eq!(store.list()[0], profile);
        assert_eq!(titles(&store), vec!["Cara", "Bob", "Alice"]);
    }

    #[test]
    fn test_add_permits_duplicate_titles() {
        let store = store_with(&["Bob", "Bob"]);
        assert_eq!(store.len(), 2);
        assert_eq!(titles(&store), vec!["Bob", "Bob"]);
        assert_eq!(store.list()[0].id, 2);
    }

    #[test]
    fn test_add_clears_draft() {
        let mut store = ProfileStore::new(Role::Mentor);
        store.set_draft(Draft {
            title: "Coach Mike".to_string(),
            content: "Basketball trainer".to_string(),
            sport: "basketball".to_string(),
        });

        store.add("Coach Mike", "Basketball trainer", "basketball");

        assert_eq!(store.draft(), &Draft::default());
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut store = store_with(&["A", "B", "C", "D"]);

        let removed = store.delete(2).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), vec!["D", "C", "A"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["A"]);
        assert!(store.delete(42).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_id_after_delete_can_collide() {
        let mut store = store_with(&["A", "B", "C"]);
        store.delete(1);

        let profile = store.add("D", "content", "");

        assert_eq!(profile.id, 3);
        assert_eq!(store.list().iter().filter(|p| p.id == 3).count(), 2);
        // Newest wins for lookup and delete
        assert_eq!(store.get(3).unwrap().title, "D");
        store.delete(3);
        assert_eq!(store.get(3).unwrap().title, "C");
    }

    #[test]
    fn test_update_without_selection_is_noop() {
        let mut store = store_with(&["A", "B"]);

        let result = store.update(1, "Changed", "changed");

        assert!(result.is_none());
        assert_eq!(store.get(1).unwrap().title, "A");
    }

    #[test]
    fn test_update_for_other_id_than_selection_is_noop() {
        let mut store = store_with(&["A", "B"]);
        store.select(2);

        assert!(store.update(1, "Changed", "changed").is_none());
        assert_eq!(store.get(1).unwrap().title, "A");
        assert_eq!(store.selected(), Some(2));
    }

    #[test]
    fn test_select_seeds_draft_and_update_keeps_id_and_position() {
        let mut store = store_with(&["A", "B", "C"]);

        let selected = store.select(2).unwrap();
        assert_eq!(selected.title, "B");
        assert_eq!(store.draft().title, "B");
        assert_eq!(store.draft().content, "content");

        let updated = store.update(2, "Bea", "new content").unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.sport, "soccer");
        assert_eq!(titles(&store), vec!["C", "Bea", "A"]);
        assert_eq!(store.selected(), None);
        assert_eq!(store.draft(), &Draft::default());
    }

    #[test]
    fn test_select_unknown_id_leaves_state_untouched() {
        let mut store = store_with(&["A"]);
        assert!(store.select(9).is_none());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_cancel_clears_selection_and_draft() {
        let mut store = store_with(&["A"]);
        store.select(1);

        store.cancel();

        assert_eq!(store.selected(), None);
        assert_eq!(store.draft(), &Draft::default());
        assert_eq!(store.get(1).unwrap().title, "A");
    }

    #[test]
    fn test_deleting_selected_profile_drops_selection() {
        let mut store = store_with(&["A", "B"]);
        store.select(1);

        store.delete(1);

        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut store = store_with(&["A", "B"]);
        store.select(1);

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.selected(), None);
        assert_eq!(store.add("New", "content", "").id, 1);
    }
}
