use crate::matching::models::Match;
use crate::profiles::models::Role;

/// The current match set. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    matches: Vec<Match>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Drops every current match and installs `matches` in their place.
    pub fn replace_all(&mut self, matches: Vec<Match>) {
        self.matches = matches;
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    /// First match that references the given student.
    pub fn for_student(&self, student_id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.student_id == student_id)
    }

    /// First match that references the given mentor.
    pub fn for_mentor(&self, mentor_id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.mentor_id == mentor_id)
    }

    pub fn for_profile(&self, role: Role, id: u32) -> Option<&Match> {
        match role {
            Role::Student => self.for_student(id),
            Role::Mentor => self.for_mentor(id),
        }
    }

    /// Card highlight for a profile, if any match references it.
    pub fn color_for(&self, role: Role, id: u32) -> Option<&str> {
        self.for_profile(role, id).map(|m| m.color.as_str())
    }

    /// Removes every match referencing the profile. Returns how many were dropped.
    pub fn remove_for(&mut self, role: Role, id: u32) -> usize {
        let before = self.matches.len();
        self.matches.retain(|m| match role {
            Role::Student => m.student_id != id,
            Role::Mentor => m.mentor_id != id,
        });
        before - self.matches.len()
    }
}
