//! Match request builder: renders the whole roster into one instruction payload.

use crate::matching::prompts::{MATCH_REMINDER, MATCH_RULES};
use crate::profiles::models::Profile;

/// Builds the user prompt for a match request.
///
/// Pure: the output depends only on the profiles' titles, sports and
/// contents, in the order given.
pub fn build_match_prompt(students: &[Profile], mentors: &[Profile]) -> String {
    format!(
        "{MATCH_RULES}\n\nCurrent profiles to match:\n\nStudents:\n{}\n\nMentors:\n{}\n\n{MATCH_REMINDER}",
        roster_block(students),
        roster_block(mentors),
    )
}

/// `Name: <title>, Sport: <sport>, Description: <content>`
pub fn roster_line(profile: &Profile) -> String {
    format!(
        "Name: {}, Sport: {}, Description: {}",
        profile.title, profile.sport, profile.content
    )
}

fn roster_block(profiles: &[Profile]) -> String {
    profiles
        .iter()
        .map(roster_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<Profile> {
        vec![
            Profile::new(2, "Sophie", "11 years old, competitive swimmer.", "swimming"),
            Profile::new(1, "Bob", "12 years old, beginner.", "basketball"),
        ]
    }

    fn mentors() -> Vec<Profile> {
        vec![Profile::new(1, "Coach Mike", "Skills trainer.", "basketball")]
    }

    #[test]
    fn test_roster_line_format() {
        let line = roster_line(&Profile::new(1, "Bob", "12 years old", "basketball"));
        assert_eq!(line, "Name: Bob, Sport: basketball, Description: 12 years old");
    }

    #[test]
    fn test_prompt_lists_every_profile_in_order_under_its_heading() {
        let prompt = build_match_prompt(&students(), &mentors());

        let students_at = prompt.find("Students:\n").unwrap();
        let mentors_at = prompt.find("Mentors:\n").unwrap();
        let sophie = prompt
            .find("Name: Sophie, Sport: swimming, Description: 11 years old, competitive swimmer.")
            .unwrap();
        let bob = prompt.find("Name: Bob, Sport: basketball").unwrap();
        let mike = prompt.find("Name: Coach Mike, Sport: basketball").unwrap();

        assert!(students_at < sophie && sophie < bob && bob < mentors_at);
        assert!(mentors_at < mike);
    }

    #[test]
    fn test_prompt_carries_rules_and_output_format() {
        let prompt = build_match_prompt(&students(), &mentors());

        assert!(prompt.starts_with(MATCH_RULES));
        assert!(prompt.ends_with(MATCH_REMINDER));
        assert!(prompt.contains("The sport MUST be exactly the same"));
        assert!(prompt.contains("#RRGGBB where each pair ranges from 99 to FF"));
        assert!(prompt
            .contains("Student: [Student Name], Mentor: [Mentor Name], Color: #[6-digit hex color]"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_match_prompt(&students(), &mentors()),
            build_match_prompt(&students(), &mentors())
        );
    }

    #[test]
    fn test_prompt_changes_only_with_profile_fields() {
        let mut renamed = students();
        renamed[1].title = "Robert".to_string();

        let original = build_match_prompt(&students(), &mentors());
        let changed = build_match_prompt(&renamed, &mentors());

        assert_ne!(original, changed);
        assert_eq!(original.replace("Name: Bob,", "Name: Robert,"), changed);
    }

    #[test]
    fn test_ids_do_not_leak_into_prompt() {
        let mut renumbered = students();
        renumbered[0].id = 40;
        assert_eq!(
            build_match_prompt(&students(), &mentors()),
            build_match_prompt(&renumbered, &mentors())
        );
    }

    #[test]
    fn test_empty_roster_still_produces_headings() {
        let prompt = build_match_prompt(&[], &[]);
        assert!(prompt.contains("Students:\n\n\nMentors:\n\n\n"));
    }
}
