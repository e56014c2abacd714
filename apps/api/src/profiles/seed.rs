//! Demo roster loaded when `SEED_DEMO_PROFILES` is enabled.

use crate::profiles::models::Profile;

const DEMO_STUDENTS: &[(&str, &str, &str)] = &[
    ("Bob", "12 years old, complete beginner in basketball, looking to learn basics and have fun.", "basketball"),
    ("Sophie", "11 years old, competitive swimmer looking for advanced training.", "swimming"),
    ("David", "14 years old, plays competitive soccer and wants to train for high school team.", "soccer"),
    ("Maria", "13 years old, intermediate basketball player, wants to improve technique.", "basketball"),
    ("Charlie", "9 years old, beginner swimmer, needs to learn basic techniques.", "swimming"),
    ("Ethan", "15 years old, wants to play basketball at a competitive level, dreams of playing in college.", "basketball"),
    ("Alice", "10 years old, loves soccer and wants to improve her skills for fun and making friends.", "soccer"),
];

const DEMO_MENTORS: &[(&str, &str, &str)] = &[
    ("Coach Mike", "Basketball skills trainer, focuses on individual technique improvement for intermediate players.", "basketball"),
    ("Trainer Frank", "Swimming coach, specializes in teaching young beginners with patience and fun methods.", "swimming"),
    ("Coach John", "Former college player, trains competitive basketball players aiming for high school and college teams.", "basketball"),
    ("Coach Lisa", "Professional soccer trainer, focuses on competitive training and advanced techniques for teenagers.", "soccer"),
    ("Mentor Emma", "Basketball coach, specializes in teaching fundamentals to beginners in a fun environment.", "basketball"),
    ("Coach Sarah", "Former Olympic swimmer, trains competitive swimmers and advanced techniques.", "swimming"),
    ("Coach Dave", "Experienced soccer coach, specializes in youth development and fun training for ages 8-12.", "soccer"),
];

pub fn demo_students() -> Vec<Profile> {
    numbered(DEMO_STUDENTS)
}

pub fn demo_mentors() -> Vec<Profile> {
    numbered(DEMO_MENTORS)
}

fn numbered(rows: &[(&str, &str, &str)]) -> Vec<Profile> {
    rows.iter()
        .zip(1u32..)
        .map(|((title, content, sport), id)| Profile::new(id, title, content, sport))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::models::is_known_sport;

    #[test]
    fn test_demo_ids_are_sequential_from_one() {
        let ids: Vec<u32> = demo_students().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
        assert_eq!(demo_mentors()[0].title, "Coach Mike");
    }

    #[test]
    fn test_demo_sports_are_all_known() {
        assert!(demo_students()
            .iter()
            .chain(demo_mentors().iter())
            .all(|p| is_known_sport(&p.sport)));
    }
}
