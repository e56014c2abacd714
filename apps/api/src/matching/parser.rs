//! Match reply parser: turns the completion service's free text into matches.
//!
//! The reply is untrusted and schema-less. Each line is examined on its own:
//! a line must carry `Student: <name>,`, `Mentor: <name>,` and
//! `Color: #RRGGBB`, and both names must resolve to a current profile by exact
//! title. Anything else is reported as discarded and skipped. Colors are
//! taken as-is and repeated pairs are kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::matching::models::{DiscardReason, DiscardedLine, Match, ParsedReply};
use crate::profiles::models::Profile;

static STUDENT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Student:(.*?),").expect("student pattern is valid"));
static MENTOR_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Mentor:(.*?),").expect("mentor pattern is valid"));
static COLOR_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Color:\s*(#[A-Fa-f0-9]{6})").expect("color pattern is valid")
});

/// The three raw fields pulled out of one reply line.
#[derive(Debug, PartialEq, Eq)]
struct LineFields<'a> {
    student: &'a str,
    mentor: &'a str,
    color: &'a str,
}

/// Parses a completion reply against the current rosters.
///
/// Never fails: an empty or entirely malformed reply gives an empty match set.
pub fn parse_match_reply(reply: &str, students: &[Profile], mentors: &[Profile]) -> ParsedReply {
    let mut parsed = ParsedReply::default();

    for (index, line) in reply.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let discard = |reason: DiscardReason| DiscardedLine {
            line_number: index + 1,
            line: line.to_string(),
            reason,
        };

        let Some(fields) = extract_fields(line) else {
            parsed.discarded.push(discard(DiscardReason::Malformed));
            continue;
        };

        let Some(student) = find_by_title(students, fields.student) else {
            parsed.discarded.push(discard(DiscardReason::UnknownStudent {
                name: fields.student.to_string(),
            }));
            continue;
        };

        let Some(mentor) = find_by_title(mentors, fields.mentor) else {
            parsed.discarded.push(discard(DiscardReason::UnknownMentor {
                name: fields.mentor.to_string(),
            }));
            continue;
        };

        parsed.matches.push(Match {
            student_id: student.id,
            mentor_id: mentor.id,
            color: fields.color.to_string(),
        });
    }

    parsed
}

fn extract_fields(line: &str) -> Option<LineFields<'_>> {
    let student = STUDENT_FIELD.captures(line)?.get(1)?.as_str().trim();
    let mentor = MENTOR_FIELD.captures(line)?.get(1)?.as_str().trim();
    let color = COLOR_FIELD.captures(line)?.get(1)?.as_str();
    Some(LineFields {
        student,
        mentor,
        color,
    })
}

fn find_by_title<'a>(roster: &'a [Profile], title: &str) -> Option<&'a Profile> {
    roster.iter().find(|p| p.title == title)
}
