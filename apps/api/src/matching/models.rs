use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One student/mentor pairing with its highlight color.
///
/// Ids reference profiles by value. A match may outlive the profiles it
/// points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub student_id: u32,
    pub mentor_id: u32,
    /// `#RRGGBB` exactly as the completion service produced it.
    pub color: String,
}

/// Why a reply line did not become a `Match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiscardReason {
    /// Missing the student, mentor or `#RRGGBB` color field.
    Malformed,
    UnknownStudent { name: String },
    UnknownMentor { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardedLine {
    /// 1-based position in the reply.
    pub line_number: usize,
    pub line: String,
    #[serde(flatten)]
    pub reason: DiscardReason,
}

/// Result of parsing one completion reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedReply {
    pub matches: Vec<Match>,
    pub discarded: Vec<DiscardedLine>,
}

/// What a single match action did to the match store.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The parsed matches replaced the previous set.
    Applied {
        request_id: u64,
        matches: Vec<Match>,
        discarded: usize,
        matched_at: DateTime<Utc>,
    },
    /// A newer match action was issued while this one was in flight.
    Stale { request_id: u64 },
    /// The completion call failed; the previous set is untouched.
    Failed { request_id: u64, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_serializes_snake_case() {
        let m = Match {
            student_id: 1,
            mentor_id: 4,
            color: "#FFE4E1".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["student_id"], 1);
        assert_eq!(json["mentor_id"], 4);
        assert_eq!(json["color"], "#FFE4E1");
    }

    #[test]
    fn test_discarded_line_flattens_reason() {
        let discarded = DiscardedLine {
            line_number: 2,
            line: "Student: Unknown, Mentor: Coach Mike, Color: #AAFFAA".to_string(),
            reason: DiscardReason::UnknownStudent {
                name: "Unknown".to_string(),
            },
        };
        let json = serde_json::to_value(&discarded).unwrap();
        assert_eq!(json["reason"], "unknown_student");
        assert_eq!(json["name"], "Unknown");
        assert_eq!(json["line_number"], 2);
    }

    #[test]
    fn test_outcome_is_tagged_by_status() {
        let outcome = MatchOutcome::Failed {
            request_id: 3,
            reason: "HTTP error".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["request_id"], 3);
    }
}
