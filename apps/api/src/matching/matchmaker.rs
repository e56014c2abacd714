//! Matchmaker: runs one match action end to end.
//!
//! Flow: take request id → snapshot rosters → build prompt → completion call →
//!       parse against current rosters → drop if a newer reply was applied →
//!       replace matches.
//!
//! Failures never reach the caller as errors. They are logged and reported as
//! an outcome, leaving the previous match set in place. A reply with no
//! content counts as an empty reply, not a failure.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::llm_client::LlmError;
use crate::matching::models::MatchOutcome;
use crate::matching::parser::parse_match_reply;
use crate::matching::prompts::MATCH_SYSTEM;
use crate::matching::request::build_match_prompt;
use crate::state::AppState;

/// Hands out monotonically increasing match request ids and tracks the
/// newest id whose reply was applied.
///
/// A reply may apply unless a newer request already applied its own. Failed
/// requests never claim anything, so they cannot shadow an older success.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequencer {
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Newest id whose reply replaced the match set, 0 before the first.
    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }

    /// Records `request_id` as applied unless a newer id got there first.
    pub fn claim(&self, request_id: u64) -> bool {
        self.applied.fetch_max(request_id, Ordering::SeqCst) < request_id
    }
}

/// Issues one completion request for the whole roster and applies the reply.
pub async fn run_match(state: &AppState) -> MatchOutcome {
    let request_id = state.sequencer.next();

    let Some(llm) = state.llm.as_ref() else {
        warn!("Match request {request_id} ignored: no completion service configured");
        return MatchOutcome::Failed {
            request_id,
            reason: "completion service is not configured".to_string(),
        };
    };

    let prompt = {
        let rosters = state.rosters.read().await;
        info!(
            "Match request {request_id}: {} students, {} mentors",
            rosters.students.len(),
            rosters.mentors.len()
        );
        build_match_prompt(rosters.students.list(), rosters.mentors.list())
    };
    debug!("Match request {request_id} prompt:\n{prompt}");

    let reply = match llm.complete(&prompt, MATCH_SYSTEM).await {
        Ok(reply) => reply,
        Err(LlmError::EmptyContent) => {
            warn!("Match request {request_id}: completion had no content");
            String::new()
        }
        Err(e) => {
            error!("Match request {request_id} failed: {e}");
            return MatchOutcome::Failed {
                request_id,
                reason: e.to_string(),
            };
        }
    };
    debug!("Match request {request_id} raw reply:\n{reply}");

    // Names resolve against the rosters as they are now, not as they were sent.
    let parsed = {
        let rosters = state.rosters.read().await;
        parse_match_reply(&reply, rosters.students.list(), rosters.mentors.list())
    };

    for discarded in &parsed.discarded {
        warn!(
            "Match request {request_id}: discarding line {} ({:?}): {:?}",
            discarded.line_number, discarded.reason, discarded.line
        );
    }

    let mut matches = state.matches.write().await;
    if !state.sequencer.claim(request_id) {
        info!(
            "Match request {request_id} superseded by {}; reply dropped",
            state.sequencer.last_applied()
        );
        return MatchOutcome::Stale { request_id };
    }

    matches.replace_all(parsed.matches.clone());
    info!(
        "Match request {request_id} applied: {} matches, {} lines discarded",
        parsed.matches.len(),
        parsed.discarded.len()
    );

    MatchOutcome::Applied {
        request_id,
        matches: parsed.matches,
        discarded: parsed.discarded.len(),
        matched_at: Utc::now(),
    }
}
