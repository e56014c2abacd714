use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::matching::matchmaker::RequestSequencer;
use crate::matching::store::MatchStore;
use crate::profiles::models::Role;
use crate::profiles::seed::{demo_mentors, demo_students};
use crate::profiles::store::ProfileStore;

/// Both rosters. Guarded by a single lock so a match request always sees a
/// consistent pair.
#[derive(Debug, Clone)]
pub struct Rosters {
    pub students: ProfileStore,
    pub mentors: ProfileStore,
}

impl Rosters {
    pub fn empty() -> Self {
        Self {
            students: ProfileStore::new(Role::Student),
            mentors: ProfileStore::new(Role::Mentor),
        }
    }

    pub fn demo() -> Self {
        Self {
            students: ProfileStore::seeded(Role::Student, demo_students()),
            mentors: ProfileStore::seeded(Role::Mentor, demo_mentors()),
        }
    }

    pub fn get(&self, role: Role) -> &ProfileStore {
        match role {
            Role::Student => &self.students,
            Role::Mentor => &self.mentors,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut ProfileStore {
        match role {
            Role::Student => &mut self.students,
            Role::Mentor => &mut self.mentors,
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Locks are only held for synchronous store mutations, never across the
/// completion call. Lock order is rosters before matches.
#[derive(Clone)]
pub struct AppState {
    pub rosters: Arc<RwLock<Rosters>>,
    pub matches: Arc<RwLock<MatchStore>>,
    /// Completion backend. `None` for the coach variant, which never matches.
    pub llm: Option<Arc<dyn CompletionProvider>>,
    pub sequencer: Arc<RequestSequencer>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, llm: Option<Arc<dyn CompletionProvider>>) -> Self {
        let rosters = if config.seed_demo_profiles {
            Rosters::demo()
        } else {
            Rosters::empty()
        };

        Self {
            rosters: Arc::new(RwLock::new(rosters)),
            matches: Arc::new(RwLock::new(MatchStore::new())),
            llm,
            sequencer: Arc::new(RequestSequencer::default()),
            config,
        }
    }
}
