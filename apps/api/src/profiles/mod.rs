// Profile rosters: one ordered, in-memory store per role.
// Implements: add, update, delete, select/cancel, draft fields, demo seed.

pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;
