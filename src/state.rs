// src/state.rs
use std::sync::Arc;

use crate::services::agent::Agent;

pub type SharedState = Arc<AppState>;

/// Built once at startup and only ever read afterwards.
#[derive(Debug)]
pub struct AppState {
    pub agent: Agent,
}

impl AppState {
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }

    pub fn shared(agent: Agent) -> SharedState {
        Arc::new(Self::new(agent))
    }
}
