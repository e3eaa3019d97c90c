use std::sync::Arc;

use crate::conversation::SessionStore;
use crate::intake::IntakeEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<IntakeEngine>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(engine: IntakeEngine, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            engine: Arc::new(engine),
            sessions,
        }
    }
}
