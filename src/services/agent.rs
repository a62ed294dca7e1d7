// src/services/agent.rs
use std::sync::Arc;

use super::model_client::ModelClient;

pub const TEXTBOOK_ASSISTANT_NAME: &str = "Python Assistant";
pub const TEXTBOOK_ASSISTANT_INSTRUCTIONS: &str = include_str!("prompts/textbook_assistant.md");

/// A named system instruction bound to the model that serves it.
#[derive(Clone)]
pub struct Agent {
    name: String,
    instructions: String,
    model: Arc<dyn ModelClient>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("instructions_len", &self.instructions.len())
            .finish()
    }
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: Arc<dyn ModelClient>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model,
        }
    }

    /// The textbook persona served by this backend.
    pub fn textbook_assistant(model: Arc<dyn ModelClient>) -> Self {
        Self::new(TEXTBOOK_ASSISTANT_NAME, TEXTBOOK_ASSISTANT_INSTRUCTIONS, model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn model(&self) -> &dyn ModelClient {
        self.model.as_ref()
    }
}
