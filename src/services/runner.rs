// src/services/runner.rs
use tracing::debug;

use super::agent::Agent;
use super::model_client::ModelError;

/// Runs one message through the agent and returns only the final output.
/// The message is the whole conversation; nothing carries over between calls.
pub async fn run(agent: &Agent, message: &str) -> Result<String, ModelError> {
    debug!(agent = agent.name(), "running agent");
    agent.model().complete(agent.instructions(), message).await
}
