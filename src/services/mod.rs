pub mod agent;
pub mod model_client;
pub mod runner;
