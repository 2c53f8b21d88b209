pub mod agent_service;
pub mod context;
pub mod safety_service;
pub mod terminal;
