pub mod command;
pub mod memory;
pub mod safety_policy;
pub mod session;
pub mod turn;
