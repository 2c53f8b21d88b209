pub mod config;
pub mod openai_client;
pub mod shell_executor;
