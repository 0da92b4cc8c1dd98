//! Inbound HTTP: route table, Lambda adapter and local server

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod routes;
pub mod server;

// Re-export the main handler for convenience
pub use handler::function_handler as handler;
