// medassist backend - symptom questions answered by gemini, with an emergency flag

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
