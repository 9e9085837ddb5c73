pub mod app;
pub mod configuration;
pub mod mailer;
pub mod store;
pub mod tracing;
