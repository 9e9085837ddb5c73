// Contains files that define objects representing business logic concepts used across the service.
pub mod error;
pub mod followup;
