pub mod followup;
pub mod health;
