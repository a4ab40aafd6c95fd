pub mod analytics;
pub mod case;
pub mod lawyer;
pub mod message;
pub mod user;
