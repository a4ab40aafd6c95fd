pub mod error;
pub mod feature_flags;

pub mod models;

// CourtMate domain modules
pub mod analytics;
pub mod case;
pub mod dashboard;
pub mod grievance;
pub mod lawyer;
pub mod message;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use analytics::*;
pub use case::*;
pub use dashboard::*;
pub use grievance::*;
pub use lawyer::*;
pub use message::*;
