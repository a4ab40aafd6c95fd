#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod analytics;
pub use analytics::*;

mod case;
pub use case::*;

mod flags;
pub use flags::*;

mod grievance;
pub use grievance::*;

mod lawyer;
pub use lawyer::*;

mod message;
pub use message::*;

mod pdf;
pub use pdf::*;

mod speech;
pub use speech::*;
