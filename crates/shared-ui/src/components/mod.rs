// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod label;
pub mod navbar;
pub mod progress;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use progress::*;
pub use skeleton::*;
pub use textarea::*;
