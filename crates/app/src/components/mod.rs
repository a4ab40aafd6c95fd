pub mod chat_window;
pub mod footer;

pub use chat_window::ChatWindow;
pub use footer::Footer;
