//! Domain model types (pure).

pub mod error;
pub mod item;
pub mod key_action;

pub use error::AppError;
pub use item::Item;
pub use key_action::KeyAction;
