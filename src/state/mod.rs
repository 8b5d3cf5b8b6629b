//! Engine state module

pub mod date;
mod field;
mod form_state;
mod notification;

pub use field::*;
pub use form_state::*;
pub use notification::*;
