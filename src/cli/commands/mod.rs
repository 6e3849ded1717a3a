//! Command implementations

mod validate;

pub use validate::validate;
