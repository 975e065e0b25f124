//! Account domain: the entity and its errors.

pub mod entities;
pub mod errors;

pub use entities::Account;
pub use errors::AccountError;
