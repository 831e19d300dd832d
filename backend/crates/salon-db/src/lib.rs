pub mod document;
pub mod error;
pub mod json_store;
pub mod repositories;

pub use document::{AuthSection, Document};
pub use error::{DbError, Result};
pub use json_store::JsonStore;
pub use repositories::user_repository::UserRepository;
