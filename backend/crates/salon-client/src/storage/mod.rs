pub(crate) mod file_token_storage;
pub(crate) mod memory_token_storage;
pub(crate) mod token_storage;

pub use file_token_storage::FileTokenStorage;
pub use memory_token_storage::MemoryTokenStorage;
pub use token_storage::TokenStorage;
