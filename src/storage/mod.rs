pub mod file_store;
pub mod memory_store;
pub mod storage_traits;

pub use file_store::FileDocumentStore;
pub use memory_store::MemoryDocumentStore;
pub use storage_traits::DocumentStoreTrait;
