pub mod file;
pub mod local;
pub mod memory;

pub use file::FileLocationStore;
pub use local::LocalStorage;
pub use memory::InMemoryLocationStore;
