//! Storage adapters implementing the `ProfileStore` port.

mod in_memory_profile_store;

pub use in_memory_profile_store::InMemoryProfileStore;
