//! In-memory repositories. State lives as long as the process.

mod presence;
mod store;

pub use presence::InMemoryPresenceRepository;
pub use store::InMemoryStoreRepository;
