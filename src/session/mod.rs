//! Session module for login state and its persistence

mod provider;
mod store;
mod traits;

pub use provider::StoredSession;
pub use store::{FlagStore, StoreError};
pub use traits::Session;

#[cfg(test)]
pub use traits::MockSession;
