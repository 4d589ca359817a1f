//! Session tracking
//!
//! One session per submitted chat turn: created empty, mutated by the turn
//! executor, read by any number of concurrent pollers.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{Session, SessionSnapshot};
