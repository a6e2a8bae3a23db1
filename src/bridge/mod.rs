//! Handlers that bridge between the context carrier and the two engines

pub mod context_handler;
pub mod entry_handler;

pub use context_handler::ContextHandler;
pub use entry_handler::{map_level, EntryHandler, GROUP_KEY};
