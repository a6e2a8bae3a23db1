//! Record/handler engine
//!
//! A [`RecordLogger`] builds [`Record`]s and passes them down a chain of
//! [`Handler`]s; [`WriterHandler`] terminates the chain by rendering lines.

pub mod adapter;
pub mod handler;
pub mod logger;
pub mod record;
pub mod writer;

pub use adapter::{RecordAdapter, APP_GROUP, DATA_GROUP};
pub use handler::{Handler, HandlerOptions};
pub use logger::RecordLogger;
pub use record::{Attr, Record};
pub use writer::WriterHandler;
