pub mod command;
pub mod projector;
pub mod session;
pub mod store;

pub use crate::domain::model::{Person, Record};
pub use crate::domain::ports::ClipboardSink;
pub use crate::utils::error::Result;
