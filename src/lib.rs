pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{profile::ProfileConfig, CliConfig};
pub use core::projector::{project, render, AboutPage};
pub use core::session::{CopyStatus, EditorSession};
pub use core::store::{Applied, Mutation, RecordStore};
pub use domain::fields::{EditorMode, Field, ListField, PairField, PairKey, ScalarField};
pub use domain::model::{Person, Record};
pub use utils::error::{EditorError, Result};
