pub mod assets;
pub mod catalog;
pub mod engine;
pub mod filter;
pub mod links;
pub mod slug;
pub mod tags;

pub use crate::domain::model::{ExportResult, Project, ProjectView};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
