pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::pipelines::export_pipeline::ExportPipeline;
pub use config::{storage::LocalStorage, ExportSettings};
pub use core::{
    catalog::Catalog,
    engine::CatalogEngine,
    filter::{filter, FilterQuery},
    slug::slugify,
    tags::{tag_index, ALL_TAG},
};
pub use domain::model::Project;
pub use utils::error::{CatalogError, Result};
