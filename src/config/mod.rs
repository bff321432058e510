#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::assets::{AssetResolver, DEFAULT_FALLBACK_IMAGE, DEFAULT_IMAGE_PREFIX};
use crate::core::filter::FilterQuery;
use crate::core::tags::ALL_TAG;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_formats, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

/// Everything an export run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    pub catalog_path: Option<String>,
    pub output_path: String,
    pub query: String,
    pub tag: String,
    pub limit: Option<usize>,
    pub output_formats: Vec<String>,
    pub assets_dir: Option<String>,
    pub image_prefix: String,
    pub fallback_image: String,
    pub json_filename: String,
    pub csv_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_path: "./output".to_string(),
            query: String::new(),
            tag: ALL_TAG.to_string(),
            limit: None,
            output_formats: SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect(),
            assets_dir: None,
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            json_filename: "projects.json".to_string(),
            csv_filename: "projects.csv".to_string(),
        }
    }
}

impl ConfigProvider for ExportSettings {
    fn catalog_path(&self) -> Option<&str> {
        self.catalog_path.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn filter_query(&self) -> FilterQuery {
        FilterQuery::new(self.query.clone(), self.tag.clone()).with_limit(self.limit)
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new()
            .with_optional_root(self.assets_dir.as_deref())
            .with_public_prefix(self.image_prefix.clone())
            .with_fallback(self.fallback_image.clone())
    }

    fn filename_for(&self, format: &str) -> Option<&str> {
        match format {
            "json" => Some(&self.json_filename),
            "csv" => Some(&self.csv_filename),
            _ => None,
        }
    }
}

impl Validate for ExportSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog_path {
            validate_path("catalog", path)?;
        }
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.output_formats, &SUPPORTED_FORMATS)?;
        if let Some(dir) = &self.assets_dir {
            validate_path("assets_dir", dir)?;
        }
        validate_path("json_filename", &self.json_filename)?;
        validate_path("csv_filename", &self.csv_filename)?;
        Ok(())
    }
}
