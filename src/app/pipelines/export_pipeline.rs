use crate::app::render::{project_views, render_csv, render_json};
use crate::config::toml_config::load_catalog;
use crate::core::catalog::Catalog;
use crate::core::{ConfigProvider, ExportResult, Pipeline, Storage};
use crate::utils::error::{CatalogError, Result};

/// Loads a catalog, narrows it with the configured query and writes the
/// result in every requested format.
pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<Catalog> {
        load_catalog(self.config.catalog_path())
    }

    async fn transform(&self, catalog: Catalog) -> Result<ExportResult> {
        let query = self.config.filter_query();
        tracing::debug!(
            "Filtering {} projects with query '{}' and tag '{}'",
            catalog.len(),
            query.text,
            query.tag
        );

        let resolver = self.config.asset_resolver();
        let base_path = catalog.profile().site.base_path.as_deref();
        let projects = project_views(catalog.filter(&query), &resolver, base_path);

        let fallbacks = projects.iter().filter(|v| v.image_is_fallback).count();
        if fallbacks > 0 {
            tracing::warn!("{} projects have no image and use the fallback", fallbacks);
        }

        let json_output = render_json(&projects)?;
        let csv_output = render_csv(&projects)?;

        Ok(ExportResult {
            projects,
            json_output,
            csv_output,
        })
    }

    async fn load(&self, result: ExportResult) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let filename = self.config.filename_for(format).ok_or_else(|| {
                CatalogError::InvalidConfigValueError {
                    field: "formats".to_string(),
                    value: format.clone(),
                    reason: "Unsupported format".to_string(),
                }
            })?;

            let data = match format.as_str() {
                "json" => result.json_output.as_bytes(),
                _ => result.csv_output.as_bytes(),
            };

            tracing::debug!("Writing {} ({} bytes)", filename, data.len());
            self.storage.write_file(filename, data).await?;
            written.push(format!("{}/{}", self.config.output_path(), filename));
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportSettings;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                CatalogError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_transform_filters_sample_catalog() {
        let settings = ExportSettings {
            query: "platform".to_string(),
            ..ExportSettings::default()
        };
        let pipeline = ExportPipeline::new(MockStorage::new(), settings);

        let catalog = pipeline.extract().await.unwrap();
        let result = pipeline.transform(catalog).await.unwrap();

        let slugs: Vec<&str> = result.projects.iter().map(|v| v.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["e-commerce-platform", "blog-platform", "virtual-event-platform"]
        );
        assert!(result.csv_output.starts_with("slug,title"));
        assert_eq!(
            result.projects[1].route,
            "/portfolio.github.io/projects/blog-platform"
        );
    }

    #[tokio::test]
    async fn test_transform_marks_missing_images_as_fallback() {
        let assets = tempfile::TempDir::new().unwrap();
        std::fs::write(assets.path().join("blog-platform.jpg"), b"img").unwrap();

        let settings = ExportSettings {
            query: "platform".to_string(),
            assets_dir: Some(assets.path().to_string_lossy().into_owned()),
            ..ExportSettings::default()
        };
        let pipeline = ExportPipeline::new(MockStorage::new(), settings);

        let catalog = pipeline.extract().await.unwrap();
        let result = pipeline.transform(catalog).await.unwrap();

        let flags: Vec<bool> = result.projects.iter().map(|v| v.image_is_fallback).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(result.projects[1].image, "/images/projects/blog-platform.jpg");
        assert_eq!(result.projects[0].image, "/images/projects/placeholder.jpg");
    }

    #[tokio::test]
    async fn test_load_writes_only_requested_formats() {
        let storage = MockStorage::new();
        let settings = ExportSettings {
            tag: "Vue.js".to_string(),
            output_formats: vec!["json".to_string()],
            json_filename: "vue.json".to_string(),
            ..ExportSettings::default()
        };
        let pipeline = ExportPipeline::new(storage.clone(), settings);

        let catalog = pipeline.extract().await.unwrap();
        let result = pipeline.transform(catalog).await.unwrap();
        let written = pipeline.load(result).await.unwrap();

        assert_eq!(written, vec!["./output/vue.json".to_string()]);
        let json = storage.get_file("vue.json").await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert!(storage.get_file("projects.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_unsupported_format_fails_load() {
        let settings = ExportSettings {
            output_formats: vec!["xml".to_string()],
            ..ExportSettings::default()
        };
        let pipeline = ExportPipeline::new(MockStorage::new(), settings);

        let catalog = pipeline.extract().await.unwrap();
        let result = pipeline.transform(catalog).await.unwrap();
        assert!(matches!(
            pipeline.load(result).await,
            Err(CatalogError::InvalidConfigValueError { .. })
        ));
    }
}
