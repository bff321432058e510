use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order; returns the written paths.
    pub async fn run(&self) -> Result<Vec<String>> {
        let started = Instant::now();
        tracing::info!("Starting catalog export");

        tracing::debug!("Loading catalog...");
        let catalog = self.pipeline.extract().await?;
        tracing::info!("Loaded {} projects", catalog.len());

        tracing::debug!("Filtering and rendering...");
        let result = self.pipeline.transform(catalog).await?;
        tracing::info!("{} projects matched", result.projects.len());

        tracing::debug!("Writing output...");
        let written = self.pipeline.load(result).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        tracing::debug!("Export finished in {:?}", started.elapsed());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::{ExportResult, Project};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        transformed: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Catalog> {
            Catalog::new(vec![
                Project::new("Recipe Finder", "", &["Python"]),
                Project::new("Fitness Tracker", "", &["Flutter"]),
            ])
        }

        async fn transform(&self, catalog: Catalog) -> Result<ExportResult> {
            self.transformed.store(catalog.len(), Ordering::SeqCst);
            Ok(ExportResult {
                projects: Vec::new(),
                json_output: "[]".to_string(),
                csv_output: String::new(),
            })
        }

        async fn load(&self, result: ExportResult) -> Result<Vec<String>> {
            Ok(vec![format!("memory://{}", result.json_output)])
        }
    }

    #[test]
    fn test_run_chains_all_stages() {
        let engine = CatalogEngine::new(CountingPipeline {
            transformed: AtomicUsize::new(0),
        });

        let written = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(written, vec!["memory://[]".to_string()]);
        assert_eq!(engine.pipeline.transformed.load(Ordering::SeqCst), 2);
    }
}
