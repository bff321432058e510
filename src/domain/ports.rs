use crate::core::assets::AssetResolver;
use crate::core::catalog::Catalog;
use crate::core::filter::FilterQuery;
use crate::domain::model::ExportResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Catalog file to load; `None` selects the embedded sample catalog.
    fn catalog_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn filter_query(&self) -> FilterQuery;
    fn output_formats(&self) -> &[String];
    fn asset_resolver(&self) -> AssetResolver;
    fn filename_for(&self, format: &str) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Catalog>;
    async fn transform(&self, catalog: Catalog) -> Result<ExportResult>;
    async fn load(&self, result: ExportResult) -> Result<Vec<String>>;
}
