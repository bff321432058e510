use crate::config::ExportSettings;
use crate::core::assets::{AssetResolver, DEFAULT_FALLBACK_IMAGE, DEFAULT_IMAGE_PREFIX};
use crate::core::filter::FilterQuery;
use crate::core::tags::ALL_TAG;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio-catalog")]
#[command(about = "Browse, search and export a portfolio project catalog")]
pub struct CliConfig {
    /// Path to a TOML catalog file (defaults to the built-in sample catalog)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List projects matching a search and tag
    List(ListArgs),
    /// Show the tag index
    Tags,
    /// Show one project's detail page
    Show(ShowArgs),
    /// Show the skills and experience sections
    Profile,
    /// Load and validate the catalog
    Validate,
    /// Write matching projects to files
    Export(ExportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Tag to select; "All" selects every project
    #[arg(short, long, default_value = ALL_TAG)]
    pub tag: String,

    /// Keep at most this many matches
    #[arg(long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    pub fn to_query(&self) -> FilterQuery {
        FilterQuery::new(self.query.clone(), self.tag.clone()).with_limit(self.limit)
    }
}

/// Where project images live and how they are addressed.
#[derive(Debug, Clone, Args)]
pub struct AssetArgs {
    /// Directory holding project images, checked for existence
    #[arg(long)]
    pub assets_dir: Option<String>,

    #[arg(long, default_value = DEFAULT_IMAGE_PREFIX)]
    pub image_prefix: String,

    #[arg(long, default_value = DEFAULT_FALLBACK_IMAGE)]
    pub fallback_image: String,
}

impl AssetArgs {
    pub fn resolver(&self) -> AssetResolver {
        AssetResolver::new()
            .with_optional_root(self.assets_dir.as_deref())
            .with_public_prefix(self.image_prefix.clone())
            .with_fallback(self.fallback_image.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub assets: AssetArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Project slug, e.g. ai-image-generator
    pub slug: String,

    #[command(flatten)]
    pub assets: AssetArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json,csv")]
    pub formats: Vec<String>,

    #[command(flatten)]
    pub assets: AssetArgs,
}

impl CliConfig {
    pub fn export_settings(&self, args: &ExportArgs) -> ExportSettings {
        ExportSettings {
            catalog_path: self.catalog.clone(),
            output_path: args.output_path.clone(),
            query: args.filter.query.clone(),
            tag: args.filter.tag.clone(),
            limit: args.filter.limit,
            output_formats: args.formats.clone(),
            assets_dir: args.assets.assets_dir.clone(),
            image_prefix: args.assets.image_prefix.clone(),
            fallback_image: args.assets.fallback_image.clone(),
            ..ExportSettings::default()
        }
    }
}
