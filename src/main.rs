use clap::Parser;
use folio_catalog::app::render::{
    project_views, render_csv, render_detail, render_json, render_profile, render_table,
};
use folio_catalog::config::cli::{Command, ListArgs, OutputFormat, ShowArgs};
use folio_catalog::config::toml_config::load_catalog;
use folio_catalog::utils::{logger, validation::Validate};
use folio_catalog::{
    CatalogEngine, CatalogError, CliConfig, ExportPipeline, LocalStorage, Result,
};

fn list(config: &CliConfig, args: &ListArgs) -> Result<()> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let query = args.filter.to_query();
    let base_path = catalog.profile().site.base_path.as_deref();
    let views = project_views(catalog.filter(&query), &args.assets.resolver(), base_path);
    tracing::debug!("{} of {} projects matched", views.len(), catalog.len());

    match args.format {
        OutputFormat::Table => print!("{}", render_table(&views)),
        OutputFormat::Json => println!("{}", render_json(&views)?),
        OutputFormat::Csv => print!("{}", render_csv(&views)?),
    }
    Ok(())
}

fn show(config: &CliConfig, args: &ShowArgs) -> Result<()> {
    let slug = args.slug.as_str();
    let catalog = load_catalog(config.catalog.as_deref())?;
    let project = catalog
        .get_by_slug(slug)
        .ok_or_else(|| CatalogError::NotFoundError {
            slug: slug.to_string(),
        })?;

    let base_path = catalog.profile().site.base_path.as_deref();
    let views = project_views([(slug, project)], &args.assets.resolver(), base_path);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&views[0])?);
    } else {
        print!("{}", render_detail(&views[0]));
    }
    Ok(())
}

async fn run(config: &CliConfig) -> Result<()> {
    match &config.command {
        Command::List(args) => list(config, args),
        Command::Tags => {
            let catalog = load_catalog(config.catalog.as_deref())?;
            for tag in catalog.tags() {
                println!("{}", tag);
            }
            Ok(())
        }
        Command::Show(args) => show(config, args),
        Command::Profile => {
            let catalog = load_catalog(config.catalog.as_deref())?;
            print!("{}", render_profile(catalog.profile())?);
            Ok(())
        }
        Command::Validate => {
            let catalog = load_catalog(config.catalog.as_deref())?;
            println!(
                "✅ Catalog is valid: {} projects, {} tags",
                catalog.len(),
                catalog.tags().len() - 1
            );
            Ok(())
        }
        Command::Export(args) => {
            let settings = config.export_settings(args);
            settings.validate()?;

            let storage = LocalStorage::new(settings.output_path.clone());
            let engine = CatalogEngine::new(ExportPipeline::new(storage, settings));
            for path in engine.run().await? {
                println!("📁 {}", path);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
