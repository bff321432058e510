use anyhow::Result;
use folio_catalog::utils::validation::Validate;
use folio_catalog::{CatalogEngine, CatalogError, ExportPipeline, ExportSettings, LocalStorage};
use tempfile::TempDir;

const CATALOG: &str = r##"
[site]
name = "Jane Doe"

[[projects]]
title = "Smart Home Dashboard"
description = "IoT dashboard for monitoring and controlling smart devices"
tags = ["Vue.js", "MQTT"]
github_url = "https://github.com/janedoe/smart-home"
demo_url = "#"

[[projects]]
title = "Fitness Tracker"
description = "Mobile app for tracking workouts, nutrition goals"
tags = ["Flutter", "Firebase"]

[[projects]]
title = "Task Management System"
description = "Collaborative project management tool"
tags = ["Vue.js", "Firebase"]
"##;

fn write_catalog(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_end_to_end_export_with_assets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();
    let assets_dir = temp_dir.path().join("images");
    std::fs::create_dir_all(&assets_dir)?;
    std::fs::write(assets_dir.join("smart-home-dashboard.webp"), b"webp")?;
    std::fs::write(assets_dir.join("task-management-system.jpg"), b"jpg")?;

    let settings = ExportSettings {
        catalog_path: Some(write_catalog(&temp_dir, CATALOG)?),
        output_path: output_path.clone(),
        assets_dir: Some(assets_dir.to_str().unwrap().to_string()),
        ..ExportSettings::default()
    };
    settings.validate()?;

    let storage = LocalStorage::new(output_path.clone());
    let engine = CatalogEngine::new(ExportPipeline::new(storage, settings));
    let written = engine.run().await?;

    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("projects.json"));
    assert!(written[1].ends_with("projects.csv"));

    let json = std::fs::read_to_string(std::path::Path::new(&output_path).join("projects.json"))?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["image"], "/images/projects/smart-home-dashboard.webp");
    assert_eq!(items[1]["image"], "/images/projects/placeholder.jpg");
    assert_eq!(items[2]["image"], "/images/projects/task-management-system.jpg");

    let csv = std::fs::read_to_string(std::path::Path::new(&output_path).join("projects.csv"))?;
    assert!(csv.contains("\"Mobile app for tracking workouts, nutrition goals\""));
    assert!(csv.contains("Vue.js|MQTT"));
    assert_eq!(csv.lines().count(), 4);

    Ok(())
}

#[tokio::test]
async fn test_export_applies_query_and_tag() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let settings = ExportSettings {
        catalog_path: Some(write_catalog(&temp_dir, CATALOG)?),
        output_path: output_path.clone(),
        query: "DASHBOARD".to_string(),
        tag: "Vue.js".to_string(),
        output_formats: vec!["csv".to_string()],
        ..ExportSettings::default()
    };

    let engine = CatalogEngine::new(ExportPipeline::new(
        LocalStorage::new(output_path.clone()),
        settings,
    ));
    engine.run().await?;

    let csv = std::fs::read_to_string(temp_dir.path().join("projects.csv"))?;
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("smart-home-dashboard,Smart Home Dashboard,"));
    assert!(!temp_dir.path().join("projects.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_export_fails_fast_on_duplicate_titles() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = format!(
        "{}\n[[projects]]\ntitle = \"Fitness Tracker\"\n",
        CATALOG
    );

    let settings = ExportSettings {
        catalog_path: Some(write_catalog(&temp_dir, &catalog)?),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        ..ExportSettings::default()
    };

    let engine = CatalogEngine::new(ExportPipeline::new(
        LocalStorage::new(settings.output_path.clone()),
        settings,
    ));
    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateTitleError { .. }));
    assert!(!temp_dir.path().join("projects.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_catalog_file_is_io_error() {
    let settings = ExportSettings {
        catalog_path: Some("/nonexistent/portfolio.toml".to_string()),
        ..ExportSettings::default()
    };
    let engine = CatalogEngine::new(ExportPipeline::new(
        LocalStorage::new("./unused".to_string()),
        settings,
    ));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}
