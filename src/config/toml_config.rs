use crate::core::catalog::Catalog;
use crate::core::links::whatsapp_link;
use crate::domain::model::{Experience, Group, Profile, Project, SiteInfo};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_email, validate_link, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// Sample portfolio compiled into the binary.
pub const SAMPLE_CATALOG: &str = include_str!("../../data/portfolio.toml");

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Group>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl CatalogFile {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::TomlParseError {
            message: e.to_string(),
        })
    }

    pub fn sample() -> Result<Self> {
        Self::from_toml_str(SAMPLE_CATALOG)
    }

    /// 替換環境變數 (例如 ${GITHUB_USER})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Validates, then builds the catalog with its slug index.
    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        let profile = Profile {
            site: self.site,
            skills: self.skills,
            experience: self.experience,
        };
        Catalog::with_profile(self.projects, profile)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        for (i, project) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
            if let Some(link) = &project.github_url {
                validate_link(&format!("projects[{}].github_url", i), link)?;
            }
            if let Some(link) = &project.demo_url {
                validate_link(&format!("projects[{}].demo_url", i), link)?;
            }
            for (j, group) in project.tech_stack.iter().enumerate() {
                validate_non_empty_string(
                    &format!("projects[{}].tech_stack[{}].category", i, j),
                    &group.category,
                )?;
            }
        }

        for (i, group) in self.skills.iter().enumerate() {
            validate_non_empty_string(&format!("skills[{}].category", i), &group.category)?;
        }

        for (i, job) in self.experience.iter().enumerate() {
            validate_non_empty_string(&format!("experience[{}].company", i), &job.company)?;
            validate_non_empty_string(&format!("experience[{}].position", i), &job.position)?;
        }

        validate_site(&self.site)
    }
}

fn validate_site(site: &SiteInfo) -> Result<()> {
    if let Some(base_path) = &site.base_path {
        if !base_path.starts_with('/') {
            return Err(CatalogError::InvalidConfigValueError {
                field: "site.base_path".to_string(),
                value: base_path.clone(),
                reason: "Base path must start with '/'".to_string(),
            });
        }
    }
    if let Some(link) = &site.cv_url {
        validate_link("site.cv_url", link)?;
    }

    let contact = &site.contact;
    if let Some(email) = &contact.email {
        validate_email("site.contact.email", email)?;
    }
    if let Some(github) = &contact.github {
        validate_non_empty_string("site.contact.github", github)?;
    }
    match (&contact.whatsapp_phone, &contact.whatsapp_message) {
        (Some(phone), message) => {
            whatsapp_link(phone, message.as_deref())?;
        }
        (None, Some(_)) => {
            return Err(CatalogError::MissingConfigError {
                field: "site.contact.whatsapp_phone".to_string(),
            });
        }
        (None, None) => {}
    }

    Ok(())
}

/// Loads the catalog at `path`, or the embedded sample when `None`.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let file = match path {
        Some(path) => {
            tracing::debug!("Reading catalog from {}", path);
            CatalogFile::from_file(path)?
        }
        None => {
            tracing::debug!("Using embedded sample catalog");
            CatalogFile::sample()?
        }
    };
    file.into_catalog()
}
