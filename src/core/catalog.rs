use crate::core::filter::FilterQuery;
use crate::core::slug::slugify;
use crate::core::tags::tag_index;
use crate::domain::model::{Profile, Project};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

/// Immutable, ordered project collection with slugs computed once at
/// construction.
///
/// Construction rejects blank titles, duplicate titles and titles that
/// collapse to the same slug, so every lookup by slug is unambiguous.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    slugs: Vec<String>,
    by_slug: HashMap<String, usize>,
    profile: Profile,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        Self::with_profile(projects, Profile::default())
    }

    pub fn with_profile(projects: Vec<Project>, profile: Profile) -> Result<Self> {
        let mut slugs = Vec::with_capacity(projects.len());
        let mut by_slug: HashMap<String, usize> = HashMap::with_capacity(projects.len());
        let mut by_title: HashMap<&str, usize> = HashMap::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::InvalidConfigValueError {
                    field: format!("projects[{}].title", index),
                    value: project.title.clone(),
                    reason: "Title cannot be empty or whitespace-only".to_string(),
                });
            }

            if by_title.insert(project.title.as_str(), index).is_some() {
                return Err(CatalogError::DuplicateTitleError {
                    title: project.title.clone(),
                });
            }

            let slug = slugify(&project.title);
            if let Some(&existing) = by_slug.get(&slug) {
                return Err(CatalogError::DuplicateSlugError {
                    slug,
                    first: projects[existing].title.clone(),
                    second: project.title.clone(),
                });
            }
            by_slug.insert(slug.clone(), index);
            slugs.push(slug);
        }

        tracing::debug!("Catalog built with {} projects", projects.len());

        Ok(Self {
            projects,
            slugs,
            by_slug,
            profile,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects paired with their slugs, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Project)> {
        self.slugs.iter().map(String::as_str).zip(self.projects.iter())
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Project> {
        self.by_slug.get(slug).map(|&i| &self.projects[i])
    }

    pub fn tags(&self) -> Vec<String> {
        tag_index(&self.projects)
    }

    /// Matching projects with their slugs, in catalog order.
    pub fn filter(&self, query: &FilterQuery) -> Vec<(&str, &Project)> {
        let matched = self.iter().filter(|(_, p)| query.matches(p));
        match query.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }
}
