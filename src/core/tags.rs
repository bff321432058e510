use crate::domain::model::Project;
use std::collections::HashSet;

/// Sentinel tag selecting every project.
pub const ALL_TAG: &str = "All";

/// Every distinct tag in the catalog in first-seen order, with [`ALL_TAG`]
/// first. An empty catalog yields just `["All"]`.
pub fn tag_index(projects: &[Project]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_TAG);

    let mut tags = vec![ALL_TAG.to_string()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}
