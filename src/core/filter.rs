use crate::core::tags::ALL_TAG;
use crate::domain::model::Project;

/// Search text and tag selection applied to a catalog.
///
/// Matching lowercases both sides with [`str::to_lowercase`] and checks
/// substring containment against the title and description. The text is not
/// trimmed, so a whitespace-only query only matches fields containing that
/// whitespace. Tag selection is exact; `"All"` or an empty tag selects every
/// project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub text: String,
    pub tag: String,
    pub limit: Option<usize>,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            tag: ALL_TAG.to_string(),
            limit: None,
        }
    }
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        Matcher::new(&self.text, &self.tag).matches(project)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let matcher = Matcher::new(&self.text, &self.tag);
        let matched = projects.iter().filter(|p| matcher.matches(p));
        match self.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }
}

/// Query with the search text lowercased once.
struct Matcher<'q> {
    needle: String,
    tag: &'q str,
}

impl<'q> Matcher<'q> {
    fn new(text: &str, tag: &'q str) -> Self {
        Self {
            needle: text.to_lowercase(),
            tag,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        self.matches_search(project) && self.matches_tag(project)
    }

    fn matches_search(&self, project: &Project) -> bool {
        self.needle.is_empty()
            || project.title.to_lowercase().contains(&self.needle)
            || project.description.to_lowercase().contains(&self.needle)
    }

    fn matches_tag(&self, project: &Project) -> bool {
        self.tag.is_empty() || self.tag == ALL_TAG || project.has_tag(self.tag)
    }
}

/// Narrows `projects` to those matching `query` and `tag`, preserving order.
pub fn filter<'a>(projects: &'a [Project], query: &str, tag: &str) -> Vec<&'a Project> {
    FilterQuery::new(query, tag).apply(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_catalog() -> Vec<Project> {
        vec![
            Project::new(
                "E-Commerce Platform",
                "Full-stack application built with React, Node.js, and MongoDB",
                &["React", "Node.js"],
            ),
            Project::new(
                "AI Image Generator",
                "Image generation tool using OpenAI's API and Next.js",
                &["Next.js", "TypeScript"],
            ),
        ]
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = spec_catalog();
        assert_eq!(
            titles(&filter(&catalog, "ai", ALL_TAG)),
            vec!["AI Image Generator"]
        );
        assert_eq!(
            titles(&filter(&catalog, "MONGODB", ALL_TAG)),
            vec!["E-Commerce Platform"]
        );
    }

    #[test]
    fn test_tag_selection() {
        let catalog = spec_catalog();
        assert_eq!(
            titles(&filter(&catalog, "", "React")),
            vec!["E-Commerce Platform"]
        );
        assert!(filter(&catalog, "", "react").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&spec_catalog(), "zzz", ALL_TAG).is_empty());
    }

    #[test]
    fn test_empty_tag_behaves_like_all() {
        let catalog = spec_catalog();
        assert_eq!(filter(&catalog, "", "").len(), 2);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let catalog = vec![
            Project::new("Blog", "markdown", &[]),
            Project::new("Blog Platform", "", &[]),
        ];
        assert_eq!(titles(&filter(&catalog, " ", ALL_TAG)), vec!["Blog Platform"]);
        assert!(filter(&catalog, "  ", ALL_TAG).is_empty());
    }

    #[test]
    fn test_search_and_tag_combine() {
        let catalog = spec_catalog();
        assert!(filter(&catalog, "ai", "React").is_empty());
        assert_eq!(filter(&catalog, "platform", "React").len(), 1);
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let catalog = vec![
            Project::new("One", "", &["x"]),
            Project::new("Two", "", &["y"]),
            Project::new("Three", "", &["x"]),
            Project::new("Four", "", &["x"]),
        ];
        let query = FilterQuery::new("", "x").with_limit(Some(2));
        assert_eq!(titles(&query.apply(&catalog)), vec!["One", "Three"]);
    }
}
