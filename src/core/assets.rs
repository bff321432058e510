use std::path::PathBuf;

pub const DEFAULT_IMAGE_PREFIX: &str = "/images/projects";
pub const DEFAULT_FALLBACK_IMAGE: &str = "/images/projects/placeholder.jpg";

/// Lookup order: optimized webp first, then the original jpg or png.
const PREFERRED_EXTENSIONS: [&str; 3] = ["webp", "jpg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// An image file for the slug exists under the asset root.
    Found(String),
    /// No image exists; the placeholder is used instead.
    Fallback(String),
    /// No asset root to check against; the conventional `.jpg` path.
    Unverified(String),
}

impl ResolvedAsset {
    pub fn path(&self) -> &str {
        match self {
            ResolvedAsset::Found(p) | ResolvedAsset::Fallback(p) | ResolvedAsset::Unverified(p) => p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedAsset::Fallback(_))
    }
}

/// Maps project slugs to public image paths.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: Option<PathBuf>,
    public_prefix: String,
    fallback: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self {
            root: None,
            public_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            fallback: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }
}

impl AssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the root only when one is given; without it paths are unverified.
    pub fn with_optional_root<P: Into<PathBuf>>(self, root: Option<P>) -> Self {
        match root {
            Some(root) => self.with_root(root),
            None => self,
        }
    }

    pub fn with_public_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.public_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn resolve(&self, slug: &str) -> ResolvedAsset {
        let Some(root) = &self.root else {
            return ResolvedAsset::Unverified(format!("{}/{}.jpg", self.public_prefix, slug));
        };

        for ext in PREFERRED_EXTENSIONS {
            let file_name = format!("{}.{}", slug, ext);
            if root.join(&file_name).is_file() {
                return ResolvedAsset::Found(format!("{}/{}", self.public_prefix, file_name));
            }
        }

        tracing::debug!("No image for '{}' under {}, using fallback", slug, root.display());
        ResolvedAsset::Fallback(self.fallback.clone())
    }
}
