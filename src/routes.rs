//! URL construction for the deployed site.
//!
//! The site is exported under a fixed public base path (the repository
//! name on the hosting provider). Every page, stylesheet, and image
//! reference in generated HTML goes through [`Routes`] so the prefix is
//! applied uniformly.

/// Builds base-path-prefixed URLs for pages, assets, and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Routes {
    /// Creates routes for the given public base path.
    ///
    /// The prefix is normalized: a trailing slash is stripped and an
    /// empty or "/" base path collapses to no prefix at all.
    ///
    /// # Arguments
    ///
    /// * `base_path`: Public base path prefix (e.g. "/my-project-site")
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base = base_path.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// URL for a page route.
    ///
    /// # Arguments
    ///
    /// * `route`: Route relative to the site root ("" for the landing
    ///   page, "demo/" or "team/" for section pages)
    pub fn page(&self, route: &str) -> String {
        format!("{}/{}", self.base, route)
    }

    /// URL for a bundled CSS asset.
    pub fn asset(&self, name: &str) -> String {
        format!("{}/assets/{}", self.base, name)
    }

    /// URL for a static image.
    pub fn image(&self, name: &str) -> String {
        format!("{}/images/{}", self.base, name)
    }

    /// Resolves an image source reference from markdown content.
    ///
    /// Absolute URLs, data URLs, and in-page anchors pass through
    /// unchanged. Root-relative references get the base path prefix.
    /// Anything else is treated as a file in the deployed image
    /// directory, with any leading "./" stripped.
    ///
    /// # Arguments
    ///
    /// * `src`: Image source as written in the markdown document
    ///
    /// # Returns
    ///
    /// Deployable URL for the reference
    pub fn resolve_src(&self, src: &str) -> String {
        if src.starts_with("http://")
            || src.starts_with("https://")
            || src.starts_with("data:")
            || src.starts_with('#')
        {
            return src.to_string();
        }

        if let Some(rooted) = src.strip_prefix('/') {
            return format!("{}/{}", self.base, rooted);
        }

        let trimmed = src.strip_prefix("./").unwrap_or(src);
        self.image(trimmed)
    }
}
