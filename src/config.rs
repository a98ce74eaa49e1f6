//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Name of the report document inside the content directory.
const REPORT_FILE: &str = "technical-report.md";

/// Command line configuration for the site generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "accelsite", version, about, long_about = None)]
pub struct Config {
    /// Content directory (technical report and images)
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public base path prefix applied to generated routes and assets
    #[arg(long, default_value = "/hardware-accelerators-site")]
    pub base_path: String,

    /// Technical report link for the hero button
    #[arg(
        long,
        default_value = "https://github.com/nakschou/artifact-directory-template/blob/main/report.pdf"
    )]
    pub report_url: String,

    /// Project repository link for the hero button
    #[arg(long, default_value = "https://github.com/ninjakaib/hardware-accelerators")]
    pub repo_url: String,

    /// Embedded demo application URL
    #[arg(
        long,
        default_value = "https://justintchou-hardware-accelerators-demo.hf.space"
    )]
    pub demo_url: String,

    /// Open the generated site in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base path is non-empty but does not start
    /// with a slash.
    pub fn validate(&self) -> Result<()> {
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            bail!(
                "Base path must start with '/' or be empty: {}",
                self.base_path
            );
        }

        Ok(())
    }

    /// Path to the technical report markdown file.
    pub fn report_file(&self) -> PathBuf {
        self.content.join(REPORT_FILE)
    }

    /// Path to the static image directory.
    pub fn images_dir(&self) -> PathBuf {
        self.content.join("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base_path: &str) -> Config {
        Config {
            content: PathBuf::from("content"),
            output: PathBuf::from("dist"),
            base_path: base_path.to_string(),
            report_url: "https://r.example".to_string(),
            repo_url: "https://g.example".to_string(),
            demo_url: "https://d.example".to_string(),
            open: false,
        }
    }

    #[test]
    fn test_validate_accepts_slash_prefix() {
        // Arrange
        let config = config_with_base("/my-site");

        // Act & Assert
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_base() {
        // Arrange
        let config = config_with_base("");

        // Act & Assert
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_slash() {
        // Arrange
        let config = config_with_base("my-site");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Bare base path should be rejected");
        assert!(
            result.unwrap_err().to_string().contains("start with '/'"),
            "Error should explain the requirement"
        );
    }

    #[test]
    fn test_report_file_under_content_dir() {
        // Arrange
        let config = config_with_base("/s");

        // Act & Assert
        assert_eq!(
            config.report_file(),
            PathBuf::from("content/technical-report.md")
        );
        assert_eq!(config.images_dir(), PathBuf::from("content/images"));
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = config_with_base("/s");

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.base_path, original.base_path);
        assert_eq!(cloned.output, original.output);
        assert_eq!(cloned.demo_url, original.demo_url);
    }
}
