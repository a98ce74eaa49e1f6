use accelsite::pages::home::HomePageData;
use accelsite::{Config, ContentState, MarkdownRenderer, Routes, pages};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Copies static images from the content directory into the site output.
///
/// Images are copied unprocessed. A missing or unreadable image directory
/// is not fatal: the report simply renders without local figures.
///
/// # Arguments
///
/// * `images_dir`: Source image directory inside the content directory
/// * `output_dir`: Site output root
///
/// # Returns
///
/// Number of images copied
fn copy_images(images_dir: &Path, output_dir: &Path) -> Result<usize> {
    let entries = match fs::read_dir(images_dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!(
                "Warning: No image directory at {}: {}",
                images_dir.display(),
                e
            );
            return Ok(0);
        }
    };

    let dest_dir = output_dir.join("images");
    fs::create_dir_all(&dest_dir).context("Failed to create image output directory")?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.context("Failed to read image directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };

        fs::copy(&path, dest_dir.join(name))
            .with_context(|| format!("Failed to copy image {}", path.display()))?;
        copied += 1;
    }

    Ok(copied)
}

/// Writes a page's HTML under the output directory, creating parents.
fn write_page(output_dir: &Path, relative: &str, html: String) -> Result<()> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }

    fs::write(&path, html)
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    println!("Generated: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    accelsite::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let copied = copy_images(&config.images_dir(), &config.output)?;
    if copied > 0 {
        println!("Copied {} images", copied);
    }

    let routes = Routes::new(&config.base_path);

    // Render the report up front so every build failure surfaces here,
    // while a missing report file degrades to an error page.
    let report = match accelsite::load_report(&config.report_file()) {
        ContentState::Loaded(markdown) => {
            let renderer = MarkdownRenderer::with_routes(routes.clone());
            let html = renderer
                .render(&markdown)
                .context("Failed to render technical report")?;
            ContentState::Loaded(html)
        }
        state => state,
    };

    let home = pages::home::generate(HomePageData {
        routes: &routes,
        report_url: &config.report_url,
        repo_url: &config.repo_url,
        report: &report,
    });
    write_page(&config.output, "index.html", home.into_string())?;

    let demo = pages::demo::generate(&routes, &config.demo_url);
    write_page(&config.output, "demo/index.html", demo.into_string())?;

    let team = pages::team::generate(&routes);
    write_page(&config.output, "team/index.html", team.into_string())?;

    if config.open {
        let index_path = config.output.join("index.html");
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
