//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const HERO: &str = include_str!("../assets/components/hero.css");
const PERSON: &str = include_str!("../assets/components/person.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const TEAM_PAGE: &str = include_str!("../assets/page-team.css");
const DEMO_PAGE: &str = include_str!("../assets/page-demo.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "home.css", &[BASE, NAV, HERO, HOME_PAGE])?;
    write_bundled(assets_dir, "team.css", &[BASE, NAV, PERSON, TEAM_PAGE])?;
    write_bundled(assets_dir, "demo.css", &[BASE, NAV, DEMO_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
