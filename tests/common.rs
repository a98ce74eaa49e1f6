//! Shared test utilities for integration tests.
//!
//! Provides helpers for building a temporary content directory holding a
//! technical report and its images, mirroring the layout the generator
//! consumes.

use anyhow::Result;
use std::fs;
use tempfile::TempDir;

/// Sample report exercising headings, lists, tables, citations,
/// footnotes, and a sized figure directive.
pub const SAMPLE_REPORT: &str = r#"# Hardware Accelerators

## Background

Floating point multiplication dominates inference cost.^1^

The approach[^1] replaces multiplications with integer additions.

- Linear-complexity multiplication
- Energy efficiency

| Metric | Baseline | Ours |
| ------ | -------- | ---- |
| Energy | 1.0x     | 0.2x |
| Area   | 1.0x     | 0.8x |

![[large] Figure 1: Accuracy across precisions](accuracy.png)

[^1]: L-Mul algorithm paper.
"#;

/// Creates a temporary content directory with the sample report and one
/// placeholder image.
///
/// # Returns
///
/// Temporary directory whose root is the content directory
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
#[allow(dead_code)]
pub fn create_test_content() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("technical-report.md"), SAMPLE_REPORT)?;

    let images = dir.path().join("images");
    fs::create_dir_all(&images)?;
    fs::write(images.join("accuracy.png"), b"not-a-real-png")?;

    Ok(dir)
}
