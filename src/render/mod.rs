//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::FunctionDoc;
use anyhow::{anyhow, Result};

/// Trait for rendering parsed functions into a specific output format.
pub trait Renderer {
    fn render(&self, functions: &[FunctionDoc]) -> Result<String>;
}

/// Create a renderer for the given format name.
///
/// `width` only affects formats that wrap free text.
pub fn create_renderer(format: &str, width: usize) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer { width })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
