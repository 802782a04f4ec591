//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the parsed functions as `{"functions": [...]}`. Free text is
//! trimmed but not wrapped.

use crate::model::FunctionDoc;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Output<'a> {
    functions: &'a [FunctionDoc],
}

impl Renderer for JsonRenderer {
    fn render(&self, functions: &[FunctionDoc]) -> Result<String> {
        serde_json::to_string_pretty(&Output { functions }).context("failed to serialize JSON")
    }
}
