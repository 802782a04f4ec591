//! Markdown renderer for the API reference page.

use crate::model::*;
use crate::render::Renderer;
use crate::wrap::format_text;
use anyhow::Result;

pub struct MarkdownRenderer {
    pub width: usize,
}

impl Renderer for MarkdownRenderer {
    fn render(&self, functions: &[FunctionDoc]) -> Result<String> {
        let mut output = String::from("## API Documentation\n\n");
        for func in functions {
            output.push_str(&self.render_function(func));
        }
        Ok(output)
    }
}

impl MarkdownRenderer {
    fn wrap(&self, text: &str) -> String {
        format_text(text.trim(), self.width)
    }

    /// Render a single function's documentation block.
    ///
    /// Every section ends with a blank line; Parameters is emitted even when empty.
    fn render_function(&self, func: &FunctionDoc) -> String {
        let mut out = String::new();

        out.push_str(&format!("### {}\n\n", func.name));
        out.push_str(&format!(
            "**Description:**\n\n{}\n\n",
            self.wrap(&func.description)
        ));

        out.push_str("#### Parameters\n\n");
        for param in &func.params {
            out.push_str(&format!(
                "- **{}** (`{}`):\n\n  {}\n\n",
                param.name,
                param.type_name,
                self.wrap(&param.description)
            ));
        }

        out.push_str(&format!(
            "**Returns:**\n\n`{}` - {}\n\n",
            func.return_type,
            self.wrap(&func.returns)
        ));

        out
    }
}
