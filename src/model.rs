//! Data model for parsed header documentation: format-agnostic.

use serde::{Serialize, Serializer};

/// A single documented function declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    pub return_type: String,
    /// @brief text plus untagged continuation lines
    #[serde(serialize_with = "trimmed")]
    pub description: String,
    /// @return text plus continuation lines mentioning "returns"
    #[serde(serialize_with = "trimmed")]
    pub returns: String,
    /// @param entries, in comment order
    pub params: Vec<ParamDoc>,
}

/// Parsed @param entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(serialize_with = "trimmed")]
    pub description: String,
    /// Filled from the declaration by position; empty if the declaration
    /// has fewer arguments than documented params.
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Comment block that has been opened but not yet tied to a declaration.
#[derive(Debug, Default)]
pub struct PendingDoc {
    /// 1-based line of the `/**` marker
    pub opened_at: usize,
    pub description: String,
    pub returns: String,
    pub params: Vec<ParamDoc>,
}

impl PendingDoc {
    pub fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            ..Default::default()
        }
    }

    /// Attach the declaration's name and return type.
    pub fn finalize(self, name: &str, return_type: &str) -> FunctionDoc {
        FunctionDoc {
            name: name.to_string(),
            return_type: return_type.to_string(),
            description: self.description,
            returns: self.returns,
            params: self.params,
        }
    }
}

fn trimmed<S: Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(text.trim())
}
