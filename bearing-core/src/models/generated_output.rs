use std::fmt;

use serde::{Deserialize, Serialize};

/// The two strings produced for a [`super::SpecificationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedOutput {
    /// Short `" | "`-separated line.
    pub specification: String,
    /// Sentence form.
    pub description: String,
}

impl fmt::Display for GeneratedOutput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Specification: {}", self.specification)?;
        write!(f, "Description:   {}", self.description)
    }
}
