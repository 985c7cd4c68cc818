use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{BearingType, Seal, SubType};

/// The only category the form describes. Not user-editable.
pub const CATEGORY: &str = "Bearing";

/// The field values a generate action works from.
///
/// Serialized with the wire names the backend `/generate` endpoint expects
/// (`type`, `subtype`, `seals`, `c3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificationRequest {
    pub category: String,
    #[serde(rename = "type")]
    pub bearing_type: String,
    #[serde(rename = "subtype")]
    pub sub_type: String,
    pub number: String,
    #[serde(rename = "seals")]
    pub seal: String,
    pub suffixes: String,
    #[serde(rename = "c3")]
    pub has_c3: bool,
    pub make: String,
}

impl Default for SpecificationRequest {
    fn default() -> Self {
        Self {
            category: CATEGORY.to_string(),
            bearing_type: BearingType::default().as_str().to_string(),
            sub_type: SubType::default().as_str().to_string(),
            number: String::new(),
            seal: Seal::default().as_str().to_string(),
            suffixes: String::new(),
            has_c3: false,
            make: String::new(),
        }
    }
}

impl fmt::Display for SpecificationRequest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Category:     {}", self.category)?;
        writeln!(f, "Bearing type: {}", self.bearing_type)?;
        writeln!(f, "Sub-type:     {}", self.sub_type)?;
        writeln!(f, "Number:       {}", or_none(&self.number))?;
        writeln!(f, "Seal:         {}", self.seal)?;
        writeln!(f, "Suffixes:     {}", or_none(&self.suffixes))?;
        writeln!(f, "C3:           {}", self.has_c3)?;
        write!(f, "Make:         {}", or_none(&self.make))
    }
}

fn or_none(s: &str) -> &str {
    if s.trim().is_empty() { "(none)" } else { s }
}
