use serde::{Deserialize, Serialize};

/// A named input on the specification form.
///
/// Names follow the request's wire names so input events can be routed by
/// name the same way the backend reads the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Category,
    BearingType,
    SubType,
    Number,
    Seal,
    Suffixes,
    C3,
    Make,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Category,
        Self::BearingType,
        Self::SubType,
        Self::Number,
        Self::Seal,
        Self::Suffixes,
        Self::C3,
        Self::Make,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::BearingType => "type",
            Self::SubType => "subtype",
            Self::Number => "number",
            Self::Seal => "seals",
            Self::Suffixes => "suffixes",
            Self::C3 => "c3",
            Self::Make => "make",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::BearingType => "Bearing Type",
            Self::SubType => "Bearing Sub-Type",
            Self::Number => "Bearing Number / Code",
            Self::Seal => "Seals / Shields",
            Self::Suffixes => "Other Suffixes",
            Self::C3 => "C3 Clearance",
            Self::Make => "Make / Application (Optional)",
        }
    }

    /// Example text for free-text inputs.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Number => Some("e.g., NU210"),
            Self::Suffixes => Some("e.g., TN9, P6"),
            Self::Make => Some("e.g., Toyota, SKF, Front Wheel Hub"),
            _ => None,
        }
    }

    /// Checkbox inputs toggle a flag instead of taking text.
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::C3)
    }

    /// Fields the user cannot change.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Category)
    }
}
