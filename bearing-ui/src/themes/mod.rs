//! Presentation styles for the specification form.
//!
//! Both styles render the same fields and the same generated text; they
//! differ only in header treatment, label casing and which result cards are
//! shown.

mod palette;

use std::fmt;

use bearing_core::Field;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use palette::{FormPalette, apply_form_style};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormStyle {
    /// Compact card with a centered title.
    #[default]
    Classic,
    /// Colored banner header, uppercase labels and an extra make card.
    Hero,
}

impl FormStyle {
    pub fn palette(&self) -> FormPalette {
        FormPalette::for_style(*self)
    }

    pub fn title(&self) -> &'static str {
        "Bearing Specification"
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Classic => "Generate professional bearing specifications with API integration",
            Self::Hero => {
                "Generate professional bearing and accessories specifications with ease. \
                 Streamlined tools for industrial excellence."
            }
        }
    }

    pub fn footer(&self) -> Option<&'static str> {
        match self {
            Self::Classic => None,
            Self::Hero => Some("Professional bearing specifications for industrial applications"),
        }
    }

    /// Label text for `field` as this style prints it.
    pub fn label(
        &self,
        field: Field,
    ) -> String {
        match self {
            Self::Classic => field.label().to_string(),
            Self::Hero => field.label().to_uppercase(),
        }
    }

    /// Whether the output section repeats the make in its own card.
    pub fn shows_make_card(&self) -> bool {
        matches!(self, Self::Hero)
    }
}

impl fmt::Display for FormStyle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Hero => write!(f, "hero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hero_labels_are_uppercase() {
        assert_eq!(FormStyle::Hero.label(Field::SubType), "BEARING SUB-TYPE");
        assert_eq!(FormStyle::Classic.label(Field::SubType), "Bearing Sub-Type");
    }

    #[test]
    fn only_hero_has_footer_and_make_card() {
        assert!(FormStyle::Hero.footer().is_some());
        assert!(FormStyle::Hero.shows_make_card());
        assert_eq!(FormStyle::Classic.footer(), None);
        assert!(!FormStyle::Classic.shows_make_card());
    }

    #[test]
    fn style_names_round_trip_through_serde() {
        let style: FormStyle = serde_json::from_str("\"hero\"").unwrap();

        assert_eq!(style, FormStyle::Hero);
        assert_eq!(style.to_string(), "hero");
    }
}
