use serde::{Deserialize, Serialize};

/// Bearing families offered by the form's type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BearingType {
    #[default]
    DeepGrooveBall,
    CylindricalRoller,
    TaperedRoller,
    AngularContactBall,
    ThrustBall,
}

impl BearingType {
    pub const ALL: [Self; 5] = [
        Self::DeepGrooveBall,
        Self::CylindricalRoller,
        Self::TaperedRoller,
        Self::AngularContactBall,
        Self::ThrustBall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeepGrooveBall => "Deep Groove Ball Bearing",
            Self::CylindricalRoller => "Cylindrical Roller Bearing",
            Self::TaperedRoller => "Tapered Roller Bearing",
            Self::AngularContactBall => "Angular Contact Ball Bearing",
            Self::ThrustBall => "Thrust Ball Bearing",
        }
    }

    /// Exact label, or `"Taper Roller Bearing"`, the older spelling some
    /// form variants still send.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "Taper Roller Bearing" {
            return Some(Self::TaperedRoller);
        }
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Series designations offered by the sub-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubType {
    #[default]
    Series6000,
    Series6200,
    Series6300,
    Series6400,
    NuSeries,
}

impl SubType {
    pub const ALL: [Self; 5] = [
        Self::Series6000,
        Self::Series6200,
        Self::Series6300,
        Self::Series6400,
        Self::NuSeries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Series6000 => "6000 Series",
            Self::Series6200 => "6200 Series",
            Self::Series6300 => "6300 Series",
            Self::Series6400 => "6400 Series",
            Self::NuSeries => "NU Series",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Seal and shield designations.
///
/// `as_str` is the designation that goes into the generated text;
/// `to_long_str` is the explanatory label shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Seal {
    #[default]
    Open,
    MetalShields,
    RubberSeals,
    Dustproof,
}

impl Seal {
    pub const ALL: [Self; 4] = [
        Self::Open,
        Self::MetalShields,
        Self::RubberSeals,
        Self::Dustproof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN (Default)",
            Self::MetalShields => "ZZ",
            Self::RubberSeals => "2RS",
            Self::Dustproof => "DU",
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN (Default)",
            Self::MetalShields => "ZZ (Metal Shields)",
            Self::RubberSeals => "2RS (Rubber Seals)",
            Self::Dustproof => "DU (Dustproof Type)",
        }
    }

    /// Accepts either the short designation or the long label.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|seal| seal.as_str() == s || seal.to_long_str() == s)
    }
}

/// Option labels for a selector, in display order.
pub fn bearing_type_options() -> Vec<&'static str> {
    BearingType::ALL.iter().map(BearingType::as_str).collect()
}

pub fn sub_type_options() -> Vec<&'static str> {
    SubType::ALL.iter().map(SubType::as_str).collect()
}

pub fn seal_options() -> Vec<&'static str> {
    Seal::ALL.iter().map(Seal::as_str).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bearing_type_parse_accepts_every_label() {
        for t in BearingType::ALL {
            assert_eq!(BearingType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn bearing_type_parse_accepts_taper_spelling() {
        assert_eq!(
            BearingType::parse("Taper Roller Bearing"),
            Some(BearingType::TaperedRoller)
        );
        assert_eq!(BearingType::TaperedRoller.as_str(), "Tapered Roller Bearing");
    }

    #[test]
    fn bearing_type_parse_rejects_unknown_label() {
        assert_eq!(BearingType::parse("Needle Roller Bearing"), None);
    }

    #[test]
    fn defaults_match_form_defaults() {
        assert_eq!(BearingType::default().as_str(), "Deep Groove Ball Bearing");
        assert_eq!(SubType::default().as_str(), "6000 Series");
        assert_eq!(Seal::default().as_str(), "OPEN (Default)");
    }

    #[test]
    fn seal_parse_accepts_short_and_long_forms() {
        assert_eq!(Seal::parse("ZZ"), Some(Seal::MetalShields));
        assert_eq!(Seal::parse("ZZ (Metal Shields)"), Some(Seal::MetalShields));
        assert_eq!(Seal::parse("2RS"), Some(Seal::RubberSeals));
        assert_eq!(Seal::parse("zz"), None);
    }

    #[test]
    fn option_lists_start_with_the_default() {
        assert_eq!(bearing_type_options()[0], BearingType::default().as_str());
        assert_eq!(sub_type_options()[0], SubType::default().as_str());
        assert_eq!(seal_options()[0], Seal::default().as_str());
        assert_eq!(sub_type_options().len(), 5);
    }
}
