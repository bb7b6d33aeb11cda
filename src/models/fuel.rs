use std::borrow::Cow;

/// Colour used for labels outside the controlled vocabulary.
pub const UNKNOWN_FUEL_COLOR: &str = "#888888";

/// One entry of the controlled fuel-type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelType {
    pub label: &'static str,
    pub color: &'static str,
    pub renewable: bool,
}

const VOCABULARY: &[FuelType] = &[
    FuelType { label: "Black Coal", color: "#333536", renewable: false },
    FuelType { label: "Brown Coal", color: "#97785C", renewable: false },
    FuelType { label: "Gas", color: "#34B9B3", renewable: false },
    FuelType { label: "Natural Gas", color: "#34B9B3", renewable: false },
    FuelType { label: "Liquid Fuel", color: "#FE5F55", renewable: false },
    FuelType { label: "Solar", color: "#FFD565", renewable: true },
    FuelType { label: "Utility-scale Solar", color: "#FFD565", renewable: true },
    FuelType { label: "Wind", color: "#A1D978", renewable: true },
    FuelType { label: "Hydro", color: "#ADE0EE", renewable: true },
    FuelType { label: "Battery", color: "#B056BC", renewable: true },
    FuelType { label: "Biomass", color: "#A82140", renewable: true },
    FuelType { label: "Rooftop PV", color: "#FFED90", renewable: true },
    FuelType { label: "Rooftop Solar", color: "#FFED90", renewable: true },
    FuelType { label: "Distributed PV", color: "#FFED90", renewable: true },
];

impl FuelType {
    /// Looks a label up case-insensitively.
    pub fn lookup(label: &str) -> Option<Self> {
        let label = label.trim();
        VOCABULARY
            .iter()
            .copied()
            .find(|fuel| fuel.label.eq_ignore_ascii_case(label))
    }

    /// Maps "Black coal" and "Black Coal" onto one label. Labels outside the
    /// vocabulary are returned untouched.
    pub fn canonical_label(label: &str) -> Cow<'_, str> {
        Self::lookup(label).map_or(Cow::Borrowed(label), |fuel| Cow::Borrowed(fuel.label))
    }

    pub fn is_renewable(label: &str) -> bool {
        Self::lookup(label).is_some_and(|fuel| fuel.renewable)
    }

    pub fn color_of(label: &str) -> &'static str {
        Self::lookup(label).map_or(UNKNOWN_FUEL_COLOR, |fuel| fuel.color)
    }
}
