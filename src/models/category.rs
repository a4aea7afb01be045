//! The closed set of map-feature categories a palette assigns colors to.
//!
//! Every category has a snake_case wire name used as the key in palette
//! files. Declaration order is the canonical palette order, which is also the
//! key order of exported palette documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

macro_rules! categories {
    ($($variant:ident => $name:literal,)+) => {
        /// A named visual feature class of the basemap theme schema.
        ///
        /// Variants are named after their wire names (`HighwayCasingEarly` is
        /// `highway_casing_early`).
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Category {
            $($variant,)+
        }

        impl Category {
            /// Every category, in canonical palette order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)+];

            /// Returns the wire name used as the palette file key.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Category::$variant => $name,)+
                }
            }

            /// Looks up a category by its wire name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Category::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

categories! {
    // Land cover and land use
    Background => "background",
    Earth => "earth",
    ParkA => "park_a",
    ParkB => "park_b",
    Hospital => "hospital",
    Industrial => "industrial",
    School => "school",
    WoodA => "wood_a",
    WoodB => "wood_b",
    Pedestrian => "pedestrian",
    ScrubA => "scrub_a",
    ScrubB => "scrub_b",
    Glacier => "glacier",
    Sand => "sand",
    Beach => "beach",
    Aerodrome => "aerodrome",
    Runway => "runway",
    Water => "water",
    Pier => "pier",
    Zoo => "zoo",
    Military => "military",
    // Tunnels
    TunnelOtherCasing => "tunnel_other_casing",
    TunnelMinorCasing => "tunnel_minor_casing",
    TunnelLinkCasing => "tunnel_link_casing",
    TunnelMediumCasing => "tunnel_medium_casing",
    TunnelMajorCasing => "tunnel_major_casing",
    TunnelHighwayCasing => "tunnel_highway_casing",
    TunnelOther => "tunnel_other",
    TunnelMinor => "tunnel_minor",
    TunnelLink => "tunnel_link",
    TunnelMedium => "tunnel_medium",
    TunnelMajor => "tunnel_major",
    TunnelHighway => "tunnel_highway",
    // Surface roads and structures
    TransitPier => "transit_pier",
    Buildings => "buildings",
    MinorServiceCasing => "minor_service_casing",
    MinorCasing => "minor_casing",
    LinkCasing => "link_casing",
    MediumCasing => "medium_casing",
    MajorCasingLate => "major_casing_late",
    HighwayCasingLate => "highway_casing_late",
    Other => "other",
    MinorService => "minor_service",
    MinorA => "minor_a",
    MinorB => "minor_b",
    Link => "link",
    Medium => "medium",
    MajorCasingEarly => "major_casing_early",
    Major => "major",
    HighwayCasingEarly => "highway_casing_early",
    Highway => "highway",
    // Lines drawn above roads
    Railway => "railway",
    Boundaries => "boundaries",
    WaterwayLabel => "waterway_label",
    // Bridges
    BridgesOtherCasing => "bridges_other_casing",
    BridgesMinorCasing => "bridges_minor_casing",
    BridgesLinkCasing => "bridges_link_casing",
    BridgesMediumCasing => "bridges_medium_casing",
    BridgesMajorCasing => "bridges_major_casing",
    BridgesHighwayCasing => "bridges_highway_casing",
    BridgesOther => "bridges_other",
    BridgesMinor => "bridges_minor",
    BridgesLink => "bridges_link",
    BridgesMedium => "bridges_medium",
    BridgesMajor => "bridges_major",
    BridgesHighway => "bridges_highway",
    // Labels
    RoadsLabelMinor => "roads_label_minor",
    RoadsLabelMinorHalo => "roads_label_minor_halo",
    RoadsLabelMajor => "roads_label_major",
    RoadsLabelMajorHalo => "roads_label_major_halo",
    OceanLabel => "ocean_label",
    PeakLabel => "peak_label",
    SubplaceLabel => "subplace_label",
    SubplaceLabelHalo => "subplace_label_halo",
    CityCircle => "city_circle",
    CityCircleStroke => "city_circle_stroke",
    CityLabel => "city_label",
    CityLabelHalo => "city_label_halo",
    StateLabel => "state_label",
    StateLabelHalo => "state_label_halo",
    CountryLabel => "country_label",
}

impl Category {
    /// Number of categories in the schema.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns true for categories that color text, halos or place markers.
    #[must_use]
    pub const fn is_label(self) -> bool {
        matches!(
            self,
            Self::WaterwayLabel
                | Self::RoadsLabelMinor
                | Self::RoadsLabelMinorHalo
                | Self::RoadsLabelMajor
                | Self::RoadsLabelMajorHalo
                | Self::OceanLabel
                | Self::PeakLabel
                | Self::SubplaceLabel
                | Self::SubplaceLabelHalo
                | Self::CityCircle
                | Self::CityCircleStroke
                | Self::CityLabel
                | Self::CityLabelHalo
                | Self::StateLabel
                | Self::StateLabelHalo
                | Self::CountryLabel
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| ThemeError::validation(format!("unknown category '{s}'")))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_names_are_unique() {
        let names: HashSet<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), Category::COUNT);
        assert_eq!(Category::COUNT, 81);
    }

    #[test]
    fn test_from_name_round_trip() {
        for &category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("Water"), None);
        assert_eq!(Category::from_name("lava"), None);
    }

    #[test]
    fn test_from_str_unknown_is_validation_error() {
        assert_eq!("water".parse::<Category>().unwrap(), Category::Water);
        let err = "lava".parse::<Category>().unwrap_err();
        assert!(matches!(err, ThemeError::Validation(_)));
        assert!(err.to_string().contains("lava"));
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(Category::ALL[0], Category::Background);
        assert_eq!(Category::ALL[Category::COUNT - 1], Category::CountryLabel);
        assert!(Category::Earth < Category::Water);
    }

    #[test]
    fn test_is_label() {
        assert!(Category::CityLabelHalo.is_label());
        assert!(Category::CityCircle.is_label());
        assert!(Category::WaterwayLabel.is_label());
        assert!(!Category::Highway.is_label());
        assert!(!Category::BridgesHighway.is_label());
        assert!(!Category::Railway.is_label());

        let labels = Category::ALL.iter().filter(|c| c.is_label()).count();
        assert_eq!(labels, 16);
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&Category::HighwayCasingEarly).unwrap();
        assert_eq!(json, "\"highway_casing_early\"");
        let parsed: Category = serde_json::from_str("\"city_label_halo\"").unwrap();
        assert_eq!(parsed, Category::CityLabelHalo);
        assert!(serde_json::from_str::<Category>("\"nope\"").is_err());
    }
}
