//! Geometry layers: land cover, water, roads, rail and boundaries.
//!
//! The order of this table is the draw order. Roads are drawn in three
//! passes (tunnels, surface, bridges) and within each pass casings go under
//! centerlines.

use serde_json::{json, Value};

use super::paint::{all, cmp, eq, kind_in, road_width, zoom_ramp, Painter};
use crate::models::{Category as C, LayerKind, StyleLayer};

use LayerKind::{Fill, Line};

/// Vertical position of a road segment (`pmap:level`).
#[derive(Clone, Copy)]
enum Level {
    Tunnel,
    Surface,
    Bridge,
}

impl Level {
    fn filter(self) -> Value {
        match self {
            Self::Tunnel => cmp("<", "pmap:level", json!(0)),
            Self::Surface => eq("pmap:level", json!(0)),
            Self::Bridge => cmp(">", "pmap:level", json!(0)),
        }
    }
}

/// Road classes as they are split across layers.
#[derive(Clone, Copy)]
enum RoadClass {
    Other,
    Minor,
    MinorService,
    Link,
    Medium,
    Major,
    Highway,
}

impl RoadClass {
    fn filters(self, level: Level) -> Vec<Value> {
        match self {
            Self::Other => vec![kind_in(&["other", "path"])],
            // Tunnels and bridges do not split service roads out
            Self::Minor if !matches!(level, Level::Surface) => {
                vec![eq("pmap:kind", json!("minor_road"))]
            }
            Self::Minor => vec![
                eq("pmap:kind", json!("minor_road")),
                cmp("!=", "pmap:kind_detail", json!("service")),
            ],
            Self::MinorService => vec![
                eq("pmap:kind", json!("minor_road")),
                eq("pmap:kind_detail", json!("service")),
            ],
            Self::Link => vec![eq("pmap:link", json!(1))],
            Self::Medium => vec![eq("pmap:kind", json!("medium_road"))],
            Self::Major => vec![eq("pmap:kind", json!("major_road"))],
            Self::Highway => vec![
                eq("pmap:kind", json!("highway")),
                cmp("!=", "pmap:link", json!(1)),
            ],
        }
    }

    /// Width of the centerline over zoom.
    fn width(self) -> Value {
        match self {
            Self::Other => road_width(&[(14.0, 0.0), (20.0, 7.0)]),
            Self::Minor => road_width(&[(11.0, 0.0), (12.5, 0.5), (15.0, 2.0), (18.0, 11.0)]),
            Self::MinorService => road_width(&[(13.0, 0.0), (18.0, 8.0)]),
            Self::Link => road_width(&[(13.0, 0.0), (13.5, 1.0), (18.0, 11.0)]),
            Self::Medium => road_width(&[(7.0, 0.0), (12.0, 1.2), (15.0, 3.0), (18.0, 13.0)]),
            Self::Major => road_width(&[(6.0, 0.0), (12.0, 1.6), (15.0, 3.0), (18.0, 13.0)]),
            Self::Highway => road_width(&[
                (3.0, 0.0),
                (6.0, 1.1),
                (12.0, 1.6),
                (15.0, 5.0),
                (18.0, 15.0),
            ]),
        }
    }

    /// Width of the casing outline, drawn outside the centerline gap.
    fn casing_width(self) -> Value {
        match self {
            Self::Other | Self::Minor => road_width(&[(12.0, 0.0), (12.5, 1.0)]),
            Self::MinorService => road_width(&[(13.0, 0.0), (13.5, 0.8)]),
            Self::Link => road_width(&[(13.0, 0.0), (13.5, 1.5)]),
            Self::Medium => road_width(&[(10.0, 0.0), (10.5, 1.5)]),
            Self::Major => road_width(&[(9.0, 0.0), (9.5, 1.0)]),
            Self::Highway => road_width(&[(7.0, 0.0), (7.5, 1.0), (20.0, 15.0)]),
        }
    }
}

fn road_filter(level: Level, class: RoadClass) -> Value {
    let mut filters = vec![level.filter()];
    filters.extend(class.filters(level));
    all(filters)
}

impl Painter<'_> {
    /// A road centerline.
    fn road(&self, name: &str, level: Level, class: RoadClass, color: C) -> StyleLayer {
        self.layer(name, Line, "roads")
            .filter(road_filter(level, class))
            .paint_opt("line-color", self.color(color))
            .paint("line-width", class.width())
    }

    /// A road casing: an outline whose gap matches the centerline width.
    fn casing(&self, name: &str, level: Level, class: RoadClass, color: C) -> StyleLayer {
        let layer = self
            .layer(name, Line, "roads")
            .filter(road_filter(level, class))
            .paint_opt("line-color", self.color(color))
            .paint("line-gap-width", class.width())
            .paint("line-width", class.casing_width());
        match level {
            Level::Tunnel => layer.paint("line-dasharray", json!([3, 2])),
            Level::Surface | Level::Bridge => layer,
        }
    }

    /// A polygon fill over a land use or natural kind.
    fn area(
        &self,
        name: &str,
        source_layer: &str,
        kinds: &[&str],
        color: Option<Value>,
    ) -> StyleLayer {
        self.layer(name, Fill, source_layer)
            .filter(kind_in(kinds))
            .paint_opt("fill-color", color)
    }
}

/// Builds the geometry layers in draw order.
pub(crate) fn no_labels(p: &Painter<'_>) -> Vec<StyleLayer> {
    use Level::{Bridge, Surface, Tunnel};
    use RoadClass::{Highway, Link, Major, Medium, Minor, MinorService, Other};

    vec![
        p.background("background")
            .paint_opt("background-color", p.color(C::Background)),
        p.layer("earth", Fill, "earth")
            .paint_opt("fill-color", p.color(C::Earth)),
        // Land use and land cover
        p.area(
            "landuse_park",
            "landuse",
            &[
                "national_park",
                "park",
                "cemetery",
                "protected_area",
                "nature_reserve",
                "golf_course",
            ],
            p.color_ramp(1.0, (0.0, C::ParkA), (12.0, C::ParkB)),
        ),
        p.area(
            "landuse_urban_green",
            "landuse",
            &["allotments", "village_green", "playground"],
            p.color(C::ParkB),
        )
        .paint("fill-opacity", json!(0.7)),
        p.area("landuse_hospital", "landuse", &["hospital"], p.color(C::Hospital)),
        p.area("landuse_industrial", "landuse", &["industrial"], p.color(C::Industrial)),
        p.area(
            "landuse_school",
            "landuse",
            &["school", "university", "college"],
            p.color(C::School),
        ),
        p.area("landuse_beach", "landuse", &["beach"], p.color(C::Beach)),
        p.area("landuse_zoo", "landuse", &["zoo"], p.color(C::Zoo)),
        p.area(
            "landuse_military",
            "landuse",
            &["military", "naval_base", "airfield"],
            p.color(C::Military),
        ),
        p.area(
            "natural_wood",
            "natural",
            &["wood", "nature_reserve", "forest"],
            p.color_ramp(1.0, (0.0, C::WoodA), (12.0, C::WoodB)),
        ),
        p.area(
            "natural_scrub",
            "natural",
            &["scrub", "grassland", "grass"],
            p.color_ramp(1.0, (0.0, C::ScrubA), (12.0, C::ScrubB)),
        ),
        p.area("natural_glacier", "natural", &["glacier"], p.color(C::Glacier)),
        p.area("natural_sand", "natural", &["sand"], p.color(C::Sand)),
        p.area("landuse_aerodrome", "landuse", &["aerodrome"], p.color(C::Aerodrome)),
        p.layer("transit_runway", Line, "transit")
            .filter(eq("pmap:kind_detail", json!("runway")))
            .paint_opt("line-color", p.color(C::Runway))
            .paint("line-width", road_width(&[(10.0, 0.0), (12.0, 4.0), (18.0, 30.0)])),
        p.area("landuse_runway", "landuse", &["runway", "taxiway"], p.color(C::Runway)),
        // Water
        p.layer("water", Fill, "water")
            .paint_opt("fill-color", p.color(C::Water)),
        p.layer("physical_line_stream", Line, "physical_line")
            .minzoom(14)
            .filter(kind_in(&["stream"]))
            .paint_opt("line-color", p.color(C::Water))
            .paint("line-width", json!(0.5)),
        p.layer("physical_line_river", Line, "physical_line")
            .minzoom(9)
            .filter(kind_in(&["river"]))
            .paint_opt("line-color", p.color(C::Water))
            .paint("line-width", zoom_ramp(1.6, &[(9.0, 0.0), (9.5, 1.0), (18.0, 12.0)])),
        p.area("landuse_pedestrian", "landuse", &["pedestrian"], p.color(C::Pedestrian)),
        p.area("landuse_pier", "landuse", &["pier"], p.color(C::Pier)),
        // Tunnels
        p.casing("roads_tunnels_other_casing", Tunnel, Other, C::TunnelOtherCasing),
        p.casing("roads_tunnels_minor_casing", Tunnel, Minor, C::TunnelMinorCasing),
        p.casing("roads_tunnels_link_casing", Tunnel, Link, C::TunnelLinkCasing),
        p.casing("roads_tunnels_medium_casing", Tunnel, Medium, C::TunnelMediumCasing),
        p.casing("roads_tunnels_major_casing", Tunnel, Major, C::TunnelMajorCasing),
        p.casing("roads_tunnels_highway_casing", Tunnel, Highway, C::TunnelHighwayCasing),
        p.road("roads_tunnels_other", Tunnel, Other, C::TunnelOther)
            .paint("line-dasharray", json!([4.5, 0.5])),
        p.road("roads_tunnels_minor", Tunnel, Minor, C::TunnelMinor),
        p.road("roads_tunnels_link", Tunnel, Link, C::TunnelLink),
        p.road("roads_tunnels_medium", Tunnel, Medium, C::TunnelMedium),
        p.road("roads_tunnels_major", Tunnel, Major, C::TunnelMajor),
        p.road("roads_tunnels_highway", Tunnel, Highway, C::TunnelHighway),
        // Buildings and piers
        p.layer("buildings", Fill, "buildings")
            .paint_opt("fill-color", p.color(C::Buildings))
            .paint("fill-opacity", json!(0.5)),
        p.layer("transit_pier", Line, "transit")
            .filter(kind_in(&["pier"]))
            .paint_opt("line-color", p.color(C::TransitPier))
            .paint("line-width", road_width(&[(12.0, 0.0), (12.5, 0.5), (20.0, 16.0)])),
        // Surface roads
        p.casing("roads_minor_service_casing", Surface, MinorService, C::MinorServiceCasing)
            .minzoom(13),
        p.casing("roads_minor_casing", Surface, Minor, C::MinorCasing),
        p.casing("roads_link_casing", Surface, Link, C::LinkCasing)
            .minzoom(13),
        p.casing("roads_medium_casing", Surface, Medium, C::MediumCasing),
        p.casing("roads_major_casing_late", Surface, Major, C::MajorCasingLate)
            .minzoom(12),
        p.casing("roads_highway_casing_late", Surface, Highway, C::HighwayCasingLate)
            .minzoom(12),
        p.road("roads_other", Surface, Other, C::Other)
            .paint("line-dasharray", json!([3, 1])),
        p.road("roads_link", Surface, Link, C::Link),
        p.road("roads_minor_service", Surface, MinorService, C::MinorService),
        p.layer("roads_minor", Line, "roads")
            .filter(road_filter(Surface, Minor))
            .paint_opt("line-color", p.color_ramp(1.6, (11.0, C::MinorA), (16.0, C::MinorB)))
            .paint("line-width", Minor.width()),
        p.road("roads_medium", Surface, Medium, C::Medium),
        p.casing("roads_major_casing_early", Surface, Major, C::MajorCasingEarly)
            .maxzoom(12),
        p.road("roads_major", Surface, Major, C::Major),
        p.casing("roads_highway_casing_early", Surface, Highway, C::HighwayCasingEarly)
            .maxzoom(12),
        p.road("roads_highway", Surface, Highway, C::Highway),
        // Rail and boundaries
        p.layer("transit_railway", Line, "transit")
            .filter(kind_in(&["rail"]))
            .paint_opt("line-color", p.color(C::Railway))
            .paint("line-dasharray", json!([0.3, 0.75]))
            .paint("line-opacity", json!(0.5))
            .paint("line-width", road_width(&[(3.0, 0.0), (6.0, 0.15), (18.0, 9.0)])),
        p.layer("boundaries_country", Line, "boundaries")
            .filter(cmp("<=", "pmap:min_admin_level", json!(2)))
            .paint_opt("line-color", p.color(C::Boundaries))
            .paint("line-width", json!(0.7))
            .paint("line-dasharray", json!([3, 2])),
        p.layer("boundaries", Line, "boundaries")
            .filter(cmp(">", "pmap:min_admin_level", json!(2)))
            .paint_opt("line-color", p.color(C::Boundaries))
            .paint("line-width", json!(0.4))
            .paint("line-dasharray", json!([3, 2])),
        // Bridges
        p.casing("roads_bridges_other_casing", Bridge, Other, C::BridgesOtherCasing)
            .minzoom(12),
        p.casing("roads_bridges_link_casing", Bridge, Link, C::BridgesLinkCasing)
            .minzoom(12),
        p.casing("roads_bridges_minor_casing", Bridge, Minor, C::BridgesMinorCasing)
            .minzoom(12),
        p.casing("roads_bridges_medium_casing", Bridge, Medium, C::BridgesMediumCasing)
            .minzoom(12),
        p.casing("roads_bridges_major_casing", Bridge, Major, C::BridgesMajorCasing)
            .minzoom(12),
        p.road("roads_bridges_other", Bridge, Other, C::BridgesOther)
            .minzoom(12)
            .paint("line-dasharray", json!([2, 1])),
        p.road("roads_bridges_minor", Bridge, Minor, C::BridgesMinor)
            .minzoom(12),
        p.road("roads_bridges_link", Bridge, Link, C::BridgesLink)
            .minzoom(12),
        p.road("roads_bridges_medium", Bridge, Medium, C::BridgesMedium)
            .minzoom(12),
        p.road("roads_bridges_major", Bridge, Major, C::BridgesMajor)
            .minzoom(12),
        p.casing("roads_bridges_highway_casing", Bridge, Highway, C::BridgesHighwayCasing)
            .minzoom(12),
        p.road("roads_bridges_highway", Bridge, Highway, C::BridgesHighway)
            .minzoom(12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Palette;

    fn layers() -> Vec<StyleLayer> {
        let palette = Palette::builtin().unwrap();
        no_labels(&Painter::new("basemap", &palette))
    }

    #[test]
    fn test_draw_order_starts_with_background() {
        let layers = layers();
        assert_eq!(layers[0].id, "basemap_background");
        assert_eq!(layers[0].kind, LayerKind::Background);
        assert_eq!(layers[1].id, "basemap_earth");
        assert_eq!(layers.last().unwrap().id, "basemap_roads_bridges_highway");
    }

    #[test]
    fn test_tunnel_casings_are_dashed() {
        let layers = layers();
        let casing = layers
            .iter()
            .find(|l| l.id == "basemap_roads_tunnels_major_casing")
            .unwrap();
        assert_eq!(casing.paint_value("line-dasharray"), Some(&json!([3, 2])));
        assert_eq!(casing.paint_color("line-color"), Some("#e0e0e0"));
        assert!(casing.paint_value("line-gap-width").is_some());
    }

    #[test]
    fn test_surface_minor_excludes_service_roads() {
        assert_eq!(
            road_filter(Level::Surface, RoadClass::Minor),
            json!([
                "all",
                ["==", "pmap:level", 0],
                ["==", "pmap:kind", "minor_road"],
                ["!=", "pmap:kind_detail", "service"]
            ])
        );
        assert_eq!(
            road_filter(Level::Bridge, RoadClass::Minor),
            json!(["all", [">", "pmap:level", 0], ["==", "pmap:kind", "minor_road"]])
        );
    }

    #[test]
    fn test_early_and_late_casings_split_at_zoom_12() {
        let layers = layers();
        let early = layers
            .iter()
            .find(|l| l.id == "basemap_roads_highway_casing_early")
            .unwrap();
        let late = layers
            .iter()
            .find(|l| l.id == "basemap_roads_highway_casing_late")
            .unwrap();
        assert_eq!(early.maxzoom, Some(12));
        assert_eq!(late.minzoom, Some(12));
    }

    #[test]
    fn test_minor_roads_blend_between_two_colors() {
        let layers = layers();
        let minor = layers.iter().find(|l| l.id == "basemap_roads_minor").unwrap();
        assert_eq!(
            minor.paint_value("line-color"),
            Some(&json!([
                "interpolate",
                ["exponential", 1.6],
                ["zoom"],
                11,
                "#ebebeb",
                16,
                "#ffffff"
            ]))
        );
    }

    #[test]
    fn test_no_label_kinds() {
        assert!(layers().iter().all(|l| !l.kind.is_label()));
    }
}
