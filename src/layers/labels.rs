//! Text and place-marker layers, drawn above all geometry.

use serde_json::{json, Value};

use super::paint::{eq, font, kind_in, zoom_ramp, Painter};
use crate::models::{Category as C, LayerKind, StyleLayer};

use LayerKind::{Circle, Symbol};

const REGULAR: &str = "Noto Sans Regular";
const MEDIUM: &str = "Noto Sans Medium";
const ITALIC: &str = "Noto Sans Italic";

fn name() -> Value {
    json!(["get", "name"])
}

impl Painter<'_> {
    /// A symbol layer with text colored from `text` and an optional halo.
    fn text(&self, name: &str, source_layer: &str, text: C, halo: Option<C>) -> StyleLayer {
        let layer = self
            .layer(name, Symbol, source_layer)
            .paint_opt("text-color", self.color(text));
        match halo {
            Some(halo) => layer.paint_opt("text-halo-color", self.color(halo)),
            None => layer,
        }
    }

    /// Road names placed along the line.
    fn road_names(&self, label: &str, kinds: &[&str], text: C, halo: C) -> StyleLayer {
        self.text(label, "roads", text, Some(halo))
            .filter(kind_in(kinds))
            .layout("symbol-sort-key", json!(["get", "pmap:min_zoom"]))
            .layout("symbol-placement", json!("line"))
            .layout("text-font", font(REGULAR))
            .layout("text-field", name())
            .layout("text-size", json!(12))
            .paint("text-halo-width", json!(2))
    }
}

/// Builds the label layers in draw order.
pub(crate) fn labels(p: &Painter<'_>) -> Vec<StyleLayer> {
    vec![
        p.text("physical_line_waterway_label", "physical_line", C::WaterwayLabel, None)
            .minzoom(13)
            .filter(kind_in(&["river", "stream"]))
            .layout("symbol-placement", json!("line"))
            .layout("text-font", font(REGULAR))
            .layout("text-field", name())
            .layout("text-size", json!(12))
            .layout("text-letter-spacing", json!(0.3)),
        p.text("physical_point_peak", "physical_point", C::PeakLabel, None)
            .filter(kind_in(&["peak"]))
            .layout("text-font", font(ITALIC))
            .layout("text-field", name())
            .layout("text-size", zoom_ramp(1.0, &[(10.0, 8.0), (16.0, 12.0)]))
            .layout("text-letter-spacing", json!(0.1))
            .layout("text-max-width", json!(9)),
        p.road_names(
            "roads_labels_minor",
            &["minor_road", "other", "path"],
            C::RoadsLabelMinor,
            C::RoadsLabelMinorHalo,
        )
        .minzoom(15),
        p.text("physical_point_ocean", "physical_point", C::OceanLabel, None)
            .filter(kind_in(&["sea", "ocean", "lake", "water", "bay", "strait", "fjord"]))
            .layout("text-font", font(MEDIUM))
            .layout("text-field", name())
            .layout("text-size", zoom_ramp(1.0, &[(3.0, 10.0), (10.0, 12.0)]))
            .layout("text-letter-spacing", json!(0.1))
            .layout("text-max-width", json!(9))
            .layout("text-transform", json!("uppercase")),
        p.road_names(
            "roads_labels_major",
            &["highway", "major_road", "medium_road"],
            C::RoadsLabelMajor,
            C::RoadsLabelMajorHalo,
        )
        .minzoom(11),
        p.text(
            "places_subplace",
            "places",
            C::SubplaceLabel,
            Some(C::SubplaceLabelHalo),
        )
        .filter(eq("pmap:kind", json!("neighbourhood")))
        .layout("symbol-sort-key", json!(["get", "pmap:min_zoom"]))
        .layout("text-field", name())
        .layout("text-font", font(REGULAR))
        .layout("text-max-width", json!(7))
        .layout("text-letter-spacing", json!(0.1))
        .layout(
            "text-padding",
            zoom_ramp(1.0, &[(5.0, 2.0), (8.0, 4.0), (12.0, 18.0), (15.0, 20.0)]),
        )
        .layout(
            "text-size",
            zoom_ramp(1.2, &[(11.0, 8.0), (14.0, 14.0), (18.0, 24.0)]),
        )
        .layout("text-transform", json!("uppercase"))
        .paint("text-halo-width", json!(0.5)),
        p.layer("places_locality_circle", Circle, "places")
            .maxzoom(8)
            .filter(eq("pmap:kind", json!("locality")))
            .paint("circle-radius", json!(2))
            .paint("circle-stroke-width", json!(1.5))
            .paint_opt("circle-stroke-color", p.color(C::CityCircleStroke))
            .paint_opt("circle-color", p.color(C::CityCircle))
            .paint("circle-translate", json!([-6, 0])),
        p.text("places_locality", "places", C::CityLabel, Some(C::CityLabelHalo))
            .filter(eq("pmap:kind", json!("locality")))
            .layout("symbol-sort-key", json!(["get", "pmap:min_zoom"]))
            .layout("text-field", name())
            .layout("text-font", font(REGULAR))
            .layout("text-padding", json!(2))
            .layout(
                "text-size",
                zoom_ramp(1.2, &[(2.0, 10.0), (8.0, 12.0), (12.0, 16.0), (16.0, 20.0)]),
            )
            .layout("text-anchor", json!(["step", ["zoom"], "left", 8, "center"]))
            .layout("text-radial-offset", json!(0.2))
            .paint("text-halo-width", json!(1)),
        p.text("places_region", "places", C::StateLabel, Some(C::StateLabelHalo))
            .filter(eq("pmap:kind", json!("region")))
            .layout("symbol-sort-key", json!(["get", "pmap:min_zoom"]))
            .layout(
                "text-field",
                json!(["step", ["zoom"], ["get", "name:short"], 6, ["get", "name"]]),
            )
            .layout("text-font", font(REGULAR))
            .layout("text-size", zoom_ramp(1.0, &[(3.0, 11.0), (7.0, 16.0)]))
            .layout("text-radial-offset", json!(0.2))
            .layout("text-anchor", json!("center"))
            .layout("text-transform", json!("uppercase"))
            .paint("text-halo-width", json!(0.5)),
        p.text("places_country", "places", C::CountryLabel, None)
            .filter(eq("pmap:kind", json!("country")))
            .layout("symbol-sort-key", json!(["get", "pmap:min_zoom"]))
            .layout("text-field", name())
            .layout("text-font", font(MEDIUM))
            .layout(
                "text-size",
                zoom_ramp(1.0, &[(2.0, 13.0), (6.0, 14.0), (8.0, 20.0)]),
            )
            .layout("text-transform", json!("uppercase")),
    ]
}
