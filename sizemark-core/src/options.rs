use crate::types::{AnnotationPosition, Boundary, MarkerPosition, Orientation};
use serde::{Deserialize, Serialize};

/// Fully-populated marker configuration. Defaults are defined once on the
/// `Default` impl; sparse caller overrides are merged in with
/// [`MarkerOptions::with_overrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub orientation: Orientation,
    pub marker_position: MarkerPosition,
    pub marker_offset: f64,
    pub annotation_position: AnnotationPosition,
    pub annotation_offset_h: f64,
    pub annotation_offset_v: f64,
    pub boundary_left: Boundary,
    pub boundary_right: Boundary,
    pub boundary_top: Boundary,
    pub boundary_bottom: Boundary,
    pub border_style: String,
    pub annotation_background: String,
    pub annotation_color: String,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            marker_position: MarkerPosition::Default,
            marker_offset: 0.0,
            annotation_position: AnnotationPosition::Default,
            annotation_offset_h: 0.0,
            annotation_offset_v: 0.0,
            boundary_left: Boundary::Block,
            boundary_right: Boundary::Block,
            boundary_top: Boundary::Block,
            boundary_bottom: Boundary::Block,
            border_style: "1px solid black".to_string(),
            annotation_background: "white".to_string(),
            annotation_color: "inherit".to_string(),
        }
    }
}

/// Sparse override record deserialized from a partial caller-supplied
/// configuration object. Unknown keys are ignored; malformed values for
/// recognized keys are a deserialization error.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerOptionOverrides {
    pub orientation: Option<Orientation>,
    pub marker_position: Option<MarkerPosition>,
    pub marker_offset: Option<f64>,
    pub annotation_position: Option<AnnotationPosition>,
    pub annotation_offset_h: Option<f64>,
    pub annotation_offset_v: Option<f64>,
    pub boundary_left: Option<Boundary>,
    pub boundary_right: Option<Boundary>,
    pub boundary_top: Option<Boundary>,
    pub boundary_bottom: Option<Boundary>,
    pub border_style: Option<String>,
    pub annotation_background: Option<String>,
    pub annotation_color: Option<String>,
}

impl MarkerOptions {
    /// Merge `overrides` over `self`, caller fields winning.
    pub fn with_overrides(&self, overrides: &MarkerOptionOverrides) -> MarkerOptions {
        MarkerOptions {
            orientation: overrides.orientation.unwrap_or(self.orientation),
            marker_position: overrides.marker_position.unwrap_or(self.marker_position),
            marker_offset: overrides.marker_offset.unwrap_or(self.marker_offset),
            annotation_position: overrides
                .annotation_position
                .unwrap_or(self.annotation_position),
            annotation_offset_h: overrides
                .annotation_offset_h
                .unwrap_or(self.annotation_offset_h),
            annotation_offset_v: overrides
                .annotation_offset_v
                .unwrap_or(self.annotation_offset_v),
            boundary_left: overrides.boundary_left.unwrap_or(self.boundary_left),
            boundary_right: overrides.boundary_right.unwrap_or(self.boundary_right),
            boundary_top: overrides.boundary_top.unwrap_or(self.boundary_top),
            boundary_bottom: overrides.boundary_bottom.unwrap_or(self.boundary_bottom),
            border_style: overrides
                .border_style
                .clone()
                .unwrap_or_else(|| self.border_style.clone()),
            annotation_background: overrides
                .annotation_background
                .clone()
                .unwrap_or_else(|| self.annotation_background.clone()),
            annotation_color: overrides
                .annotation_color
                .clone()
                .unwrap_or_else(|| self.annotation_color.clone()),
        }
    }
}
