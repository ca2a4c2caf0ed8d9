use crate::metrics::{BoxEdges, ElementMetrics};
use crate::types::Orientation;

/// Label shown when the orientation cannot be resolved to an axis.
pub const UNRESOLVED_LABEL: &str = "---";

/// Truncate toward zero to two decimal places. Truncation (not rounding) is
/// the observed display behavior and is preserved.
fn floor_fract(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Displayed measurement for the marker label: the target's dimension along
/// the measured axis plus both signed boundary offsets on that axis,
/// truncated to two decimals and suffixed with `px`. `None` orientation is
/// the degraded-input case at the host boundary and yields
/// [`UNRESOLVED_LABEL`]; an absent target measures as zero.
pub fn measurement_label(
    orientation: Option<Orientation>,
    metrics: Option<&ElementMetrics>,
    offsets: &BoxEdges,
) -> String {
    let Some(orientation) = orientation else {
        return UNRESOLVED_LABEL.to_string();
    };
    let (dimension, near, far) = match orientation {
        Orientation::Horizontal => (metrics.map_or(0.0, |m| m.width), offsets.left, offsets.right),
        Orientation::Vertical => (metrics.map_or(0.0, |m| m.height), offsets.top, offsets.bottom),
    };
    format!("{}px", floor_fract(dimension + near + far))
}
