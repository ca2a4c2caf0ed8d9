use crate::options::MarkerOptions;
use crate::types::Boundary;
use serde::{Deserialize, Serialize};

/// One value per box side, in CSS pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxEdges {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BoxEdges {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Snapshot of a target element's box model taken from the live layout.
/// Margin, border and padding are the computed widths per side; width and
/// height are the border-box dimensions from the bounding client rect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementMetrics {
    pub margin: BoxEdges,
    pub border: BoxEdges,
    pub padding: BoxEdges,
    pub width: f64,
    pub height: f64,
}

fn side_offset(boundary: Boundary, margin: f64, border: f64, padding: f64) -> f64 {
    match boundary {
        // outward past the margin edge
        Boundary::Margin => -(margin + border),
        // outward past the border, inside the margin
        Boundary::Border => -border,
        // flush with the border box
        Boundary::Block => 0.0,
        // inward to the padding edge
        Boundary::Padding => padding,
    }
}

/// Per-side offsets between the marker and the target's border box, derived
/// from each side's configured boundary. An absent target yields zero
/// offsets on every side.
pub fn boundary_offsets(metrics: Option<&ElementMetrics>, options: &MarkerOptions) -> BoxEdges {
    let Some(metrics) = metrics else {
        return BoxEdges::default();
    };
    BoxEdges {
        top: side_offset(
            options.boundary_top,
            metrics.margin.top,
            metrics.border.top,
            metrics.padding.top,
        ),
        bottom: side_offset(
            options.boundary_bottom,
            metrics.margin.bottom,
            metrics.border.bottom,
            metrics.padding.bottom,
        ),
        left: side_offset(
            options.boundary_left,
            metrics.margin.left,
            metrics.border.left,
            metrics.padding.left,
        ),
        right: side_offset(
            options.boundary_right,
            metrics.margin.right,
            metrics.border.right,
            metrics.padding.right,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn sample_metrics() -> ElementMetrics {
        ElementMetrics {
            margin: BoxEdges {
                top: 10.0,
                bottom: 12.0,
                left: 14.0,
                right: 16.0,
            },
            border: BoxEdges {
                top: 1.0,
                bottom: 2.0,
                left: 3.0,
                right: 4.0,
            },
            padding: BoxEdges {
                top: 5.0,
                bottom: 6.0,
                left: 7.0,
                right: 8.0,
            },
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_margin_boundary_offset() {
        let metrics = sample_metrics();
        let options = MarkerOptions {
            boundary_left: Boundary::Margin,
            boundary_right: Boundary::Margin,
            boundary_top: Boundary::Margin,
            boundary_bottom: Boundary::Margin,
            ..Default::default()
        };
        let offsets = boundary_offsets(Some(&metrics), &options);
        assert!(approx_eq!(f64, offsets.left, -17.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.right, -20.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.top, -11.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.bottom, -14.0, ulps = 2));
    }

    #[test]
    fn test_border_boundary_offset() {
        let metrics = sample_metrics();
        let options = MarkerOptions {
            boundary_left: Boundary::Border,
            boundary_right: Boundary::Border,
            boundary_top: Boundary::Border,
            boundary_bottom: Boundary::Border,
            ..Default::default()
        };
        let offsets = boundary_offsets(Some(&metrics), &options);
        assert!(approx_eq!(f64, offsets.left, -3.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.right, -4.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.top, -1.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.bottom, -2.0, ulps = 2));
    }

    #[test]
    fn test_block_boundary_offset_is_zero() {
        let metrics = sample_metrics();
        let offsets = boundary_offsets(Some(&metrics), &MarkerOptions::default());
        assert_eq!(offsets, BoxEdges::default());
    }

    #[test]
    fn test_padding_boundary_offset() {
        let metrics = sample_metrics();
        let options = MarkerOptions {
            boundary_left: Boundary::Padding,
            boundary_right: Boundary::Padding,
            boundary_top: Boundary::Padding,
            boundary_bottom: Boundary::Padding,
            ..Default::default()
        };
        let offsets = boundary_offsets(Some(&metrics), &options);
        assert!(approx_eq!(f64, offsets.left, 7.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.right, 8.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.top, 5.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.bottom, 6.0, ulps = 2));
    }

    #[test]
    fn test_sides_resolve_independently() {
        let metrics = sample_metrics();
        let options = MarkerOptions {
            boundary_left: Boundary::Margin,
            boundary_right: Boundary::Padding,
            ..Default::default()
        };
        let offsets = boundary_offsets(Some(&metrics), &options);
        assert!(approx_eq!(f64, offsets.left, -17.0, ulps = 2));
        assert!(approx_eq!(f64, offsets.right, 8.0, ulps = 2));
        assert_eq!(offsets.top, 0.0);
        assert_eq!(offsets.bottom, 0.0);
    }

    #[test]
    fn test_absent_target_yields_zero_offsets() {
        let options = MarkerOptions {
            boundary_left: Boundary::Margin,
            boundary_right: Boundary::Border,
            boundary_top: Boundary::Padding,
            boundary_bottom: Boundary::Margin,
            ..Default::default()
        };
        let offsets = boundary_offsets(None, &options);
        assert_eq!(offsets.top, 0.0);
        assert_eq!(offsets.bottom, 0.0);
        assert_eq!(offsets.left, 0.0);
        assert_eq!(offsets.right, 0.0);
    }
}
