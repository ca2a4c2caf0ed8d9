use crate::metrics::BoxEdges;
use crate::options::MarkerOptions;
use crate::types::{AnnotationPosition, MarkerPosition, Orientation};

/// Ordered list of CSS property/value declarations. Later declarations for
/// the same property win, matching inline-style assignment order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Effective value for `property`, honoring later-wins ordering.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Declarations for the marker bar: spans the full cross-axis at fixed
/// thickness with the two end-borders forming the dimension-line ends, and
/// sits on the resolved side of the target offset by the configured marker
/// offset plus that side's boundary offset.
pub fn bar_declarations(options: &MarkerOptions, offsets: &BoxEdges) -> Declarations {
    let position = options.marker_position.resolve(options.orientation);
    let mut style = Declarations::new();
    style.set("position", "absolute");
    style.set("box-sizing", "border-box");
    style.set("background", "transparent");

    match options.orientation {
        Orientation::Horizontal => {
            style.set("left", px(offsets.left));
            style.set("right", px(offsets.right));
            style.set("height", "7px");
            style.set("border-left", &options.border_style);
            style.set("border-right", &options.border_style);
            match position {
                MarkerPosition::Bottom => {
                    style.set("bottom", px(offsets.bottom + options.marker_offset));
                }
                _ => {
                    style.set("top", px(offsets.top + options.marker_offset));
                }
            }
        }
        Orientation::Vertical => {
            style.set("top", px(offsets.top));
            style.set("bottom", px(offsets.bottom));
            style.set("width", "7px");
            style.set("border-top", &options.border_style);
            style.set("border-bottom", &options.border_style);
            match position {
                MarkerPosition::Right => {
                    style.set("right", px(offsets.right + options.marker_offset));
                }
                _ => {
                    style.set("left", px(offsets.left + options.marker_offset));
                }
            }
        }
    }
    style
}

/// Declarations for the measuring line inside the bar: 1px thick, inset 3px
/// from the bar's leading edge, overshooting 1px into the end-borders.
pub fn tick_declarations(options: &MarkerOptions) -> Declarations {
    let mut style = Declarations::new();
    style.set("position", "absolute");
    match options.orientation {
        Orientation::Horizontal => {
            style.set("left", "-1px");
            style.set("right", "-1px");
            style.set("top", "3px");
            style.set("height", "1px");
            style.set("border-top", &options.border_style);
        }
        Orientation::Vertical => {
            style.set("top", "-1px");
            style.set("bottom", "-1px");
            style.set("left", "3px");
            style.set("width", "1px");
            style.set("border-left", &options.border_style);
        }
    }
    style
}

/// Declarations for the label bubble, anchored at the resolved annotation
/// position with a fixed 6px push off the bar's 50% line.
pub fn bubble_declarations(options: &MarkerOptions) -> Declarations {
    let position = options.annotation_position.resolve(options.orientation);
    let mut style = Declarations::new();
    style.set("position", "absolute");
    style.set("background", &options.annotation_background);
    style.set("color", &options.annotation_color);
    style.set("margin", "2px");
    style.set("padding", "3px 20px");
    style.set("font-size", "0.5rem");
    style.set("border-radius", "3px");
    style.set("box-shadow", "0px 0px 10px rgba(50,50,50,0.5)");
    style.set("white-space", "nowrap");

    match options.orientation {
        Orientation::Horizontal => match position {
            AnnotationPosition::LeftTop => {
                style.set("left", "0");
                style.set("bottom", "50%");
                style.set("margin-bottom", "6px");
            }
            AnnotationPosition::RightBottom => {
                style.set("right", "0");
                style.set("top", "50%");
                style.set("margin-top", "6px");
            }
            AnnotationPosition::RightTop => {
                style.set("right", "0");
                style.set("bottom", "50%");
                style.set("margin-bottom", "6px");
            }
            _ => {
                style.set("left", "0");
                style.set("top", "50%");
                style.set("margin-top", "6px");
            }
        },
        Orientation::Vertical => match position {
            AnnotationPosition::LeftTop => {
                style.set("right", "50%");
                style.set("top", "0");
                style.set("margin-right", "6px");
            }
            AnnotationPosition::RightBottom => {
                style.set("left", "50%");
                style.set("bottom", "0");
                style.set("margin-left", "6px");
            }
            AnnotationPosition::LeftBottom => {
                style.set("right", "50%");
                style.set("bottom", "0");
                style.set("margin-right", "6px");
            }
            _ => {
                style.set("left", "50%");
                style.set("top", "0");
                style.set("margin-left", "6px");
            }
        },
    }
    style
}

/// Declarations for the bubble's pointer tip: a zero-size element whose four
/// transparent borders form a triangle, with exactly one edge made solid so
/// the tip points back at the bar.
pub fn tip_declarations(options: &MarkerOptions) -> Declarations {
    let position = options.annotation_position.resolve(options.orientation);
    let mut style = Declarations::new();
    style.set("position", "absolute");
    style.set("background", "transparent");
    style.set("border-top", "6px solid transparent");
    style.set("border-bottom", "6px solid transparent");
    style.set("border-left", "6px solid transparent");
    style.set("border-right", "6px solid transparent");

    match options.orientation {
        Orientation::Horizontal => {
            style.set("left", "50%");
            style.set("margin-left", "-6px");
            match position {
                AnnotationPosition::LeftTop | AnnotationPosition::RightTop => {
                    // bubble sits above the bar, tip points down
                    style.set("bottom", "0");
                    style.set("margin-bottom", "-12px");
                    style.set("border-top", "6px solid white");
                }
                _ => {
                    // bubble sits below the bar, tip points up
                    style.set("top", "0");
                    style.set("margin-top", "-12px");
                    style.set("border-bottom", "6px solid white");
                }
            }
        }
        Orientation::Vertical => {
            style.set("top", "50%");
            style.set("margin-top", "-6px");
            match position {
                AnnotationPosition::LeftTop | AnnotationPosition::LeftBottom => {
                    // bubble sits left of the bar, tip points right
                    style.set("right", "0");
                    style.set("margin-right", "-12px");
                    style.set("border-left", "6px solid white");
                }
                _ => {
                    // bubble sits right of the bar, tip points left
                    style.set("left", "0");
                    style.set("margin-left", "-12px");
                    style.set("border-right", "6px solid white");
                }
            }
        }
    }
    style
}
