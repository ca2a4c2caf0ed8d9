use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Side of the target the marker bar sits on. `Default` resolves against the
/// orientation before any style computation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MarkerPosition {
    #[default]
    Default,
    Left,
    Right,
    Top,
    Bottom,
}

impl MarkerPosition {
    pub fn resolve(self, orientation: Orientation) -> MarkerPosition {
        if self == MarkerPosition::Default {
            match orientation {
                Orientation::Horizontal => MarkerPosition::Top,
                Orientation::Vertical => MarkerPosition::Left,
            }
        } else {
            self
        }
    }
}

/// Corner of the marker bar the label bubble hangs off. `Default` resolves
/// against the orientation before any style computation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AnnotationPosition {
    #[default]
    Default,
    LeftBottom,
    RightBottom,
    LeftTop,
    RightTop,
}

impl AnnotationPosition {
    pub fn resolve(self, orientation: Orientation) -> AnnotationPosition {
        if self == AnnotationPosition::Default {
            match orientation {
                Orientation::Horizontal => AnnotationPosition::LeftBottom,
                Orientation::Vertical => AnnotationPosition::RightTop,
            }
        } else {
            self
        }
    }
}

/// Which box edge a side's marker offset is measured from.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Boundary {
    Margin,
    Border,
    #[default]
    #[serde(alias = "default")]
    Block,
    Padding,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Orientation::Horizontal, MarkerPosition::Default, MarkerPosition::Top)]
    #[case(Orientation::Vertical, MarkerPosition::Default, MarkerPosition::Left)]
    #[case(Orientation::Horizontal, MarkerPosition::Left, MarkerPosition::Left)]
    #[case(Orientation::Horizontal, MarkerPosition::Right, MarkerPosition::Right)]
    #[case(Orientation::Horizontal, MarkerPosition::Top, MarkerPosition::Top)]
    #[case(Orientation::Horizontal, MarkerPosition::Bottom, MarkerPosition::Bottom)]
    #[case(Orientation::Vertical, MarkerPosition::Left, MarkerPosition::Left)]
    #[case(Orientation::Vertical, MarkerPosition::Right, MarkerPosition::Right)]
    #[case(Orientation::Vertical, MarkerPosition::Top, MarkerPosition::Top)]
    #[case(Orientation::Vertical, MarkerPosition::Bottom, MarkerPosition::Bottom)]
    fn test_resolve_marker_position(
        #[case] orientation: Orientation,
        #[case] input: MarkerPosition,
        #[case] expected: MarkerPosition,
    ) {
        assert_eq!(input.resolve(orientation), expected);
    }

    #[rstest]
    #[case(Orientation::Horizontal, AnnotationPosition::Default, AnnotationPosition::LeftBottom)]
    #[case(Orientation::Vertical, AnnotationPosition::Default, AnnotationPosition::RightTop)]
    #[case(
        Orientation::Horizontal,
        AnnotationPosition::LeftBottom,
        AnnotationPosition::LeftBottom
    )]
    #[case(
        Orientation::Horizontal,
        AnnotationPosition::RightBottom,
        AnnotationPosition::RightBottom
    )]
    #[case(
        Orientation::Horizontal,
        AnnotationPosition::LeftTop,
        AnnotationPosition::LeftTop
    )]
    #[case(
        Orientation::Horizontal,
        AnnotationPosition::RightTop,
        AnnotationPosition::RightTop
    )]
    #[case(
        Orientation::Vertical,
        AnnotationPosition::LeftBottom,
        AnnotationPosition::LeftBottom
    )]
    #[case(
        Orientation::Vertical,
        AnnotationPosition::RightBottom,
        AnnotationPosition::RightBottom
    )]
    #[case(
        Orientation::Vertical,
        AnnotationPosition::LeftTop,
        AnnotationPosition::LeftTop
    )]
    #[case(
        Orientation::Vertical,
        AnnotationPosition::RightTop,
        AnnotationPosition::RightTop
    )]
    fn test_resolve_annotation_position(
        #[case] orientation: Orientation,
        #[case] input: AnnotationPosition,
        #[case] expected: AnnotationPosition,
    ) {
        assert_eq!(input.resolve(orientation), expected);
    }

    #[test]
    fn test_enum_serde_names() {
        let boundary: Boundary = serde_json::from_str("\"margin\"").unwrap();
        assert_eq!(boundary, Boundary::Margin);

        // `default` is accepted as an alias for the block boundary
        let boundary: Boundary = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(boundary, Boundary::Block);

        let position: AnnotationPosition = serde_json::from_str("\"left-bottom\"").unwrap();
        assert_eq!(position, AnnotationPosition::LeftBottom);

        assert!(serde_json::from_str::<Orientation>("\"diagonal\"").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
        assert_eq!(MarkerPosition::default(), MarkerPosition::Default);
        assert_eq!(AnnotationPosition::default(), AnnotationPosition::Default);
        assert_eq!(Boundary::default(), Boundary::Block);
    }
}
