use sizemark_core::metrics::{BoxEdges, ElementMetrics};
use sizemark_core::style::Declarations;
use wasm_bindgen::JsError;
use web_sys::HtmlElement;

/// Parse a CSS length like `"12.5px"`; anything unparseable reads as zero.
pub(crate) fn parse_px(value: &str) -> f64 {
    value.trim_end_matches("px").trim().parse().unwrap_or(0.0)
}

/// Snapshot the target's box model from its live computed style and
/// bounding client rect.
pub(crate) fn read_metrics(element: &HtmlElement) -> Result<ElementMetrics, JsError> {
    let window = web_sys::window().ok_or_else(|| JsError::new("no window available"))?;
    let style = window
        .get_computed_style(element)
        .map_err(|_| JsError::new("getComputedStyle failed"))?
        .ok_or_else(|| JsError::new("target element has no computed style"))?;

    let length = |property: &str| -> f64 {
        style
            .get_property_value(property)
            .map(|value| parse_px(&value))
            .unwrap_or(0.0)
    };

    let rect = element.get_bounding_client_rect();

    Ok(ElementMetrics {
        margin: BoxEdges {
            top: length("margin-top"),
            bottom: length("margin-bottom"),
            left: length("margin-left"),
            right: length("margin-right"),
        },
        border: BoxEdges {
            top: length("border-top-width"),
            bottom: length("border-bottom-width"),
            left: length("border-left-width"),
            right: length("border-right-width"),
        },
        padding: BoxEdges {
            top: length("padding-top"),
            bottom: length("padding-bottom"),
            left: length("padding-left"),
            right: length("padding-right"),
        },
        width: rect.width(),
        height: rect.height(),
    })
}

/// Write a declaration block to an element's inline style.
pub(crate) fn apply_declarations(
    element: &HtmlElement,
    declarations: &Declarations,
) -> Result<(), JsError> {
    let style = element.style();
    for (property, value) in declarations.iter() {
        style
            .set_property(property, value)
            .map_err(|_| JsError::new("failed to set style property"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px("12.5px"), 12.5);
        assert_eq!(parse_px("-3px"), -3.0);
        assert_eq!(parse_px("0px"), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
