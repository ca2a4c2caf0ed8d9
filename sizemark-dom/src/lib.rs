mod dom;
mod marker;

pub use marker::{create_marker, Marker, MarkerHandle};

use marker::{attach_marker, resolve_options};
use sizemark_core::types::{Boundary, Orientation};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Attach a size marker to `target`, merging `options` over the defaults.
/// Returns the handle owning the marker's resize subscription, or
/// `undefined` if the target's positioning mode is unsupported.
#[wasm_bindgen(js_name = addMarker)]
pub fn add_marker(target: HtmlElement, options: JsValue) -> Result<Option<MarkerHandle>, JsError> {
    attach_marker(&target, resolve_options(options)?)
}

fn add_directional(
    target: HtmlElement,
    options: JsValue,
    orientation: Orientation,
    boundary: Option<Boundary>,
) -> Result<Option<MarkerHandle>, JsError> {
    let mut options = resolve_options(options)?;
    options.orientation = orientation;
    if let Some(boundary) = boundary {
        match orientation {
            Orientation::Horizontal => {
                options.boundary_left = boundary;
                options.boundary_right = boundary;
            }
            Orientation::Vertical => {
                options.boundary_top = boundary;
                options.boundary_bottom = boundary;
            }
        }
    }
    attach_marker(&target, options)
}

/// Width marker along the target's border box.
#[wasm_bindgen(js_name = addHorizontalMarker)]
pub fn add_horizontal_marker(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(target, options, Orientation::Horizontal, None)
}

/// Width marker measured out to the margin edge.
#[wasm_bindgen(js_name = addHorizontalMarkerMarginBoundary)]
pub fn add_horizontal_marker_margin_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Horizontal,
        Some(Boundary::Margin),
    )
}

/// Width marker measured out to the border edge.
#[wasm_bindgen(js_name = addHorizontalMarkerBorderBoundary)]
pub fn add_horizontal_marker_border_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Horizontal,
        Some(Boundary::Border),
    )
}

/// Width marker measured in to the padding edge.
#[wasm_bindgen(js_name = addHorizontalMarkerPaddingBoundary)]
pub fn add_horizontal_marker_padding_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Horizontal,
        Some(Boundary::Padding),
    )
}

/// Height marker along the target's border box.
#[wasm_bindgen(js_name = addVerticalMarker)]
pub fn add_vertical_marker(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(target, options, Orientation::Vertical, None)
}

/// Height marker measured out to the margin edge.
#[wasm_bindgen(js_name = addVerticalMarkerMarginBoundary)]
pub fn add_vertical_marker_margin_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Vertical,
        Some(Boundary::Margin),
    )
}

/// Height marker measured out to the border edge.
#[wasm_bindgen(js_name = addVerticalMarkerBorderBoundary)]
pub fn add_vertical_marker_border_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Vertical,
        Some(Boundary::Border),
    )
}

/// Height marker measured in to the padding edge.
#[wasm_bindgen(js_name = addVerticalMarkerPaddingBoundary)]
pub fn add_vertical_marker_padding_boundary(
    target: HtmlElement,
    options: JsValue,
) -> Result<Option<MarkerHandle>, JsError> {
    add_directional(
        target,
        options,
        Orientation::Vertical,
        Some(Boundary::Padding),
    )
}
