use crate::dom::{apply_declarations, read_metrics};
use sizemark_core::host::{host_position_action, HostPositionAction};
use sizemark_core::measure::measurement_label;
use sizemark_core::metrics::boundary_offsets;
use sizemark_core::options::{MarkerOptionOverrides, MarkerOptions};
use sizemark_core::style::{
    bar_declarations, bubble_declarations, tick_declarations, tip_declarations,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub(crate) fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no window available"))
}

fn document() -> Result<Document, JsError> {
    window()?
        .document()
        .ok_or_else(|| JsError::new("no document available"))
}

fn create_element(document: &Document, tag: &str) -> Result<HtmlElement, JsError> {
    document
        .create_element(tag)
        .map_err(|_| JsError::new("failed to create element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsError::new("created element is not an HtmlElement"))
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), JsError> {
    parent
        .append_child(child)
        .map_err(|_| JsError::new("failed to append marker element"))?;
    Ok(())
}

/// Merge a caller-supplied partial options object over the defaults.
/// `null`/`undefined` mean "all defaults".
pub(crate) fn resolve_options(options: JsValue) -> Result<MarkerOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(MarkerOptions::default());
    }
    let overrides: MarkerOptionOverrides =
        serde_wasm_bindgen::from_value(options).map_err(|err| JsError::new(&err.to_string()))?;
    Ok(MarkerOptions::default().with_overrides(&overrides))
}

fn refresh_label(
    target: Option<&HtmlElement>,
    options: &MarkerOptions,
    label: &HtmlElement,
) -> Result<(), JsError> {
    let metrics = target.map(read_metrics).transpose()?;
    let offsets = boundary_offsets(metrics.as_ref(), options);
    let text = measurement_label(Some(options.orientation), metrics.as_ref(), &offsets);
    label.set_text_content(Some(&text));
    Ok(())
}

/// A size marker subtree: the bar with its tick line, and the annotation
/// bubble with its pointer tip and label text.
#[wasm_bindgen]
pub struct Marker {
    root: HtmlElement,
    label: HtmlElement,
    options: MarkerOptions,
    target: Option<HtmlElement>,
}

impl Marker {
    pub(crate) fn new(target: Option<HtmlElement>, options: MarkerOptions) -> Result<Marker, JsError> {
        let document = document()?;
        let root = create_element(&document, "div")?;
        let tick = create_element(&document, "div")?;
        let bubble = create_element(&document, "div")?;
        let tip = create_element(&document, "div")?;
        let label = create_element(&document, "span")?;

        let metrics = target.as_ref().map(read_metrics).transpose()?;
        let offsets = boundary_offsets(metrics.as_ref(), &options);
        apply_declarations(&root, &bar_declarations(&options, &offsets))?;
        apply_declarations(&tick, &tick_declarations(&options))?;
        apply_declarations(&bubble, &bubble_declarations(&options))?;
        apply_declarations(&tip, &tip_declarations(&options))?;

        append(&bubble, &tip)?;
        append(&root, &tick)?;
        append(&root, &bubble)?;
        append(&bubble, &label)?;

        let marker = Marker {
            root,
            label,
            options,
            target,
        };
        marker.refresh()?;
        Ok(marker)
    }

    pub(crate) fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Closure recomputing the label from the target's live geometry, for
    /// registration against the window resize event.
    pub(crate) fn resize_listener(&self) -> Closure<dyn FnMut(web_sys::Event)> {
        let target = self.target.clone();
        let options = self.options.clone();
        let label = self.label.clone();
        Closure::new(move |_: web_sys::Event| {
            let _ = refresh_label(target.as_ref(), &options, &label);
        })
    }
}

#[wasm_bindgen]
impl Marker {
    /// Re-read the target's live geometry and rewrite the label text.
    pub fn refresh(&self) -> Result<(), JsError> {
        refresh_label(self.target.as_ref(), &self.options, &self.label)
    }

    /// Root element of the marker subtree.
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.root.clone()
    }

    /// The span holding the measurement text.
    #[wasm_bindgen(getter, js_name = labelElement)]
    pub fn label_element(&self) -> HtmlElement {
        self.label.clone()
    }

    /// Current label text.
    #[wasm_bindgen(getter, js_name = labelText)]
    pub fn label_text(&self) -> String {
        self.label.text_content().unwrap_or_default()
    }

    /// The fully-resolved configuration backing this marker.
    #[wasm_bindgen(js_name = resolvedOptions)]
    pub fn resolved_options(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.options).map_err(|err| JsError::new(&err.to_string()))
    }
}

/// Build a marker for `target` without attaching it. A `null` target is
/// allowed and degrades to zero boundary offsets and a zero measurement.
#[wasm_bindgen(js_name = createMarker)]
pub fn create_marker(target: Option<HtmlElement>, options: JsValue) -> Result<Marker, JsError> {
    Marker::new(target, resolve_options(options)?)
}

/// Owner of an attached marker: holds the resize subscription and the
/// marker subtree. Callers owning the marker's lifetime call [`detach`]
/// when the target leaves the document; an undetached handle keeps the
/// marker and its listener alive for the page lifetime.
///
/// [`detach`]: MarkerHandle::detach
#[wasm_bindgen]
pub struct MarkerHandle {
    root: HtmlElement,
    listener: Closure<dyn FnMut(web_sys::Event)>,
}

#[wasm_bindgen]
impl MarkerHandle {
    /// Unregister the resize listener and remove the marker subtree.
    pub fn detach(self) -> Result<(), JsError> {
        window()?
            .remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref())
            .map_err(|_| JsError::new("failed to unregister resize listener"))?;
        self.root.remove();
        Ok(())
    }
}

/// Validate the target, build the marker subtree, append it to the target
/// and subscribe the recompute callback to window resize events. An
/// unsupported positioning mode logs a warning and attaches nothing.
pub(crate) fn attach_marker(
    target: &HtmlElement,
    options: MarkerOptions,
) -> Result<Option<MarkerHandle>, JsError> {
    let window = window()?;
    let computed = window
        .get_computed_style(target)
        .map_err(|_| JsError::new("getComputedStyle failed"))?
        .ok_or_else(|| JsError::new("target element has no computed style"))?;
    let position = computed.get_property_value("position").unwrap_or_default();

    match host_position_action(&position) {
        Ok(HostPositionAction::ForceRelative) => {
            target
                .style()
                .set_property("position", "relative")
                .map_err(|_| JsError::new("failed to set target position"))?;
        }
        Ok(HostPositionAction::LeaveAsIs) => {}
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            return Ok(None);
        }
    }

    let marker = Marker::new(Some(target.clone()), options)?;
    let listener = marker.resize_listener();
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .map_err(|_| JsError::new("failed to register resize listener"))?;
    append(target, marker.root())?;

    Ok(Some(MarkerHandle {
        root: marker.root().clone(),
        listener,
    }))
}
