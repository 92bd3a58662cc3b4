use page_widgets::{InlineOffsets, Rect, UiSurface, Vec2, pos2, vec2};
use wasm_bindgen::{JsCast as _, JsValue};

use crate::string_from_js_value;

/// The browser document as a [`UiSurface`].
///
/// DOM calls that fail (an invalid selector, an element that isn't an
/// `HtmlElement`) are logged and otherwise ignored.
pub struct WebSurface {
    window: web_sys::Window,
    document: web_sys::Document,
    layout_pass_requested: bool,
}

impl WebSurface {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            layout_pass_requested: false,
        })
    }

    /// Clear the layout pass request, returning whether there was one.
    pub(crate) fn take_layout_pass_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_pass_requested)
    }

    fn style(node: &web_sys::Element) -> Option<web_sys::CssStyleDeclaration> {
        match node.dyn_ref::<web_sys::HtmlElement>() {
            Some(element) => Some(element.style()),
            None => {
                log::warn!("{} is not an HtmlElement; ignoring style change", node.tag_name());
                None
            }
        }
    }

    fn set_style_property(style: &web_sys::CssStyleDeclaration, name: &str, value: &str) {
        let result = if value.is_empty() {
            style.remove_property(name).map(|_| ())
        } else {
            style.set_property(name, value)
        };
        if let Err(err) = result {
            log::warn!("Failed to set {name}: {}", string_from_js_value(&err));
        }
    }
}

impl UiSurface for WebSurface {
    type Node = web_sys::Element;

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(err) => {
                log::warn!("Bad selector {selector:?}: {}", string_from_js_value(&err));
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Bad selector {selector:?}: {}", string_from_js_value(&err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn contains(&self, ancestor: &web_sys::Element, node: &web_sys::Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn set_class(&mut self, node: &web_sys::Element, class: &str, present: bool) {
        if let Err(err) = node.class_list().toggle_with_force(class, present) {
            log::warn!("Failed to toggle class {class:?}: {}", string_from_js_value(&err));
        }
    }

    fn has_class(&self, node: &web_sys::Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_attribute(&mut self, node: &web_sys::Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            log::warn!("Failed to set {name:?}: {}", string_from_js_value(&err));
        }
    }

    fn attribute(&self, node: &web_sys::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn bounding_rect(&self, node: &web_sys::Element) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect::from_min_size(
            pos2(rect.x() as f32, rect.y() as f32),
            vec2(rect.width() as f32, rect.height() as f32),
        )
    }

    fn viewport_size(&self) -> Vec2 {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_default() as f32
        };
        vec2(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn set_inline_offsets(&mut self, node: &web_sys::Element, offsets: &InlineOffsets) {
        let Some(style) = Self::style(node) else {
            return;
        };
        for (name, value) in offsets.css_properties() {
            Self::set_style_property(&style, name, &value);
        }
    }

    fn input_value(&self, node: &web_sys::Element) -> String {
        node.dyn_ref::<web_sys::HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, node: &web_sys::Element, value: &str) {
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn set_text(&mut self, node: &web_sys::Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn focus(&mut self, node: &web_sys::Element) {
        if let Some(element) = node.dyn_ref::<web_sys::HtmlElement>() {
            element.focus().ok();
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            log::warn!("Document has no body to lock scrolling on");
            return;
        };
        Self::set_style_property(&body.style(), "overflow", if locked { "hidden" } else { "" });
    }

    fn request_layout_pass(&mut self) {
        self.layout_pass_requested = true;
    }
}
