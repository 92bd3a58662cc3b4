//! Test [`page_widgets`] without a browser.
//!
//! [`Dom`] is a tiny in-memory document implementing [`page_widgets::UiSurface`].
//! [`Harness`] binds a [`page_widgets::Page`] to it and lets a test click, type
//! and press keys, then inspect classes, attributes, geometry and focus.
//!
//! ```
//! use page_widgets_harness::Harness;
//!
//! let mut harness = Harness::new();
//! harness.set_value("#startDate", "2024-03-10");
//! harness.set_value("#endDate", "2024-01-05");
//! harness.click(".date-range-trigger");
//! harness.run();
//! harness.click("#applyDateRange");
//! assert_eq!(harness.text("#dateRangeLabel"), "January 5 - March 10, 2024");
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod builder;
mod dom;

pub use builder::*;
pub use dom::{Dom, Element, NodeId};

use page_widgets::{EventResult, Key, Page, PageOptions, Rect, UiEvent, UiSurface as _, Vec2};

/// Layout passes [`Harness::run`] delivers before giving up.
const MAX_LAYOUT_PASSES: usize = 4;

/// The test harness. Owns a [`Page`] bound to a [`Dom`].
///
/// Create one with [`Harness::new`] for the standard fixture page,
/// [`Harness::builder`] to tweak it, or [`Harness::from_dom`] for your own document.
#[derive(Debug)]
pub struct Harness {
    page: Page<Dom>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// The standard fixture page: a drawer and a date range dropdown, 1024x768.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    /// Bind the widgets in `options` to an existing document.
    pub fn from_dom(dom: Dom, options: &PageOptions) -> Self {
        Self {
            page: Page::new(dom, options),
        }
    }

    #[inline]
    pub fn page(&self) -> &Page<Dom> {
        &self.page
    }

    #[inline]
    pub fn page_mut(&mut self) -> &mut Page<Dom> {
        &mut self.page
    }

    #[inline]
    pub fn dom(&self) -> &Dom {
        self.page.surface()
    }

    #[inline]
    pub fn dom_mut(&mut self) -> &mut Dom {
        self.page.surface_mut()
    }

    pub fn event(&mut self, event: &UiEvent<NodeId>) -> EventResult {
        self.page.on_event(event)
    }

    /// Click the first element matching `selector`.
    #[track_caller]
    pub fn click(&mut self, selector: &str) -> EventResult {
        let target = self.dom().get(selector);
        self.click_node(target)
    }

    pub fn click_node(&mut self, target: NodeId) -> EventResult {
        self.event(&UiEvent::Click { target })
    }

    pub fn press(&mut self, key: Key) -> EventResult {
        self.event(&UiEvent::KeyDown { key })
    }

    /// Resize the viewport and tell the page about it.
    pub fn resize(&mut self, size: Vec2) -> EventResult {
        self.dom_mut().set_viewport_size(size);
        self.event(&UiEvent::Resize)
    }

    /// Type into an input, replacing its value.
    #[track_caller]
    pub fn set_value(&mut self, selector: &str, value: &str) {
        let node = self.dom().get(selector);
        self.dom_mut().set_input_value(&node, value);
    }

    /// Deliver requested layout passes until nobody asks for another one.
    ///
    /// Returns how many were delivered.
    ///
    /// # Panics
    /// If the page keeps requesting layout passes.
    pub fn run(&mut self) -> usize {
        let mut passes = 0;
        while self.dom_mut().take_layout_pass_request() {
            passes += 1;
            assert!(
                passes <= MAX_LAYOUT_PASSES,
                "page requested more than {MAX_LAYOUT_PASSES} layout passes in a row"
            );
            let _ = self.event(&UiEvent::LayoutPass);
        }
        passes
    }

    #[track_caller]
    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        let node = self.dom().get(selector);
        self.dom().has_class(&node, class)
    }

    #[track_caller]
    pub fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let node = self.dom().get(selector);
        self.dom().attribute(&node, name)
    }

    #[track_caller]
    pub fn text(&self, selector: &str) -> &str {
        let node = self.dom().get(selector);
        self.dom().text(node)
    }

    #[track_caller]
    pub fn value(&self, selector: &str) -> String {
        let node = self.dom().get(selector);
        self.dom().input_value(&node)
    }

    #[track_caller]
    pub fn rect(&self, selector: &str) -> Rect {
        let node = self.dom().get(selector);
        self.dom().bounding_rect(&node)
    }

    /// Does the first element matching `selector` have keyboard focus?
    #[track_caller]
    pub fn is_focused(&self, selector: &str) -> bool {
        self.dom().focused() == Some(self.dom().get(selector))
    }
}
