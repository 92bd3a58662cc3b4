use emath::{Rect, Vec2};

use crate::InlineOffsets;

/// A keyboard key, as far as the controllers care.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,

    /// Anything else. Ignored by every controller.
    Other,
}

impl Key {
    /// Translate a DOM [`KeyboardEvent.key`](https://developer.mozilla.org/en-US/docs/Web/API/KeyboardEvent/key) value.
    pub fn from_name(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Something that happened on the page, delivered by the host to [`crate::Page::on_event`].
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent<N> {
    /// A click anywhere in the document. `target` is the innermost element clicked.
    Click { target: N },

    /// A key was pressed while the document had focus.
    KeyDown { key: Key },

    /// The viewport changed size.
    Resize,

    /// The layout pass requested with [`UiSurface::request_layout_pass`] has happened,
    /// so geometry read now reflects the latest class changes.
    LayoutPass,
}

/// What handling a [`UiEvent`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResult {
    /// The event changed controller state.
    pub changed: bool,
}

impl EventResult {
    pub const IGNORED: Self = Self { changed: false };
    pub const CHANGED: Self = Self { changed: true };

    #[inline]
    pub fn changed(self) -> bool {
        self.changed
    }
}

impl std::ops::BitOr for EventResult {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            changed: self.changed || rhs.changed,
        }
    }
}

impl std::ops::BitOrAssign for EventResult {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// The document as seen by the controllers.
///
/// A set of bindable elements with classes, attributes and geometry, plus the few
/// document-wide things the widgets touch (viewport size, scroll lock, layout passes).
///
/// Selectors are CSS selectors. Implementations only need to support the simple
/// forms used in [`crate::PageOptions`]: `#id`, `.class`, `tag` and descendant
/// combinations of those.
pub trait UiSurface {
    /// A handle to an element. Cheap to clone.
    type Node: Clone + std::fmt::Debug;

    /// The first element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Is `node` the same as, or a descendant of, `ancestor`?
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn set_class(&mut self, node: &Self::Node, class: &str, present: bool);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// The border box of `node` in viewport coordinates.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Width and height of the layout viewport.
    fn viewport_size(&self) -> Vec2;

    /// Write the inline `left`/`right`/`top`/`bottom` overrides of a positioned element.
    fn set_inline_offsets(&mut self, node: &Self::Node, offsets: &InlineOffsets);

    /// The current value of a form input. Empty if `node` is not an input.
    fn input_value(&self, node: &Self::Node) -> String;

    fn set_input_value(&mut self, node: &Self::Node, value: &str);

    /// Replace the text content of `node`.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Move keyboard focus to `node`.
    fn focus(&mut self, node: &Self::Node);

    /// Lock or unlock scrolling of the whole document.
    ///
    /// Use [`crate::ScrollLock`] rather than calling this directly.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Ask the host to deliver [`UiEvent::LayoutPass`] once the current style
    /// changes have been laid out (on the web: the next animation frame).
    fn request_layout_pass(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Other);
        assert_eq!(Key::from_name("a"), Key::Other);
    }

    #[test]
    fn results_combine() {
        let mut result = EventResult::IGNORED;
        result |= EventResult::IGNORED;
        assert!(!result.changed());
        result |= EventResult::CHANGED;
        assert!(result.changed());
    }
}
