//! Headless controllers for two small page widgets:
//!
//! * [`DrawerController`]: a mobile navigation drawer that opens from a toggle button.
//! * [`DateRangeDropdown`]: a popover with two date inputs that renders a range label
//!   and flips its anchor to stay inside the viewport.
//!
//! Neither controller touches a real document. Both talk to a [`UiSurface`],
//! which the host implements: `page_widgets_web` binds it to the browser DOM,
//! `page_widgets_harness` provides an in-memory one for tests.
//!
//! ```
//! use page_widgets::{DateRange, parse_input_date};
//!
//! let range = DateRange::ordered(
//!     parse_input_date("2024-03-10").unwrap(),
//!     parse_input_date("2024-01-05").unwrap(),
//! );
//! assert_eq!(range.label(), "January 5 - March 10, 2024");
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod date_range;
mod drawer;
mod dropdown;
mod error;
mod options;
mod page;
mod placement;
mod scroll_lock;
mod surface;

pub use crate::date_range::{DateRange, INPUT_DATE_FORMAT, parse_input_date};
pub use crate::drawer::DrawerController;
pub use crate::dropdown::DateRangeDropdown;
pub use crate::error::{Controller, Error, Result};
pub use crate::options::{DrawerOptions, DropdownOptions, PageOptions};
pub use crate::page::Page;
pub use crate::placement::{HorizontalAnchor, InlineOffsets, Inset, MenuPlacement, VerticalAnchor};
pub use crate::scroll_lock::ScrollLock;
pub use crate::surface::{EventResult, Key, UiEvent, UiSurface};

pub use emath::{Pos2, Rect, Vec2, pos2, vec2};

/// The ARIA attribute mirrored on both toggles.
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// The string form of a boolean ARIA state.
#[inline]
pub(crate) fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
