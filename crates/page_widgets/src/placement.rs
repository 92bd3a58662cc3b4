//! Where the date range popover goes.
//!
//! The menu is absolutely positioned inside its wrapper. By default it hangs
//! below the trigger, left edges aligned:
//! ```text
//! ┌─────────┐
//! │ trigger │
//! └─────────┘
//! ┌──────────────┐
//! │     menu     │
//! └──────────────┘
//! ```
//! If that would stick out past the right of the viewport, the right edges are
//! aligned instead. If it would stick out past the bottom, and there is room
//! above the trigger, it goes above. There is no third option: if neither side
//! fits, the menu overflows.

use emath::{Rect, Vec2};

/// One inline `left`/`right`/`top`/`bottom` value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Inset {
    /// `auto`
    Auto,

    /// A fixed distance from the wrapper's edge, `{0}px`.
    Px(f32),

    /// Just outside the wrapper's opposite edge: `calc(100% + {gap}px)`.
    Outside { gap: f32 },
}

impl Inset {
    /// The CSS value for this inset.
    pub fn to_css(self) -> String {
        match self {
            Self::Auto => "auto".to_owned(),
            Self::Px(px) if px == 0.0 => "0".to_owned(),
            Self::Px(px) => format!("{px}px"),
            Self::Outside { gap } => format!("calc(100% + {gap}px)"),
        }
    }
}

/// Inline position overrides of the popover.
///
/// `None` means no inline value, so the stylesheet decides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InlineOffsets {
    pub left: Option<Inset>,
    pub right: Option<Inset>,
    pub top: Option<Inset>,
    pub bottom: Option<Inset>,
}

impl InlineOffsets {
    /// No overrides at all.
    pub const CLEARED: Self = Self {
        left: None,
        right: None,
        top: None,
        bottom: None,
    };

    #[inline]
    pub fn is_cleared(&self) -> bool {
        *self == Self::CLEARED
    }

    /// `(property, value)` pairs, with an empty value for a cleared side.
    pub fn css_properties(&self) -> [(&'static str, String); 4] {
        let css = |inset: Option<Inset>| inset.map(Inset::to_css).unwrap_or_default();
        [
            ("left", css(self.left)),
            ("right", css(self.right)),
            ("top", css(self.top)),
            ("bottom", css(self.bottom)),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HorizontalAnchor {
    /// Left edges aligned.
    #[default]
    Start,

    /// Right edges aligned.
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum VerticalAnchor {
    #[default]
    Below,
    Above,
}

/// The result of the two-axis anchor flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MenuPlacement {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl MenuPlacement {
    /// Below the trigger, left-aligned.
    pub const DEFAULT: Self = Self {
        horizontal: HorizontalAnchor::Start,
        vertical: VerticalAnchor::Below,
    };

    /// Pick a placement.
    ///
    /// `menu` must be measured while the menu sits at [`Self::DEFAULT`]
    /// (see [`Self::default_offsets`]). `trigger` is the button the menu hangs from.
    pub fn compute(menu: Rect, trigger: Rect, viewport: Vec2, gap: f32) -> Self {
        let mut placement = Self::DEFAULT;

        if menu.right() > viewport.x {
            placement.horizontal = HorizontalAnchor::End;
        }

        // Right-aligning only moves the menu sideways, so `menu.bottom()` still holds.
        let space_above = trigger.top();
        if menu.bottom() > viewport.y && space_above > menu.height() + gap {
            placement.vertical = VerticalAnchor::Above;
        }

        placement
    }

    /// The offsets that put the menu at [`Self::DEFAULT`].
    pub fn default_offsets(gap: f32) -> InlineOffsets {
        Self::DEFAULT.offsets(gap)
    }

    pub fn offsets(&self, gap: f32) -> InlineOffsets {
        let (left, right) = match self.horizontal {
            HorizontalAnchor::Start => (Inset::Px(0.0), Inset::Auto),
            HorizontalAnchor::End => (Inset::Auto, Inset::Px(0.0)),
        };
        let (top, bottom) = match self.vertical {
            VerticalAnchor::Below => (Inset::Outside { gap }, Inset::Auto),
            VerticalAnchor::Above => (Inset::Auto, Inset::Outside { gap }),
        };
        InlineOffsets {
            left: Some(left),
            right: Some(right),
            top: Some(top),
            bottom: Some(bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emath::{pos2, vec2};

    const VIEWPORT: Vec2 = vec2(1024.0, 768.0);
    const GAP: f32 = 8.0;

    fn trigger_at(x: f32, y: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(200.0, 40.0))
    }

    /// Where the menu lands at the default placement, given its trigger.
    fn menu_below(trigger: Rect, size: Vec2) -> Rect {
        Rect::from_min_size(pos2(trigger.left(), trigger.bottom() + GAP), size)
    }

    #[test]
    fn fits_by_default() {
        let trigger = trigger_at(100.0, 100.0);
        let menu = menu_below(trigger, vec2(320.0, 260.0));
        assert_eq!(
            MenuPlacement::compute(menu, trigger, VIEWPORT, GAP),
            MenuPlacement::DEFAULT
        );
    }

    #[test]
    fn flips_to_right_edge() {
        let trigger = trigger_at(900.0, 100.0);
        let menu = menu_below(trigger, vec2(320.0, 260.0));
        let placement = MenuPlacement::compute(menu, trigger, VIEWPORT, GAP);
        assert_eq!(placement.horizontal, HorizontalAnchor::End);
        assert_eq!(placement.vertical, VerticalAnchor::Below);
    }

    #[test]
    fn flips_above_when_there_is_room() {
        let trigger = trigger_at(100.0, 600.0);
        let menu = menu_below(trigger, vec2(320.0, 260.0));
        let placement = MenuPlacement::compute(menu, trigger, VIEWPORT, GAP);
        assert_eq!(placement.vertical, VerticalAnchor::Above);
        assert_eq!(placement.horizontal, HorizontalAnchor::Start);
    }

    #[test]
    fn stays_below_when_neither_side_fits() {
        let trigger = trigger_at(100.0, 200.0);
        let menu = menu_below(trigger, vec2(320.0, 700.0));
        let placement = MenuPlacement::compute(menu, trigger, VIEWPORT, GAP);
        assert_eq!(placement.vertical, VerticalAnchor::Below);
    }

    #[test]
    fn flips_both_axes() {
        let trigger = trigger_at(900.0, 600.0);
        let menu = menu_below(trigger, vec2(320.0, 260.0));
        let placement = MenuPlacement::compute(menu, trigger, VIEWPORT, GAP);
        assert_eq!(
            placement,
            MenuPlacement {
                horizontal: HorizontalAnchor::End,
                vertical: VerticalAnchor::Above,
            }
        );
    }

    #[test]
    fn css_values() {
        let offsets = MenuPlacement {
            horizontal: HorizontalAnchor::End,
            vertical: VerticalAnchor::Above,
        }
        .offsets(GAP);
        assert_eq!(
            offsets.css_properties(),
            [
                ("left", "auto".to_owned()),
                ("right", "0".to_owned()),
                ("top", "auto".to_owned()),
                ("bottom", "calc(100% + 8px)".to_owned()),
            ]
        );
        assert!(InlineOffsets::CLEARED.css_properties().iter().all(|(_, v)| v.is_empty()));
    }
}
