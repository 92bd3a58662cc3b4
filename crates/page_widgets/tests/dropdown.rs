use page_widgets::{
    ARIA_EXPANDED, DateRange, HorizontalAnchor, InlineOffsets, Inset, Key, MenuPlacement,
    VerticalAnchor, pos2, vec2,
};
use page_widgets_harness::Harness;

const TRIGGER: &str = ".date-range-trigger";
const MENU: &str = "#dateRangeMenu";
const LABEL: &str = "#dateRangeLabel";
const START: &str = "#startDate";
const END: &str = "#endDate";
const APPLY: &str = "#applyDateRange";
const CLEAR: &str = "#clearDateRange";

fn is_open(harness: &Harness) -> bool {
    let open = harness.has_class(MENU, "open");
    assert_eq!(
        harness.attribute(TRIGGER, ARIA_EXPANDED).as_deref(),
        Some(if open { "true" } else { "false" }),
        "aria-expanded out of sync with the menu"
    );
    assert_eq!(harness.page().dropdown().map(|d| d.is_open()), Some(open));
    open
}

fn menu_offsets(harness: &Harness) -> InlineOffsets {
    let menu = harness.dom().get(MENU);
    harness.dom().inline_offsets(menu)
}

fn open(harness: &mut Harness) {
    harness.click(TRIGGER);
    harness.run();
    assert!(is_open(harness));
}

fn apply(harness: &mut Harness, start: &str, end: &str) {
    open(harness);
    harness.set_value(START, start);
    harness.set_value(END, end);
    harness.click(APPLY);
    assert!(!is_open(harness));
}

#[test]
fn trigger_toggles() {
    let mut harness = Harness::new();
    assert!(!is_open(&harness));

    assert!(harness.click(TRIGGER).changed());
    assert!(is_open(&harness));

    assert!(harness.click(TRIGGER).changed());
    assert!(!is_open(&harness));
    assert!(menu_offsets(&harness).is_cleared());
}

#[test]
fn click_on_label_toggles() {
    let mut harness = Harness::new();
    harness.click(LABEL);
    assert!(is_open(&harness));
}

#[test]
fn positioning_waits_for_layout_pass() {
    let mut harness = Harness::new();

    harness.click(TRIGGER);
    assert!(harness.dom().layout_pass_requested());
    assert!(harness.page().layout_pass_pending());
    assert!(menu_offsets(&harness).is_cleared());

    assert_eq!(harness.run(), 1);
    assert!(!harness.page().layout_pass_pending());
    assert_eq!(menu_offsets(&harness), MenuPlacement::default_offsets(8.0));
}

#[test]
fn closing_requests_nothing() {
    let mut harness = Harness::new();
    open(&mut harness);
    harness.click(TRIGGER);
    assert!(!harness.dom().layout_pass_requested());
    assert_eq!(harness.run(), 0);
}

#[test]
fn layout_pass_after_close_does_nothing() {
    let mut harness = Harness::new();
    harness.click(TRIGGER);
    harness.click(TRIGGER);
    harness.run();
    assert!(!is_open(&harness));
    assert!(menu_offsets(&harness).is_cleared());
}

#[test]
fn flips_to_right_edge() {
    let mut harness = Harness::builder().with_trigger_at(pos2(780.0, 120.0)).build();
    open(&mut harness);

    let offsets = menu_offsets(&harness);
    assert_eq!(offsets.left, Some(Inset::Auto));
    assert_eq!(offsets.right, Some(Inset::Px(0.0)));
    assert_eq!(offsets.top, Some(Inset::Outside { gap: 8.0 }));

    let menu = harness.rect(MENU);
    assert_eq!(menu.right(), harness.rect("#dateRangeDropdown").right());
    assert!(menu.right() <= 1024.0);
}

#[test]
fn flips_above_near_the_bottom() {
    let mut harness = Harness::builder().with_trigger_at(pos2(40.0, 640.0)).build();
    open(&mut harness);

    assert_eq!(
        menu_offsets(&harness),
        MenuPlacement {
            horizontal: HorizontalAnchor::Start,
            vertical: VerticalAnchor::Above,
        }
        .offsets(8.0)
    );
    let menu = harness.rect(MENU);
    assert_eq!(menu.bottom() + 8.0, harness.rect(TRIGGER).top());
}

#[test]
fn overflows_when_neither_side_fits() {
    let mut harness = Harness::builder()
        .with_size(vec2(1024.0, 500.0))
        .with_trigger_at(pos2(40.0, 200.0))
        .with_menu_size(vec2(320.0, 400.0))
        .build();
    open(&mut harness);
    assert_eq!(menu_offsets(&harness), MenuPlacement::default_offsets(8.0));
}

#[test]
fn reopening_starts_from_the_default() {
    let mut harness = Harness::builder().with_trigger_at(pos2(780.0, 120.0)).build();
    open(&mut harness);
    assert_eq!(menu_offsets(&harness).right, Some(Inset::Px(0.0)));

    harness.click(TRIGGER);
    assert!(menu_offsets(&harness).is_cleared());

    // Now the menu fits:
    harness.resize(vec2(1600.0, 768.0));
    open(&mut harness);
    assert_eq!(menu_offsets(&harness), MenuPlacement::default_offsets(8.0));
}

#[test]
fn apply_same_year() {
    let mut harness = Harness::new();
    apply(&mut harness, "2024-01-05", "2024-03-10");
    assert_eq!(harness.text(LABEL), "January 5 - March 10, 2024");
    assert!(menu_offsets(&harness).is_cleared());
}

#[test]
fn apply_across_years() {
    let mut harness = Harness::new();
    apply(&mut harness, "2023-12-20", "2024-01-02");
    assert_eq!(harness.text(LABEL), "December 20, 2023 - January 2, 2024");
}

#[test]
fn apply_is_order_independent() {
    let dates = ["2023-12-20", "2024-01-02", "2024-01-05", "2024-03-10", "2025-07-04"];
    for a in dates {
        for b in dates {
            let mut forward = Harness::new();
            apply(&mut forward, a, b);
            let mut backward = Harness::new();
            apply(&mut backward, b, a);
            assert_eq!(forward.text(LABEL), backward.text(LABEL), "{a} vs {b}");
            assert_eq!(
                forward.page().dropdown().and_then(|d| d.selected()),
                Some(DateRange::parse(a, b).unwrap())
            );
        }
    }
}

#[test]
fn apply_with_an_empty_field_keeps_the_label() {
    let mut harness = Harness::new();
    apply(&mut harness, "2024-01-05", "2024-03-10");

    for (start, end) in [("", "2024-05-01"), ("2024-05-01", ""), ("", ""), ("  ", "2024-05-01")] {
        apply(&mut harness, start, end);
        assert_eq!(harness.text(LABEL), "January 5 - March 10, 2024");
        assert!(menu_offsets(&harness).is_cleared());
    }
}

#[test]
fn apply_before_any_selection_keeps_placeholder() {
    let mut harness = Harness::new();
    apply(&mut harness, "", "2024-01-01");
    assert_eq!(harness.text(LABEL), "Select dates");
    assert_eq!(harness.page().dropdown().and_then(|d| d.label()), None);
}

#[test]
fn apply_with_a_malformed_date_keeps_the_label() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut harness = Harness::new();
    apply(&mut harness, "2024-01-05", "2024-03-10");
    apply(&mut harness, "2024-02-30", "2024-03-10");
    assert_eq!(harness.text(LABEL), "January 5 - March 10, 2024");
    apply(&mut harness, "next tuesday", "2024-03-10");
    assert_eq!(harness.text(LABEL), "January 5 - March 10, 2024");
}

#[test]
fn clear_empties_inputs_and_focuses_start() {
    let mut harness = Harness::new();
    apply(&mut harness, "2024-01-05", "2024-03-10");

    open(&mut harness);
    harness.click(CLEAR);
    assert_eq!(harness.value(START), "");
    assert_eq!(harness.value(END), "");
    assert!(harness.is_focused(START));
    assert!(is_open(&harness), "clearing happens inside the menu");
    assert_eq!(harness.text(LABEL), "January 5 - March 10, 2024");
}

#[test]
fn clicks_inside_the_menu_keep_it_open() {
    let mut harness = Harness::new();
    open(&mut harness);
    harness.click(START);
    harness.click("#dateRangeMenu .date-range-actions");
    assert!(is_open(&harness));
}

#[test]
fn outside_click_dismisses() {
    let mut harness = Harness::builder().with_trigger_at(pos2(780.0, 120.0)).build();
    open(&mut harness);
    assert!(!menu_offsets(&harness).is_cleared());

    assert!(harness.click("#content").changed());
    assert!(!is_open(&harness));
    assert!(menu_offsets(&harness).is_cleared());

    assert!(!harness.click("#content").changed());
}

#[test]
fn escape_dismisses_and_returns_focus() {
    let mut harness = Harness::builder().with_trigger_at(pos2(40.0, 640.0)).build();
    open(&mut harness);
    harness.click(START);

    assert!(harness.press(Key::Escape).changed());
    assert!(!is_open(&harness));
    assert!(menu_offsets(&harness).is_cleared());
    assert!(harness.is_focused(TRIGGER));
}

#[test]
fn escape_while_closed_leaves_focus_alone() {
    let mut harness = Harness::new();
    harness.click(CLEAR);
    assert!(harness.is_focused(START));
    assert!(!harness.press(Key::Escape).changed());
    assert!(harness.is_focused(START));
}

#[test]
fn widgets_are_independent() {
    let mut harness = Harness::builder().with_size(vec2(375.0, 812.0)).build();

    harness.click("#mobileMenuToggle");
    open(&mut harness);
    assert!(harness.has_class("#mobileNav", "active"));

    // Escape reaches both widgets.
    harness.press(Key::Escape);
    assert!(!is_open(&harness));
    assert!(!harness.has_class("#mobileNav", "active"));
}

#[test]
fn page_without_dropdown() {
    let mut harness = Harness::builder().without_dropdown().build();
    assert!(harness.page().dropdown().is_none());
    assert!(harness.page().drawer().is_some());
    harness.click("#mobileMenuToggle");
    assert!(!harness.page().layout_pass_pending());
    assert_eq!(harness.run(), 0);
}
