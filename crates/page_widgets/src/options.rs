/// Where to find the drawer's elements, and when to auto-close it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerOptions {
    /// The hamburger button that opens the drawer.
    pub toggle: String,

    /// The navigation panel itself.
    pub panel: String,

    /// The close button inside the panel.
    pub close: String,

    /// Links inside the panel. Following one closes the drawer.
    pub links: String,

    /// Class toggled on both the toggle and the panel while open.
    pub active_class: String,

    /// Resizing the viewport wider than this (in CSS pixels) closes the drawer.
    pub breakpoint: f32,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            toggle: "#mobileMenuToggle".to_owned(),
            panel: "#mobileNav".to_owned(),
            close: "#mobileMenuClose".to_owned(),
            links: "#mobileNav a".to_owned(),
            active_class: "active".to_owned(),
            breakpoint: 768.0,
        }
    }
}

/// Where to find the date range dropdown's elements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownOptions {
    /// The positioned container of trigger and menu. Clicks outside it dismiss the menu.
    pub wrapper: String,

    pub trigger: String,

    /// The popover holding the two inputs.
    pub menu: String,

    /// The text node showing the applied range.
    pub label: String,

    pub start_input: String,
    pub end_input: String,
    pub apply: String,
    pub clear: String,

    /// Class toggled on the menu while it is open.
    pub open_class: String,

    /// Distance between the trigger and the menu, CSS pixels.
    pub gap: f32,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            wrapper: "#dateRangeDropdown".to_owned(),
            trigger: "#dateRangeDropdown .date-range-trigger".to_owned(),
            menu: "#dateRangeMenu".to_owned(),
            label: "#dateRangeLabel".to_owned(),
            start_input: "#startDate".to_owned(),
            end_input: "#endDate".to_owned(),
            apply: "#applyDateRange".to_owned(),
            clear: "#clearDateRange".to_owned(),
            open_class: "open".to_owned(),
            gap: 8.0,
        }
    }
}

/// Options for everything on a [`crate::Page`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageOptions {
    pub drawer: DrawerOptions,
    pub dropdown: DropdownOptions,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let options: PageOptions =
            serde_json::from_str(r#"{ "drawer": { "breakpoint": 1024.0 } }"#).unwrap();
        assert_eq!(options.drawer.breakpoint, 1024.0);
        assert_eq!(options.drawer.toggle, "#mobileMenuToggle");
        assert_eq!(options.dropdown, DropdownOptions::default());
    }
}
