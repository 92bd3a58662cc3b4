use page_widgets::{PageOptions, Pos2, Rect, Vec2, pos2, vec2};

use crate::{Dom, Element, Harness, NodeId};

/// Builds the standard fixture page for a [`Harness`].
///
/// The page has a header with the drawer toggle, the drawer with three links,
/// a date range dropdown and a `<main>` to click outside of everything.
/// Element ids and classes match [`PageOptions::default`].
pub struct HarnessBuilder {
    pub(crate) viewport: Vec2,
    pub(crate) trigger_pos: Pos2,
    pub(crate) trigger_size: Vec2,
    pub(crate) menu_size: Vec2,
    pub(crate) gap: f32,
    pub(crate) drawer: bool,
    pub(crate) dropdown: bool,
    pub(crate) options: PageOptions,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self {
            viewport: vec2(1024.0, 768.0),
            trigger_pos: pos2(40.0, 120.0),
            trigger_size: vec2(220.0, 40.0),
            menu_size: vec2(320.0, 240.0),
            gap: 8.0,
            drawer: true,
            dropdown: true,
            options: PageOptions::default(),
        }
    }
}

impl HarnessBuilder {
    /// Size of the viewport. (Default: 1024x768)
    #[inline]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.viewport = size;
        self
    }

    /// Top left corner of the date range trigger.
    #[inline]
    pub fn with_trigger_at(mut self, pos: Pos2) -> Self {
        self.trigger_pos = pos;
        self
    }

    /// Size of the date range popover. (Default: 320x240)
    #[inline]
    pub fn with_menu_size(mut self, size: Vec2) -> Self {
        self.menu_size = size;
        self
    }

    /// Leave the drawer's elements out of the page.
    #[inline]
    pub fn without_drawer(mut self) -> Self {
        self.drawer = false;
        self
    }

    /// Leave the date range dropdown's elements out of the page.
    #[inline]
    pub fn without_dropdown(mut self) -> Self {
        self.dropdown = false;
        self
    }

    /// Options to bind the page with. Only the behavior fields matter;
    /// the fixture always uses the default selectors.
    #[inline]
    pub fn with_options(mut self, options: PageOptions) -> Self {
        self.gap = options.dropdown.gap;
        self.options = options;
        self
    }

    pub fn build(self) -> Harness {
        Harness::from_dom(self.build_dom(), &self.options)
    }

    pub fn build_dom(&self) -> Dom {
        let mut dom = Dom::new(self.viewport);
        let body = dom.body();

        if self.drawer {
            self.add_drawer(&mut dom, body);
        }
        if self.dropdown {
            self.add_dropdown(&mut dom, body);
        }
        dom.append(
            body,
            Element::new("main").id("content").rect(Rect::from_min_size(
                pos2(0.0, 64.0),
                vec2(self.viewport.x, self.viewport.y - 64.0),
            )),
        );

        dom
    }

    fn add_drawer(&self, dom: &mut Dom, body: NodeId) {
        let header = dom.append(
            body,
            Element::new("header").rect(Rect::from_min_size(Pos2::ZERO, vec2(self.viewport.x, 64.0))),
        );
        let toggle = dom.append(
            header,
            Element::new("button")
                .id("mobileMenuToggle")
                .class("mobile-menu-toggle")
                .rect(Rect::from_min_size(pos2(12.0, 12.0), vec2(40.0, 40.0))),
        );
        dom.append(toggle, Element::new("span").class("hamburger-line"));

        let nav = dom.append(
            body,
            Element::new("nav")
                .id("mobileNav")
                .class("mobile-nav")
                .rect(Rect::from_min_size(Pos2::ZERO, vec2(300.0, self.viewport.y))),
        );
        dom.append(nav, Element::new("button").id("mobileMenuClose").text("×"));
        let list = dom.append(nav, Element::new("ul"));
        for (href, text) in [("#home", "Home"), ("#about", "About"), ("#contact", "Contact")] {
            let item = dom.append(list, Element::new("li"));
            let link = dom.append(item, Element::new("a").class("nav-link").id(&href[1..]));
            dom.append(link, Element::new("span").text(text));
        }
    }

    fn add_dropdown(&self, dom: &mut Dom, body: NodeId) {
        let trigger_rect = Rect::from_min_size(self.trigger_pos, self.trigger_size);

        let wrapper = dom.append(
            body,
            Element::new("div")
                .id("dateRangeDropdown")
                .class("date-range-dropdown")
                .rect(trigger_rect),
        );
        let trigger = dom.append(
            wrapper,
            Element::new("button").class("date-range-trigger").rect(trigger_rect),
        );
        dom.append(
            trigger,
            Element::new("span")
                .id("dateRangeLabel")
                .text("Select dates")
                .rect(trigger_rect.shrink(8.0)),
        );

        // Laid out at the default placement: left-aligned, below the trigger.
        let menu_rect = Rect::from_min_size(
            pos2(trigger_rect.left(), trigger_rect.bottom() + self.gap),
            self.menu_size,
        );
        let menu = dom.append(
            wrapper,
            Element::new("div")
                .id("dateRangeMenu")
                .class("date-range-menu")
                .rect(menu_rect),
        );
        dom.append(menu, Element::new("input").id("startDate"));
        dom.append(menu, Element::new("input").id("endDate"));
        let actions = dom.append(menu, Element::new("div").class("date-range-actions"));
        dom.append(actions, Element::new("button").id("clearDateRange").text("Clear"));
        dom.append(actions, Element::new("button").id("applyDateRange").text("Apply"));
    }
}
