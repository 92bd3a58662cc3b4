use crate::{
    ARIA_EXPANDED, Controller, DateRange, DropdownOptions, Error, EventResult, InlineOffsets, Key,
    MenuPlacement, Result, UiEvent, UiSurface, aria_bool,
};

/// A button that opens a popover with a start and end date.
///
/// Applying writes the chosen range to the label, e.g. `January 5 - March 10, 2024`.
/// The popover is positioned below the trigger, and flips to the right edge or above
/// the trigger when it would otherwise leave the viewport.
///
/// ```text
///   closed ──trigger──▶ open ──trigger / apply / outside click / Escape──▶ closed
/// ```
#[derive(Debug)]
pub struct DateRangeDropdown<N> {
    wrapper: N,
    trigger: N,
    menu: N,
    label: N,
    start_input: N,
    end_input: N,
    apply: N,
    clear: N,

    open_class: String,
    gap: f32,

    is_open: bool,

    /// Set between opening and the layout pass that positions the menu.
    reposition_pending: bool,

    selected: Option<DateRange>,
}

impl<N: Clone + std::fmt::Debug> DateRangeDropdown<N> {
    /// Find the dropdown's elements and put them in the closed state.
    ///
    /// # Errors
    /// [`Error::MissingElement`] for the first element that is not on the surface.
    pub fn bind<S>(ui: &mut S, options: &DropdownOptions) -> Result<Self>
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        let find = |selector: &str| {
            ui.query(selector).ok_or_else(|| Error::MissingElement {
                controller: Controller::Dropdown,
                selector: selector.to_owned(),
            })
        };

        let dropdown = Self {
            wrapper: find(&options.wrapper)?,
            trigger: find(&options.trigger)?,
            menu: find(&options.menu)?,
            label: find(&options.label)?,
            start_input: find(&options.start_input)?,
            end_input: find(&options.end_input)?,
            apply: find(&options.apply)?,
            clear: find(&options.clear)?,
            open_class: options.open_class.clone(),
            gap: options.gap,
            is_open: false,
            reposition_pending: false,
            selected: None,
        };
        dropdown.write_open_state(ui);
        Ok(dropdown)
    }

    /// Like [`Self::bind`], but logs a missing element instead of returning it.
    pub fn bind_or_warn<S>(ui: &mut S, options: &DropdownOptions) -> Option<Self>
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        match Self::bind(ui, options) {
            Ok(dropdown) => Some(dropdown),
            Err(err) => {
                log::warn!("{err}; the date range picker will not respond");
                None
            }
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The last range successfully applied, if any.
    #[inline]
    pub fn selected(&self) -> Option<DateRange> {
        self.selected
    }

    /// The label text of [`Self::selected`].
    pub fn label(&self) -> Option<String> {
        self.selected.map(|range| range.label())
    }

    /// Is the menu open but not yet positioned?
    #[inline]
    pub fn reposition_pending(&self) -> bool {
        self.reposition_pending
    }

    pub fn open<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        if self.is_open {
            return;
        }
        log::debug!("Opening date range menu");
        self.is_open = true;
        self.write_open_state(ui);

        // The menu is only laid out once the `open` class has taken effect.
        self.reposition_pending = true;
        ui.request_layout_pass();
    }

    /// Close the menu and drop any inline position overrides.
    pub fn close<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        ui.set_inline_offsets(&self.menu, &InlineOffsets::CLEARED);
        self.reposition_pending = false;
        if self.is_open {
            log::debug!("Closing date range menu");
        }
        self.is_open = false;
        self.write_open_state(ui);
    }

    pub fn toggle<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        if self.is_open {
            self.close(ui);
        } else {
            self.open(ui);
        }
    }

    /// Place the menu where it fits best. Call once the open menu has been laid out.
    pub fn adjust_menu_position<S>(&self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        ui.set_inline_offsets(&self.menu, &MenuPlacement::default_offsets(self.gap));

        let placement = MenuPlacement::compute(
            ui.bounding_rect(&self.menu),
            ui.bounding_rect(&self.trigger),
            ui.viewport_size(),
            self.gap,
        );
        if placement != MenuPlacement::DEFAULT {
            log::debug!("Date range menu flipped to {placement:?}");
            ui.set_inline_offsets(&self.menu, &placement.offsets(self.gap));
        }
    }

    /// Read both inputs, and if both are set, write the range to the label.
    /// Always closes the menu.
    ///
    /// Returns the applied range.
    pub fn apply<S>(&mut self, ui: &mut S) -> Option<DateRange>
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        let start = ui.input_value(&self.start_input);
        let end = ui.input_value(&self.end_input);

        let applied = if start.trim().is_empty() || end.trim().is_empty() {
            None
        } else {
            match DateRange::parse(&start, &end) {
                Ok(range) => {
                    ui.set_text(&self.label, &range.label());
                    self.selected = Some(range);
                    Some(range)
                }
                Err(err) => {
                    log::warn!("Ignoring date range: {err}");
                    None
                }
            }
        };

        self.close(ui);
        applied
    }

    /// Empty both inputs and focus the start date. The label is left alone.
    pub fn clear<S>(&self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        ui.set_input_value(&self.start_input, "");
        ui.set_input_value(&self.end_input, "");
        ui.focus(&self.start_input);
    }

    pub fn on_event<S>(&mut self, ui: &mut S, event: &UiEvent<N>) -> EventResult
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        let was_open = self.is_open;
        let selected_before = self.selected;

        match event {
            UiEvent::Click { target } => {
                if ui.contains(&self.trigger, target) {
                    self.toggle(ui);
                } else if ui.contains(&self.apply, target) {
                    self.apply(ui);
                } else if ui.contains(&self.clear, target) {
                    self.clear(ui);
                } else if self.is_open && !ui.contains(&self.wrapper, target) {
                    self.close(ui);
                }
            }
            UiEvent::KeyDown { key: Key::Escape } if self.is_open => {
                self.close(ui);
                ui.focus(&self.trigger);
            }
            UiEvent::LayoutPass if self.reposition_pending => {
                self.reposition_pending = false;
                if self.is_open {
                    self.adjust_menu_position(ui);
                }
            }
            UiEvent::KeyDown { .. } | UiEvent::Resize | UiEvent::LayoutPass => {}
        }

        EventResult {
            changed: was_open != self.is_open || selected_before != self.selected,
        }
    }

    fn write_open_state<S>(&self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        ui.set_class(&self.menu, &self.open_class, self.is_open);
        ui.set_attribute(&self.trigger, ARIA_EXPANDED, aria_bool(self.is_open));
    }
}
