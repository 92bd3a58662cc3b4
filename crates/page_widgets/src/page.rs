use crate::{DateRangeDropdown, DrawerController, EventResult, PageOptions, UiEvent, UiSurface};

/// A surface together with the widgets bound to it.
///
/// Widgets whose elements are missing are left out (with a warning), so a page
/// without a date picker still gets a working drawer and vice versa.
#[derive(Debug)]
pub struct Page<S: UiSurface> {
    surface: S,
    drawer: Option<DrawerController<S::Node>>,
    dropdown: Option<DateRangeDropdown<S::Node>>,
}

impl<S: UiSurface> Page<S> {
    /// Bind every widget in `options` that is present on `surface`.
    pub fn new(mut surface: S, options: &PageOptions) -> Self {
        let drawer = DrawerController::bind_or_warn(&mut surface, &options.drawer);
        let dropdown = DateRangeDropdown::bind_or_warn(&mut surface, &options.dropdown);
        log::debug!(
            "Page bound: drawer: {}, date range dropdown: {}",
            drawer.is_some(),
            dropdown.is_some()
        );
        Self {
            surface,
            drawer,
            dropdown,
        }
    }

    /// Feed an event to every widget.
    pub fn on_event(&mut self, event: &UiEvent<S::Node>) -> EventResult {
        let mut result = EventResult::IGNORED;
        if let Some(drawer) = &mut self.drawer {
            result |= drawer.on_event(&mut self.surface, event);
        }
        if let Some(dropdown) = &mut self.dropdown {
            result |= dropdown.on_event(&mut self.surface, event);
        }
        result
    }

    /// Is a widget waiting for [`UiEvent::LayoutPass`]?
    pub fn layout_pass_pending(&self) -> bool {
        self.dropdown
            .as_ref()
            .is_some_and(|dropdown| dropdown.reposition_pending())
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn drawer(&self) -> Option<&DrawerController<S::Node>> {
        self.drawer.as_ref()
    }

    #[inline]
    pub fn dropdown(&self) -> Option<&DateRangeDropdown<S::Node>> {
        self.dropdown.as_ref()
    }

    /// Run `f` with the drawer and the surface, if the drawer is bound.
    pub fn with_drawer<R>(
        &mut self,
        f: impl FnOnce(&mut DrawerController<S::Node>, &mut S) -> R,
    ) -> Option<R> {
        let drawer = self.drawer.as_mut()?;
        Some(f(drawer, &mut self.surface))
    }

    /// Run `f` with the dropdown and the surface, if the dropdown is bound.
    pub fn with_dropdown<R>(
        &mut self,
        f: impl FnOnce(&mut DateRangeDropdown<S::Node>, &mut S) -> R,
    ) -> Option<R> {
        let dropdown = self.dropdown.as_mut()?;
        Some(f(dropdown, &mut self.surface))
    }
}
