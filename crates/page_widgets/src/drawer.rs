use crate::{
    ARIA_EXPANDED, Controller, DrawerOptions, Error, EventResult, Key, Result, ScrollLock, UiEvent,
    UiSurface, aria_bool,
};

/// The mobile navigation drawer.
///
/// Opens from a toggle button and closes from its close button, any link inside it,
/// the Escape key, or the viewport growing past the desktop breakpoint.
/// While open, the page behind it does not scroll.
#[derive(Debug)]
pub struct DrawerController<N> {
    toggle: N,
    panel: N,
    close: N,
    links: Vec<N>,

    active_class: String,
    breakpoint: f32,

    is_open: bool,
    scroll_lock: ScrollLock,
}

impl<N: Clone + std::fmt::Debug> DrawerController<N> {
    /// Find the drawer's elements and put them in the closed state.
    ///
    /// A panel without links still binds, with a warning: it just has no links to close it.
    ///
    /// # Errors
    /// [`Error::MissingElement`] if the toggle, panel or close button is missing.
    pub fn bind<S>(ui: &mut S, options: &DrawerOptions) -> Result<Self>
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        let find = |selector: &str| {
            ui.query(selector).ok_or_else(|| Error::MissingElement {
                controller: Controller::Drawer,
                selector: selector.to_owned(),
            })
        };

        let toggle = find(&options.toggle)?;
        let panel = find(&options.panel)?;
        let close = find(&options.close)?;
        let links = ui.query_all(&options.links);
        if links.is_empty() {
            log::warn!(
                "{}: no links match `{}`; only the close button closes the drawer",
                Controller::Drawer,
                options.links
            );
        }

        let drawer = Self {
            toggle,
            panel,
            close,
            links,
            active_class: options.active_class.clone(),
            breakpoint: options.breakpoint,
            is_open: false,
            scroll_lock: ScrollLock::default(),
        };
        drawer.write_state(ui);
        Ok(drawer)
    }

    /// Like [`Self::bind`], but logs a missing element instead of returning it.
    pub fn bind_or_warn<S>(ui: &mut S, options: &DrawerOptions) -> Option<Self>
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        match Self::bind(ui, options) {
            Ok(drawer) => Some(drawer),
            Err(err) => {
                log::warn!("{err}; the mobile menu will not respond");
                None
            }
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Is the document scroll lock currently held by the drawer?
    #[inline]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn open_menu<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        if !self.is_open {
            log::debug!("Opening mobile menu");
        }
        self.is_open = true;
        self.write_state(ui);
        self.scroll_lock.acquire(ui);
    }

    pub fn close_menu<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        // Release first: nothing below may leave the page stuck unscrollable.
        self.scroll_lock.release(ui);
        if self.is_open {
            log::debug!("Closing mobile menu");
        }
        self.is_open = false;
        self.write_state(ui);
    }

    pub fn toggle<S>(&mut self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        if self.is_open {
            self.close_menu(ui);
        } else {
            self.open_menu(ui);
        }
    }

    pub fn on_event<S>(&mut self, ui: &mut S, event: &UiEvent<N>) -> EventResult
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        let was_open = self.is_open;

        match event {
            UiEvent::Click { target } => {
                if ui.contains(&self.toggle, target) {
                    self.open_menu(ui);
                } else if ui.contains(&self.close, target)
                    || self.links.iter().any(|link| ui.contains(link, target))
                {
                    self.close_menu(ui);
                }
            }
            UiEvent::KeyDown { key: Key::Escape } if self.is_open => {
                self.close_menu(ui);
            }
            UiEvent::Resize => {
                if ui.viewport_size().x > self.breakpoint {
                    self.close_menu(ui);
                }
            }
            UiEvent::KeyDown { .. } | UiEvent::LayoutPass => {}
        }

        EventResult {
            changed: was_open != self.is_open,
        }
    }

    fn write_state<S>(&self, ui: &mut S)
    where
        S: UiSurface<Node = N> + ?Sized,
    {
        ui.set_class(&self.panel, &self.active_class, self.is_open);
        ui.set_class(&self.toggle, &self.active_class, self.is_open);
        ui.set_attribute(&self.toggle, ARIA_EXPANDED, aria_bool(self.is_open));
    }
}
