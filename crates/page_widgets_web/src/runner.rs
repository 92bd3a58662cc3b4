use std::{cell::RefCell, rc::Rc};

use page_widgets::{Page, PageOptions, UiEvent};
use wasm_bindgen::prelude::*;

use crate::{WebSurface, events, string_from_js_value};

/// Owns the bound [`Page`] and the event listeners driving it.
///
/// Listeners hold clones of this, so the page lives as long as the listeners do,
/// which is until [`Self::destroy`].
#[wasm_bindgen]
#[derive(Clone)]
pub struct PageRunner {
    /// `None` once destroyed.
    page: Rc<RefCell<Option<Page<WebSurface>>>>,

    /// Removed in [`Self::destroy`].
    events_to_unsubscribe: Rc<RefCell<Vec<TargetEvent>>>,

    /// At most one layout pass in flight.
    frame: Rc<RefCell<Option<AnimationFrameRequest>>>,
}

impl PageRunner {
    pub(crate) fn new(options: &PageOptions) -> Result<Self, JsValue> {
        let page = Page::new(WebSurface::new()?, options);

        let runner = Self {
            page: Rc::new(RefCell::new(Some(page))),
            events_to_unsubscribe: Default::default(),
            frame: Default::default(),
        };

        events::install_event_handlers(&runner)?;
        log::debug!(
            "{} event listeners installed",
            runner.events_to_unsubscribe.borrow().len()
        );

        Ok(runner)
    }

    /// Returns `None` if we have been destroyed, or are already handling an event.
    /// In that case, just return to JS.
    pub(crate) fn try_lock(&self) -> Option<std::cell::RefMut<'_, Page<WebSurface>>> {
        let lock = self.page.try_borrow_mut().ok()?;
        std::cell::RefMut::filter_map(lock, |page| page.as_mut()).ok()
    }

    /// Run `f` on the page, then schedule a layout pass if one was requested.
    pub fn with_page<R>(&self, f: impl FnOnce(&mut Page<WebSurface>) -> R) -> Option<R> {
        let (result, wants_layout_pass) = {
            let mut page = self.try_lock()?;
            let result = f(&mut page);
            (result, page.surface_mut().take_layout_pass_request())
        };
        if wants_layout_pass
            && let Err(err) = self.request_animation_frame()
        {
            log::warn!(
                "Failed to request an animation frame: {}",
                string_from_js_value(&err)
            );
        }
        Some(result)
    }

    /// Convenience function to reduce boilerplate and ensure that all event handlers
    /// are dealt with in the same way.
    ///
    /// All events added with this method will be unsubscribed in [`Self::destroy`].
    pub(crate) fn add_event_listener<E: wasm_bindgen::JsCast>(
        &self,
        target: &web_sys::EventTarget,
        event_name: &'static str,
        mut closure: impl FnMut(E, &mut Page<WebSurface>) + 'static,
    ) -> Result<(), JsValue> {
        let runner = self.clone();

        // Create a JS closure based on the FnMut provided
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            // Cast the event to the expected event type
            let event = event.unchecked_into::<E>();
            runner.with_page(|page| closure(event, page));
        }) as Box<dyn FnMut(web_sys::Event)>);

        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;

        self.events_to_unsubscribe.borrow_mut().push(TargetEvent {
            target: target.clone(),
            event_name,
            closure,
        });

        Ok(())
    }

    /// Deliver [`UiEvent::LayoutPass`] on the next animation frame.
    ///
    /// Calling this again before the frame fires does nothing.
    fn request_animation_frame(&self) -> Result<(), JsValue> {
        if self.frame.borrow().is_some() {
            // there is already an animation frame in flight
            return Ok(());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let closure = Closure::once({
            let runner = self.clone();
            move || {
                // This drops the `closure` and allows another frame to be requested.
                let _ = runner.frame.take();
                runner.with_page(|page| page.on_event(&UiEvent::LayoutPass));
                Ok(())
            }
        });

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        self.frame.borrow_mut().replace(AnimationFrameRequest {
            id,
            _closure: closure,
        });

        Ok(())
    }

    fn unsubscribe_from_all_events(&self) {
        let events_to_unsubscribe: Vec<_> =
            std::mem::take(&mut *self.events_to_unsubscribe.borrow_mut());

        if !events_to_unsubscribe.is_empty() {
            log::debug!("Unsubscribing from {} events", events_to_unsubscribe.len());
            for x in events_to_unsubscribe {
                if let Err(err) = x.unsubscribe() {
                    log::warn!(
                        "Failed to unsubscribe from event: {}",
                        string_from_js_value(&err)
                    );
                }
            }
        }
    }
}

#[wasm_bindgen]
impl PageRunner {
    /// Remove all event listeners and release the page.
    ///
    /// An open drawer is closed first so the document is not left scroll-locked.
    pub fn destroy(&self) {
        self.unsubscribe_from_all_events();

        if let Some(frame) = self.frame.take()
            && let Some(window) = web_sys::window()
        {
            window.cancel_animation_frame(frame.id).ok();
        }

        if let Ok(mut page) = self.page.try_borrow_mut()
            && let Some(mut page) = page.take()
        {
            page.with_drawer(|drawer, surface| drawer.close_menu(surface));
            page.with_dropdown(|dropdown, surface| dropdown.close(surface));
        }
    }

    /// Is the mobile drawer open?
    #[wasm_bindgen(js_name = isDrawerOpen)]
    pub fn is_drawer_open(&self) -> bool {
        self.try_lock()
            .and_then(|page| page.drawer().map(|drawer| drawer.is_open()))
            .unwrap_or(false)
    }

    /// The label of the last applied date range, if any.
    #[wasm_bindgen(js_name = selectedRangeLabel)]
    pub fn selected_range_label(&self) -> Option<String> {
        self.try_lock()
            .and_then(|page| page.dropdown().and_then(|dropdown| dropdown.label()))
    }
}

// ----------------------------------------------------------------------------

struct TargetEvent {
    target: web_sys::EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl TargetEvent {
    fn unsubscribe(self) -> Result<(), JsValue> {
        self.target.remove_event_listener_with_callback(
            self.event_name,
            self.closure.as_ref().unchecked_ref(),
        )
    }
}

// https://rustwasm.github.io/wasm-bindgen/api/wasm_bindgen/closure/struct.Closure.html#using-fnonce-and-closureonce-with-requestanimationframe
struct AnimationFrameRequest {
    /// Represents the ID of a frame in flight.
    id: i32,

    /// The callback given to `request_animation_frame`, stored here both to prevent it
    /// from being canceled, and from having to `.forget()` it.
    _closure: Closure<dyn FnMut() -> Result<(), JsValue>>,
}
