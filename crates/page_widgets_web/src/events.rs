use page_widgets::{Key, UiEvent};
use wasm_bindgen::{JsCast as _, JsValue};

use crate::PageRunner;

pub(crate) fn install_event_handlers(runner: &PageRunner) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    install_document_events(runner, &document)?;
    install_window_events(runner, &window)?;

    Ok(())
}

fn install_document_events(
    runner: &PageRunner,
    document: &web_sys::Document,
) -> Result<(), JsValue> {
    // One listener on the document sees clicks on the toggles and outside of them alike.
    runner.add_event_listener(document, "click", |event: web_sys::MouseEvent, page| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let result = page.on_event(&UiEvent::Click { target });
        if result.changed() {
            log::trace!("click changed page state");
        }
    })?;

    runner.add_event_listener(document, "keydown", |event: web_sys::KeyboardEvent, page| {
        if event.is_composing() {
            // https://developer.mozilla.org/en-US/docs/Web/API/Element/keydown_event#keydown_events_with_ime
            return;
        }

        let key = Key::from_name(&event.key());
        if key != Key::Other {
            let _ = page.on_event(&UiEvent::KeyDown { key });
        }
    })?;

    Ok(())
}

fn install_window_events(runner: &PageRunner, window: &web_sys::Window) -> Result<(), JsValue> {
    runner.add_event_listener(window, "resize", |_: web_sys::Event, page| {
        let _ = page.on_event(&UiEvent::Resize);
    })?;

    Ok(())
}
