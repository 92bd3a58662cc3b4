use crate::UiSurface;

/// The document-wide scroll lock, held while a modal widget is open.
///
/// The lock is a single shared resource, so acquiring and releasing are both
/// idempotent: acquiring twice still needs only one release, and releasing
/// a lock you don't hold does nothing.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    pub fn acquire<S: UiSurface + ?Sized>(&mut self, ui: &mut S) {
        if !self.held {
            ui.set_scroll_locked(true);
            self.held = true;
        }
    }

    pub fn release<S: UiSurface + ?Sized>(&mut self, ui: &mut S) {
        if self.held {
            self.held = false;
            ui.set_scroll_locked(false);
        }
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }
}
