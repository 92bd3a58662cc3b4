//! Send [`log`] records to the browser console.

/// Targets starting with this are our own crates, and get the full filter.
const OWN_CRATES: &str = "page_widgets";

/// Implements [`log::Log`] on top of `console.debug`, `console.warn`, etc.
///
/// The `page_widgets*` crates log at the level you ask for.
/// Everything else is capped at `Warn`, so a `Debug` filter doesn't flood
/// the console with other crates' output.
pub struct WebLogger {
    filter: log::LevelFilter,
    other_crates: log::LevelFilter,
}

impl WebLogger {
    /// Install a new `WebLogger` as the global logger.
    #[cfg(target_arch = "wasm32")]
    pub fn init(filter: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_max_level(filter);
        log::set_boxed_logger(Box::new(Self::new(filter)))
    }

    /// Create a logger without installing it.
    pub fn new(filter: log::LevelFilter) -> Self {
        Self {
            filter,
            other_crates: filter.min(log::LevelFilter::Warn),
        }
    }

    fn level_for(&self, target: &str) -> log::LevelFilter {
        let krate = target.split("::").next().unwrap_or(target);
        if krate.starts_with(OWN_CRATES) {
            self.filter
        } else {
            self.other_crates
        }
    }

    fn accepts(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }
}

#[cfg(target_arch = "wasm32")]
impl log::Log for WebLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.accepts(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.accepts(record.metadata()) {
            return;
        }

        let msg = format_record(record);
        match record.level() {
            log::Level::Trace => console::trace(&msg),
            log::Level::Debug => console::debug(&msg),
            log::Level::Info => console::info(&msg),
            log::Level::Warn => console::warn(&msg),

            // `console.error` attaches a stack trace, which has crashed tabs.
            log::Level::Error => console::warn(&format!("ERROR: {msg}")),
        }
    }

    fn flush(&self) {}
}

/// `target: message (file:line)`, with the file path shortened.
fn format_record(record: &log::Record<'_>) -> String {
    match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!(
            "{}: {} ({}:{line})",
            record.target(),
            record.args(),
            shorten_file_path(file)
        ),
        _ => format!("{}: {}", record.target(), record.args()),
    }
}

/// Keep the path from the crate directory on:
/// `…/registry/src/index.crates.io-6f17d22bba15001f/page_widgets-0.1.0/src/dropdown.rs`
/// becomes `page_widgets-0.1.0/src/dropdown.rs`.
fn shorten_file_path(path: &str) -> &str {
    let Some(src) = path.rfind("/src/") else {
        return path;
    };
    match path[..src].rfind('/') {
        Some(slash) => &path[slash + 1..],
        None => path,
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn trace(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn debug(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn info(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn warn(s: &str);
    }
}
