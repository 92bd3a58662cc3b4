/// Which controller an [`Error`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Controller {
    Drawer,
    Dropdown,
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drawer => f.write_str("mobile drawer"),
            Self::Dropdown => f.write_str("date range dropdown"),
        }
    }
}

/// Errors reported by the controllers.
///
/// None of these are fatal to the page: a controller that fails to bind simply
/// never handles any events.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element the controller needs was not found on the surface.
    #[error("{controller}: required element `{selector}` not found")]
    MissingElement {
        controller: Controller,
        selector: String,
    },

    /// A date input held something other than `YYYY-MM-DD`.
    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
