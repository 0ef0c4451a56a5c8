mod parse_error;

pub use parse_error::ParseError;
use derive_more::From;

use gauss_core::error::GaussCoreError;

pub type Result<T> = core::result::Result<T, GaussError>;

#[derive(Debug, From)]
pub enum GaussError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    Csv(csv::Error),

    #[from]
    Json(serde_json::Error),

    // -- Input
    #[from]
    Parse(ParseError),

    // -- Solver
    #[from]
    Core(GaussCoreError),
}

// region:    --- Error Boilerplate

// Solver and parse messages are shown to the user verbatim.
impl core::fmt::Display for GaussError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            GaussError::Io(e) => write!(fmt, "IO error: {e}"),
            GaussError::Csv(e) => write!(fmt, "CSV error: {e}"),
            GaussError::Json(e) => write!(fmt, "JSON error: {e}"),
            GaussError::Parse(e) => write!(fmt, "{e}"),
            GaussError::Core(e) => write!(fmt, "{e}"),
        }
    }
}

impl std::error::Error for GaussError {}

// endregion: --- Error Boilerplate
