use thiserror::Error;

/// Rejections raised while turning user text into an equation system.
/// Equation numbers are 1-based, as shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No equations were given")]
    NoEquations,

    #[error("{count} equations given, but at most {max} are allowed")]
    TooManyEquations { count: usize, max: usize },

    #[error("Expected {declared} equations, found {found}")]
    EquationCountMismatch { declared: usize, found: usize },

    #[error("Equation {equation}: '{token}' is not a number")]
    InvalidToken { equation: usize, token: String },

    #[error("Equation {equation}: '{token}' is not a finite number")]
    NonFiniteToken { equation: usize, token: String },

    #[error(
        "Equation {equation} does not have the correct number of terms: expected {expected} (coefficients + constant), found {found}"
    )]
    WrongTermCount {
        equation: usize,
        expected: usize,
        found: usize,
    },
}
