//! Caller-side helpers around the solver: parsing equations typed as
//! `coefficients... constant`, running the solve and formatting the result.

mod eval_equation_system;

pub mod error;
pub mod model;
pub mod options;
pub mod report;

pub use error::{GaussError, ParseError};
pub use eval_equation_system::{solve_text, EvalEquationSystem};
pub use model::{parse_equation, Equation, EquationSystem};
pub use options::SolveOptions;
pub use report::{EquationCheck, SolutionReport};
