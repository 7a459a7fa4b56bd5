mod builder;
pub mod constants;
mod errors;
mod search;
mod sequence;

pub use builder::{ExpressionBuilder, build_expressions};
pub use errors::SolverError;
pub use search::{HandSolver, Solution, SolverConfig, TargetMatch};
pub use sequence::{SingleEvaluation, evaluate_single, sequence_text};
