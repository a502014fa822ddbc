mod errors;
mod outcomes;
mod workflow;

pub use errors::{LendingError, Result};
pub use outcomes::{CheckoutResult, DeclineReason, ReturnResult};
pub use workflow::{LendingDependencies, checkout, return_book};
