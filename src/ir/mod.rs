pub mod defaults;
pub mod lenient;
pub mod types;
pub mod validate;

pub use types::*;
pub use validate::validate_workflow;
