//! Non-fatal structural checks run after assignment.
//!
//! Shape and identity failures are fatal and handled by `ir::validate`;
//! everything here only adds warnings.

pub mod structural;

pub use structural::validate_structural;
