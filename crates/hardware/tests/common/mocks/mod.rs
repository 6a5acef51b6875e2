//! Mock implementations of engine traits.

/// Mock timing model.
pub mod timing;
