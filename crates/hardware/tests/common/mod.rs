//! Shared test infrastructure.


/// Mock implementations of engine traits.
pub mod mocks;
