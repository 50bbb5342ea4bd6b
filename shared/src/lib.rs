//! Shared core for the Krishi Vaani advisory platform
//!
//! Weather synthesis, the crop disease registry, disease risk scoring and
//! the advice derived from it. Everything here is pure and is used by both
//! the HTTP backend and the WASM bindings.

pub mod advice;
pub mod diseases;
pub mod error;
pub mod models;
pub mod recommendations;
pub mod scoring;
pub mod synthesizer;
pub mod types;
pub mod validation;

pub use advice::*;
pub use diseases::*;
pub use error::*;
pub use models::*;
pub use recommendations::*;
pub use scoring::*;
pub use synthesizer::*;
pub use types::*;
pub use validation::*;
