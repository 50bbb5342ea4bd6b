//! Domain models for the crop advisory platform

mod disease;
mod risk;
mod weather;

pub use disease::*;
pub use risk::*;
pub use weather::*;
