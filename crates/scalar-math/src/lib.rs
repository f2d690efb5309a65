//! Elementary numeric primitives implemented from scratch: Heron square
//! root, integer power, factorial, absolute value and degree-based
//! trigonometry evaluated from truncated Maclaurin series.

pub mod config;
pub mod error;
pub mod power;
pub mod roots;
pub mod trig;

pub use config::ArccosConfig;
pub use error::ScalarError;
pub use power::{factorial, factorial_f32, power};
pub use roots::{absolute, heron_sqrt, sqrt};
pub use trig::{
    arccos, arccos_degrees, cos, degrees_to_radians, radians_to_degrees, sin, try_arccos,
    ArccosResult,
};
