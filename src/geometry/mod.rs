pub mod roulette;
pub mod thetas;

pub use roulette::{Hypotrochoid, Roulette, RouletteParams};
pub use thetas::{ThetaInput, ThetaRange, Thetas, DEFAULT_THETA_STEP};
