//! Random multi-start search over latent initializations.

mod inverter;
mod reconstruction;

#[cfg(test)]
mod tests;

pub use inverter::Inverter;
pub use reconstruction::{select_best, Reconstruction};
