//! Reconstruir: image reconstruction by latent-space inversion
//!
//! A fixed two-layer generator maps a low-dimensional latent code to an
//! image. Given only part of an image, reconstruir searches for the latent
//! code whose generated image best explains the observed pixels, using
//! analytic gradients, fixed-step descent and random restarts.
//!
//! # Modules
//!
//! - [`inversion`]: generator, cost, gradient, descent and restarts
//! - [`io`]: weights and observations in JSON, YAML or SafeTensors
//! - [`config`]: declarative YAML run specifications and CLI arguments
//! - [`report`]: sparklines and ASCII image panels
//! - [`cli`]: command handlers for the `reconstruir` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod inversion;
pub mod io;
pub mod report;

pub use error::{Error, Result};
