//! Weight, observation and summary IO
//!
//! Generator weights live under the tensor names `A_1`, `B_1`, `A_2` and
//! `B_2`; observation sets under `X_n` (noisy, required) and `X_i` (ground
//! truth, optional). JSON, YAML and SafeTensors are supported.

mod format;
mod load;
mod observations;
mod save;
mod summary;
mod tensors;

pub use format::DataFormat;
pub use load::{load_generator, load_observations};
pub use observations::ObservationSet;
pub use save::{save_generator, save_observations, save_summary};
pub use summary::{ImageSummary, RunSummary};
pub use tensors::{RawTensor, TensorFile};

/// First-layer weight matrix
pub const A1: &str = "A_1";
/// First-layer bias
pub const B1: &str = "B_1";
/// Second-layer weight matrix
pub const A2: &str = "A_2";
/// Second-layer bias
pub const B2: &str = "B_2";
/// Noisy observations, one image per column
pub const X_NOISY: &str = "X_n";
/// Ground-truth images, one per column
pub const X_IDEAL: &str = "X_i";
