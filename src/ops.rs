/// Convolution shape arithmetic
pub mod output_size;

pub use output_size::*;
