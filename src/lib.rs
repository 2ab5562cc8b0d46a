//! conv-shape-rs: convolution shape arithmetic for NCHW tensors
//!
//! Computes the spatial output size of a 2D convolution and rejects
//! kernel/stride/padding combinations that do not fit the input, with
//! messages carrying the full numeric context of the mismatch.
//!
//! # Features
//! - Output height/width from `[N, C, H, W]` input shapes
//! - Height/width and channel accessors for shapes of any rank
//! - Serializable layer configurations with typed convolution lookup
//!
//! ```
//! use conv_shape::compute_output_size;
//!
//! let out = compute_output_size(&[1, 3, 8, 8], (3, 3), (1, 1), (0, 0)).unwrap();
//! assert_eq!(out, (6, 6));
//! ```

pub mod config;
pub mod error;
pub mod ops;
pub mod shape;

pub use config::{
    height_width_from_config, num_feature_maps_from_config, ConvolutionLayer, LayerConfig,
    NeuralNetConfiguration,
};
pub use error::{Error, Result};
pub use ops::{compute_output_size, output_size_quotient};
pub use shape::{height_width_from_shape, num_channels_from_shape};
