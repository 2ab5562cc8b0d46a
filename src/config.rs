/// Layer configurations and the accessors that read convolution settings from them
///
/// Only convolution layers carry a kernel size and feature-map count; asking
/// another layer kind for them is a `NotConvolutionLayer` error.

use crate::{ops, shape, Error, Result};
use serde::{Deserialize, Serialize};

/// Convolution layer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvolutionLayer {
    /// Input channels
    pub n_in: usize,

    /// Output channels (feature maps)
    pub n_out: usize,

    /// Kernel size (h, w), default (5, 5)
    pub kernel_size: (usize, usize),

    /// Stride (h, w), default (1, 1)
    pub stride: (usize, usize),

    /// Padding (h, w), default (0, 0)
    pub padding: (usize, usize),
}

impl ConvolutionLayer {
    /// New layer with a 5x5 kernel, unit stride and no padding
    pub fn new(n_in: usize, n_out: usize) -> Self {
        Self {
            n_in,
            n_out,
            kernel_size: (5, 5),
            stride: (1, 1),
            padding: (0, 0),
        }
    }

    /// Set the kernel size (h, w)
    pub fn with_kernel_size(mut self, kernel_size: (usize, usize)) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    /// Set the stride (h, w)
    pub fn with_stride(mut self, stride: (usize, usize)) -> Self {
        self.stride = stride;
        self
    }

    /// Set the padding (h, w)
    pub fn with_padding(mut self, padding: (usize, usize)) -> Self {
        self.padding = padding;
        self
    }

    /// Output (height, width) of this layer for an NCHW input shape
    pub fn output_size(&self, input_shape: &[usize]) -> Result<(usize, usize)> {
        ops::compute_output_size(input_shape, self.kernel_size, self.stride, self.padding)
    }
}

/// Layer variants a network configuration can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerConfig {
    Convolution(ConvolutionLayer),
    Dense {
        n_in: usize,
        n_out: usize,
    },
    Subsampling {
        kernel_size: (usize, usize),
        stride: (usize, usize),
    },
}

impl LayerConfig {
    /// Short lowercase name of the layer kind
    pub fn name(&self) -> &'static str {
        match self {
            LayerConfig::Convolution(_) => "convolution",
            LayerConfig::Dense { .. } => "dense",
            LayerConfig::Subsampling { .. } => "subsampling",
        }
    }
}

/// Configuration of a single network layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuralNetConfiguration {
    pub layer: LayerConfig,
}

impl NeuralNetConfiguration {
    /// Wrap a single layer configuration
    pub fn new(layer: LayerConfig) -> Self {
        Self { layer }
    }

    /// The configured layer
    pub fn layer(&self) -> &LayerConfig {
        &self.layer
    }

    /// The convolution settings, or `NotConvolutionLayer` for any other layer kind
    pub fn convolution_layer(&self) -> Result<&ConvolutionLayer> {
        match &self.layer {
            LayerConfig::Convolution(conv) => Ok(conv),
            other => {
                tracing::debug!(layer = other.name(), "expected a convolution layer");
                Err(Error::NotConvolutionLayer {
                    layer: other.name().to_string(),
                })
            }
        }
    }
}

impl From<ConvolutionLayer> for NeuralNetConfiguration {
    fn from(conv: ConvolutionLayer) -> Self {
        Self::new(LayerConfig::Convolution(conv))
    }
}

/// Height and width read from a convolution layer's kernel size
///
/// The kernel size is treated as a shape, so this yields
/// `(kernel_size.1, kernel_size.0)` like [`shape::height_width_from_shape`].
pub fn height_width_from_config(conf: &NeuralNetConfiguration) -> Result<(usize, usize)> {
    let conv = conf.convolution_layer()?;
    shape::height_width_from_shape(&[conv.kernel_size.0, conv.kernel_size.1])
}

/// Number of kernels (feature maps) a convolution layer produces
pub fn num_feature_maps_from_config(conf: &NeuralNetConfiguration) -> Result<usize> {
    Ok(conf.convolution_layer()?.n_out)
}
