use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Kernel cannot be placed on the (padded) input along some axis.
    #[error("{0}")]
    InvalidInput(String),

    /// Kernel, stride and padding do not tile the input exactly.
    #[error("{0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Layer configuration is not a convolution layer: got {layer}")]
    NotConvolutionLayer { layer: String },
}

pub type Result<T> = std::result::Result<T, Error>;
