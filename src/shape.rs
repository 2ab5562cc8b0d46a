/// Shape accessors for image-like tensors
///
/// Shapes are plain dimension slices. Spatial axes are the trailing two;
/// the channel axis is index 1 of a `[N, C, H, W]` shape.

use crate::{Error, Result};

/// Get the height and width from the trailing two axes of a shape
///
/// Returns `(shape[last], shape[last - 1])` for any shape of rank >= 2.
pub fn height_width_from_shape(shape: &[usize]) -> Result<(usize, usize)> {
    match shape {
        [.., second_last, last] => Ok((*last, *second_last)),
        _ => Err(Error::InvalidArgument(format!(
            "No width and height able to be found: array must be at least length 2, got {:?}",
            shape
        ))),
    }
}

/// Number of channels (feature maps) of a shape
///
/// Shapes below rank 4 carry no channel axis and count as single-channel.
pub fn num_channels_from_shape(shape: &[usize]) -> usize {
    if shape.len() < 4 {
        1
    } else {
        shape[1]
    }
}
