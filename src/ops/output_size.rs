/// Convolution output-size calculation
///
/// Validates kernel/stride/padding against an NCHW input shape and computes
/// the spatial output size `(in - kernel + 2 * padding) / stride + 1` per axis.

use crate::{Error, Result};

const STRIDE_REFERENCE: &str =
    "See \"Constraints on strides\" at http://cs231n.github.io/convolutional-networks/";

/// Spatial axis of an NCHW input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Height,
    Width,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Height => "height",
            Axis::Width => "width",
        }
    }
}

/// Everything a rejection message needs to describe the failing call
struct ConvContext<'a> {
    input_shape: &'a [usize],
    kernel: (usize, usize),
    stride: (usize, usize),
    padding: (usize, usize),
}

impl ConvContext<'_> {
    /// (input, kernel, stride, padding) along one axis
    fn axis(&self, axis: Axis) -> (usize, usize, usize, usize) {
        match axis {
            Axis::Height => (
                self.input_shape[2],
                self.kernel.0,
                self.stride.0,
                self.padding.0,
            ),
            Axis::Width => (
                self.input_shape[3],
                self.kernel.1,
                self.stride.1,
                self.padding.1,
            ),
        }
    }

    fn input_size_line(&self) -> String {
        format!(
            "\nInput size: [numExamples,inputDepth,inputHeight,inputWidth]={:?}",
            self.input_shape
        )
    }

    /// Suffix shared by every rejection: input shape, kernel, strides, padding
    fn common_error_msg(&self) -> String {
        format!(
            "{}, kernel={:?}, strides={:?}, padding={:?}",
            self.input_size_line(),
            [self.kernel.0, self.kernel.1],
            [self.stride.0, self.stride.1],
            [self.padding.0, self.padding.1],
        )
    }

    /// Checks `0 < kernel <= input + 2 * padding` and returns the span
    /// `input + 2 * padding - kernel` left for the stride to cover.
    fn check_kernel_fits(&self, axis: Axis) -> Result<usize> {
        let (input, kernel, _, padding) = self.axis(axis);
        let name = axis.name();

        let Some(padded) = padding.checked_mul(2).and_then(|p| input.checked_add(p)) else {
            tracing::debug!(axis = name, input, padding, "padded input overflows");
            return Err(Error::InvalidInput(format!(
                "Invalid input data or configuration: input {name} + 2 * padding {name} overflows. \
                 \nGot input {name} = {input} and padding {name} = {padding}{}",
                self.common_error_msg()
            )));
        };
        if kernel > 0 && kernel <= padded {
            return Ok(padded - kernel);
        }

        tracing::debug!(
            axis = name,
            input,
            kernel,
            padding,
            "kernel does not fit padded input"
        );

        // The width message repeats the input size ahead of the common suffix.
        let extra = match axis {
            Axis::Height => String::new(),
            Axis::Width => self.input_size_line(),
        };
        Err(Error::InvalidInput(format!(
            "Invalid input data or configuration: kernel {name} and input {name} must satisfy \
             0 < kernel {name} <= input {name} + 2 * padding {name}. \
             \nGot kernel {name} = {kernel}, input {name} = {input} and padding {name} = {padding} \
             which do not satisfy 0 < {kernel} <= {padded}{extra}{}",
            self.common_error_msg()
        )))
    }

    /// Checks that the stride tiles `span` exactly and returns the output size.
    fn check_stride_divides(&self, axis: Axis, span: usize) -> Result<usize> {
        let (input, kernel, stride, padding) = self.axis(axis);
        let name = axis.name();

        if stride == 0 {
            tracing::debug!(axis = name, "zero stride");
            return Err(Error::InvalidConfig(format!(
                "Invalid input data or configuration: stride {name} must be > 0, got 0{}",
                self.common_error_msg()
            )));
        }

        if span % stride == 0 {
            return Ok(span / stride + 1);
        }

        let quotient = output_size_quotient(input, kernel, stride, padding);
        tracing::debug!(
            axis = name,
            input,
            kernel,
            stride,
            padding,
            quotient,
            "stride does not divide padded input"
        );

        Err(Error::InvalidConfig(format!(
            "Invalid input data or configuration: Combination of kernel size, stride and padding \
             are not valid for given input {name}.\n\
             Require: (input - kernelSize + 2*padding)/stride + 1 in {name} dimension to be an integer. \
             Got: ({input} - {kernel} + 2*{padding})/{stride} + 1 = {quotient:.2}\n\
             {STRIDE_REFERENCE}{}",
            self.common_error_msg()
        )))
    }
}

/// Get the output size (height, width) for an NCHW input and a 2D kernel
///
/// # Arguments
/// * `input_shape` - Input shape [numExamples, inputDepth, inputHeight, inputWidth]
/// * `kernel` - Kernel size (h, w)
/// * `stride` - Stride (h, w)
/// * `padding` - Padding (h, w), applied on both sides
///
/// # Errors
/// * `InvalidArgument` - input shape has fewer than 4 dimensions
/// * `InvalidInput` - kernel is 0 or larger than the padded input on some axis,
///   or `input + 2 * padding` does not fit in `usize`
/// * `InvalidConfig` - stride is 0 or does not evenly divide `in - kernel + 2 * padding`
///
/// Height is fully checked before width, and kernel fit before stride.
///
/// The width kernel-fit message reads "must satisfy 0 <" with a single space;
/// older releases of this message had two.
pub fn compute_output_size(
    input_shape: &[usize],
    kernel: (usize, usize),
    stride: (usize, usize),
    padding: (usize, usize),
) -> Result<(usize, usize)> {
    if input_shape.len() < 4 {
        return Err(Error::InvalidArgument(format!(
            "output size requires a [numExamples,inputDepth,inputHeight,inputWidth] input shape, \
             got {}D shape {:?}",
            input_shape.len(),
            input_shape
        )));
    }

    let ctx = ConvContext {
        input_shape,
        kernel,
        stride,
        padding,
    };

    let span_h = ctx.check_kernel_fits(Axis::Height)?;
    let span_w = ctx.check_kernel_fits(Axis::Width)?;
    let out_h = ctx.check_stride_divides(Axis::Height, span_h)?;
    let out_w = ctx.check_stride_divides(Axis::Width, span_w)?;

    tracing::trace!(?input_shape, out_h, out_w, "conv output size");
    Ok((out_h, out_w))
}

/// Real-valued `(input - kernel + 2 * padding) / stride + 1`
///
/// Equals the output size when the stride divides evenly; otherwise reports
/// how far off the configuration is. A zero stride yields infinity.
pub fn output_size_quotient(input: usize, kernel: usize, stride: usize, padding: usize) -> f64 {
    (input as f64 - kernel as f64 + 2.0 * padding as f64) / stride as f64 + 1.0
}
