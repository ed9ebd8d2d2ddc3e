use crate::buffer::PixelBuffer;

/// Rotate an image 90 degrees clockwise.
///
/// A `w x h` input becomes an `h x w` output; the input's bottom-left pixel
/// lands at the output's top-left.
pub fn rotate_clockwise(input: &PixelBuffer) -> PixelBuffer {
    let in_h = input.height();
    PixelBuffer::from_fn(in_h, input.width(), |x, y| input.get(y, in_h - 1 - x))
}
