//! Mean-colour signatures and the distance between them

use crate::io::error::{MosaicError, Result};
use image::{GenericImageView, Pixel, Primitive};
use num_traits::AsPrimitive;
use std::fmt;

/// Sample type of an image's pixels
pub type Subpixel<I> = <<I as GenericImageView>::Pixel as Pixel>::Subpixel;

/// Normalised mean of each colour channel over every pixel of an image
///
/// Each component lies in `[0, 1]`: the channel mean divided by the largest
/// value a sample of the image's sub-pixel type can hold. Alpha is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Signature {
    /// Red mean
    pub r: f64,
    /// Green mean
    pub g: f64,
    /// Blue mean
    pub b: f64,
}

impl Signature {
    /// Signature from already normalised channel means
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Compute the signature of an image or image view
    ///
    /// Grey images contribute their luma sample to all three channels. Views
    /// returned by [`GenericImageView::view`] are signed through their deref
    /// target, `&*view`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn compute<I>(image: &I) -> Result<Self>
    where
        I: GenericImageView,
        Subpixel<I>: AsPrimitive<f64>,
    {
        let (width, height) = image.dimensions();
        let pixel_count = u64::from(width) * u64::from(height);
        if pixel_count == 0 {
            return Err(MosaicError::ZeroPixelSignature { width, height });
        }

        let grey = <I::Pixel as Pixel>::CHANNEL_COUNT < 3;
        // Integer sums stay exact in f64 up to 2^53
        let mut sums = [0.0_f64; 3];
        for (_, _, pixel) in image.pixels() {
            let channels = pixel.channels();
            for (i, sum) in sums.iter_mut().enumerate() {
                let sample = if grey { channels.first() } else { channels.get(i) };
                if let Some(&sample) = sample {
                    *sum += sample.as_();
                }
            }
        }

        let max_value: f64 = <Subpixel<I> as Primitive>::DEFAULT_MAX_VALUE.as_();
        let scale = pixel_count as f64 * max_value;
        let [r, g, b] = sums;

        Ok(Self::new(r / scale, g / scale, b / scale))
    }

    /// Manhattan distance over the three channel means, in `[0, 3]`
    pub const fn distance(&self, other: &Self) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}:{:.6}:{:.6}", self.r, self.g, self.b)
    }
}
