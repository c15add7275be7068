//! DCT perceptual image hash (Content-ID-Image).
//!
//! Pipeline: luminance → 32×32 bicubic resize → row/column 2-D type-II DCT
//! → upper-left 8×8 submatrix → median threshold → 64-bit digest.

use crate::error::{IsccError, Result};

const RESIZE_DIM: usize = 32;
const DCT_WINDOW: usize = 8;

/// A decoded, single-channel luminance image. Width/height must both be
/// non-zero; `pixels` has exactly `width * height` entries in row-major
/// order.
pub struct LumaImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<f64>,
}

impl LumaImage {
    pub fn new(width: usize, height: usize, pixels: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IsccError::ImageDecode("image has zero width or height".into()));
        }
        if pixels.len() != width * height {
            return Err(IsccError::ImageDecode(format!(
                "pixel buffer length {} does not match {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(LumaImage { width, height, pixels })
    }

    fn get(&self, x: i64, y: i64) -> f64 {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.pixels[y * self.width + x]
    }
}

/// Catmull-Rom cubic convolution kernel (a = -0.5), the standard "bicubic"
/// interpolation weight.
fn cubic_weight(x: f64) -> f64 {
    let a = -0.5;
    let x = x.abs();
    if x <= 1.0 {
        (a + 2.0) * x.powi(3) - (a + 3.0) * x.powi(2) + 1.0
    } else if x < 2.0 {
        a * x.powi(3) - 5.0 * a * x.powi(2) + 8.0 * a * x - 4.0 * a
    } else {
        0.0
    }
}

/// Bicubic-resample `img` to exactly `RESIZE_DIM` x `RESIZE_DIM`, returned
/// as a row-major `Vec<f64>`.
fn resize_bicubic(img: &LumaImage) -> Vec<f64> {
    let mut out = vec![0.0f64; RESIZE_DIM * RESIZE_DIM];
    let scale_x = img.width as f64 / RESIZE_DIM as f64;
    let scale_y = img.height as f64 / RESIZE_DIM as f64;

    for oy in 0..RESIZE_DIM {
        let sy = (oy as f64 + 0.5) * scale_y - 0.5;
        let sy_floor = sy.floor();
        for ox in 0..RESIZE_DIM {
            let sx = (ox as f64 + 0.5) * scale_x - 0.5;
            let sx_floor = sx.floor();

            let mut acc = 0.0f64;
            for m in -1..=2i64 {
                let wy = cubic_weight(sy - (sy_floor + m as f64));
                for n in -1..=2i64 {
                    let wx = cubic_weight(sx - (sx_floor + n as f64));
                    let px = img.get(sx_floor as i64 + n, sy_floor as i64 + m);
                    acc += wx * wy * px;
                }
            }
            out[oy * RESIZE_DIM + ox] = acc;
        }
    }
    out
}

/// 1-D type-II DCT: `X[k] = 2 * sum_n x[n] * cos(pi * k * (2n+1) / (2N))`.
fn dct_1d(input: &[f64]) -> Vec<f64> {
    let n = input.len();
    let mut out = vec![0.0f64; n];
    for (k, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for (x_n, &value) in input.iter().enumerate() {
            sum += value * (std::f64::consts::PI * k as f64 * (2.0 * x_n as f64 + 1.0) / (2.0 * n as f64)).cos();
        }
        *slot = 2.0 * sum;
    }
    out
}

/// Apply [`dct_1d`] to every row, then to every column of the result.
fn dct_2d(matrix: &[f64], dim: usize) -> Vec<f64> {
    let mut rows_transformed = vec![0.0f64; dim * dim];
    for r in 0..dim {
        let row = &matrix[r * dim..(r + 1) * dim];
        let transformed = dct_1d(row);
        rows_transformed[r * dim..(r + 1) * dim].copy_from_slice(&transformed);
    }

    let mut out = vec![0.0f64; dim * dim];
    for c in 0..dim {
        let column: Vec<f64> = (0..dim).map(|r| rows_transformed[r * dim + c]).collect();
        let transformed = dct_1d(&column);
        for (r, value) in transformed.into_iter().enumerate() {
            out[r * dim + c] = value;
        }
    }
    out
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Compute the 64-bit DCT hash digest from a decoded luminance image.
pub fn dct_hash(img: &LumaImage) -> [u8; 8] {
    let resized = resize_bicubic(img);
    let transformed = dct_2d(&resized, RESIZE_DIM);

    let mut low_freq = Vec::with_capacity(DCT_WINDOW * DCT_WINDOW);
    for r in 0..DCT_WINDOW {
        for c in 0..DCT_WINDOW {
            low_freq.push(transformed[r * RESIZE_DIM + c]);
        }
    }

    let med = median(&mut low_freq.clone());

    let mut digest = [0u8; 8];
    for (i, &value) in low_freq.iter().enumerate() {
        if value > med {
            digest[i / 8] |= 0x80 >> (i % 8);
        }
    }
    digest
}

#[cfg(feature = "image-io")]
pub mod decode {
    //! Real-file image decoding, gated behind the `image-io` feature.
    use super::LumaImage;
    use crate::error::{IsccError, Result};
    use image::GenericImageView;

    /// Decode an image from a byte buffer and convert to [`LumaImage`]
    /// luminance via the `image` crate's own grayscale conversion. The
    /// bicubic resize in [`super::dct_hash`] is re-implemented locally
    /// rather than delegated to `image`'s resize filters, so results are
    /// independent of that crate's interpolation internals.
    pub fn luma_from_bytes(bytes: &[u8]) -> Result<LumaImage> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| IsccError::ImageDecode(e.to_string()))?;
        let (width, height) = img.dimensions();
        let gray = img.to_luma8();
        let pixels: Vec<f64> = gray.pixels().map(|p| p.0[0] as f64).collect();
        LumaImage::new(width as usize, height as usize, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, value: f64) -> LumaImage {
        LumaImage::new(width, height, vec![value; width * height]).unwrap()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(LumaImage::new(0, 10, vec![]).is_err());
    }

    #[test]
    fn mismatched_pixel_buffer_is_rejected() {
        assert!(LumaImage::new(2, 2, vec![0.0; 3]).is_err());
    }

    #[test]
    fn solid_image_hash_is_deterministic() {
        let img = solid(64, 64, 128.0);
        assert_eq!(dct_hash(&img), dct_hash(&img));
    }

    #[test]
    fn different_images_produce_different_hashes() {
        let a = solid(64, 64, 10.0);
        let mut pixels = vec![10.0; 64 * 64];
        for (i, p) in pixels.iter_mut().enumerate() {
            if i % 2 == 0 {
                *p = 250.0;
            }
        }
        let b = LumaImage::new(64, 64, pixels).unwrap();
        assert_ne!(dct_hash(&a), dct_hash(&b));
    }

    #[test]
    fn dct_1d_dc_term_is_sum_times_two() {
        let input = vec![1.0, 1.0, 1.0, 1.0];
        let out = dct_1d(&input);
        assert!((out[0] - 8.0).abs() < 1e-9);
    }

    #[test]
    fn median_of_even_length_averages_middle_two() {
        let mut v = vec![1.0, 3.0, 2.0, 4.0];
        assert_eq!(median(&mut v), 2.5);
    }
}
