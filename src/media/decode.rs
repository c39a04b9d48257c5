// SPDX-License-Identifier: MPL-2.0
//! Decoding fetched tier bytes into renderer-ready pixels.
//!
//! Fetching only yields encoded bytes. A tier becomes visible once its bytes
//! are decoded here; that completion is what starts the layer's fade.

use crate::error::{AssetFailure, AssetFetchError};
use crate::media::asset::AssetBytes;
use iced::widget::image;
use std::fmt;

/// Pixel rectangle inside a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Decoded RGBA image. The pixels live in the render handle only; crops read
/// them from there.
#[derive(Clone)]
pub struct DecodedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl DecodedImage {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Raw RGBA pixels shared with the render handle.
    pub fn pixels(&self) -> Option<&[u8]> {
        match &self.handle {
            image::Handle::Rgba { pixels, .. } => Some(&pixels[..]),
            _ => None,
        }
    }

    /// Returns a handle showing only `rect`, or the full handle when `rect`
    /// covers the whole image or falls outside it.
    ///
    /// Copies the cropped pixels; run it through [`crop_async`] from UI code.
    pub fn cropped(&self, rect: CropRect) -> image::Handle {
        if rect == CropRect::full(self.width, self.height)
            || rect.width == 0
            || rect.height == 0
            || rect.x + rect.width > self.width
            || rect.y + rect.height > self.height
        {
            return self.handle.clone();
        }

        let Some(buffer) = self.pixels().and_then(|pixels| {
            image_rs::ImageBuffer::<image_rs::Rgba<u8>, &[u8]>::from_raw(
                self.width,
                self.height,
                pixels,
            )
        }) else {
            return self.handle.clone();
        };
        let view = image_rs::imageops::crop_imm(&buffer, rect.x, rect.y, rect.width, rect.height);
        let cropped = image_rs::RgbaImage::from_fn(rect.width, rect.height, |x, y| {
            image_rs::GenericImageView::get_pixel(&*view, x, y)
        });
        image::Handle::from_rgba(rect.width, rect.height, cropped.into_raw())
    }
}

/// Decodes encoded bytes of `asset` into RGBA pixels.
pub fn decode(asset: &str, bytes: &AssetBytes) -> Result<DecodedImage, AssetFetchError> {
    let decoded = image_rs::load_from_memory(bytes.as_slice())
        .map_err(|err| AssetFetchError::new(asset, AssetFailure::Decode(err.to_string())))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage::from_rgba(width, height, rgba.into_raw()))
}

/// Decodes on the blocking pool.
pub async fn decode_async(
    asset: String,
    bytes: AssetBytes,
) -> Result<DecodedImage, AssetFetchError> {
    let task_asset = asset.clone();
    tokio::task::spawn_blocking(move || decode(&task_asset, &bytes))
        .await
        .unwrap_or_else(|e| {
            Err(AssetFetchError::new(
                asset,
                AssetFailure::Decode(format!("decode task failed: {e}")),
            ))
        })
}

/// Crops on the blocking pool. A failed task keeps the full frame.
pub async fn crop_async(image: DecodedImage, rect: CropRect) -> image::Handle {
    let fallback = image.handle.clone();
    tokio::task::spawn_blocking(move || image.cropped(rect))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "crop task failed");
            fallback
        })
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let buffer = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([120, 80, 40, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image_rs::ImageFormat::Png)
        .expect("png encoding should succeed");
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_into_rgba() {
        let bytes = AssetBytes::from(encode_test_png(4, 3));
        let decoded = decode("t.preview.png", &bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 3));
        assert_eq!(decoded.pixels().map(<[u8]>::len), Some(4 * 3 * 4));
    }

    #[test]
    fn garbage_bytes_are_a_decode_failure() {
        let bytes = AssetBytes::from(vec![0u8, 1, 2, 3]);
        let err = decode("t.medium.jpg", &bytes).unwrap_err();
        assert_eq!(err.asset, "t.medium.jpg");
        assert!(matches!(err.cause, AssetFailure::Decode(_)));
    }

    #[test]
    fn crop_outside_bounds_keeps_full_frame() {
        let decoded = DecodedImage::from_rgba(2, 2, vec![0; 16]);
        let rect = CropRect {
            x: 1,
            y: 0,
            width: 2,
            height: 2,
        };
        // Same handle id means no new image was produced.
        assert_eq!(decoded.cropped(rect).id(), decoded.handle.id());
    }

    #[tokio::test]
    async fn async_decode_matches_blocking_decode() {
        let bytes = AssetBytes::from(encode_test_png(2, 5));
        let decoded = decode_async("a.large.png".into(), bytes).await.unwrap();
        assert_eq!((decoded.width, decoded.height), (2, 5));
    }

    #[test]
    fn pixels_are_shared_with_the_handle() {
        let pixels = vec![7u8; 2 * 2 * 4];
        let address = pixels.as_ptr();
        let decoded = DecodedImage::from_rgba(2, 2, pixels);
        assert_eq!(decoded.pixels().map(<[u8]>::as_ptr), Some(address));
    }

    #[tokio::test]
    async fn async_crop_produces_requested_size() {
        let decoded = DecodedImage::from_rgba(4, 2, vec![0; 4 * 2 * 4]);
        let rect = CropRect {
            x: 1,
            y: 0,
            width: 2,
            height: 2,
        };
        match crop_async(decoded.clone(), rect).await {
            image::Handle::Rgba {
                width,
                height,
                pixels,
                ..
            } => {
                assert_eq!((width, height), (2, 2));
                assert_eq!(pixels.len(), 2 * 2 * 4);
            }
            other => panic!("unexpected handle: {other:?}"),
        }
    }
}
