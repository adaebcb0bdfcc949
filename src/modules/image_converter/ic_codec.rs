use image::{ColorType, DynamicImage, ImageReader};
use std::fmt;
use std::path::Path;
use tracing::debug;

use super::ic_error::CodecError;
use super::ic_formats::OutputFormat;

/// Channel layout of a decoded image. `P` and `Pa` are indexed layouts; the
/// `image` decoder expands palettes, so only other codecs report them.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    L,
    La,
    Rgb,
    Rgba,
    P,
    Pa,
}

impl ColorMode {
    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorMode::La | ColorMode::Rgba | ColorMode::Pa)
    }

    /// Bit depth is ignored; only the channels matter here.
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => ColorMode::L,
            ColorType::La8 | ColorType::La16 => ColorMode::La,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
            other if other.has_alpha() => ColorMode::Rgba,
            _ => ColorMode::Rgb,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::L => "L",
            ColorMode::La => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::P => "P",
            ColorMode::Pa => "PA",
        };
        f.write_str(name)
    }
}

/// An image held in memory for the length of one conversion. Dropping the
/// value releases it.
pub trait DecodedImage: Sized {
    fn color_mode(&self) -> ColorMode;
    fn into_rgb(self) -> Self;
    fn save(&self, path: &Path, format: OutputFormat) -> Result<(), CodecError>;
}

pub trait ImageCodec {
    type Image: DecodedImage;

    fn open(&self, path: &Path) -> Result<Self::Image, CodecError>;
}

/// Codec backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRsCodec;

pub struct ImageHandle {
    image: DynamicImage,
}

impl ImageHandle {
    #[cfg(test)]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl DecodedImage for ImageHandle {
    fn color_mode(&self) -> ColorMode {
        ColorMode::from_color_type(self.image.color())
    }

    fn into_rgb(self) -> Self {
        Self { image: DynamicImage::from(self.image.into_rgb8()) }
    }

    fn save(&self, path: &Path, format: OutputFormat) -> Result<(), CodecError> {
        let reshaped = encoder_layout(&self.image, format);
        if let Some(image) = &reshaped {
            debug!(
                "Reshaped {:?} to {:?} for {}",
                self.image.color(),
                image.color(),
                format.codec()
            );
        }

        reshaped
            .as_ref()
            .unwrap_or(&self.image)
            .save_with_format(path, format.image_format())
            .map_err(|e| CodecError::Save(e.to_string()))
    }
}

/// Returns a copy in a pixel layout the target encoder accepts, or `None`
/// when the image can be written as is. Alpha is kept wherever the format
/// can store it.
fn encoder_layout(image: &DynamicImage, format: OutputFormat) -> Option<DynamicImage> {
    let color = image.color();
    let alpha = color.has_alpha();
    let gray = matches!(
        color,
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16
    );

    let eight_bit = |keep_gray: bool| -> DynamicImage {
        match (keep_gray && gray, alpha) {
            (true, false) => DynamicImage::from(image.to_luma8()),
            (true, true) => DynamicImage::from(image.to_luma_alpha8()),
            (false, false) => DynamicImage::from(image.to_rgb8()),
            (false, true) => DynamicImage::from(image.to_rgba8()),
        }
    };

    match format {
        OutputFormat::Png => match color {
            ColorType::Rgb32F => Some(DynamicImage::from(image.to_rgb16())),
            ColorType::Rgba32F => Some(DynamicImage::from(image.to_rgba16())),
            _ => None,
        },
        OutputFormat::Tiff => match color {
            ColorType::L8
            | ColorType::L16
            | ColorType::Rgb8
            | ColorType::Rgb16
            | ColorType::Rgba8
            | ColorType::Rgba16 => None,
            ColorType::La16 | ColorType::Rgb32F | ColorType::Rgba32F if alpha => {
                Some(DynamicImage::from(image.to_rgba16()))
            }
            ColorType::Rgb32F => Some(DynamicImage::from(image.to_rgb16())),
            _ => Some(eight_bit(false)),
        },
        OutputFormat::Gif => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => None,
            _ => Some(eight_bit(false)),
        },
        OutputFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => None,
            _ if gray && !alpha => Some(eight_bit(true)),
            _ => Some(DynamicImage::from(image.to_rgb8())),
        },
        OutputFormat::Bmp | OutputFormat::Webp => match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => None,
            _ => Some(eight_bit(true)),
        },
    }
}

impl ImageCodec for ImageRsCodec {
    type Image = ImageHandle;

    fn open(&self, path: &Path) -> Result<ImageHandle, CodecError> {
        // Sniff the content so a mislabelled extension still decodes.
        let image = ImageReader::open(path)
            .map_err(|e| CodecError::Open(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| CodecError::Open(e.to_string()))?
            .decode()
            .map_err(|e| CodecError::Open(e.to_string()))?;
        Ok(ImageHandle { image })
    }
}
