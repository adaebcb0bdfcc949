/// Target formats offered by the converter, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Jpeg,
    #[default]
    Png,
    Bmp,
    Gif,
    Tiff,
    Webp,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "JPEG (.jpg)",
            OutputFormat::Png => "PNG (.png)",
            OutputFormat::Bmp => "BMP (.bmp)",
            OutputFormat::Gif => "GIF (.gif)",
            OutputFormat::Tiff => "TIFF (.tiff)",
            OutputFormat::Webp => "WEBP (.webp)",
        }
    }

    /// Codec identifier used to pick the encoder.
    pub fn codec(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Gif => "GIF",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::Webp => "WEBP",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Gif => "gif",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Webp => "webp",
        }
    }

    /// JPEG and BMP are written without an alpha channel.
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, OutputFormat::Jpeg | OutputFormat::Bmp)
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
            OutputFormat::Webp => image::ImageFormat::WebP,
        }
    }

    pub fn all() -> [OutputFormat; 6] {
        [
            OutputFormat::Jpeg,
            OutputFormat::Png,
            OutputFormat::Bmp,
            OutputFormat::Gif,
            OutputFormat::Tiff,
            OutputFormat::Webp,
        ]
    }
}

/// Extensions shown by the file picker: every output extension plus the
/// `jpeg` and `tif` spellings, sorted.
pub fn picker_extensions() -> Vec<&'static str> {
    let mut extensions: Vec<&'static str> =
        OutputFormat::all().iter().map(|f| f.extension()).collect();
    if extensions.contains(&"jpg") {
        extensions.push("jpeg");
    }
    if extensions.contains(&"tiff") {
        extensions.push("tif");
    }
    extensions.sort_unstable();
    extensions.dedup();
    extensions
}
