use std::fmt;

/// Image formats served by the symbol endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Bytes searched for an `<svg` tag.
const SVG_WINDOW: usize = 100;

/// Infer the image format from the `Content-Type` header and the leading bytes.
///
/// Rules are checked in order (PNG, JPEG, GIF, SVG); each matches on either the header or
/// the magic bytes. Anything unrecognised is treated as PNG.
pub fn sniff(content_type: &str, bytes: &[u8]) -> ImageFormat {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("image/png") || bytes.starts_with(b"\x89PNG") {
        ImageFormat::Png
    } else if content_type.contains("image/jpeg") || bytes.starts_with(b"\xff\xd8") {
        ImageFormat::Jpeg
    } else if content_type.contains("image/gif") || bytes.starts_with(b"GIF8") {
        ImageFormat::Gif
    } else if content_type.contains("image/svg")
        || bytes[..bytes.len().min(SVG_WINDOW)]
            .windows(4)
            .any(|window| window == b"<svg")
    {
        ImageFormat::Svg
    } else {
        ImageFormat::Png
    }
}
