use std::fmt;
use std::io::Cursor;

use bytes::Bytes;
use image::{ImageFormat, ImageReader};

/// a generated logo as received from the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logo {
    pub bytes: Bytes,
    pub format: Option<ImageFormat>,
    pub dimensions: Option<(u32, u32)>,
}

impl Logo {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let (format, dimensions) = sniff(&bytes);

        Self { bytes, format, dimensions }
    }
}

fn sniff(bytes: &[u8]) -> (Option<ImageFormat>, Option<(u32, u32)>) {
    let Ok(reader) = ImageReader::new(Cursor::new(bytes)).with_guessed_format() else {
        return (None, None);
    };

    let format = reader.format();
    let dimensions = if format.is_some() { reader.into_dimensions().ok() } else { None };

    (format, dimensions)
}

impl fmt::Display for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Some(format) => write!(f, "{}", format.extensions_str().first().unwrap_or(&"image"))?,
            None => write!(f, "unknown format")?,
        }

        if let Some((width, height)) = self.dimensions {
            write!(f, ", {width}×{height}")?;
        }

        write!(f, ", {} bytes", self.bytes.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utilities::test_fixtures;

    #[test]
    fn test_png_logo() {
        let logo = Logo::new(test_fixtures::png_bytes());
        assert_eq!(logo.format, Some(ImageFormat::Png));
        assert_eq!(logo.dimensions, Some((2, 3)));
        assert_eq!(logo.to_string(), format!("png, 2×3, {} bytes", logo.bytes.len()));
    }

    #[test]
    fn test_unknown_bytes() {
        let logo = Logo::new(&b"definitely not an image"[..]);
        assert_eq!(logo.format, None);
        assert_eq!(logo.dimensions, None);
        assert_eq!(logo.to_string(), "unknown format, 23 bytes");
    }
}
