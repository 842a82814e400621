use crate::glyph::GlyphCode;

/// Errors raised while assembling a font in memory.
///
/// Layout itself never fails; these only come out of construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// Pixel buffer length does not match `width * height`.
    BitmapSizeMismatch {
        width: u16,
        height: u16,
        len: usize,
    },

    /// Glyph metrics disagree with the bitmap they describe.
    MetricsMismatch {
        glyph: GlyphCode,
        metrics: (u16, u16),
        bitmap: (u16, u16),
    },

    /// The same glyph code was added twice to a face.
    DuplicateGlyph { face: usize, glyph: GlyphCode },

    /// The same code point was mapped twice.
    DuplicateCodePoint(char),

    /// A glyph points past the end of the lig/kern step table.
    InvalidLigKernIndex {
        glyph: GlyphCode,
        index: u16,
        step_count: usize,
    },

    /// A glyph code that is reserved or not present in the face.
    InvalidGlyphCode { face: usize, glyph: GlyphCode },

    /// Face metrics that cannot drive a layout.
    InvalidFaceMetrics(String),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::BitmapSizeMismatch { width, height, len } => write!(
                f,
                "Bitmap of {}x{} needs {} pixels but {} were given",
                width,
                height,
                *width as usize * *height as usize,
                len
            ),
            FontError::MetricsMismatch {
                glyph,
                metrics,
                bitmap,
            } => write!(
                f,
                "Glyph {} declares {}x{} but its bitmap is {}x{}",
                glyph, metrics.0, metrics.1, bitmap.0, bitmap.1
            ),
            FontError::DuplicateGlyph { face, glyph } => {
                write!(f, "Glyph {} defined twice in face {}", glyph, face)
            }
            FontError::DuplicateCodePoint(ch) => {
                write!(f, "Code point U+{:04X} mapped twice", *ch as u32)
            }
            FontError::InvalidLigKernIndex {
                glyph,
                index,
                step_count,
            } => write!(
                f,
                "Glyph {} lig/kern program index {} out of range ({} steps)",
                glyph, index, step_count
            ),
            FontError::InvalidGlyphCode { face, glyph } => {
                write!(f, "Invalid glyph code {} in face {}", glyph, face)
            }
            FontError::InvalidFaceMetrics(msg) => write!(f, "Invalid face metrics: {}", msg),
        }
    }
}

impl std::error::Error for FontError {}

/// Result type for font construction.
pub type FontResult<T> = Result<T, FontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FontError::BitmapSizeMismatch {
            width: 3,
            height: 2,
            len: 5,
        };
        assert_eq!(err.to_string(), "Bitmap of 3x2 needs 6 pixels but 5 were given");

        let err = FontError::DuplicateCodePoint('é');
        assert_eq!(err.to_string(), "Code point U+00E9 mapped twice");
    }
}
