//! Fill colors for padding operations.
//!
//! Hosts pass padding colors as strings. This module parses the accepted
//! forms - hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, leading `#`
//! optional) and CSS3 named colors, case-insensitive - and produces the
//! channel-compatible fill pixel for whatever layout the target image uses.
//!
//! # Usage
//!
//! ```rust
//! use imgnode_core::{Channels, FillColor};
//!
//! let c = FillColor::parse("#ff8000").unwrap();
//! assert_eq!(c.rgb(), [255, 128, 0]);
//! assert_eq!(c.pixel(Channels::Rgba), vec![255, 128, 0, 255]);
//!
//! let named = FillColor::parse("white").unwrap();
//! assert_eq!(named, FillColor::default());
//! ```
//!
//! # Grayscale fills
//!
//! Single-channel images receive the Rec.709 luminance of the color:
//! `Y = 0.2126*R + 0.7152*G + 0.0722*B`.

use crate::image::Channels;
use crate::{Error, Result};

/// Rec.709 luminance coefficient for the red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for the green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for the blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// An sRGB color used to fill padded regions.
///
/// Parsed from a host-supplied string via [`FillColor::parse`]; the default
/// is opaque white, matching the padding-color policy default `#ffffff`.
///
/// # Example
///
/// ```rust
/// use imgnode_core::FillColor;
///
/// let c = FillColor::parse("#0af").unwrap();
/// assert_eq!(c.rgba(), [0, 170, 255, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for FillColor {
    /// Opaque white.
    fn default() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl FillColor {
    /// Creates a color from explicit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color specification string.
    ///
    /// Hex digits are tried first (`RGB`, `RGBA`, `RRGGBB`, `RRGGBBAA`,
    /// with or without a leading `#`), then CSS3 color names
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Color`] if the string matches neither form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgnode_core::FillColor;
    ///
    /// assert!(FillColor::parse("#ffffff").is_ok());
    /// assert!(FillColor::parse("CornflowerBlue").is_ok());
    /// assert!(FillColor::parse("#12345").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(Error::color(spec));
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if let Some(color) = parse_hex(hex) {
            return Ok(color);
        }

        lookup_named(trimmed).ok_or_else(|| Error::color(spec))
    }

    /// Returns the Rec.709 luminance as an 8-bit value.
    ///
    /// Used to fill single-channel (grayscale) images.
    #[inline]
    pub fn gray(&self) -> u8 {
        let luma = self.r as f32 / 255.0 * REC709_LUMA_R
            + self.g as f32 / 255.0 * REC709_LUMA_G
            + self.b as f32 / 255.0 * REC709_LUMA_B;
        (luma.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Returns the color as `[r, g, b]`.
    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the color as `[r, g, b, a]`.
    #[inline]
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the fill pixel for the given channel layout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgnode_core::{Channels, FillColor};
    ///
    /// let c = FillColor::parse("black").unwrap();
    /// assert_eq!(c.pixel(Channels::Gray), vec![0]);
    /// assert_eq!(c.pixel(Channels::Rgb), vec![0, 0, 0]);
    /// ```
    pub fn pixel(&self, channels: Channels) -> Vec<u8> {
        match channels {
            Channels::Gray => vec![self.gray()],
            Channels::Rgb => self.rgb().to_vec(),
            Channels::Rgba => self.rgba().to_vec(),
        }
    }
}

fn parse_hex(hex: &str) -> Option<FillColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes = hex.as_bytes();
    match hex.len() {
        // RGB -> RRGGBB, alpha = FF
        3 => Some(FillColor::new(
            expand_nibble(bytes[0])?,
            expand_nibble(bytes[1])?,
            expand_nibble(bytes[2])?,
            255,
        )),
        // RGBA -> RRGGBBAA
        4 => Some(FillColor::new(
            expand_nibble(bytes[0])?,
            expand_nibble(bytes[1])?,
            expand_nibble(bytes[2])?,
            expand_nibble(bytes[3])?,
        )),
        6 => Some(FillColor::new(
            parse_byte(&hex[0..2])?,
            parse_byte(&hex[2..4])?,
            parse_byte(&hex[4..6])?,
            255,
        )),
        8 => Some(FillColor::new(
            parse_byte(&hex[0..2])?,
            parse_byte(&hex[2..4])?,
            parse_byte(&hex[4..6])?,
            parse_byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' -> 0xFF, 'a' -> 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    let hi = hex_val(s.as_bytes()[0])?;
    let lo = hex_val(s.as_bytes()[1])?;
    Some(hi << 4 | lo)
}

fn lookup_named(name: &str) -> Option<FillColor> {
    let lower = name.to_ascii_lowercase();
    CSS3_COLORS
        .binary_search_by_key(&lower.as_str(), |&(n, _)| n)
        .ok()
        .map(|idx| {
            let [r, g, b, a] = CSS3_COLORS[idx].1;
            FillColor::new(r, g, b, a)
        })
}

/// CSS3 named colors, sorted alphabetically for binary search.
const CSS3_COLORS: &[(&str, [u8; 4])] = &[
    ("aliceblue", [240, 248, 255, 255]),
    ("antiquewhite", [250, 235, 215, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("aquamarine", [127, 255, 212, 255]),
    ("azure", [240, 255, 255, 255]),
    ("beige", [245, 245, 220, 255]),
    ("bisque", [255, 228, 196, 255]),
    ("black", [0, 0, 0, 255]),
    ("blanchedalmond", [255, 235, 205, 255]),
    ("blue", [0, 0, 255, 255]),
    ("blueviolet", [138, 43, 226, 255]),
    ("brown", [165, 42, 42, 255]),
    ("burlywood", [222, 184, 135, 255]),
    ("cadetblue", [95, 158, 160, 255]),
    ("chartreuse", [127, 255, 0, 255]),
    ("chocolate", [210, 105, 30, 255]),
    ("coral", [255, 127, 80, 255]),
    ("cornflowerblue", [100, 149, 237, 255]),
    ("cornsilk", [255, 248, 220, 255]),
    ("crimson", [220, 20, 60, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("darkblue", [0, 0, 139, 255]),
    ("darkcyan", [0, 139, 139, 255]),
    ("darkgoldenrod", [184, 134, 11, 255]),
    ("darkgray", [169, 169, 169, 255]),
    ("darkgreen", [0, 100, 0, 255]),
    ("darkgrey", [169, 169, 169, 255]),
    ("darkkhaki", [189, 183, 107, 255]),
    ("darkmagenta", [139, 0, 139, 255]),
    ("darkolivegreen", [85, 107, 47, 255]),
    ("darkorange", [255, 140, 0, 255]),
    ("darkorchid", [153, 50, 204, 255]),
    ("darkred", [139, 0, 0, 255]),
    ("darksalmon", [233, 150, 122, 255]),
    ("darkseagreen", [143, 188, 139, 255]),
    ("darkslateblue", [72, 61, 139, 255]),
    ("darkslategray", [47, 79, 79, 255]),
    ("darkslategrey", [47, 79, 79, 255]),
    ("darkturquoise", [0, 206, 209, 255]),
    ("darkviolet", [148, 0, 211, 255]),
    ("deeppink", [255, 20, 147, 255]),
    ("deepskyblue", [0, 191, 255, 255]),
    ("dimgray", [105, 105, 105, 255]),
    ("dimgrey", [105, 105, 105, 255]),
    ("dodgerblue", [30, 144, 255, 255]),
    ("firebrick", [178, 34, 34, 255]),
    ("floralwhite", [255, 250, 240, 255]),
    ("forestgreen", [34, 139, 34, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gainsboro", [220, 220, 220, 255]),
    ("ghostwhite", [248, 248, 255, 255]),
    ("gold", [255, 215, 0, 255]),
    ("goldenrod", [218, 165, 32, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("greenyellow", [173, 255, 47, 255]),
    ("grey", [128, 128, 128, 255]),
    ("honeydew", [240, 255, 240, 255]),
    ("hotpink", [255, 105, 180, 255]),
    ("indianred", [205, 92, 92, 255]),
    ("indigo", [75, 0, 130, 255]),
    ("ivory", [255, 255, 240, 255]),
    ("khaki", [240, 230, 140, 255]),
    ("lavender", [230, 230, 250, 255]),
    ("lavenderblush", [255, 240, 245, 255]),
    ("lawngreen", [124, 252, 0, 255]),
    ("lemonchiffon", [255, 250, 205, 255]),
    ("lightblue", [173, 216, 230, 255]),
    ("lightcoral", [240, 128, 128, 255]),
    ("lightcyan", [224, 255, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210, 255]),
    ("lightgray", [211, 211, 211, 255]),
    ("lightgreen", [144, 238, 144, 255]),
    ("lightgrey", [211, 211, 211, 255]),
    ("lightpink", [255, 182, 193, 255]),
    ("lightsalmon", [255, 160, 122, 255]),
    ("lightseagreen", [32, 178, 170, 255]),
    ("lightskyblue", [135, 206, 250, 255]),
    ("lightslategray", [119, 136, 153, 255]),
    ("lightslategrey", [119, 136, 153, 255]),
    ("lightsteelblue", [176, 196, 222, 255]),
    ("lightyellow", [255, 255, 224, 255]),
    ("lime", [0, 255, 0, 255]),
    ("limegreen", [50, 205, 50, 255]),
    ("linen", [250, 240, 230, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("mediumaquamarine", [102, 205, 170, 255]),
    ("mediumblue", [0, 0, 205, 255]),
    ("mediumorchid", [186, 85, 211, 255]),
    ("mediumpurple", [147, 112, 219, 255]),
    ("mediumseagreen", [60, 179, 113, 255]),
    ("mediumslateblue", [123, 104, 238, 255]),
    ("mediumspringgreen", [0, 250, 154, 255]),
    ("mediumturquoise", [72, 209, 204, 255]),
    ("mediumvioletred", [199, 21, 133, 255]),
    ("midnightblue", [25, 25, 112, 255]),
    ("mintcream", [245, 255, 250, 255]),
    ("mistyrose", [255, 228, 225, 255]),
    ("moccasin", [255, 228, 181, 255]),
    ("navajowhite", [255, 222, 173, 255]),
    ("navy", [0, 0, 128, 255]),
    ("oldlace", [253, 245, 230, 255]),
    ("olive", [128, 128, 0, 255]),
    ("olivedrab", [107, 142, 35, 255]),
    ("orange", [255, 165, 0, 255]),
    ("orangered", [255, 69, 0, 255]),
    ("orchid", [218, 112, 214, 255]),
    ("palegoldenrod", [238, 232, 170, 255]),
    ("palegreen", [152, 251, 152, 255]),
    ("paleturquoise", [175, 238, 238, 255]),
    ("palevioletred", [219, 112, 147, 255]),
    ("papayawhip", [255, 239, 213, 255]),
    ("peachpuff", [255, 218, 185, 255]),
    ("peru", [205, 133, 63, 255]),
    ("pink", [255, 192, 203, 255]),
    ("plum", [221, 160, 221, 255]),
    ("powderblue", [176, 224, 230, 255]),
    ("purple", [128, 0, 128, 255]),
    ("rebeccapurple", [102, 51, 153, 255]),
    ("red", [255, 0, 0, 255]),
    ("rosybrown", [188, 143, 143, 255]),
    ("royalblue", [65, 105, 225, 255]),
    ("saddlebrown", [139, 69, 19, 255]),
    ("salmon", [250, 128, 114, 255]),
    ("sandybrown", [244, 164, 96, 255]),
    ("seagreen", [46, 139, 87, 255]),
    ("seashell", [255, 245, 238, 255]),
    ("sienna", [160, 82, 45, 255]),
    ("silver", [192, 192, 192, 255]),
    ("skyblue", [135, 206, 235, 255]),
    ("slateblue", [106, 90, 205, 255]),
    ("slategray", [112, 128, 144, 255]),
    ("slategrey", [112, 128, 144, 255]),
    ("snow", [255, 250, 250, 255]),
    ("springgreen", [0, 255, 127, 255]),
    ("steelblue", [70, 130, 180, 255]),
    ("tan", [210, 180, 140, 255]),
    ("teal", [0, 128, 128, 255]),
    ("thistle", [216, 191, 216, 255]),
    ("tomato", [255, 99, 71, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("turquoise", [64, 224, 208, 255]),
    ("violet", [238, 130, 238, 255]),
    ("wheat", [245, 222, 179, 255]),
    ("white", [255, 255, 255, 255]),
    ("whitesmoke", [245, 245, 245, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("yellowgreen", [154, 205, 50, 255]),
];
