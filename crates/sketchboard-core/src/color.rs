//! Colour helpers: serialisable RGB values, hex parsing and the rainbow cycle.

use peniko::Color;
use peniko::color::{AlphaColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

/// Milliseconds per degree of hue in rainbow mode.
const RAINBOW_MS_PER_DEGREE: f64 = 10.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a colour-picker string of the form `#rrggbb`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgba8(r, g, b, 255))
}

/// Format a colour as `#rrggbb`, dropping alpha.
pub fn to_hex(color: SerializableColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Serde adapter storing a [`SerializableColor`] as a `#rrggbb` string.
pub mod hex {
    use super::{SerializableColor, parse_hex_color, to_hex};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(color: &SerializableColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SerializableColor, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s)
            .map(SerializableColor::from)
            .ok_or_else(|| D::Error::custom(format!("invalid colour {s:?}, expected #rrggbb")))
    }
}

/// Hue in degrees for a wall-clock timestamp in milliseconds.
pub fn rainbow_hue(timestamp_ms: f64) -> f64 {
    (timestamp_ms / RAINBOW_MS_PER_DEGREE).rem_euclid(360.0)
}

/// Fully saturated, half-lightness colour whose hue cycles with time.
pub fn rainbow_color(timestamp_ms: f64) -> Color {
    let hue = rainbow_hue(timestamp_ms) as f32;
    // Saturation and lightness are percentages in the HSL colour space.
    AlphaColor::<Hsl>::new([hue, 100.0, 50.0, 1.0]).convert::<Srgb>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#ff8000").unwrap();
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 128, 0, 255));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(parse_hex_color("ff8000").is_none());
        assert!(parse_hex_color("#ff80").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ff80001").is_none());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(SerializableColor::rgb(255, 128, 0)), "#ff8000");
        assert_eq!(to_hex(SerializableColor::black()), "#000000");
    }

    #[test]
    fn test_hex_serde_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "hex")]
            color: SerializableColor,
        }

        let parsed: Wrapper = serde_json::from_str(r##"{"color":"#0a141e"}"##).unwrap();
        assert_eq!(parsed.color, SerializableColor::rgb(10, 20, 30));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r##"{"color":"#0a141e"}"##);

        assert!(serde_json::from_str::<Wrapper>(r#"{"color":"red"}"#).is_err());
    }

    #[test]
    fn test_rainbow_hue_wraps() {
        assert!((rainbow_hue(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((rainbow_hue(1200.0) - 120.0).abs() < 1e-9);
        assert!((rainbow_hue(3600.0) - 0.0).abs() < 1e-9);
        assert!((rainbow_hue(3650.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rainbow_color_primaries() {
        let red = rainbow_color(0.0).to_rgba8();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));

        let green = rainbow_color(1200.0).to_rgba8();
        assert!(green.g > 250 && green.r < 5 && green.b < 5);

        let blue = rainbow_color(2400.0).to_rgba8();
        assert!(blue.b > 250 && blue.r < 5 && blue.g < 5);
    }

    #[test]
    fn test_rainbow_color_is_deterministic() {
        assert_eq!(
            SerializableColor::from(rainbow_color(123_456.0)),
            SerializableColor::from(rainbow_color(123_456.0))
        );
    }

    #[test]
    fn test_serializable_round_trip_through_peniko() {
        let c = SerializableColor::rgb(12, 34, 56);
        let back: SerializableColor = Color::from(c).into();
        assert_eq!(c, back);
    }
}
