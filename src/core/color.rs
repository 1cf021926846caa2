use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Opaque 8-bit RGB color as written in `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ChartError::InvalidColor(format!("`{input}` must start with `#`")))?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidColor(format!(
                "`{input}` contains non-hex digits"
            )));
        }
        match digits.len() {
            6 => Ok(Self::new(
                hex_byte(&digits[0..2], input)?,
                hex_byte(&digits[2..4], input)?,
                hex_byte(&digits[4..6], input)?,
            )),
            3 => {
                let expand = |index: usize| -> ChartResult<u8> {
                    let nibble = hex_byte(&digits[index..=index], input)?;
                    Ok(nibble * 17)
                };
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(ChartError::InvalidColor(format!(
                "`{input}` must have 3 or 6 hex digits"
            ))),
        }
    }

    /// Shifts every channel by `round(2.55 * percent)`, clamped to `0..=255`.
    ///
    /// Positive percentages lighten, negative ones darken by the same amount.
    #[must_use]
    pub fn shade(self, percent: f64) -> Self {
        let amount = shade_amount(percent);
        let shift = |channel: u8| -> u8 { (i32::from(channel) + amount).clamp(0, 255) as u8 };
        Self::new(shift(self.red), shift(self.green), shift(self.blue))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Channel offset applied by [`HexColor::shade`].
///
/// The magnitude is `round(2.55 * |percent|)`, rounded half away from zero, so
/// lightening and darkening by the same percentage move a channel by the same
/// distance.
#[must_use]
pub fn shade_amount(percent: f64) -> i32 {
    if !percent.is_finite() {
        return 0;
    }
    let magnitude = (percent.abs() * 2.55).round().min(255.0) as i32;
    if percent < 0.0 { -magnitude } else { magnitude }
}

/// Shades a color string, returning the input unchanged when it cannot be parsed.
#[must_use]
pub fn shade_hex(color: &str, percent: f64) -> String {
    match HexColor::parse(color) {
        Ok(parsed) => parsed.shade(percent).to_hex(),
        Err(_) => color.to_owned(),
    }
}

/// RGB color plus opacity, parsed from the subset of CSS color syntax the
/// chart configuration accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CssColor {
    pub rgb: HexColor,
    pub alpha: f64,
}

impl CssColor {
    #[must_use]
    pub const fn opaque(rgb: HexColor) -> Self {
        Self { rgb, alpha: 1.0 }
    }
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a named color.
pub fn parse_css_color(input: &str) -> ChartResult<CssColor> {
    let trimmed = input.trim();
    if let Some(digits) = trimmed.strip_prefix('#') {
        if digits.len() == 8 && digits.is_ascii() {
            let rgb = HexColor::parse(&trimmed[..7])?;
            let alpha = hex_byte(&digits[6..8], input)?;
            return Ok(CssColor {
                rgb,
                alpha: f64::from(alpha) / 255.0,
            });
        }
        return HexColor::parse(trimmed).map(CssColor::opaque);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(body) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        return parse_rgb_function(body, input);
    }

    named_color(&lower)
        .ok_or_else(|| ChartError::InvalidColor(format!("unsupported color `{input}`")))
}

fn parse_rgb_function(body: &str, input: &str) -> ChartResult<CssColor> {
    let inner = body
        .strip_suffix(')')
        .ok_or_else(|| ChartError::InvalidColor(format!("`{input}` is missing `)`")))?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ChartError::InvalidColor(format!(
            "`{input}` must have 3 or 4 components"
        )));
    }

    let channel = |text: &str| -> ChartResult<u8> {
        let value: f64 = text
            .parse()
            .map_err(|_| ChartError::InvalidColor(format!("bad channel `{text}` in `{input}`")))?;
        if !value.is_finite() {
            return Err(ChartError::InvalidColor(format!(
                "channel `{text}` in `{input}` must be finite"
            )));
        }
        Ok(value.round().clamp(0.0, 255.0) as u8)
    };

    let rgb = HexColor::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let alpha = match parts.get(3) {
        Some(text) => {
            let value: f64 = text.parse().map_err(|_| {
                ChartError::InvalidColor(format!("bad alpha `{text}` in `{input}`"))
            })?;
            if !value.is_finite() {
                return Err(ChartError::InvalidColor(format!(
                    "alpha in `{input}` must be finite"
                )));
            }
            value.clamp(0.0, 1.0)
        }
        None => 1.0,
    };
    Ok(CssColor { rgb, alpha })
}

fn named_color(name: &str) -> Option<CssColor> {
    let rgb = match name {
        "white" => HexColor::new(255, 255, 255),
        "black" => HexColor::new(0, 0, 0),
        "red" => HexColor::new(255, 0, 0),
        "green" => HexColor::new(0, 128, 0),
        "blue" => HexColor::new(0, 0, 255),
        "gray" | "grey" => HexColor::new(128, 128, 128),
        "transparent" => {
            return Some(CssColor {
                rgb: HexColor::new(0, 0, 0),
                alpha: 0.0,
            });
        }
        _ => return None,
    };
    Some(CssColor::opaque(rgb))
}

fn hex_byte(digits: &str, input: &str) -> ChartResult<u8> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ChartError::InvalidColor(format!(
            "`{input}` contains non-hex digits"
        )));
    }
    u8::from_str_radix(digits, 16)
        .map_err(|_| ChartError::InvalidColor(format!("`{input}` contains non-hex digits")))
}
