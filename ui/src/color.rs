use core::{fmt::Display, num::ParseIntError, str::FromStr};
use common::{bits, utils};

/// The toolkit's color constructor, taking normalized 0.0..=1.0 channels.
pub trait ColorFactory {
  type Color;
  fn color(&self, red: f64, green: f64, blue: f64, alpha: f64) -> Self::Color;
}

/// Normalized color channels, ready to hand to a `ColorFactory`.
///
/// Nothing is validated or clamped; channels are exactly `value / 255`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
  pub red: f64,
  pub green: f64,
  pub blue: f64,
  pub alpha: f64,
}

impl Rgba {
  pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
    Self { red, green, blue, alpha }
  }

  /// Opaque color from separate 8 bit values, e.g. `(0xF0, 0xEF, 0xE5)`.
  pub fn from_red_green_blue(red: u8, green: u8, blue: u8) -> Self {
    Self::from_red_green_blue_alpha(red, green, blue, 0xff)
  }

  pub fn from_red_green_blue_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
    Self {
      red: bits::normalize(red),
      green: bits::normalize(green),
      blue: bits::normalize(blue),
      alpha: bits::normalize(alpha),
    }
  }

  /// Opaque color from a packed 0xRRGGBB value. Bits above 24 are ignored.
  pub fn from_rgb(hex: u32) -> Self {
    Self::from_red_green_blue(
      bits::channel(hex, 16),
      bits::channel(hex, 8),
      bits::channel(hex, 0),
    )
  }

  /// Color from a packed 0xRRGGBBAA value.
  pub fn from_rgba(hex: u32) -> Self {
    Self::from_red_green_blue_alpha(
      bits::channel(hex, 24),
      bits::channel(hex, 16),
      bits::channel(hex, 8),
      bits::channel(hex, 0),
    )
  }

  pub fn build<F: ColorFactory + ?Sized>(&self, factory: &F) -> F::Color {
    factory.color(self.red, self.green, self.blue, self.alpha)
  }

  /// Back to 8 bit channels, rounded to nearest.
  pub fn to_rgb8(&self) -> (u8, u8, u8, u8) {
    fn quantize(c: f64) -> u8 {
      (c * 255.0 + 0.5) as u8
    }
    (quantize(self.red), quantize(self.green), quantize(self.blue), quantize(self.alpha))
  }
}

pub fn color_from_red_green_blue<F: ColorFactory + ?Sized>(factory: &F, red: u8, green: u8, blue: u8) -> F::Color {
  Rgba::from_red_green_blue(red, green, blue).build(factory)
}

pub fn color_from_red_green_blue_alpha<F: ColorFactory + ?Sized>(factory: &F, red: u8, green: u8, blue: u8, alpha: u8) -> F::Color {
  Rgba::from_red_green_blue_alpha(red, green, blue, alpha).build(factory)
}

pub fn color_from_rgb<F: ColorFactory + ?Sized>(factory: &F, hex: u32) -> F::Color {
  Rgba::from_rgb(hex).build(factory)
}

pub fn color_from_rgba<F: ColorFactory + ?Sized>(factory: &F, hex: u32) -> F::Color {
  Rgba::from_rgba(hex).build(factory)
}

impl From<(u8, u8, u8)> for Rgba {
  fn from((red, green, blue): (u8, u8, u8)) -> Self {
    Self::from_red_green_blue(red, green, blue)
  }
}

impl From<Rgba> for (f64, f64, f64, f64) {
  fn from(c: Rgba) -> Self {
    (c.red, c.green, c.blue, c.alpha)
  }
}

impl Display for Rgba {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({:.3}, {:.3}, {:.3}, {:.3})", self.red, self.green, self.blue, self.alpha)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
  /// Only 6 (RRGGBB) and 8 (RRGGBBAA) digits make a color.
  Digits(usize),
  NotHex(char),
  Hex(ParseIntError),
}

#[cfg(feature = "std")]
impl std::error::Error for ParseColorError {}

impl Display for ParseColorError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      ParseColorError::Digits(n) => write!(f, "expected 6 or 8 hex digits, got {}", n),
      ParseColorError::NotHex(c) => write!(f, "not a hex digit: {:?}", c),
      ParseColorError::Hex(e) => write!(f, "invalid hex color: {}", e),
    }
  }
}

impl From<ParseIntError> for ParseColorError {
  fn from(e: ParseIntError) -> Self {
    ParseColorError::Hex(e)
  }
}

/// "0xF0EFE5", "#F0EFE5" or "F0EFE5" are opaque, 8 digits carry alpha.
impl FromStr for Rgba {
  type Err = ParseColorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let digits = utils::strip_hex_prefix(s.trim());
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
      return Err(ParseColorError::NotHex(c));
    }

    match digits.len() {
      6 => Ok(Self::from_rgb(utils::parse_hex(digits)?)),
      8 => Ok(Self::from_rgba(utils::parse_hex(digits)?)),
      n => Err(ParseColorError::Digits(n)),
    }
  }
}
