#![no_std]

pub mod utils {
  /// Parses a hex literal, with or without a `0x`/`0X`/`#` prefix.
  pub fn parse_hex(src: &str) -> core::result::Result<u32, core::num::ParseIntError> {
    u32::from_str_radix(strip_hex_prefix(src), 16)
  }

  /// Parses a decimal integer, or a hex one when it carries a `0x`/`#` prefix.
  pub fn parse_int(src: &str) -> core::result::Result<u32, core::num::ParseIntError> {
    if has_hex_prefix(src) {
      parse_hex(src)
    } else {
      src.parse::<u32>()
    }
  }

  pub fn strip_hex_prefix(src: &str) -> &str {
    src.strip_prefix("0x")
      .or_else(|| src.strip_prefix("0X"))
      .or_else(|| src.strip_prefix('#'))
      .unwrap_or(src)
  }

  fn has_hex_prefix(src: &str) -> bool {
    src.len() != strip_hex_prefix(src).len()
  }
}

pub mod bits {
  /// The 8-bit channel sitting `shift` bits up in a packed value.
  pub fn channel(packed: u32, shift: u32) -> u8 {
    ((packed >> shift) & 0xff) as u8
  }

  pub fn normalize(channel: u8) -> f64 {
    channel as f64 / 255.0
  }
}
