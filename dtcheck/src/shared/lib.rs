use std::{fmt::Display, str::FromStr};
use foundation::SystemInfo;
use crate::error::DtError;

pub mod error;
pub mod logging;
pub mod profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Eq,
  Gt,
  Gte,
  Lt,
  Lte,
}

impl Operator {
  pub fn evaluate<S: SystemInfo + ?Sized>(&self, platform: &S, v: &str) -> bool {
    match self {
      Operator::Eq => platform.system_version_equal_to(v),
      Operator::Gt => platform.system_version_greater_than(v),
      Operator::Gte => platform.system_version_greater_than_or_equal_to(v),
      Operator::Lt => platform.system_version_less_than(v),
      Operator::Lte => platform.system_version_less_than_or_equal_to(v),
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Operator::Eq => "eq",
      Operator::Gt => "gt",
      Operator::Gte => "gte",
      Operator::Lt => "lt",
      Operator::Lte => "lte",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for Operator {
  type Err = DtError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "eq" => Ok(Self::Eq),
      "gt" => Ok(Self::Gt),
      "gte" => Ok(Self::Gte),
      "lt" => Ok(Self::Lt),
      "lte" => Ok(Self::Lte),
      _ => Err(DtError::InvalidOperator(s.into()))
    }
  }
}

pub mod utils {
  use common::utils;
  use crate::error::DtError;

  /// An 8 bit channel, decimal or 0x/# prefixed hex.
  pub fn parse_channel(src: &str) -> Result<u8, DtError> {
    utils::parse_int(src)
      .ok()
      .and_then(|n| u8::try_from(n).ok())
      .ok_or_else(|| DtError::InvalidChannel(src.into()))
  }

  pub fn yes_no(b: bool) -> &'static str {
    if b { "true" } else { "false" }
  }
}

#[cfg(test)]
mod tests {
  use foundation::StaticSystem;
  use crate::{Operator, utils::parse_channel, error::DtError};

  #[test]
  fn operator_roundtrip_names() {
    for op in ["eq", "gt", "gte", "lt", "lte"] {
      assert_eq!(op.parse::<Operator>().unwrap().to_string(), op);
    }
    assert!(matches!("ge".parse::<Operator>(), Err(DtError::InvalidOperator(s)) if s == "ge"));
  }

  #[test]
  fn operator_evaluate() {
    let ios = StaticSystem("10.0");
    assert!(Operator::Gt.evaluate(&ios, "9.5"));
    assert!(Operator::Gte.evaluate(&ios, "10"));
    assert!(!Operator::Eq.evaluate(&ios, "10"));
    assert!(Operator::Lt.evaluate(&ios, "10.0.1"));
    assert!(Operator::Lte.evaluate(&ios, "10.0"));
  }

  #[test]
  fn channels() {
    assert_eq!(parse_channel("0").unwrap(), 0);
    assert_eq!(parse_channel("255").unwrap(), 255);
    assert_eq!(parse_channel("0xF0").unwrap(), 0xF0);
    assert!(parse_channel("256").is_err());
    assert!(parse_channel("-1").is_err());
    assert!(parse_channel("F0").is_err());
  }
}
