use core::{cmp::Ordering, fmt::Display};

/// Where the running OS version comes from.
///
/// Implementors only provide `system_version`, the checks come for free:
///
///   if platform.system_version_less_than("4.0") { ... }
///   if platform.system_version_greater_than_or_equal_to("3.1.1") { ... }
pub trait SystemInfo {
  fn system_version(&self) -> &str;

  fn system_version_equal_to(&self, v: &str) -> bool {
    equal_to(self.system_version(), v)
  }

  fn system_version_greater_than(&self, v: &str) -> bool {
    greater_than(self.system_version(), v)
  }

  fn system_version_greater_than_or_equal_to(&self, v: &str) -> bool {
    greater_than_or_equal_to(self.system_version(), v)
  }

  fn system_version_less_than(&self, v: &str) -> bool {
    less_than(self.system_version(), v)
  }

  fn system_version_less_than_or_equal_to(&self, v: &str) -> bool {
    less_than_or_equal_to(self.system_version(), v)
  }
}

/// A platform that always reports the same version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSystem<S>(pub S);

impl<S: AsRef<str>> SystemInfo for StaticSystem<S> {
  fn system_version(&self) -> &str {
    self.0.as_ref()
  }
}

/// Numeric-aware comparison of two version strings.
///
/// Runs of digits compare by value ("10.0" > "9.5", "01" == "1"), any other
/// character compares by code point. If one string runs out first, it is the
/// smaller one ("1.0" < "1.0.1").
pub fn compare(a: &str, b: &str) -> Ordering {
  let mut lhs = Tokens(a);
  let mut rhs = Tokens(b);

  loop {
    match (lhs.next(), rhs.next()) {
      (None, None) => return Ordering::Equal,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(l), Some(r)) => match l.cmp(&r) {
        Ordering::Equal => continue,
        unequal => return unequal,
      },
    }
  }
}

pub fn equal_to(current: &str, v: &str) -> bool {
  compare(current, v) == Ordering::Equal
}

pub fn greater_than(current: &str, v: &str) -> bool {
  compare(current, v) == Ordering::Greater
}

pub fn greater_than_or_equal_to(current: &str, v: &str) -> bool {
  compare(current, v) != Ordering::Less
}

pub fn less_than(current: &str, v: &str) -> bool {
  compare(current, v) == Ordering::Less
}

pub fn less_than_or_equal_to(current: &str, v: &str) -> bool {
  compare(current, v) != Ordering::Greater
}

/// A version string ordered by `compare`.
#[derive(Debug, Clone, Copy)]
pub struct Version<'a>(&'a str);

impl<'a> Version<'a> {
  pub fn new(v: &'a str) -> Self {
    Self(v)
  }

  pub fn as_str(&self) -> &'a str {
    self.0
  }
}

impl<'a> From<&'a str> for Version<'a> {
  fn from(v: &'a str) -> Self {
    Self(v)
  }
}

impl PartialEq for Version<'_> {
  fn eq(&self, other: &Self) -> bool {
    equal_to(self.0, other.0)
  }
}

impl Eq for Version<'_> {}

impl PartialOrd for Version<'_> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Version<'_> {
  fn cmp(&self, other: &Self) -> Ordering {
    compare(self.0, other.0)
  }
}

impl Display for Version<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
  Number(&'a str),
  Char(char),
}

impl Token<'_> {
  fn lead(&self) -> char {
    match self {
      // Digit runs are never empty
      Token::Number(digits) => digits.as_bytes()[0] as char,
      Token::Char(c) => *c,
    }
  }
}

impl PartialEq for Token<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Token<'_> {}

impl PartialOrd for Token<'_> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Token<'_> {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (Token::Number(l), Token::Number(r)) => compare_digits(l, r),
      _ => self.lead().cmp(&other.lead()),
    }
  }
}

// Compares by value without parsing, so runs of any length work.
fn compare_digits(l: &str, r: &str) -> Ordering {
  let l = l.trim_start_matches('0');
  let r = r.trim_start_matches('0');
  l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

struct Tokens<'a>(&'a str);

impl<'a> Iterator for Tokens<'a> {
  type Item = Token<'a>;

  fn next(&mut self) -> Option<Token<'a>> {
    let first = self.0.chars().next()?;

    if first.is_ascii_digit() {
      let end = self.0.find(|c: char| !c.is_ascii_digit()).unwrap_or(self.0.len());
      let (digits, rest) = self.0.split_at(end);
      self.0 = rest;
      Some(Token::Number(digits))
    } else {
      self.0 = &self.0[first.len_utf8()..];
      Some(Token::Char(first))
    }
  }
}

#[cfg(test)]
mod tests {
  use core::cmp::Ordering;
  use alloc::{string::String, vec, vec::Vec};
  use crate::version::{compare, equal_to, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, StaticSystem, SystemInfo, Version};

  #[test]
  fn numeric_not_lexicographic() {
    assert_eq!(compare("10.0", "9.5"), Ordering::Greater);
    assert_eq!(compare("9.5", "10.0"), Ordering::Less);
    assert_eq!(compare("4.10", "4.9"), Ordering::Greater);
    assert_eq!(compare("17.4.1", "17.4.1"), Ordering::Equal);
  }

  #[test]
  fn shorter_prefix_is_smaller() {
    assert_eq!(compare("1.0", "1.0.1"), Ordering::Less);
    assert_eq!(compare("1", "1.0"), Ordering::Less);
    assert_eq!(compare("", "0"), Ordering::Less);
    assert_eq!(compare("", ""), Ordering::Equal);
  }

  #[test]
  fn leading_zeros() {
    assert_eq!(compare("01.002", "1.2"), Ordering::Equal);
    assert_eq!(compare("000", "0"), Ordering::Equal);
  }

  #[test]
  fn long_digit_runs() {
    assert_eq!(compare("99999999999999999999999", "99999999999999999999998"), Ordering::Greater);
    assert_eq!(compare("1.99999999999999999999", "2"), Ordering::Less);
  }

  #[test]
  fn non_digits() {
    assert_eq!(compare("3.2b", "3.2a"), Ordering::Greater);
    assert_eq!(compare("3.2b1", "3.2b2"), Ordering::Less);
    // '.' sorts below the digits
    assert_eq!(compare("1..2", "1.2"), Ordering::Less);
    assert_eq!(compare("a", "1"), Ordering::Greater);
  }

  #[test]
  fn predicates() {
    assert!(equal_to("1.0", "1.0"));
    assert!(!equal_to("1.0", "1.0.1"));
    assert!(greater_than("10.0", "9.5"));
    assert!(!greater_than("9.5", "9.5"));
    assert!(greater_than_or_equal_to("9.5", "9.5"));
    assert!(greater_than_or_equal_to("3.1.1", "3.1"));
    assert!(less_than("1.0", "1.0.1"));
    assert!(!less_than("1.0.1", "1.0.1"));
    assert!(less_than_or_equal_to("1.0.1", "1.0.1"));
    assert!(!less_than_or_equal_to("4.0", "3.2"));
  }

  #[test]
  fn system_info_defaults() {
    let platform = StaticSystem("7.1.2");
    assert_eq!(platform.system_version(), "7.1.2");
    assert!(platform.system_version_equal_to("7.1.2"));
    assert!(platform.system_version_greater_than("7"));
    assert!(platform.system_version_greater_than_or_equal_to("7.1"));
    assert!(platform.system_version_less_than("10.0"));
    assert!(platform.system_version_less_than_or_equal_to("7.1.2"));
    assert!(!platform.system_version_less_than("4.0"));

    let owned = StaticSystem(String::from("17.4"));
    assert!(owned.system_version_greater_than("9.5"));
  }

  #[test]
  fn versions_sort() {
    let mut versions: Vec<Version> = vec!["10.0", "9.5", "1.0.1", "1.0", "9.10"]
      .into_iter()
      .map(Version::from)
      .collect();
    versions.sort();

    let sorted: Vec<&str> = versions.iter().map(|v| v.as_str()).collect();
    assert_eq!(sorted, ["1.0", "1.0.1", "9.5", "9.10", "10.0"]);
    assert_eq!(Version::new("2.00"), Version::new("2.0"));
    assert!(Version::new("2.1") > Version::new("2.0.9"));
  }
}
