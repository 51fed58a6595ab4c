use std::{collections::HashMap, fs, path::Path};
use foundation::SystemInfo;
use log::debug;
use serde::Deserialize;
use ui::{ParseColorError, Rgba, Screen};
use crate::error::DtError;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ScreenProfile {
  pub scale: f64,
  #[serde(default = "display_link_default")]
  pub display_link: bool,
}

fn display_link_default() -> bool {
  true
}

impl Default for ScreenProfile {
  fn default() -> Self {
    Self { scale: 1.0, display_link: true }
  }
}

/// A device described in YAML, standing in for the platform queries.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Profile {
  #[serde(default = "system_version_default")]
  system_version: String,
  #[serde(default)]
  screen: ScreenProfile,
  #[serde(default)]
  colors: HashMap<String, String>,
}

fn system_version_default() -> String {
  "0".into()
}

impl Default for Profile {
  fn default() -> Self {
    Self {
      system_version: system_version_default(),
      screen: ScreenProfile::default(),
      colors: HashMap::new(),
    }
  }
}

impl Profile {
  pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Profile, DtError> {
    let filepath = filepath.as_ref();
    let f = fs::File::open(filepath)?;
    let profile: Profile = serde_yaml::from_reader(f)?;
    debug!("Loaded profile {:?}: {:?}", filepath, profile);
    Ok(profile)
  }

  pub fn from_yaml(src: &str) -> Result<Profile, DtError> {
    Ok(serde_yaml::from_str(src)?)
  }

  pub fn with_system_version(mut self, v: String) -> Self {
    self.system_version = v;
    self
  }

  pub fn with_scale(mut self, scale: f64) -> Self {
    self.screen.scale = scale;
    self
  }

  pub fn screen(&self) -> &ScreenProfile {
    &self.screen
  }

  /// A named profile color, or a packed hex literal.
  pub fn color(&self, name_or_hex: &str) -> Result<Rgba, DtError> {
    if let Some(hex) = self.colors.get(name_or_hex) {
      debug!("Color {:?} is {}", name_or_hex, hex);
      return Ok(hex.parse()?);
    }

    match name_or_hex.parse::<Rgba>() {
      Ok(color) => Ok(color),
      Err(ParseColorError::NotHex(_)) => {
        let mut known: Vec<String> = self.color_names().map(String::from).collect();
        known.sort();
        Err(DtError::UnknownColor { name: name_or_hex.into(), known })
      }
      Err(e) => Err(e.into()),
    }
  }

  pub fn color_names(&self) -> impl Iterator<Item = &str> {
    self.colors.keys().map(String::as_str)
  }
}

impl SystemInfo for Profile {
  fn system_version(&self) -> &str {
    &self.system_version
  }
}

impl Screen for Profile {
  fn scale(&self) -> f64 {
    self.screen.scale
  }

  fn supports_display_link(&self) -> bool {
    self.screen.display_link
  }
}
