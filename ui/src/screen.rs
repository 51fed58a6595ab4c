/// Pixel scale of a 2x ("retina") display.
pub const RETINA_SCALE: f64 = 2.0;

/// The display the app is running on.
pub trait Screen {
  /// Physical pixels per logical point.
  fn scale(&self) -> f64;

  /// Whether the platform can drive a display link. Platforms without it
  /// predate reliable scale reporting.
  fn supports_display_link(&self) -> bool {
    true
  }
}

/// True only for an exact 2x scale, so 3x screens are not retina.
pub fn is_retina<S: Screen + ?Sized>(screen: &S) -> bool {
  screen.scale() == RETINA_SCALE
}

/// For apps that still run on platforms misreporting the scale in 2x mode:
/// only trust the scale when a display link is available.
pub fn is_retina_legacy<S: Screen + ?Sized>(screen: &S) -> bool {
  screen.supports_display_link() && is_retina(screen)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScreen {
  pub scale: f64,
  pub display_link: bool,
}

impl FixedScreen {
  pub fn new(scale: f64) -> Self {
    Self { scale, display_link: true }
  }
}

impl Default for FixedScreen {
  fn default() -> Self {
    Self::new(1.0)
  }
}

impl Screen for FixedScreen {
  fn scale(&self) -> f64 {
    self.scale
  }

  fn supports_display_link(&self) -> bool {
    self.display_link
  }
}
