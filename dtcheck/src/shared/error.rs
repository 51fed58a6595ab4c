use ui::ParseColorError;

#[derive(Debug)]
pub enum DtError {
  IO(std::io::Error),
  Profile(serde_yaml::Error),
  Color(ParseColorError),
  UnknownColor { name: String, known: Vec<String> },
  InvalidOperator(String),
  InvalidChannel(String),
}

impl std::error::Error for DtError {}

impl std::fmt::Display for DtError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DtError::IO(e) => write!(f, "io: {}", e),
      DtError::Profile(e) => write!(f, "invalid profile: {}", e),
      DtError::Color(e) => write!(f, "{}", e),
      DtError::UnknownColor { name, known } if known.is_empty() => {
        write!(f, "no color named {:?}, profile has no colors", name)
      }
      DtError::UnknownColor { name, known } => {
        write!(f, "no color named {:?} (known: {})", name, known.join(", "))
      }
      DtError::InvalidOperator(op) => write!(f, "unknown operator {:?} (eq, gt, gte, lt, lte)", op),
      DtError::InvalidChannel(c) => write!(f, "not an 8 bit channel: {:?}", c),
    }
  }
}

impl From<std::io::Error> for DtError {
  fn from(e: std::io::Error) -> Self {
    DtError::IO(e)
  }
}

impl From<serde_yaml::Error> for DtError {
  fn from(e: serde_yaml::Error) -> Self {
    DtError::Profile(e)
  }
}

impl From<ParseColorError> for DtError {
  fn from(e: ParseColorError) -> Self {
    DtError::Color(e)
  }
}
