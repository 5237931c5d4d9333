#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid configuration: {message}")]
  Config { message: String },
  #[error("malformed heading tag `{tag}`")]
  Extraction { tag: String },
  #[error("failed to fetch `{url}`: {message}")]
  Fetch { url: String, message: String },
  #[error("invalid site origin: {source}")]
  InvalidOrigin {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid json: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
  #[error("template has no `<{name}>` element")]
  MissingElement { name: &'static str },
  #[error("template section {section}: {message}")]
  Structure { section: usize, message: String },
}

impl Error {
  pub(crate) fn config(message: impl Into<String>) -> Self {
    Self::Config {
      message: message.into(),
    }
  }

  pub(crate) fn structure(section: usize, message: impl Into<String>) -> Self {
    Self::Structure {
      section,
      message: message.into(),
    }
  }
}
