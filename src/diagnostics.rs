use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub message: String,
  pub severity: Severity,
  pub subject: String,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.subject, self.message)
  }
}

/// Run-scoped record of what happened to each page, forwarded to `tracing` as
/// it is collected.
#[derive(Debug, Default)]
pub struct Diagnostics {
  entries: Vec<Diagnostic>,
}

impl Diagnostics {
  #[must_use]
  pub fn entries(&self) -> &[Diagnostic] {
    &self.entries
  }

  pub fn info(
    &mut self,
    subject: impl Into<String>,
    message: impl Into<String>,
  ) {
    let (subject, message) = (subject.into(), message.into());
    debug!(subject = %subject, "{message}");
    self.push(Severity::Info, subject, message);
  }

  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  fn push(&mut self, severity: Severity, subject: String, message: String) {
    self.entries.push(Diagnostic {
      message,
      severity,
      subject,
    });
  }

  pub fn warn(
    &mut self,
    subject: impl Into<String>,
    message: impl Into<String>,
  ) {
    let (subject, message) = (subject.into(), message.into());
    warn!(subject = %subject, "{message}");
    self.push(Severity::Warning, subject, message);
  }

  pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
    self
      .entries
      .iter()
      .filter(|entry| entry.severity == Severity::Warning)
  }
}
