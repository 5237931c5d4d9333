use super::*;

const BLANK_MARKER: &str = "[CONTENT BLANK]";

/// Normalized content extracted from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fragment {
  /// The page had no content block, could not be fetched, or failed to
  /// extract.
  #[default]
  Blank,
  Content {
    /// Top-level element children of the root, in document order.
    children: Vec<String>,
    /// The root element itself.
    html: String,
  },
}

impl Fragment {
  #[must_use]
  pub fn children(&self) -> &[String] {
    match self {
      Self::Blank => &[],
      Self::Content { children, .. } => children,
    }
  }

  pub(crate) fn from_node(node: &NodeRef) -> Self {
    Self::Content {
      children: node
        .element_children()
        .iter()
        .map(|child| child.html().to_string())
        .collect(),
      html: node.html().to_string(),
    }
  }

  #[must_use]
  pub fn html(&self) -> Option<&str> {
    match self {
      Self::Blank => None,
      Self::Content { html, .. } => Some(html),
    }
  }

  #[must_use]
  pub fn is_blank(&self) -> bool {
    matches!(self, Self::Blank)
  }
}

impl Display for Fragment {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.html().unwrap_or(BLANK_MARKER))
  }
}
