use super::*;

const PLACEHOLDER_TAG: &str = "div";

const REQUIRED_ELEMENTS: [&str; 3] = ["header", "nav", "main"];

/// A placeholder block together with the header that owns it.
pub(crate) struct Placement<'a> {
  pub(crate) block: NodeRef<'a>,
  pub(crate) header: NodeRef<'a>,
  pub(crate) section: usize,
}

impl Placement<'_> {
  pub(crate) fn header_id(&self) -> String {
    self
      .header
      .attr("id")
      .map(|id| id.to_string())
      .unwrap_or_default()
  }

  pub(crate) fn header_text(&self) -> String {
    self.header.text().trim().to_string()
  }
}

/// Walks every `<section>` under `<main>`, calling `visit` for each
/// placeholder `<div>` with the header element last seen before it.
///
/// Sections must open with a header, and a header must carry an `id` before
/// it can own a placeholder.
pub(crate) fn walk_sections<'a>(
  html: &'a dom_query::Document,
  mut visit: impl FnMut(Placement<'a>) -> Result,
) -> Result {
  let document = Document::new(html);

  let main = document
    .first_element("main")
    .ok_or(Error::MissingElement { name: "main" })?;

  let sections = document.named(&main, "section");

  for (index, section) in sections.into_iter().enumerate() {
    let children = section.element_children();

    let Some((first, rest)) = children.split_first() else {
      continue;
    };

    if is_placeholder(first) {
      return Err(Error::structure(
        index,
        "placeholder block appears before any header",
      ));
    }

    let mut header = first.clone();

    for child in rest {
      if !is_placeholder(child) {
        header = child.clone();
        continue;
      }

      if header.attr("id").is_none_or(|id| id.trim().is_empty()) {
        return Err(Error::structure(
          index,
          format!(
            "`<{}>` header \"{}\" owns a placeholder but has no id",
            header.node_name().unwrap_or_default(),
            header.text().trim()
          ),
        ));
      }

      visit(Placement {
        block: child.clone(),
        header: header.clone(),
        section: index,
      })?;
    }
  }

  Ok(())
}

fn is_placeholder(node: &NodeRef) -> bool {
  node.node_name().as_deref() == Some(PLACEHOLDER_TAG)
}

/// Read-only description of one placeholder in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
  /// `href` of the link inside the placeholder's `<code>` wrapper.
  pub anchor: Option<String>,
  pub has_code: bool,
  pub header_id: String,
  pub header_tag: String,
  pub header_text: String,
  pub section: usize,
}

impl Slot {
  fn from_placement<'d>(
    document: Document<'d>,
    placement: &Placement<'d>,
  ) -> Self {
    let code = document.first_named(&placement.block, "code");

    let anchor = code
      .as_ref()
      .and_then(|code| document.first_named(code, "a"))
      .and_then(|link| link.attr("href"))
      .map(|href| href.trim().to_string())
      .filter(|href| !href.is_empty());

    Self {
      anchor,
      has_code: code.is_some(),
      header_id: placement.header_id(),
      header_tag: placement
        .header
        .node_name()
        .map(|name| name.to_string())
        .unwrap_or_default(),
      header_text: placement.header_text(),
      section: placement.section,
    }
  }
}

/// The parsed skeleton. Never mutated: composition works on a fresh copy.
pub struct Template {
  html: dom_query::Document,
  source: String,
}

impl Template {
  /// Placeholders in document order.
  pub fn outline(&self) -> Result<Vec<Slot>> {
    let document = Document::new(&self.html);

    let mut slots = Vec::new();

    walk_sections(&self.html, |placement| {
      slots.push(Slot::from_placement(document, &placement));
      Ok(())
    })?;

    Ok(slots)
  }

  pub fn parse(source: &str) -> Result<Self> {
    let html = dom_query::Document::from(source);

    for name in REQUIRED_ELEMENTS {
      if Document::new(&html).first_element(name).is_none() {
        return Err(Error::MissingElement { name });
      }
    }

    Ok(Self {
      html,
      source: source.to_string(),
    })
  }

  #[must_use]
  pub fn source(&self) -> &str {
    &self.source
  }

  pub(crate) fn working_copy(&self) -> dom_query::Document {
    dom_query::Document::from(self.source.as_str())
  }
}
