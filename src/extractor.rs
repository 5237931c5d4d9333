use super::*;

/// Turns a fetched page into a [`Fragment`] according to a [`LocatorRule`].
pub struct Extractor<'a> {
  base_url: &'a Url,
  origin: &'a Url,
  subject: &'a str,
}

impl<'a> Extractor<'a> {
  /// URL that document-relative links are resolved against. Defaults to the
  /// origin.
  #[must_use]
  pub fn base_url(self, base_url: &'a Url) -> Self {
    Self { base_url, ..self }
  }

  /// Runs the extraction stages over `document`.
  ///
  /// A missing content root yields [`Fragment::Blank`]. A malformed heading
  /// tag fails with [`Error::Extraction`].
  pub fn extract(
    &self,
    document: &dom_query::Document,
    rule: &LocatorRule,
    target_level: u8,
    diagnostics: &mut Diagnostics,
  ) -> Result<Fragment> {
    let context = Context::new(
      document,
      rule,
      target_level,
      (self.origin, self.base_url),
      self.subject,
      diagnostics,
    );

    let context = Pipeline::with_default_stages(context).run()?;

    Ok(
      context
        .root()
        .map_or(Fragment::Blank, |root| Fragment::from_node(&root)),
    )
  }

  #[must_use]
  pub fn new(origin: &'a Url) -> Self {
    Self {
      base_url: origin,
      origin,
      subject: "",
    }
  }

  /// Label attached to diagnostics, usually the page id.
  #[must_use]
  pub fn subject(self, subject: &'a str) -> Self {
    Self { subject, ..self }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::stage::extract};

  #[test]
  fn extracts_a_complete_program_page() {
    let rule = LocatorRule::new(ElementMatcher::new(
      "div",
      "gb-c-longform gb-u-spacing-triple",
    ))
    .exclude(ExclusionRule::Element(ElementMatcher::new(
      "div",
      "gb-c-share",
    )));

    let (fragment, diagnostics) = extract(
      r#"
      <html>
        <body>
          <header><h1>Gettysburg College</h1></header>
          <div class="gb-c-longform gb-u-spacing-triple" id="content">
            <h2 class="gb-c-heading">Africana Studies</h2>
            <p class="intro">The program <a href="/academic-programs/africana/faculty/" class="x">faculty</a> teach.</p>
            <div class="gb-c-share"><button>Share</button></div>
            <p></p>
            <h3>Requirements</h3>
            <ul class="list"><li>AFS 130</li></ul>
          </div>
        </body>
      </html>
      "#,
      &rule,
      3,
    );

    let fragment = fragment.unwrap();

    assert_eq!(
      fragment.children(),
      [
        "<h4>Africana Studies</h4>",
        "<p>The program <a href=\"https://www.gettysburg.edu/academic-programs/africana/faculty/\">faculty</a> teach.</p>",
        "<h5>Requirements</h5>",
        "<ul><li>AFS 130</li></ul>",
      ]
    );
    assert_eq!(diagnostics.warnings().count(), 0);
  }

  #[test]
  fn root_keeps_its_own_attributes() {
    let rule = LocatorRule::new(ElementMatcher::new("section", "body"));

    let (fragment, _) = extract(
      r#"<section class="body"><p class="x">Text</p></section>"#,
      &rule,
      2,
    );

    assert_eq!(
      fragment.unwrap().html(),
      Some(r#"<section class="body"><p>Text</p></section>"#)
    );
  }

  #[test]
  fn blank_fragment_displays_a_marker() {
    assert_eq!(Fragment::Blank.to_string(), "[CONTENT BLANK]");
    assert!(Fragment::Blank.children().is_empty());
  }
}
