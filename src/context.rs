use super::*;

pub(crate) struct Context<'a> {
  base_url: &'a Url,
  diagnostics: &'a mut Diagnostics,
  html: &'a dom_query::Document,
  origin: &'a Url,
  root: Option<NodeRef<'a>>,
  rule: &'a LocatorRule,
  subject: &'a str,
  target_level: u8,
}

impl<'a> Context<'a> {
  pub(crate) fn base_url(&self) -> &'a Url {
    self.base_url
  }

  pub(crate) fn diagnostics(&mut self) -> &mut Diagnostics {
    &mut *self.diagnostics
  }

  pub(crate) fn document(&self) -> Document<'a> {
    Document::new(self.html)
  }

  pub(crate) fn new(
    html: &'a dom_query::Document,
    rule: &'a LocatorRule,
    target_level: u8,
    links: (&'a Url, &'a Url),
    subject: &'a str,
    diagnostics: &'a mut Diagnostics,
  ) -> Self {
    let (origin, base_url) = links;

    Self {
      base_url,
      diagnostics,
      html,
      origin,
      root: None,
      rule,
      subject,
      target_level,
    }
  }

  pub(crate) fn origin(&self) -> &'a Url {
    self.origin
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'a>> {
    self.root.clone()
  }

  pub(crate) fn rule(&self) -> &'a LocatorRule {
    self.rule
  }

  pub(crate) fn set_root(&mut self, root: Option<NodeRef<'a>>) {
    self.root = root;
  }

  pub(crate) fn subject(&self) -> &'a str {
    self.subject
  }

  pub(crate) fn target_level(&self) -> u8 {
    self.target_level
  }
}
