use super::*;

/// Typed mutations over a parsed `dom_query` tree.
#[derive(Clone, Copy)]
pub(crate) struct Document<'a> {
  document: &'a dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn descendants_matching(
    &self,
    scope: &NodeRef<'a>,
    matcher: &ElementMatcher,
  ) -> Vec<NodeRef<'a>> {
    scope
      .descendants()
      .into_iter()
      .filter(|node| node.is_element() && matcher.matches(node))
      .collect()
  }

  pub(crate) fn element_count(&self, scope: &NodeRef<'a>) -> usize {
    scope
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn find_first(
    &self,
    matcher: &ElementMatcher,
  ) -> Option<NodeRef<'a>> {
    self.first_matching(&self.document.root(), matcher)
  }

  pub(crate) fn first_element(&self, name: &str) -> Option<NodeRef<'a>> {
    self.first_named(&self.document.root(), name)
  }

  pub(crate) fn first_matching(
    &self,
    scope: &NodeRef<'a>,
    matcher: &ElementMatcher,
  ) -> Option<NodeRef<'a>> {
    scope
      .descendants()
      .into_iter()
      .find(|node| node.is_element() && matcher.matches(node))
  }

  pub(crate) fn first_named(
    &self,
    scope: &NodeRef<'a>,
    name: &str,
  ) -> Option<NodeRef<'a>> {
    scope
      .descendants()
      .into_iter()
      .find(|node| node.node_name().as_deref() == Some(name))
  }

  /// Moves the element children of `wrapper` to the end of `parent`, then
  /// drops `wrapper`.
  pub(crate) fn hoist_children(
    &self,
    wrapper: &NodeRef<'a>,
    parent: &NodeRef<'a>,
  ) {
    for child in wrapper.element_children() {
      child.remove_from_parent();
      parent.append_child(&child);
    }

    wrapper.remove_from_parent();
  }

  pub(crate) fn named(
    &self,
    scope: &NodeRef<'a>,
    name: &str,
  ) -> Vec<NodeRef<'a>> {
    scope
      .descendants()
      .into_iter()
      .filter(|node| node.node_name().as_deref() == Some(name))
      .collect()
  }

  pub(crate) fn new(document: &'a dom_query::Document) -> Self {
    Self { document }
  }

  pub(crate) fn remove(&self, node: &NodeRef) {
    node.remove_from_parent();
  }

  pub(crate) fn rename(&self, node: &NodeRef, name: &str) {
    node.rename(name);
  }

  /// Drops every attribute, then sets `name` when a value is given.
  pub(crate) fn retain_only(
    &self,
    node: &NodeRef,
    name: &str,
    value: Option<&str>,
  ) {
    self.strip_attributes(node);

    if let Some(value) = value {
      node.set_attr(name, value);
    }
  }

  pub(crate) fn strip_attributes(&self, node: &NodeRef) {
    node.remove_all_attrs();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_elements_under_a_content_block() {
    let html = dom_query::Document::from(
      r#"
      <div class="gb-c-longform">
        <h2>Africana Studies</h2>
        <p>Offered as a <a href="/minor/">minor</a>.</p>
        <ul><li>AFS-130</li><li>AFS-230</li></ul>
      </div>
      "#,
    );

    let document = Document::new(&html);

    let block = document
      .find_first(&ElementMatcher::new("div", "gb-c-longform"))
      .unwrap();

    assert_eq!(document.element_count(&block), 6);
  }

  #[test]
  fn hoists_children_out_of_their_wrapper() {
    let html = dom_query::Document::from(
      r#"<div id="block"><section><h3>Minor</h3><p>Text</p></section></div>"#,
    );

    let document = Document::new(&html);

    let block = document.first_element("div").unwrap();
    let wrapper = document.first_element("section").unwrap();

    document.hoist_children(&wrapper, &block);

    assert_eq!(
      block.html().to_string(),
      r#"<div id="block"><h3>Minor</h3><p>Text</p></div>"#
    );
  }

  #[test]
  fn renames_and_scrubs_in_place() {
    let html = dom_query::Document::from(
      r#"<div><h2 class="title" style="x">Heading</h2><a class="btn" href="/x" target="_blank">Link</a></div>"#,
    );

    let document = Document::new(&html);

    let heading = document.first_element("h2").unwrap();
    document.rename(&heading, "h4");
    document.strip_attributes(&heading);

    let link = document.first_element("a").unwrap();
    document.retain_only(&link, "href", Some("https://example.org/x"));

    assert_eq!(
      html.select("div").html().to_string(),
      r#"<div><h4>Heading</h4><a href="https://example.org/x">Link</a></div>"#
    );
  }

  #[test]
  fn finds_by_name_and_matcher() {
    let html = dom_query::Document::from(
      r#"<main><section class="a"><code>x</code></section><section class="a b"></section></main>"#,
    );

    let document = Document::new(&html);

    let main = document.first_element("main").unwrap();

    assert_eq!(document.named(&main, "section").len(), 2);
    assert_eq!(
      document
        .descendants_matching(&main, &ElementMatcher::new("section", "b a"))
        .len(),
      1
    );
    assert!(document.first_named(&main, "code").is_some());
    assert!(
      document
        .find_first(&ElementMatcher::new("section", "c"))
        .is_none()
    );
  }

  #[test]
  fn removes_subtrees() {
    let html = dom_query::Document::from(
      "<div><p>Keep</p><aside><p>Drop</p></aside></div>",
    );

    let document = Document::new(&html);

    let aside = document.first_element("aside").unwrap();
    document.remove(&aside);

    assert_eq!(html.select("p").length(), 1);
    assert_eq!(html.select("aside").length(), 0);
  }
}
