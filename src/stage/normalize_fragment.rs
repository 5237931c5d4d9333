use super::*;

const MEDIA_TAGS: &[&str] = &["button", "hr", "img", "rect", "svg"];

/// Walks the selected root in document order, dropping media, rebasing
/// headings, pruning empty paragraphs and scrubbing attributes.
///
/// The first heading met anywhere in the subtree fixes the source level that
/// every later heading is measured against.
#[derive(Default)]
pub struct NormalizeFragmentStage {
  source_max_level: Option<u8>,
}

impl Stage for NormalizeFragmentStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(root) = context.root() else {
      return Ok(());
    };

    self.visit_children(context, &root)
  }
}

impl NormalizeFragmentStage {
  fn is_empty_paragraph(node: &NodeRef) -> bool {
    node.text().trim().is_empty() && node.element_children().is_empty()
  }

  fn normalize(&mut self, context: &mut Context<'_>, node: &NodeRef) -> Result {
    let Some(name) = node.node_name() else {
      return Ok(());
    };

    let document = context.document();

    if MEDIA_TAGS.contains(&&*name) {
      document.remove(node);
      return Ok(());
    }

    if let Some(level) = heading::heading_level(&name) {
      self.rebase_heading(context, node, &name, level?);
    } else if &*name == "p" && Self::is_empty_paragraph(node) {
      document.remove(node);
      return Ok(());
    }

    if &*name == "a" {
      Self::rewrite_link(context, node);
    } else {
      document.strip_attributes(node);
    }

    self.visit_children(context, node)
  }

  fn rebase_heading(
    &mut self,
    context: &mut Context<'_>,
    node: &NodeRef,
    name: &str,
    level: u8,
  ) {
    let source_max = *self.source_max_level.get_or_insert(level);

    let target = context.target_level();

    let rebased = heading::rebase(level, source_max, target);

    if rebased.clamped {
      let subject = context.subject();
      context.diagnostics().warn(
        subject,
        format!(
          "`{name}` rebased under h{target} falls outside h1-h6; clamped to h{}",
          rebased.level
        ),
      );
    }

    context
      .document()
      .rename(node, &format!("h{}", rebased.level));
  }

  fn rewrite_link(context: &mut Context<'_>, node: &NodeRef) {
    let href = node.attr("href").map(|href| {
      link::absolutize(context.origin(), context.base_url(), href.trim())
    });

    context.document().retain_only(node, "href", href.as_deref());
  }

  fn visit_children(
    &mut self,
    context: &mut Context<'_>,
    node: &NodeRef,
  ) -> Result {
    for child in node.element_children() {
      self.normalize(context, &child)?;
    }

    Ok(())
  }
}
