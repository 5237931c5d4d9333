use super::*;

/// Picks the first element matching the locator's root tag and classes.
pub struct SelectContentRootStage;

impl Stage for SelectContentRootStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let rule = context.rule();

    let root = context.document().find_first(&rule.root);

    match &root {
      Some(node) => {
        let elements = context.document().element_count(node);
        let subject = context.subject();
        context.diagnostics().info(
          subject,
          format!("selected `{}` with {elements} elements", rule.root),
        );
      }
      None => {
        let subject = context.subject();
        context.diagnostics().warn(
          subject,
          format!("no `{}` block found; page content is blank", rule.root),
        );
      }
    }

    context.set_root(root);

    Ok(())
  }
}
