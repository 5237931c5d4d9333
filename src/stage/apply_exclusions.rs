use super::*;

/// Removes the subtrees named by the locator's exclusion list, in order.
pub struct ApplyExclusionsStage;

impl Stage for ApplyExclusionsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(root) = context.root() else {
      return Ok(());
    };

    let document = context.document();
    let subject = context.subject();

    for exclusion in &context.rule().exclusions {
      match exclusion {
        ExclusionRule::Element(matcher) => {
          let matched = document.descendants_matching(&root, matcher);

          for node in &matched {
            document.remove(node);
          }

          context.diagnostics().info(
            subject,
            format!("excluded {} `{matcher}` elements", matched.len()),
          );
        }
        ExclusionRule::Unsupported { bound, target } => {
          context.diagnostics().warn(
            subject,
            format!(
              "sibling-range exclusion `{bound}` {target} is not supported and was ignored"
            ),
          );
        }
      }
    }

    Ok(())
  }
}
