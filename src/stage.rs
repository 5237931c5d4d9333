use super::*;

mod apply_exclusions;
mod normalize_fragment;
mod select_content_root;

pub use {
  apply_exclusions::ApplyExclusionsStage,
  normalize_fragment::NormalizeFragmentStage,
  select_content_root::SelectContentRootStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}

#[cfg(test)]
pub(crate) fn extract(
  source: &str,
  rule: &LocatorRule,
  target_level: u8,
) -> (Result<Fragment>, Diagnostics) {
  let html = dom_query::Document::from(source);

  let origin = Url::parse("https://www.gettysburg.edu").unwrap();

  let base_url =
    Url::parse("https://www.gettysburg.edu/academic-programs/africana/")
      .unwrap();

  let mut diagnostics = Diagnostics::new();

  let result = Extractor::new(&origin)
    .base_url(&base_url)
    .subject("africana")
    .extract(&html, rule, target_level, &mut diagnostics);

  (result, diagnostics)
}
