use super::*;

#[derive(Debug, Deserialize)]
struct LocatorFile {
  data: HashMap<String, LocatorEntry>,
}

#[derive(Debug, Deserialize)]
struct LocatorEntry {
  data: MatcherEntry,
  #[serde(default)]
  exclude: Vec<ExclusionEntry>,
}

#[derive(Debug, Deserialize)]
struct MatcherEntry {
  html_tag: String,
  #[serde(default)]
  css_class: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExclusionEntry {
  From { from: serde_json::Value },
  To { to: serde_json::Value },
  Element(MatcherEntry),
}

impl From<MatcherEntry> for ElementMatcher {
  fn from(entry: MatcherEntry) -> Self {
    Self::new(entry.html_tag, &entry.css_class)
  }
}

impl From<ExclusionEntry> for ExclusionRule {
  fn from(entry: ExclusionEntry) -> Self {
    match entry {
      ExclusionEntry::From { from } => Self::Unsupported {
        bound: RangeBound::From,
        target: from,
      },
      ExclusionEntry::To { to } => Self::Unsupported {
        bound: RangeBound::To,
        target: to,
      },
      ExclusionEntry::Element(matcher) => Self::Element(matcher.into()),
    }
  }
}

/// An element selected by tag name plus a set of classes it must all carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMatcher {
  pub classes: BTreeSet<String>,
  pub tag: String,
}

impl ElementMatcher {
  pub(crate) fn matches(&self, node: &NodeRef) -> bool {
    if node.node_name().as_deref() != Some(self.tag.as_str()) {
      return false;
    }

    if self.classes.is_empty() {
      return true;
    }

    let class = node.attr("class");

    let present = class
      .as_deref()
      .unwrap_or_default()
      .split_whitespace()
      .collect::<BTreeSet<&str>>();

    self
      .classes
      .iter()
      .all(|class| present.contains(class.as_str()))
  }

  /// Builds a matcher from a tag name and a space separated class list.
  pub fn new(tag: impl Into<String>, classes: &str) -> Self {
    Self {
      classes: classes.split_whitespace().map(str::to_string).collect(),
      tag: tag.into(),
    }
  }
}

impl Display for ElementMatcher {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.tag)?;

    for class in &self.classes {
      write!(f, ".{class}")?;
    }

    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
  From,
  To,
}

impl Display for RangeBound {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::From => "from",
      Self::To => "to",
    })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionRule {
  /// Remove every matching descendant subtree.
  Element(ElementMatcher),
  /// Sibling-range deletion. Accepted in configuration, never applied.
  Unsupported {
    bound: RangeBound,
    target: serde_json::Value,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocatorRule {
  pub exclusions: Vec<ExclusionRule>,
  pub root: ElementMatcher,
}

impl LocatorRule {
  #[must_use]
  pub fn new(root: ElementMatcher) -> Self {
    Self {
      exclusions: Vec::new(),
      root,
    }
  }

  #[must_use]
  pub fn exclude(mut self, exclusion: ExclusionRule) -> Self {
    self.exclusions.push(exclusion);
    self
  }
}

/// Locator rules keyed by category default name or by page id.
#[derive(Debug, Clone, Default)]
pub struct LocatorConfig {
  rules: HashMap<String, LocatorRule>,
}

impl LocatorConfig {
  pub fn from_json(json: &str) -> Result<Self> {
    let file = serde_json::from_str::<LocatorFile>(json).map_err(|error| {
      Error::config(format!("malformed locator file: {error}"))
    })?;

    Ok(Self {
      rules: file
        .data
        .into_iter()
        .map(|(name, entry)| {
          (
            name,
            LocatorRule {
              exclusions: entry.exclude.into_iter().map(Into::into).collect(),
              root: entry.data.into(),
            },
          )
        })
        .collect(),
    })
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&LocatorRule> {
    self.rules.get(name)
  }

  pub fn insert(&mut self, name: impl Into<String>, rule: LocatorRule) {
    self.rules.insert(name.into(), rule);
  }

  #[must_use]
  pub fn is_override(&self, page_id: &str) -> bool {
    self.rules.contains_key(page_id)
  }

  /// Rule for a page: the page id override when present, otherwise the
  /// default registered for `category`.
  pub fn resolve(
    &self,
    page_id: &str,
    category: PageCategory,
  ) -> Result<&LocatorRule> {
    if let Some(rule) = self.rules.get(page_id) {
      return Ok(rule);
    }

    self
      .rules
      .get(category.default_locator_name())
      .ok_or_else(|| {
        Error::config(format!(
          "no `{}` locator registered for category {category} (page `{page_id}`)",
          category.default_locator_name()
        ))
      })
  }

  /// Fails unless every category in `categories` has its default locator.
  pub fn validate(
    &self,
    categories: impl IntoIterator<Item = PageCategory>,
  ) -> Result {
    for category in categories {
      if !self.rules.contains_key(category.default_locator_name()) {
        return Err(Error::config(format!(
          "missing default locator `{}` for category {category}",
          category.default_locator_name()
        )));
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const LOCATORS: &str = r#"
    {
      "data": {
        "DEFAULT_CONFIG_COURSE_PROG": {
          "data": {
            "html_tag": "div",
            "css_class": "gb-c-longform gb-u-spacing-triple"
          },
          "exclude": [
            { "html_tag": "div", "css_class": "gb-c-callout" },
            { "from": { "html_tag": "h2", "css_class": "" } },
            { "to": { "html_tag": "h3", "css_class": "end" } }
          ]
        },
        "africana-studies-program-description": {
          "data": { "html_tag": "section", "css_class": "program" }
        }
      }
    }
  "#;

  #[test]
  fn parses_rules_and_exclusion_kinds() {
    let config = LocatorConfig::from_json(LOCATORS).unwrap();

    let rule = config.get("DEFAULT_CONFIG_COURSE_PROG").unwrap();

    assert_eq!(
      rule.root,
      ElementMatcher::new("div", "gb-u-spacing-triple gb-c-longform")
    );
    assert_eq!(rule.exclusions.len(), 3);
    assert_eq!(
      rule.exclusions[0],
      ExclusionRule::Element(ElementMatcher::new("div", "gb-c-callout"))
    );
    assert!(matches!(
      rule.exclusions[1],
      ExclusionRule::Unsupported {
        bound: RangeBound::From,
        ..
      }
    ));
    assert!(matches!(
      rule.exclusions[2],
      ExclusionRule::Unsupported {
        bound: RangeBound::To,
        ..
      }
    ));
  }

  #[test]
  fn override_wins_over_category_default() {
    let config = LocatorConfig::from_json(LOCATORS).unwrap();

    let rule = config
      .resolve("africana-studies-program-description", PageCategory::CourseProg)
      .unwrap();

    assert_eq!(rule.root, ElementMatcher::new("section", "program"));
    assert!(config.is_override("africana-studies-program-description"));
  }

  #[test]
  fn falls_back_to_category_default() {
    let config = LocatorConfig::from_json(LOCATORS).unwrap();

    let rule = config
      .resolve("biology-program-description", PageCategory::CourseProg)
      .unwrap();

    assert_eq!(rule.root.tag, "div");
  }

  #[test]
  fn missing_default_is_a_config_error() {
    let config = LocatorConfig::from_json(LOCATORS).unwrap();

    assert!(matches!(
      config.resolve("academic-policies", PageCategory::Policy),
      Err(Error::Config { .. })
    ));
    assert!(matches!(
      config.validate([PageCategory::CourseProg, PageCategory::Faculty]),
      Err(Error::Config { message }) if message.contains("DEFAULT_CONFIG_FACULTY")
    ));
    assert!(config.validate([PageCategory::CourseProg]).is_ok());
  }

  #[test]
  fn malformed_exclusion_is_a_config_error() {
    let json = r#"{ "data": { "x": { "data": { "html_tag": "div" }, "exclude": [ { "css_class": "a" } ] } } }"#;

    assert!(matches!(
      LocatorConfig::from_json(json),
      Err(Error::Config { .. })
    ));
  }

  #[test]
  fn matcher_requires_every_class() {
    let document = dom_query::Document::from(
      r#"<div class="a b c" id="all"></div><div class="a" id="one"></div>"#,
    );

    let matcher = ElementMatcher::new("div", "a c");

    let matched = document
      .root()
      .descendants()
      .into_iter()
      .filter(|node| matcher.matches(node))
      .filter_map(|node| node.attr("id"))
      .map(|id| id.to_string())
      .collect::<Vec<_>>();

    assert_eq!(matched, ["all"]);
    assert_eq!(matcher.to_string(), "div.a.c");
  }
}
