use super::*;

/// The kind of site page a placeholder points at.
///
/// Each category owns a default locator in the locator configuration, named by
/// [`PageCategory::default_locator_name`].
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageCategory {
  Policy,
  Faculty,
  CourseProg,
  CourseReq,
  CourseCls,
  CourseMain,
}

impl PageCategory {
  pub const ALL: [PageCategory; 6] = [
    Self::Policy,
    Self::Faculty,
    Self::CourseProg,
    Self::CourseReq,
    Self::CourseCls,
    Self::CourseMain,
  ];

  #[must_use]
  pub fn default_locator_name(self) -> &'static str {
    match self {
      Self::Policy => "DEFAULT_CONFIG_POLICIES",
      Self::Faculty => "DEFAULT_CONFIG_FACULTY",
      Self::CourseProg => "DEFAULT_CONFIG_COURSE_PROG",
      Self::CourseReq => "DEFAULT_CONFIG_COURSE_REQ",
      Self::CourseCls => "DEFAULT_CONFIG_COURSE_CLS",
      Self::CourseMain => "DEFAULT_CONFIG_COURSE_MAIN",
    }
  }

  #[must_use]
  pub fn is_policy(self) -> bool {
    self == Self::Policy
  }

  fn name(self) -> &'static str {
    match self {
      Self::Policy => "POLICY",
      Self::Faculty => "FACULTY",
      Self::CourseProg => "COURSE_PROG",
      Self::CourseReq => "COURSE_REQ",
      Self::CourseCls => "COURSE_CLS",
      Self::CourseMain => "COURSE_MAIN",
    }
  }
}

impl Display for PageCategory {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for PageCategory {
  type Err = Error;

  fn from_str(value: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|category| category.name().eq_ignore_ascii_case(value))
      .ok_or_else(|| Error::config(format!("unknown page category `{value}`")))
  }
}

/// How sections whose header ends with the course token are filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseMode {
  /// Render the listing from the course dataset, using the subjects found on
  /// the indexed page.
  #[default]
  Api,
  /// Splice the extracted page like any other placeholder.
  Raw,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_screaming_snake_case() {
    assert_eq!(
      serde_json::to_string(&PageCategory::CourseMain).unwrap(),
      "\"COURSE_MAIN\""
    );
  }

  #[test]
  fn parses_from_display_name() {
    for category in PageCategory::ALL {
      assert_eq!(
        category.to_string().parse::<PageCategory>().unwrap(),
        category
      );
    }

    assert!("course_req".parse::<PageCategory>().is_ok());
    assert!("COURSES".parse::<PageCategory>().is_err());
  }

  #[test]
  fn every_category_has_a_distinct_default_locator() {
    let names = PageCategory::ALL
      .into_iter()
      .map(PageCategory::default_locator_name)
      .collect::<BTreeSet<_>>();

    assert_eq!(names.len(), PageCategory::ALL.len());
  }
}
