use super::*;

const DEFAULT_ORIGIN: &str = "https://www.gettysburg.edu";

const DEFAULT_TITLE: &str = "Gettysburg College Course Catalog";

#[derive(Debug, Clone)]
pub struct CatalogOptions {
  pub category_overrides: BTreeMap<String, PageCategory>,
  pub course_mode: CourseMode,
  pub courses_token: String,
  pub default_category: PageCategory,
  pub origin: String,
  pub title: String,
}

impl Default for CatalogOptions {
  fn default() -> Self {
    Self {
      category_overrides: BTreeMap::new(),
      course_mode: CourseMode::Api,
      courses_token: "Courses".to_string(),
      default_category: PageCategory::CourseProg,
      origin: DEFAULT_ORIGIN.to_string(),
      title: DEFAULT_TITLE.to_string(),
    }
  }
}

impl CatalogOptions {
  #[must_use]
  pub fn builder() -> CatalogOptionsBuilder {
    CatalogOptionsBuilder::default()
  }

  /// Picks the category of the page owned by the header `id`.
  ///
  /// An explicit override wins, then course sections map to
  /// [`PageCategory::CourseMain`], and everything else falls back to the
  /// configured default.
  #[must_use]
  pub fn category_for(&self, id: &str, header_text: &str) -> PageCategory {
    if let Some(category) = self.category_overrides.get(id) {
      return *category;
    }

    if self.is_course_header(header_text) {
      PageCategory::CourseMain
    } else {
      self.default_category
    }
  }

  #[must_use]
  pub fn is_course_header(&self, header_text: &str) -> bool {
    !self.courses_token.is_empty()
      && header_text.split_whitespace().last()
        == Some(self.courses_token.as_str())
  }
}

#[derive(Default)]
pub struct CatalogOptionsBuilder {
  inner: CatalogOptions,
}

impl CatalogOptionsBuilder {
  #[must_use]
  pub fn build(self) -> CatalogOptions {
    self.inner
  }

  #[must_use]
  pub fn category_override(
    mut self,
    id: impl Into<String>,
    category: PageCategory,
  ) -> Self {
    self.inner.category_overrides.insert(id.into(), category);
    self
  }

  #[must_use]
  pub fn course_mode(self, course_mode: CourseMode) -> Self {
    Self {
      inner: CatalogOptions {
        course_mode,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn courses_token(self, courses_token: impl Into<String>) -> Self {
    Self {
      inner: CatalogOptions {
        courses_token: courses_token.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn default_category(self, default_category: PageCategory) -> Self {
    Self {
      inner: CatalogOptions {
        default_category,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn origin(self, origin: impl Into<String>) -> Self {
    Self {
      inner: CatalogOptions {
        origin: origin.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn title(self, title: impl Into<String>) -> Self {
    Self {
      inner: CatalogOptions {
        title: title.into(),
        ..self.inner
      },
    }
  }
}
