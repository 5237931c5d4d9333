use super::*;

/// Everything one run produces.
#[derive(Debug)]
pub struct Build {
  pub diagnostics: Diagnostics,
  pub document: CatalogDocument,
  pub index: PageIndex,
}

impl Build {
  #[must_use]
  pub fn dump(&self) -> CatalogDump {
    CatalogDump::from_index(&self.index)
  }
}

/// A parsed template plus the configuration needed to fill it.
pub struct Catalog {
  locators: LocatorConfig,
  options: CatalogOptions,
  origin: Url,
  template: Template,
}

impl Catalog {
  /// Indexes the template, then composes the output document.
  pub fn build(
    &self,
    fetcher: &dyn Fetcher,
    courses: Option<&CourseDataset>,
    generated_on: chrono::NaiveDate,
  ) -> Result<Build> {
    let mut diagnostics = Diagnostics::new();

    let index = self.index(fetcher, &mut diagnostics)?;

    let document =
      self.compose(&index, courses, generated_on, &mut diagnostics)?;

    Ok(Build {
      diagnostics,
      document,
      index,
    })
  }

  pub fn compose(
    &self,
    index: &PageIndex,
    courses: Option<&CourseDataset>,
    generated_on: chrono::NaiveDate,
    diagnostics: &mut Diagnostics,
  ) -> Result<CatalogDocument> {
    Composer::new(index, &self.options)
      .courses(courses)
      .compose(&self.template, generated_on, diagnostics)
  }

  pub fn index(
    &self,
    fetcher: &dyn Fetcher,
    diagnostics: &mut Diagnostics,
  ) -> Result<PageIndex> {
    Indexer::new(fetcher, &self.locators, &self.options, &self.origin)
      .index(&self.template, diagnostics)
  }

  pub fn new(
    template: &str,
    locators: LocatorConfig,
    options: CatalogOptions,
  ) -> Result<Self> {
    Ok(Self {
      origin: Url::parse(&options.origin)?,
      locators,
      options,
      template: Template::parse(template)?,
    })
  }

  #[must_use]
  pub fn options(&self) -> &CatalogOptions {
    &self.options
  }

  #[must_use]
  pub fn template(&self) -> &Template {
    &self.template
  }
}
