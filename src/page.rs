use super::*;

const ACCORDION_GROUP: &str = "gb-c-accordion__group";

const ACCORDION_ITEM: &str = "gb-c-accordion__item";

const ACCORDION_SUB_HEADING: &str = "gb-c-accordion__sub-heading";

pub(crate) struct PageRequest<'a> {
  pub(crate) category: PageCategory,
  pub(crate) heading_level: u8,
  pub(crate) id: &'a str,
  pub(crate) url: String,
}

/// One resolved placeholder: where its content came from and what was
/// extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
  pub category: PageCategory,
  pub fetched_ok: bool,
  pub fragment: Fragment,
  pub heading_level: u8,
  pub id: String,
  pub source_url: String,
  pub(crate) source: Option<String>,
}

impl Page {
  /// Fetches and extracts the page described by `request`.
  ///
  /// Only a missing locator is fatal. Fetch failures and malformed headings
  /// leave a [`Fragment::Blank`] behind.
  pub(crate) fn load(
    request: PageRequest<'_>,
    fetcher: &dyn Fetcher,
    locators: &LocatorConfig,
    origin: &Url,
    diagnostics: &mut Diagnostics,
  ) -> Result<Self> {
    let PageRequest {
      category,
      heading_level,
      id,
      url,
    } = request;

    let rule = locators.resolve(id, category)?;

    if locators.is_override(id) {
      diagnostics.info(id, "using page-specific locator");
    } else {
      diagnostics.info(
        id,
        format!("using default locator `{}`", category.default_locator_name()),
      );
    }

    let source = Self::fetch(id, &url, fetcher, diagnostics);

    let fragment = match &source {
      Some(markup) => {
        let html = dom_query::Document::from(markup.as_str());

        let base_url = Url::parse(&url).unwrap_or_else(|_| origin.clone());

        let extracted = Extractor::new(origin)
          .base_url(&base_url)
          .subject(id)
          .extract(&html, rule, heading_level, diagnostics);

        match extracted {
          Ok(fragment) => fragment,
          Err(error @ Error::Extraction { .. }) => {
            diagnostics
              .warn(id, format!("extraction from `{url}` failed: {error}"));
            Fragment::Blank
          }
          Err(error) => return Err(error),
        }
      }
      None => Fragment::Blank,
    };

    Ok(Self {
      category,
      fetched_ok: source.is_some(),
      fragment,
      heading_level,
      id: id.to_string(),
      source_url: url,
      source,
    })
  }

  fn fetch(
    id: &str,
    url: &str,
    fetcher: &dyn Fetcher,
    diagnostics: &mut Diagnostics,
  ) -> Option<String> {
    if link::is_pdf(url) {
      diagnostics.info(id, format!("not fetching pdf `{url}`"));
      return None;
    }

    match fetcher.fetch(url) {
      Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
      Err(error) => {
        diagnostics.warn(id, error.to_string());
        None
      }
    }
  }

  #[must_use]
  pub fn source(&self) -> Option<&str> {
    self.source.as_deref()
  }

  /// Subject abbreviations listed on a course page, one per accordion group,
  /// taken from the code of the group's first course.
  ///
  /// Order follows the page and repeated subjects are kept once.
  #[must_use]
  pub fn subject_abbreviations(&self) -> Vec<String> {
    let Some(source) = &self.source else {
      return Vec::new();
    };

    let html = dom_query::Document::from(source.as_str());

    let document = Document::new(&html);

    let item = ElementMatcher::new("li", ACCORDION_ITEM);
    let sub_heading = ElementMatcher::new("span", ACCORDION_SUB_HEADING);

    let mut subjects = Vec::<String>::new();

    let groups = document.descendants_matching(
      &html.root(),
      &ElementMatcher::new("ul", ACCORDION_GROUP),
    );

    for group in groups {
      let code = document
        .first_matching(&group, &item)
        .and_then(|entry| document.first_named(&entry, "button"))
        .and_then(|button| document.first_matching(&button, &sub_heading))
        .map(|span| span.text().to_string());

      let Some(subject) = code
        .as_deref()
        .and_then(|code| code.split('-').next())
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
      else {
        continue;
      };

      if !subjects.iter().any(|known| known == subject) {
        subjects.push(subject.to_string());
      }
    }

    subjects
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn locators() -> LocatorConfig {
    let mut config = LocatorConfig::default();

    config.insert(
      PageCategory::CourseProg.default_locator_name(),
      LocatorRule::new(ElementMatcher::new("div", "gb-c-longform")),
    );

    config
  }

  fn load(url: &str, fetcher: &dyn Fetcher) -> (Result<Page>, Diagnostics) {
    let origin = Url::parse("https://www.gettysburg.edu").unwrap();

    let mut diagnostics = Diagnostics::new();

    let page = Page::load(
      PageRequest {
        category: PageCategory::CourseProg,
        heading_level: 3,
        id: "africana-studies-program-description",
        url: url.to_string(),
      },
      fetcher,
      &locators(),
      &origin,
      &mut diagnostics,
    );

    (page, diagnostics)
  }

  #[test]
  fn extracts_fetched_pages() {
    let fetcher = |_: &str| -> Result<Vec<u8>> {
      Ok(b"<div class=\"gb-c-longform\"><h2>About</h2><p>Text</p></div>".to_vec())
    };

    let (page, _) = load("https://www.gettysburg.edu/africana/", &fetcher);

    let page = page.unwrap();

    assert!(page.fetched_ok);
    assert_eq!(page.fragment.children(), ["<h4>About</h4>", "<p>Text</p>"]);
    assert_eq!(page.heading_level, 3);
  }

  #[test]
  fn failed_fetch_is_blank_not_fatal() {
    let fetcher = |url: &str| -> Result<Vec<u8>> {
      Err(Error::Fetch {
        url: url.to_string(),
        message: "connection reset".to_string(),
      })
    };

    let (page, diagnostics) =
      load("https://www.gettysburg.edu/gone/", &fetcher);

    let page = page.unwrap();

    assert!(!page.fetched_ok);
    assert!(page.fragment.is_blank());
    assert!(page.source().is_none());
    assert_eq!(diagnostics.warnings().count(), 1);
  }

  #[test]
  fn pdf_links_are_not_fetched() {
    let fetcher =
      |_: &str| -> Result<Vec<u8>> { panic!("pdf links must not be fetched") };

    let (page, _) =
      load("https://www.gettysburg.edu/files/handbook.pdf", &fetcher);

    let page = page.unwrap();

    assert!(!page.fetched_ok);
    assert!(page.fragment.is_blank());
  }

  #[test]
  fn malformed_heading_blanks_the_page() {
    let fetcher = |_: &str| -> Result<Vec<u8>> {
      Ok(b"<div class=\"gb-c-longform\"><h0>Bad</h0></div>".to_vec())
    };

    let (page, diagnostics) = load("https://www.gettysburg.edu/bad/", &fetcher);

    let page = page.unwrap();

    assert!(page.fetched_ok);
    assert!(page.fragment.is_blank());
    assert!(
      diagnostics
        .warnings()
        .any(|warning| warning.message.contains("`h0`"))
    );
  }

  #[test]
  fn missing_locator_is_fatal() {
    let fetcher = |_: &str| -> Result<Vec<u8>> { Ok(Vec::new()) };

    let origin = Url::parse("https://www.gettysburg.edu").unwrap();

    let result = Page::load(
      PageRequest {
        category: PageCategory::Policy,
        heading_level: 2,
        id: "academic-policies",
        url: "https://www.gettysburg.edu/policies/".to_string(),
      },
      &fetcher,
      &locators(),
      &origin,
      &mut Diagnostics::new(),
    );

    assert!(matches!(result, Err(Error::Config { .. })));
  }

  #[test]
  fn discovers_subjects_from_accordion_groups() {
    let fetcher = |_: &str| -> Result<Vec<u8>> {
      Ok(
        br#"
        <div class="gb-c-longform"></div>
        <ul class="gb-c-accordion__group">
          <li class="gb-c-accordion__item">
            <button><span class="gb-c-accordion__sub-heading">AFS-130</span> Intro</button>
          </li>
          <li class="gb-c-accordion__item">
            <button><span class="gb-c-accordion__sub-heading">AFS-230</span></button>
          </li>
        </ul>
        <ul class="gb-c-accordion__group">
          <li class="gb-c-accordion__item">
            <button><span class="gb-c-accordion__sub-heading"> HIST-105 </span></button>
          </li>
        </ul>
        <ul class="gb-c-accordion__group">
          <li class="gb-c-accordion__item"><p>No button</p></li>
        </ul>
        <ul class="gb-c-accordion__group">
          <li class="gb-c-accordion__item">
            <button><span class="gb-c-accordion__sub-heading">AFS-301</span></button>
          </li>
        </ul>
        "#
        .to_vec(),
      )
    };

    let (page, _) =
      load("https://www.gettysburg.edu/africana/courses/", &fetcher);

    assert_eq!(page.unwrap().subject_abbreviations(), ["AFS", "HIST"]);
  }
}
