use super::*;

const DATE_FORMAT: &str = "%B %d, %Y";

const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
<meta charset="utf-8">
<title></title>
</head>
<body></body>
</html>"#;

/// The assembled catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
  html: String,
}

impl CatalogDocument {
  #[must_use]
  pub fn html(&self) -> &str {
    &self.html
  }

  #[must_use]
  pub fn into_html(self) -> String {
    self.html
  }
}

impl Display for CatalogDocument {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.html)
  }
}

/// Splices indexed pages into a fresh copy of the template.
pub struct Composer<'a> {
  courses: Option<&'a CourseDataset>,
  index: &'a PageIndex,
  options: &'a CatalogOptions,
}

impl<'a> Composer<'a> {
  pub fn compose(
    &self,
    template: &Template,
    generated_on: chrono::NaiveDate,
    diagnostics: &mut Diagnostics,
  ) -> Result<CatalogDocument> {
    let html = template.working_copy();

    let document = Document::new(&html);

    template::walk_sections(&html, |placement| {
      if self.options.course_mode == CourseMode::Api
        && self.options.is_course_header(&placement.header_text())
      {
        self.fill_courses(document, &placement, diagnostics)
      } else {
        self.fill_page(document, &placement);
        Ok(())
      }
    })?;

    self.stamp(document, generated_on, diagnostics);

    let shell = dom_query::Document::from(SHELL);

    let output = Document::new(&shell);

    if let Some(title) = output.first_element("title") {
      title.set_text(self.options.title.as_str());
    }

    let body = output
      .first_element("body")
      .ok_or(Error::MissingElement { name: "body" })?;

    for name in ["header", "nav", "main"] {
      let element = document
        .first_element(name)
        .ok_or(Error::MissingElement { name })?;

      body.append_html(element.html());
    }

    let root = output
      .first_element("html")
      .ok_or(Error::MissingElement { name: "html" })?;

    info!(pages = self.index.len(), "composed catalog");

    Ok(CatalogDocument {
      html: format!("<!DOCTYPE html>\n{}\n", root.html()),
    })
  }

  #[must_use]
  pub fn courses(self, courses: Option<&'a CourseDataset>) -> Self {
    Self { courses, ..self }
  }

  fn fill_courses<'d>(
    &self,
    document: Document<'d>,
    placement: &Placement<'d>,
    diagnostics: &mut Diagnostics,
  ) -> Result {
    let Some(code) = document.first_named(&placement.block, "code") else {
      return Ok(());
    };

    let id = placement.header_id();

    let Some(page) = self.index.get(&id).filter(|page| page.fetched_ok) else {
      diagnostics.warn(&id, "course section has no fetched page, left as is");
      return Ok(());
    };

    let courses = self.courses.ok_or_else(|| {
      Error::config(format!(
        "course section `{id}` needs a course dataset in api mode"
      ))
    })?;

    let subjects = page.subject_abbreviations();

    let listing = CourseListing::render(&subjects, courses);

    if listing.is_empty() {
      diagnostics.warn(
        &id,
        format!("no courses found for subjects [{}]", subjects.join(", ")),
      );
    } else {
      diagnostics.info(
        &id,
        format!(
          "listed {} courses for [{}]",
          listing.len(),
          subjects.join(", ")
        ),
      );
    }

    document.remove(&code);

    for item in listing.items() {
      placement.block.append_html(item);
    }

    Ok(())
  }

  /// Splices the children of the page's fragment root into the block.
  ///
  /// The root markup is parsed as a whole inside the block so children keep
  /// the parent context they need (`<tbody>` under `<table>`, and so on).
  fn fill_page<'d>(
    &self,
    document: Document<'d>,
    placement: &Placement<'d>,
  ) {
    let Some(markup) = self
      .index
      .get(&placement.header_id())
      .and_then(|page| page.fragment.html())
    else {
      return;
    };

    if let Some(code) = document.first_named(&placement.block, "code") {
      document.remove(&code);
    }

    placement.block.append_html(markup);

    if let Some(wrapper) = placement.block.element_children().pop() {
      document.hoist_children(&wrapper, &placement.block);
    }
  }

  pub fn new(index: &'a PageIndex, options: &'a CatalogOptions) -> Self {
    Self {
      courses: None,
      index,
      options,
    }
  }

  fn stamp(
    &self,
    document: Document<'_>,
    generated_on: chrono::NaiveDate,
    diagnostics: &mut Diagnostics,
  ) {
    let slot = document
      .first_element("header")
      .and_then(|header| document.first_named(&header, "section"))
      .and_then(|section| section.element_children().pop());

    match slot {
      Some(slot) => slot.set_text(format!(
        " generated on {}.",
        generated_on.format(DATE_FORMAT)
      )),
      None => diagnostics.warn("header", "no slot for the generation date"),
    }
  }
}
