use super::*;

const ITEM_MARKUP: &str = "<li><span></span><span></span><div></div><br></li>";

/// Course entries rendered for a set of subjects.
pub struct CourseListing {
  document: dom_query::Document,
  len: usize,
}

impl CourseListing {
  #[must_use]
  pub fn html(&self) -> String {
    Document::new(&self.document)
      .first_element("ul")
      .map(|container| container.html().to_string())
      .unwrap_or_default()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Markup of every `<li>`, in render order.
  #[must_use]
  pub fn items(&self) -> Vec<String> {
    Document::new(&self.document)
      .first_element("ul")
      .map(|container| {
        container
          .element_children()
          .iter()
          .map(|item| item.html().to_string())
          .collect()
      })
      .unwrap_or_default()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// One item per course whose subject is in `subjects`.
  ///
  /// Subjects are taken in the given order and courses in dataset order.
  /// Duplicate records are rendered as many times as they appear.
  pub fn render<S: AsRef<str>>(
    subjects: &[S],
    dataset: &CourseDataset,
  ) -> Self {
    let document = dom_query::Document::from("<ul></ul>");

    let mut len = 0;

    if let Some(container) = Document::new(&document).first_element("ul") {
      for subject in subjects {
        for course in dataset.courses_for(subject.as_ref()) {
          container.append_html(ITEM_MARKUP);

          let Some(item) = container.element_children().pop() else {
            continue;
          };

          if let [code, title, description, ..] =
            item.element_children().as_slice()
          {
            code.set_text(format!("{} ", course.code()));
            title.set_text(course.title.as_str());
            description.set_text(course.official_course_desc.as_str());
          }

          len += 1;
        }
      }
    }

    Self { document, len }
  }
}
