use super::*;

pub const DEFAULT_COURSES_URL: &str =
  "https://www.gettysburg.edu/api/funnelback/courses/";

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
    Some(serde_json::Value::String(value)) => value,
    None | Some(serde_json::Value::Null) => String::new(),
    Some(other) => other.to_string(),
  })
}

/// One course record from the course API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  #[serde(default)]
  pub academic_department_id: serde_json::Value,
  #[serde(default, deserialize_with = "lenient_string")]
  pub catalog_number: String,
  #[serde(
    default,
    rename = "deparmentName",
    deserialize_with = "lenient_string"
  )]
  pub department_name: String,
  #[serde(default)]
  pub id: serde_json::Value,
  #[serde(default, deserialize_with = "lenient_string")]
  pub official_course_desc: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub subject_area_abbrv: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub title: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub url: String,
}

impl Course {
  /// Code of the form `AFS-132`.
  #[must_use]
  pub fn code(&self) -> String {
    format!("{}-{}", self.subject_area_abbrv, self.catalog_number)
  }
}

/// Course records in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDataset {
  #[serde(rename = "data")]
  courses: Vec<Course>,
}

impl CourseDataset {
  #[must_use]
  pub fn courses(&self) -> &[Course] {
    &self.courses
  }

  pub fn courses_for<'a>(
    &'a self,
    subject: &'a str,
  ) -> impl Iterator<Item = &'a Course> + 'a {
    self
      .courses
      .iter()
      .filter(move |course| course.subject_area_abbrv == subject)
  }

  /// Description for a code such as `CS-216`. Malformed or unknown codes give
  /// `None`.
  #[must_use]
  pub fn describe(&self, code: &str) -> Option<&str> {
    let captures = re::COURSE_CODE.captures(code)?;
    self.lookup(&captures["subject"], &captures["number"])
  }

  pub fn fetch(fetcher: &dyn Fetcher, url: &str) -> Result<Self> {
    let bytes = fetcher.fetch(url)?;
    let dataset = serde_json::from_slice::<Self>(&bytes)?;
    info!("loaded {} courses from {url}", dataset.courses.len());
    Ok(dataset)
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.courses.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.courses.len()
  }

  /// Department names with the number of courses each one lists.
  #[must_use]
  pub fn list_subjects(&self) -> BTreeMap<&str, usize> {
    self
      .courses
      .iter()
      .fold(BTreeMap::new(), |mut subjects, course| {
        *subjects.entry(course.department_name.as_str()).or_default() += 1;
        subjects
      })
  }

  #[must_use]
  pub fn lookup(&self, subject: &str, catalog_number: &str) -> Option<&str> {
    self
      .courses
      .iter()
      .find(|course| {
        course.subject_area_abbrv == subject
          && course.catalog_number == catalog_number
      })
      .map(|course| course.official_course_desc.as_str())
  }

  #[must_use]
  pub fn new(courses: Vec<Course>) -> Self {
    Self { courses }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const RESPONSE: &str = r#"
    {
      "data": [
        {
          "catalogNumber": "130",
          "subjectAreaAbbrv": "AFS",
          "id": 11,
          "deparmentName": "Africana Studies",
          "title": "Introduction to Africana Studies",
          "officialCourseDesc": "Survey of the field.",
          "academicDepartmentId": 4,
          "url": "https://www.gettysburg.edu/courses/afs-130"
        },
        {
          "catalogNumber": 216,
          "subjectAreaAbbrv": "CS",
          "id": "x-12",
          "deparmentName": "Computer Science",
          "title": "Data Structures",
          "officialCourseDesc": null,
          "academicDepartmentId": null,
          "url": ""
        },
        {
          "catalogNumber": "111",
          "subjectAreaAbbrv": "CS",
          "deparmentName": "Computer Science",
          "title": "Introduction to Computer Science",
          "officialCourseDesc": "Programming."
        }
      ]
    }
  "#;

  #[test]
  fn accepts_numeric_and_null_fields() {
    let dataset = CourseDataset::from_json(RESPONSE).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.courses()[1].code(), "CS-216");
    assert_eq!(dataset.courses()[1].official_course_desc, "");
  }

  #[test]
  fn looks_up_descriptions_by_code() {
    let dataset = CourseDataset::from_json(RESPONSE).unwrap();

    assert_eq!(dataset.describe("AFS-130"), Some("Survey of the field."));
    assert_eq!(dataset.lookup("CS", "111"), Some("Programming."));
    assert_eq!(dataset.describe("CS-999"), None);
    assert_eq!(dataset.describe("CS216"), None);
    assert_eq!(dataset.describe("CS-2-16"), None);
  }

  #[test]
  fn counts_courses_per_department() {
    let dataset = CourseDataset::from_json(RESPONSE).unwrap();

    assert_eq!(
      dataset.list_subjects().into_iter().collect::<Vec<_>>(),
      [("Africana Studies", 1), ("Computer Science", 2)]
    );
  }

  #[test]
  fn filters_by_subject_in_dataset_order() {
    let dataset = CourseDataset::from_json(RESPONSE).unwrap();

    assert_eq!(
      dataset.courses_for("CS").map(Course::code).collect::<Vec<_>>(),
      ["CS-216", "CS-111"]
    );
  }

  #[test]
  fn fetches_through_any_fetcher() {
    let fetcher =
      |_: &str| -> Result<Vec<u8>> { Ok(RESPONSE.as_bytes().to_vec()) };

    let dataset = CourseDataset::fetch(&fetcher, DEFAULT_COURSES_URL).unwrap();

    assert_eq!(dataset.len(), 3);
  }

  #[test]
  fn malformed_response_is_a_json_error() {
    let fetcher = |_: &str| -> Result<Vec<u8>> { Ok(b"<html>".to_vec()) };

    assert!(matches!(
      CourseDataset::fetch(&fetcher, DEFAULT_COURSES_URL),
      Err(Error::Json { .. })
    ));
  }
}
