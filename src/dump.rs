use super::*;

/// One indexed page as written to the JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
  pub category: PageCategory,
  pub content: Option<String>,
  pub fetched: bool,
  pub heading_level: u8,
  pub id: String,
  pub url: String,
}

impl From<&Page> for PageRecord {
  fn from(page: &Page) -> Self {
    Self {
      category: page.category,
      content: page.fragment.html().map(str::to_string),
      fetched: page.fetched_ok,
      heading_level: page.heading_level,
      id: page.id.clone(),
      url: page.source_url.clone(),
    }
  }
}

/// Indexed pages split into policies and everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDump {
  #[serde(rename = "Policies")]
  pub policies: Vec<PageRecord>,
  #[serde(rename = "Programs")]
  pub programs: Vec<PageRecord>,
}

impl CatalogDump {
  #[must_use]
  pub fn from_index(index: &PageIndex) -> Self {
    let (policies, programs) = index
      .iter()
      .map(PageRecord::from)
      .partition(|record| record.category.is_policy());

    Self { policies, programs }
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
