use super::*;

/// Pages keyed by the id of the header that owns them, in template order.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
  pages: Vec<Page>,
  positions: HashMap<String, usize>,
}

impl PageIndex {
  #[must_use]
  pub fn contains(&self, id: &str) -> bool {
    self.positions.contains_key(id)
  }

  #[must_use]
  pub fn get(&self, id: &str) -> Option<&Page> {
    self.positions.get(id).map(|position| &self.pages[*position])
  }

  /// Adds `page`, returning the page previously stored under its id.
  pub fn insert(&mut self, page: Page) -> Option<Page> {
    match self.positions.get(&page.id) {
      Some(position) => {
        Some(std::mem::replace(&mut self.pages[*position], page))
      }
      None => {
        self.positions.insert(page.id.clone(), self.pages.len());
        self.pages.push(page);
        None
      }
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pages.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Page> {
    self.pages.iter()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.pages.len()
  }
}

/// Resolves every linked placeholder of a template to a [`Page`].
pub struct Indexer<'a> {
  fetcher: &'a dyn Fetcher,
  locators: &'a LocatorConfig,
  options: &'a CatalogOptions,
  origin: &'a Url,
}

impl<'a> Indexer<'a> {
  pub fn index(
    &self,
    template: &Template,
    diagnostics: &mut Diagnostics,
  ) -> Result<PageIndex> {
    let slots = template.outline()?;

    self.locators.validate(
      slots
        .iter()
        .filter(|slot| slot.anchor.is_some())
        .map(|slot| {
          self.options.category_for(&slot.header_id, &slot.header_text)
        })
        .collect::<BTreeSet<PageCategory>>(),
    )?;

    info!(placeholders = slots.len(), "indexing template");

    let mut index = PageIndex::default();

    for slot in &slots {
      let Some(anchor) = &slot.anchor else {
        if slot.has_code {
          diagnostics.warn(
            &slot.header_id,
            "placeholder has a `<code>` wrapper but no link",
          );
        }

        continue;
      };

      if index.contains(&slot.header_id) {
        return Err(Error::structure(
          slot.section,
          format!("duplicate placeholder id `{}`", slot.header_id),
        ));
      }

      let heading_level = match heading::heading_level(&slot.header_tag) {
        Some(Ok(level)) => level,
        Some(Err(_)) | None => {
          return Err(Error::structure(
            slot.section,
            format!(
              "`<{}>` header `{}` is not a heading but owns a linked placeholder",
              slot.header_tag, slot.header_id
            ),
          ));
        }
      };

      let category = self
        .options
        .category_for(&slot.header_id, &slot.header_text);

      let url = link::absolutize(self.origin, self.origin, anchor);

      debug!(id = %slot.header_id, %category, %url, "loading page");

      let page = Page::load(
        page::PageRequest {
          category,
          heading_level,
          id: &slot.header_id,
          url,
        },
        self.fetcher,
        self.locators,
        self.origin,
        diagnostics,
      )?;

      index.insert(page);
    }

    info!(pages = index.len(), "indexed template");

    Ok(index)
  }

  pub fn new(
    fetcher: &'a dyn Fetcher,
    locators: &'a LocatorConfig,
    options: &'a CatalogOptions,
    origin: &'a Url,
  ) -> Self {
    Self {
      fetcher,
      locators,
      options,
      origin,
    }
  }
}
