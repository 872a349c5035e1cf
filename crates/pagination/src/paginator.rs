use super::*;

/// Splits `count` items into pages of `per_page`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PaginatorFields")]
pub struct Paginator {
  count: u64,
  per_page: u32,
  allow_empty_first_page: bool,
  num_pages: u32,
}

#[derive(Deserialize)]
struct PaginatorFields {
  count: u64,
  per_page: u32,
  #[serde(default = "default_allow_empty_first_page")]
  allow_empty_first_page: bool,
}

fn default_allow_empty_first_page() -> bool {
  true
}

impl TryFrom<PaginatorFields> for Paginator {
  type Error = Error;

  fn try_from(fields: PaginatorFields) -> Result<Self, Error> {
    Ok(
      Self::new(fields.count, fields.per_page)?
        .allow_empty_first_page(fields.allow_empty_first_page),
    )
  }
}

impl Paginator {
  pub fn new(count: u64, per_page: u32) -> Result<Self, Error> {
    if per_page == 0 {
      return Err(Error::PerPage);
    }

    let num_pages = u32::try_from(count.div_ceil(u64::from(per_page)).max(1))
      .map_err(|_| Error::TooManyPages { count, per_page })?;

    Ok(Self {
      count,
      per_page,
      allow_empty_first_page: true,
      num_pages,
    })
  }

  /// Whether an empty item list still has a first page.
  pub fn allow_empty_first_page(self, allow_empty_first_page: bool) -> Self {
    Self {
      allow_empty_first_page,
      ..self
    }
  }

  pub fn count(self) -> u64 {
    self.count
  }

  pub fn per_page(self) -> u32 {
    self.per_page
  }

  pub fn num_pages(self) -> u32 {
    if self.count == 0 && !self.allow_empty_first_page {
      0
    } else {
      self.num_pages
    }
  }

  pub fn page(self, number: u32) -> Result<Page, Error> {
    if number == 0 {
      return Err(Error::PageBelowOne);
    }

    if number > self.num_pages() {
      return Err(Error::EmptyPage);
    }

    Ok(Page {
      number,
      paginator: self,
    })
  }
}

impl Serialize for Paginator {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut state = serializer.serialize_struct("Paginator", 4)?;
    state.serialize_field("count", &self.count)?;
    state.serialize_field("per_page", &self.per_page)?;
    state.serialize_field("allow_empty_first_page", &self.allow_empty_first_page)?;
    state.serialize_field("num_pages", &self.num_pages())?;
    state.end()
  }
}

/// One page of a [`Paginator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
  pub number: u32,
  pub paginator: Paginator,
}

impl Page {
  pub fn num_pages(self) -> u32 {
    self.paginator.num_pages()
  }

  pub fn has_next(self) -> bool {
    self.number < self.num_pages()
  }

  pub fn has_previous(self) -> bool {
    self.number > 1
  }

  pub fn next_page_number(self) -> Option<u32> {
    self.has_next().then_some(self.number + 1)
  }

  pub fn previous_page_number(self) -> Option<u32> {
    self.has_previous().then_some(self.number - 1)
  }

  /// Zero-based offset of the first item on this page.
  pub fn offset(self) -> u64 {
    u64::from(self.number.saturating_sub(1)) * u64::from(self.paginator.per_page)
  }

  /// Number of items on this page.
  pub fn len(self) -> u64 {
    self
      .paginator
      .count
      .saturating_sub(self.offset())
      .min(self.paginator.per_page.into())
  }

  pub fn is_empty(self) -> bool {
    self.len() == 0
  }

  pub fn entries(self, window: Window) -> Result<Vec<PageEntry>, Error> {
    window.entries(self.num_pages(), self.number)
  }
}
