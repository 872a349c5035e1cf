use super::*;

/// Produces the URL a page number links to.
pub trait LinkTarget {
  fn url(&self, page: u32) -> Result<String>;
}

/// Links pages with a `?page=N` query string on the current URL.
pub struct QueryString;

impl LinkTarget for QueryString {
  fn url(&self, page: u32) -> Result<String> {
    Ok(format!("?page={page}"))
  }
}

/// Links pages by reversing a partially bound route.
pub struct BoundUrl<'a> {
  pub routes: &'a Routes,
  pub partial: &'a PartialUrl,
}

impl<'a> LinkTarget for BoundUrl<'a> {
  fn url(&self, page: u32) -> Result<String> {
    self.partial.url_for_page(self.routes, page)
  }
}

/// A page entry together with the URL it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
  number: Option<u32>,
  url: Option<String>,
  is_current: bool,
  is_filler: bool,
}

impl PageLink {
  pub fn new(entry: PageEntry, target: &dyn LinkTarget) -> Result<Self> {
    Ok(Self {
      number: entry.number(),
      url: entry.number().map(|page| target.url(page)).transpose()?,
      is_current: entry.is_current(),
      is_filler: entry.is_filler(),
    })
  }

  pub fn links(entries: &[PageEntry], target: &dyn LinkTarget) -> Result<Vec<Self>> {
    entries
      .iter()
      .map(|entry| Self::new(*entry, target))
      .collect()
  }

  pub fn number(&self) -> Option<u32> {
    self.number
  }

  pub fn url(&self) -> Option<&str> {
    self.url.as_deref()
  }

  pub fn is_current(&self) -> bool {
    self.is_current
  }

  pub fn is_filler(&self) -> bool {
    self.is_filler
  }

  pub(crate) fn field(&self, name: &str) -> Option<serde_json::Value> {
    match name {
      "number" => Some(self.number.into()),
      "url" => Some(self.url.clone().into()),
      "is_current" => Some(self.is_current.into()),
      "is_filler" => Some(self.is_filler.into()),
      _ => None,
    }
  }
}

impl Display for PageLink {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let (Some(number), Some(url)) = (self.number, &self.url) else {
      return Ok(());
    };

    write!(f, "<a href=\"")?;
    url.escape(f, false)?;
    write!(f, "\">{number}</a>")
  }
}
