use super::*;

/// Page links rendered as a `<nav>` element, with fillers as ellipses and
/// the current page as plain text.
#[derive(Boilerplate, Debug, PartialEq)]
pub struct PaginationHtml {
  pub links: Vec<PageLink>,
}

impl PaginationHtml {
  pub fn new(page: Page, window: Window, target: &dyn LinkTarget) -> Result<Self> {
    Ok(Self {
      links: PageLink::links(&page.entries(window)?, target)?,
    })
  }
}
