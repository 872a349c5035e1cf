use super::*;

#[derive(Boilerplate)]
pub struct ItemsHtml {
  pub page: Page,
  pub items: Vec<u64>,
  pub pagination: PaginationHtml,
}

impl ItemsHtml {
  pub fn new(page: Page, pagination: PaginationHtml) -> Self {
    let first = page.offset() + 1;

    Self {
      page,
      items: (first..first + page.len()).collect(),
      pagination,
    }
  }
}

impl PageContent for ItemsHtml {
  fn title(&self) -> String {
    format!("Items – Page {}", self.page.number)
  }
}
