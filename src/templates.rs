use {super::*, boilerplate::Boilerplate};

pub use {items::ItemsHtml, pagination::PaginationHtml};

mod items;
mod pagination;

#[derive(Boilerplate)]
pub struct PageHtml<T: PageContent> {
  content: T,
}

impl<T> PageHtml<T>
where
  T: PageContent,
{
  pub fn new(content: T) -> Self {
    Self { content }
  }
}

pub trait PageContent: Display + 'static {
  fn title(&self) -> String;

  fn page(self) -> PageHtml<Self>
  where
    Self: Sized,
  {
    PageHtml::new(self)
  }
}
