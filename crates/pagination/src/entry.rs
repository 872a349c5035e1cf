use super::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageEntry {
  number: Option<u32>,
  is_current: bool,
}

impl PageEntry {
  pub fn page(number: u32, current: u32) -> Self {
    Self {
      number: Some(number),
      is_current: number == current,
    }
  }

  pub fn filler() -> Self {
    Self {
      number: None,
      is_current: false,
    }
  }

  pub fn number(self) -> Option<u32> {
    self.number
  }

  pub fn is_current(self) -> bool {
    self.is_current
  }

  pub fn is_filler(self) -> bool {
    self.number.is_none()
  }
}

impl fmt::Display for PageEntry {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.number {
      Some(number) => write!(f, "{number}"),
      None => write!(f, "…"),
    }
  }
}

impl Serialize for PageEntry {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut state = serializer.serialize_struct("PageEntry", 3)?;
    state.serialize_field("number", &self.number)?;
    state.serialize_field("is_current", &self.is_current)?;
    state.serialize_field("is_filler", &self.is_filler())?;
    state.end()
  }
}
