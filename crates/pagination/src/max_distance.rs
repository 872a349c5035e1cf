use super::*;

/// Number of pages shown on either side of the current page.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct MaxDistance(NonZeroU32);

impl MaxDistance {
  pub fn n(self) -> u32 {
    self.0.get()
  }
}

impl Default for MaxDistance {
  fn default() -> Self {
    Self(NonZeroU32::MIN)
  }
}

impl TryFrom<i64> for MaxDistance {
  type Error = Error;

  fn try_from(n: i64) -> Result<Self, Error> {
    u32::try_from(n)
      .ok()
      .and_then(NonZeroU32::new)
      .map(Self)
      .ok_or(Error::MaxDistance)
  }
}

impl From<MaxDistance> for u32 {
  fn from(max_distance: MaxDistance) -> Self {
    max_distance.n()
  }
}

impl FromStr for MaxDistance {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<i64>()
      .map_err(|_| Error::MaxDistance)?
      .try_into()
  }
}
