use super::*;

/// Decides which page numbers a paginated view links to.
///
/// In the default windowed mode the first page, the last page, and every
/// page within `max_distance` of the current page are shown, with a single
/// filler entry wherever page numbers are skipped. In contiguous mode every
/// page is shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Window {
  pub max_distance: MaxDistance,
  pub contiguous: bool,
}

impl Window {
  pub fn new(max_distance: MaxDistance, contiguous: bool) -> Self {
    Self {
      max_distance,
      contiguous,
    }
  }

  pub fn entries(self, total: u32, current: u32) -> Result<Vec<PageEntry>, Error> {
    if total == 0 {
      return Err(Error::TotalPages);
    }

    if !(1..=total).contains(&current) {
      return Err(Error::CurrentPage { current, total });
    }

    if self.contiguous {
      return Ok(
        (1..=total)
          .map(|number| PageEntry::page(number, current))
          .collect(),
      );
    }

    let distance = self.max_distance.n();

    let ranges = [
      (1, 1),
      (
        current.saturating_sub(distance),
        current.saturating_add(distance),
      ),
      (total, total),
    ];

    let (entries, _last) = ranges.into_iter().fold(
      (Vec::new(), 0),
      |(mut entries, last): (Vec<PageEntry>, u32), (lo, hi)| {
        let Some(next) = last.checked_add(1) else {
          return (entries, last);
        };

        if lo > next {
          entries.push(PageEntry::filler());
        }

        let start = lo.min(total).max(next);
        let end = hi.min(total);

        if start > end {
          return (entries, last);
        }

        entries.extend((start..=end).map(|number| PageEntry::page(number, current)));

        (entries, end)
      },
    );

    Ok(entries)
  }
}

/// Computes the page entries for a view of `total` pages positioned on
/// `current`, rejecting a `max_distance` below 1.
pub fn compute(
  total: u32,
  current: u32,
  max_distance: i64,
  contiguous: bool,
) -> Result<Vec<PageEntry>, Error> {
  Window::new(max_distance.try_into()?, contiguous).entries(total, current)
}
