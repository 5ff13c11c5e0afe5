use chrono::NaiveDate;
use serde::Deserialize;

use crate::grid::add_days;

/// Hard navigation/selection bounds.
/// The lower bound is a fixed policy
/// date (demo product data starts in
/// 2024); the upper bound trails
/// today by a fixed window. Injected
/// rather than read from module
/// constants so alternate policies
/// are testable.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct SelectionBounds {
  pub min_date: NaiveDate,
  pub future_window_days: i64
}

impl Default for SelectionBounds {
  fn default() -> Self {
    Self {
      min_date:
        NaiveDate::from_ymd_opt(
          2024, 1, 1
        )
        .unwrap_or(NaiveDate::MIN),
      future_window_days: 30
    }
  }
}

impl SelectionBounds {
  #[must_use]
  pub fn max_date(
    &self,
    today: NaiveDate
  ) -> NaiveDate {
    add_days(
      today,
      self.future_window_days
    )
  }
}

/// A date outside the bounds is never
/// selectable, regardless of range
/// state. Note: the host-level
/// `restriction_days` knob does not
/// feed the lower bound here; the
/// shipped policy pins it to
/// `bounds.min_date`.
pub fn is_date_disabled(
  date: NaiveDate,
  today: NaiveDate,
  bounds: &SelectionBounds
) -> bool {
  date < bounds.min_date
    || date > bounds.max_date(today)
}

/// Inclusive day count between the
/// endpoints; one day for
/// start == end.
#[must_use]
pub fn span_days(
  start: NaiveDate,
  end: NaiveDate
) -> i64 {
  (end - start).num_days() + 1
}

pub fn range_exceeds_max_days(
  start: NaiveDate,
  end: NaiveDate,
  max_days: u32
) -> bool {
  span_days(start, end)
    > i64::from(max_days)
}

/// Last day that still satisfies the
/// max-span constraint for a range
/// starting at `start`.
#[must_use]
pub fn max_allowed_end_date(
  start: NaiveDate,
  max_days: u32
) -> NaiveDate {
  add_days(
    start,
    i64::from(max_days.max(1)) - 1
  )
}
