use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

/// The possibly-partial selection.
/// Once both endpoints are set the
/// selection machine guarantees
/// `start <= end`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
pub struct DateRange {
  pub start: Option<NaiveDate>,
  pub end:   Option<NaiveDate>
}

impl DateRange {
  #[must_use]
  pub fn empty() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn complete(
    start: NaiveDate,
    end: NaiveDate
  ) -> Self {
    let (start, end) = if start <= end
    {
      (start, end)
    } else {
      (end, start)
    };
    Self {
      start: Some(start),
      end:   Some(end)
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.start.is_none()
      && self.end.is_none()
  }

  #[must_use]
  pub fn is_partial(&self) -> bool {
    self.start.is_some()
      && self.end.is_none()
  }

  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.start.is_some()
      && self.end.is_some()
  }

  /// Day-granularity containment,
  /// endpoint inclusive. Always false
  /// while the range is incomplete.
  #[must_use]
  pub fn contains(
    &self,
    date: NaiveDate
  ) -> bool {
    match (self.start, self.end) {
      | (Some(start), Some(end)) => {
        date >= start && date <= end
      }
      | _ => false
    }
  }

  #[must_use]
  pub fn is_start(
    &self,
    date: NaiveDate
  ) -> bool {
    self.start == Some(date)
  }

  #[must_use]
  pub fn is_end(
    &self,
    date: NaiveDate
  ) -> bool {
    self.end == Some(date)
  }

  #[must_use]
  pub fn is_endpoint(
    &self,
    date: NaiveDate
  ) -> bool {
    self.is_start(date)
      || self.is_end(date)
  }
}
