use chrono::NaiveDate;

use crate::constraint::range_exceeds_max_days;
use crate::range::DateRange;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SelectionState {
  Empty,
  PartialStart,
  Complete
}

/// What a single interaction did to
/// the selection. `Changed` carries
/// the new range (possibly partial)
/// so hosts can forward it on every
/// mutation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SelectionEvent {
  Changed(DateRange),
  MaxDaysExceeded {
    date:     NaiveDate,
    max_days: u32
  },
  Cancelled
}

/// Two-click range selection. The
/// caller filters disabled dates
/// before clicking; the machine only
/// enforces the max-span policy and
/// the ordering invariant.
#[derive(Debug, Clone)]
pub struct RangeSelection {
  range:      DateRange,
  max_days:   u32,
  range_mode: bool
}

impl RangeSelection {
  #[must_use]
  pub fn new(
    max_days: u32,
    range_mode: bool
  ) -> Self {
    Self {
      range: DateRange::empty(),
      max_days: max_days.max(1),
      range_mode
    }
  }

  #[must_use]
  pub fn range(&self) -> DateRange {
    self.range
  }

  #[must_use]
  pub fn max_days(&self) -> u32 {
    self.max_days
  }

  #[must_use]
  pub fn state(
    &self
  ) -> SelectionState {
    if self.range.is_complete() {
      SelectionState::Complete
    } else if self.range.is_partial()
    {
      SelectionState::PartialStart
    } else {
      SelectionState::Empty
    }
  }

  pub fn set_max_days(
    &mut self,
    max_days: u32
  ) {
    self.max_days = max_days.max(1);
  }

  pub fn click(
    &mut self,
    date: NaiveDate
  ) -> SelectionEvent {
    if !self.range_mode {
      self.range = DateRange::complete(
        date, date
      );
      tracing::debug!(
        %date,
        "single-date selection"
      );
      return SelectionEvent::Changed(
        self.range
      );
    }

    match self.range.start {
      | Some(start)
        if self.range.end.is_none() =>
      {
        if range_exceeds_max_days(
          start.min(date),
          start.max(date),
          self.max_days
        ) {
          tracing::debug!(
            %start,
            %date,
            max_days = self.max_days,
            "selection rejected: span \
             over limit"
          );
          return SelectionEvent::MaxDaysExceeded {
            date,
            max_days: self.max_days
          };
        }
        self.range =
          DateRange::complete(
            start, date
          );
        tracing::debug!(
          range = ?self.range,
          "range completed"
        );
      }
      | _ => {
        // Empty, or any click while
        // complete, starts a new
        // range.
        self.range = DateRange {
          start: Some(date),
          end:   None
        };
        tracing::debug!(
          %date,
          "range started"
        );
      }
    }

    SelectionEvent::Changed(self.range)
  }

  /// Resets to Empty from any state.
  /// Cancelling an already-empty
  /// selection still reports
  /// `Cancelled` so dismissal
  /// callbacks fire uniformly.
  pub fn cancel(
    &mut self
  ) -> SelectionEvent {
    self.range = DateRange::empty();
    SelectionEvent::Cancelled
  }

  /// A confirmed range exists only in
  /// the Complete state; confirming
  /// does not reset the machine.
  #[must_use]
  pub fn confirm(
    &self
  ) -> Option<DateRange> {
    self
      .range
      .is_complete()
      .then_some(self.range)
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    RangeSelection,
    SelectionEvent,
    SelectionState
  };
  use crate::range::DateRange;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn starts_empty() {
    let selection =
      RangeSelection::new(10, true);
    assert_eq!(
      selection.state(),
      SelectionState::Empty
    );
    assert_eq!(
      selection.confirm(),
      None
    );
  }

  #[test]
  fn two_clicks_complete_a_range() {
    let mut selection =
      RangeSelection::new(10, true);

    let first = selection
      .click(date(2024, 6, 1));
    assert_eq!(
      first,
      SelectionEvent::Changed(
        DateRange {
          start: Some(date(
            2024, 6, 1
          )),
          end:   None
        }
      )
    );
    assert_eq!(
      selection.state(),
      SelectionState::PartialStart
    );

    let second = selection
      .click(date(2024, 6, 10));
    assert_eq!(
      second,
      SelectionEvent::Changed(
        DateRange::complete(
          date(2024, 6, 1),
          date(2024, 6, 10)
        )
      )
    );
    assert_eq!(
      selection.state(),
      SelectionState::Complete
    );
    assert_eq!(
      selection.confirm(),
      Some(DateRange::complete(
        date(2024, 6, 1),
        date(2024, 6, 10)
      ))
    );
  }

  #[test]
  fn reversed_clicks_normalize() {
    let mut selection =
      RangeSelection::new(10, true);
    selection
      .click(date(2024, 6, 10));
    selection.click(date(2024, 6, 3));

    assert_eq!(
      selection.range(),
      DateRange::complete(
        date(2024, 6, 3),
        date(2024, 6, 10)
      )
    );
  }

  #[test]
  fn over_span_click_is_rejected() {
    let mut selection =
      RangeSelection::new(10, true);
    selection.click(date(2024, 6, 1));

    let event = selection
      .click(date(2024, 6, 15));
    assert_eq!(
      event,
      SelectionEvent::MaxDaysExceeded {
        date:     date(2024, 6, 15),
        max_days: 10
      }
    );
    // No mutation: still partial at
    // the original start.
    assert_eq!(
      selection.state(),
      SelectionState::PartialStart
    );
    assert_eq!(
      selection.range().start,
      Some(date(2024, 6, 1))
    );
    assert_eq!(
      selection.confirm(),
      None
    );
  }

  #[test]
  fn exact_span_is_allowed() {
    let mut selection =
      RangeSelection::new(10, true);
    selection.click(date(2024, 6, 1));
    selection
      .click(date(2024, 6, 10));

    assert_eq!(
      selection.state(),
      SelectionState::Complete
    );
  }

  #[test]
  fn click_while_complete_restarts()
  {
    let mut selection =
      RangeSelection::new(10, true);
    selection.click(date(2024, 6, 1));
    selection.click(date(2024, 6, 5));
    let event = selection
      .click(date(2024, 6, 20));

    assert_eq!(
      event,
      SelectionEvent::Changed(
        DateRange {
          start: Some(date(
            2024, 6, 20
          )),
          end:   None
        }
      )
    );
    assert_eq!(
      selection.state(),
      SelectionState::PartialStart
    );
  }

  #[test]
  fn cancel_resets_from_any_state() {
    let mut selection =
      RangeSelection::new(10, true);
    selection.click(date(2024, 6, 1));
    selection.click(date(2024, 6, 5));

    assert_eq!(
      selection.cancel(),
      SelectionEvent::Cancelled
    );
    assert_eq!(
      selection.state(),
      SelectionState::Empty
    );
  }

  #[test]
  fn cancel_from_empty_still_reports()
  {
    let mut selection =
      RangeSelection::new(10, true);
    assert_eq!(
      selection.cancel(),
      SelectionEvent::Cancelled
    );
    assert_eq!(
      selection.state(),
      SelectionState::Empty
    );
  }

  #[test]
  fn single_date_mode_completes_in_one_click()
  {
    let mut selection =
      RangeSelection::new(10, false);
    selection.click(date(2024, 6, 4));

    assert_eq!(
      selection.range(),
      DateRange::complete(
        date(2024, 6, 4),
        date(2024, 6, 4)
      )
    );
  }

  #[test]
  fn confirm_does_not_reset() {
    let mut selection =
      RangeSelection::new(10, true);
    selection.click(date(2024, 6, 1));
    selection.click(date(2024, 6, 5));

    let confirmed = selection
      .confirm()
      .expect("complete range");
    assert_eq!(
      selection.confirm(),
      Some(confirmed)
    );
    assert_eq!(
      selection.state(),
      SelectionState::Complete
    );
  }
}
