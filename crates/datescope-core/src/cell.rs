use chrono::NaiveDate;

use crate::constraint::{
  SelectionBounds,
  is_date_disabled,
  max_allowed_end_date,
  range_exceeds_max_days
};
use crate::messages::MessageTable;
use crate::range::DateRange;

/// Everything a day cell needs to
/// resolve its state. Shared by all
/// cells of a grid render.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
  pub range:    DateRange,
  pub today:    NaiveDate,
  pub bounds:   &'a SelectionBounds,
  pub max_days: u32,
  pub messages: &'a MessageTable
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EndpointKind {
  Start,
  End,
  Both
}

/// Resolved interactive/visual state
/// of one cell, first match wins:
/// hard-disabled, beyond the max
/// span while a range is half
/// complete, range endpoint, inside
/// a complete range, plain.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CellState {
  Disabled,
  BeyondMaxSpan,
  Endpoint(EndpointKind),
  InRange,
  Plain
}

impl CellState {
  #[must_use]
  pub fn is_interactive(
    &self
  ) -> bool {
    !matches!(
      self,
      Self::Disabled
        | Self::BeyondMaxSpan
    )
  }
}

/// What a click on the cell should
/// do. Policy rejections surface as
/// UI feedback, never as errors.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CellClick {
  Ignore,
  NotifyMaxDays,
  Select
}

pub fn resolve_cell_state(
  date: NaiveDate,
  ctx: &CellContext<'_>
) -> CellState {
  if is_date_disabled(
    date, ctx.today, ctx.bounds
  ) || ctx.messages.is_disabled(date)
  {
    return CellState::Disabled;
  }

  if let Some(start) = ctx.range.start
    && ctx.range.end.is_none()
    && date
      > max_allowed_end_date(
        start,
        ctx.max_days
      )
  {
    return CellState::BeyondMaxSpan;
  }

  let is_start =
    ctx.range.is_start(date);
  let is_end = ctx.range.is_end(date);
  match (is_start, is_end) {
    | (true, true) => {
      CellState::Endpoint(
        EndpointKind::Both
      )
    }
    | (true, false) => {
      CellState::Endpoint(
        EndpointKind::Start
      )
    }
    | (false, true) => {
      CellState::Endpoint(
        EndpointKind::End
      )
    }
    | (false, false) => {
      if ctx.range.contains(date) {
        CellState::InRange
      } else {
        CellState::Plain
      }
    }
  }
}

pub fn resolve_cell_click(
  date: NaiveDate,
  ctx: &CellContext<'_>
) -> CellClick {
  if is_date_disabled(
    date, ctx.today, ctx.bounds
  ) || ctx.messages.is_disabled(date)
  {
    return CellClick::Ignore;
  }

  if let Some(start) = ctx.range.start
    && ctx.range.end.is_none()
    && range_exceeds_max_days(
      start.min(date),
      start.max(date),
      ctx.max_days
    )
  {
    return CellClick::NotifyMaxDays;
  }

  CellClick::Select
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::messages::{
    DateMessage,
    MessageKind,
    MessageTable
  };

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

  fn context<'a>(
    range: DateRange,
    bounds: &'a SelectionBounds,
    messages: &'a MessageTable
  ) -> CellContext<'a> {
    CellContext {
      range,
      today: date(2024, 6, 7),
      bounds,
      max_days: 10,
      messages
    }
  }

  #[test]
  fn out_of_bounds_wins_over_range()
  {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange::complete(
        date(2023, 12, 30),
        date(2024, 6, 5)
      ),
      &bounds,
      &messages
    );

    // Inside the selected range but
    // before the minimum bound.
    assert_eq!(
      resolve_cell_state(
        date(2023, 12, 31),
        &ctx
      ),
      CellState::Disabled
    );
    assert_eq!(
      resolve_cell_click(
        date(2023, 12, 31),
        &ctx
      ),
      CellClick::Ignore
    );
  }

  #[test]
  fn message_disable_blocks_click() {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::from_messages(&[
        DateMessage {
          date:     "2024-06-05"
            .to_string(),
          message:  "blocked"
            .to_string(),
          disabled: true,
          kind:     MessageKind::Error
        },
      ])
      .expect("valid table");
    let ctx = context(
      DateRange::empty(),
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 5),
        &ctx
      ),
      CellState::Disabled
    );
    assert_eq!(
      resolve_cell_click(
        date(2024, 6, 5),
        &ctx
      ),
      CellClick::Ignore
    );
  }

  #[test]
  fn beyond_max_span_while_partial()
  {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange {
        start: Some(date(
          2024, 6, 1
        )),
        end:   None
      },
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 10),
        &ctx
      ),
      CellState::Plain
    );
    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 11),
        &ctx
      ),
      CellState::BeyondMaxSpan
    );
    assert_eq!(
      resolve_cell_click(
        date(2024, 6, 11),
        &ctx
      ),
      CellClick::NotifyMaxDays
    );
  }

  #[test]
  fn beyond_span_clears_on_completion()
  {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange::complete(
        date(2024, 6, 1),
        date(2024, 6, 5)
      ),
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 20),
        &ctx
      ),
      CellState::Plain
    );
    assert_eq!(
      resolve_cell_click(
        date(2024, 6, 20),
        &ctx
      ),
      CellClick::Select
    );
  }

  #[test]
  fn endpoint_beats_in_range() {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange::complete(
        date(2024, 6, 1),
        date(2024, 6, 5)
      ),
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 1),
        &ctx
      ),
      CellState::Endpoint(
        EndpointKind::Start
      )
    );
    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 5),
        &ctx
      ),
      CellState::Endpoint(
        EndpointKind::End
      )
    );
    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 3),
        &ctx
      ),
      CellState::InRange
    );
  }

  #[test]
  fn one_day_range_is_both_endpoints()
  {
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange::complete(
        date(2024, 6, 3),
        date(2024, 6, 3)
      ),
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_state(
        date(2024, 6, 3),
        &ctx
      ),
      CellState::Endpoint(
        EndpointKind::Both
      )
    );
  }

  #[test]
  fn second_click_before_start_selects()
  {
    // Clicking earlier than the
    // partial start is a valid
    // completion; span is measured on
    // the normalized order.
    let bounds =
      SelectionBounds::default();
    let messages =
      MessageTable::default();
    let ctx = context(
      DateRange {
        start: Some(date(
          2024, 6, 15
        )),
        end:   None
      },
      &bounds,
      &messages
    );

    assert_eq!(
      resolve_cell_click(
        date(2024, 6, 10),
        &ctx
      ),
      CellClick::Select
    );
    assert_eq!(
      resolve_cell_click(
        date(2024, 6, 1),
        &ctx
      ),
      CellClick::NotifyMaxDays
    );
  }
}
