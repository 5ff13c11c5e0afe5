use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};

pub const WEEKDAY_LABELS: [&str; 7] = [
  "Su", "Mo", "Tu", "We", "Th", "Fr",
  "Sa"
];

/// One cell of the visible month
/// grid. Derived data only; the grid
/// is recomputed whenever the visible
/// month changes.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarDay {
  pub date: NaiveDate,
  pub in_current_month: bool,
  pub is_today:         bool,
  pub day_number:       u32
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum MonthStep {
  Prev,
  Next
}

/// Week-aligned day grid for the
/// month containing `month`: the
/// Sunday on or before the first of
/// the month through the Saturday on
/// or after the last. Always a whole
/// number of weeks.
pub fn calendar_days(
  month: NaiveDate,
  today: NaiveDate
) -> impl Iterator<Item = CalendarDay>
{
  let first = first_day_of_month(
    month.year(),
    month.month()
  );
  let last = last_day_of_month(
    month.year(),
    month.month()
  );
  let grid_start = start_of_week(
    first,
    Weekday::Sun
  );
  let grid_end =
    end_of_week(last, Weekday::Sun);
  let total = (grid_end - grid_start)
    .num_days()
    + 1;
  let focus_month = month.month();
  let focus_year = month.year();

  (0..total).map(move |offset| {
    let date =
      add_days(grid_start, offset);
    CalendarDay {
      date,
      in_current_month: date.month()
        == focus_month
        && date.year() == focus_year,
      is_today: date == today,
      day_number: date.day()
    }
  })
}

pub fn navigate_month(
  month: NaiveDate,
  step: MonthStep
) -> NaiveDate {
  match step {
    | MonthStep::Prev => {
      shift_months(month, -1)
    }
    | MonthStep::Next => {
      shift_months(month, 1)
    }
  }
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

pub fn end_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    start_of_week(day, week_start),
    6
  )
}
