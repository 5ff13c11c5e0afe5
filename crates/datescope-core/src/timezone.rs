use chrono::{
  DateTime,
  LocalResult,
  NaiveDate,
  Offset,
  TimeZone,
  Utc
};
use chrono_tz::Tz;

use crate::range::DateRange;

/// One entry of the zone dropdown.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TimezoneOption {
  pub tz:    Tz,
  pub label: String
}

/// The enumerated zone set exposed in
/// the UI. Injected configuration so
/// alternate sets are testable; the
/// default mirrors the shipped
/// product.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TimezoneSet {
  options: Vec<TimezoneOption>
}

impl Default for TimezoneSet {
  fn default() -> Self {
    let zones = [
      (
        chrono_tz::Asia::Calcutta,
        "Asia/Calcutta (GMT+5:30)"
      ),
      (
        chrono_tz::Asia::Dubai,
        "Asia/Dubai (GMT+4)"
      ),
      (
        chrono_tz::Europe::Moscow,
        "Europe/Moscow (GMT+3)"
      ),
      (
        chrono_tz::Europe::London,
        "Europe/London (GMT+0)"
      ),
      (
        chrono_tz::America::New_York,
        "America/New_York (GMT-5)"
      ),
      (
        chrono_tz::America::Los_Angeles,
        "America/Los_Angeles (GMT-8)"
      ),
      (
        chrono_tz::Australia::Sydney,
        "Australia/Sydney (GMT+10)"
      ),
    ];

    Self {
      options: zones
        .into_iter()
        .map(|(tz, label)| {
          TimezoneOption {
            tz,
            label: label.to_string()
          }
        })
        .collect()
    }
  }
}

impl TimezoneSet {
  #[must_use]
  pub fn options(
    &self
  ) -> &[TimezoneOption] {
    &self.options
  }

  #[must_use]
  pub fn contains(
    &self,
    tz: Tz
  ) -> bool {
    self
      .options
      .iter()
      .any(|option| option.tz == tz)
  }
}

/// Renders a calendar date as
/// wall-clock text in the named
/// zone. Display only; never used
/// for equality or ordering. Noon is
/// used as the anchor instant so DST
/// transitions around midnight
/// cannot shift the printed day.
#[must_use]
pub fn format_date_in_timezone(
  date: NaiveDate,
  tz: Tz,
  pattern: &str
) -> String {
  let anchor = date
    .and_hms_opt(12, 0, 0)
    .map(|naive| {
      match tz
        .from_local_datetime(&naive)
      {
        | LocalResult::Single(dt) => {
          dt
        }
        | LocalResult::Ambiguous(
          first,
          _second
        ) => first,
        | LocalResult::None => {
          tz.from_utc_datetime(&naive)
        }
      }
    });

  match anchor {
    | Some(zoned) => zoned
      .format(pattern)
      .to_string(),
    | None => date
      .format(pattern)
      .to_string()
  }
}

/// Current UTC offset label for the
/// zone, e.g. `GMT+3:00`. Recomputed
/// per call because offsets move
/// with daylight saving.
#[must_use]
pub fn timezone_offset_label(
  tz: Tz,
  now: DateTime<Utc>
) -> String {
  let offset = now
    .with_timezone(&tz)
    .offset()
    .fix()
    .local_minus_utc();
  let sign = if offset < 0 {
    '-'
  } else {
    '+'
  };
  let total = offset.abs();
  format!(
    "GMT{sign}{}:{:02}",
    total / 3600,
    (total % 3600) / 60
  )
}

/// Trigger-field readout:
/// `02 Jun GMT+3:00` while partial,
/// `02 Jun - 10 Jun 2024 GMT+3:00`
/// once complete, empty string for
/// an empty selection.
#[must_use]
pub fn format_date_range(
  range: &DateRange,
  tz: Tz,
  now: DateTime<Utc>
) -> String {
  let Some(start) = range.start
  else {
    return String::new();
  };

  let offset =
    timezone_offset_label(tz, now);
  let start_formatted =
    format_date_in_timezone(
      start, tz, "%d %b"
    );

  match range.end {
    | Some(end) => {
      let end_formatted =
        format_date_in_timezone(
          end, tz, "%d %b %Y"
        );
      format!(
        "{start_formatted} - \
         {end_formatted} {offset}"
      )
    }
    | None => {
      format!(
        "{start_formatted} {offset}"
      )
    }
  }
}

/// Month/year header label, e.g.
/// `Jun 2024`.
#[must_use]
pub fn month_year_display(
  month: NaiveDate,
  tz: Tz
) -> String {
  format_date_in_timezone(
    month, tz, "%b %Y"
  )
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    TimeZone,
    Utc
  };

  use super::*;

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

  fn june_noon()
  -> chrono::DateTime<Utc> {
    Utc
      .with_ymd_and_hms(
        2024, 6, 7, 12, 0, 0
      )
      .single()
      .expect("valid instant")
  }

  #[test]
  fn default_set_has_seven_zones() {
    let set = TimezoneSet::default();
    assert_eq!(
      set.options().len(),
      7
    );
    assert!(set.contains(
      chrono_tz::Europe::Moscow
    ));
    assert!(!set.contains(
      chrono_tz::Europe::Berlin
    ));
  }

  #[test]
  fn offset_label_whole_hours() {
    assert_eq!(
      timezone_offset_label(
        chrono_tz::Europe::Moscow,
        june_noon()
      ),
      "GMT+3:00"
    );
  }

  #[test]
  fn offset_label_half_hours() {
    assert_eq!(
      timezone_offset_label(
        chrono_tz::Asia::Calcutta,
        june_noon()
      ),
      "GMT+5:30"
    );
  }

  #[test]
  fn offset_label_negative() {
    // New York is on daylight time
    // in June.
    assert_eq!(
      timezone_offset_label(
        chrono_tz::America::New_York,
        june_noon()
      ),
      "GMT-4:00"
    );
  }

  #[test]
  fn formats_date_for_display() {
    assert_eq!(
      format_date_in_timezone(
        date(2024, 6, 2),
        chrono_tz::Europe::Moscow,
        "%d %b %Y"
      ),
      "02 Jun 2024"
    );
  }

  #[test]
  fn range_readout_partial() {
    let range = DateRange {
      start: Some(date(2024, 6, 2)),
      end:   None
    };
    assert_eq!(
      format_date_range(
        &range,
        chrono_tz::Europe::Moscow,
        june_noon()
      ),
      "02 Jun GMT+3:00"
    );
  }

  #[test]
  fn range_readout_complete() {
    let range = DateRange::complete(
      date(2024, 6, 2),
      date(2024, 6, 10)
    );
    assert_eq!(
      format_date_range(
        &range,
        chrono_tz::Europe::Moscow,
        june_noon()
      ),
      "02 Jun - 10 Jun 2024 GMT+3:00"
    );
  }

  #[test]
  fn range_readout_empty() {
    assert_eq!(
      format_date_range(
        &DateRange::empty(),
        chrono_tz::Europe::Moscow,
        june_noon()
      ),
      ""
    );
  }

  #[test]
  fn month_header_label() {
    assert_eq!(
      month_year_display(
        date(2024, 6, 1),
        chrono_tz::Europe::Moscow
      ),
      "Jun 2024"
    );
  }
}
