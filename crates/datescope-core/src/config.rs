use chrono_tz::Tz;
use serde::Deserialize;

use crate::constraint::SelectionBounds;
use crate::messages::{
  DateMessage,
  MessageTable
};

const MAX_DAYS_CEILING: u32 = 90;

fn default_timezone() -> Tz {
  chrono_tz::Europe::Moscow
}

fn default_restriction_days() -> u32 {
  90
}

fn default_max_days() -> u32 {
  10
}

fn default_range_mode() -> bool {
  true
}

/// Host configuration for the
/// picker, loaded from embedded TOML
/// and sanitized with defaults.
/// `restriction_days` is carried for
/// the host surface but the shipped
/// bound policy lives in `bounds`.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PickerConfig {
  #[serde(
    default = "default_timezone"
  )]
  pub initial_timezone: Tz,
  #[serde(
    default = "default_restriction_days"
  )]
  pub restriction_days: u32,
  #[serde(default = "default_max_days")]
  pub max_days: u32,
  #[serde(
    default = "default_range_mode"
  )]
  pub range_mode: bool,
  #[serde(default)]
  pub bounds: SelectionBounds,
  #[serde(default)]
  pub date_messages: Vec<DateMessage>
}

impl Default for PickerConfig {
  fn default() -> Self {
    Self {
      initial_timezone:
        default_timezone(),
      restriction_days:
        default_restriction_days(),
      max_days: default_max_days(),
      range_mode:
        default_range_mode(),
      bounds:
        SelectionBounds::default(),
      date_messages: Vec::new()
    }
  }
}

impl PickerConfig {
  /// Parses embedded TOML; falls
  /// back to defaults on parse
  /// failure rather than refusing to
  /// render the picker.
  pub fn from_toml_str(
    raw: &str
  ) -> Self {
    match toml::from_str::<Self>(raw)
    {
      | Ok(mut config) => {
        config.sanitize();
        tracing::info!(
          timezone = %config.initial_timezone,
          max_days = config.max_days,
          messages = config.date_messages.len(),
          "loaded picker config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(%error, "failed parsing picker config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.max_days == 0 {
      tracing::warn!(
        "max_days of 0 is not \
         selectable; using default"
      );
      self.max_days =
        default_max_days();
    }
    if self.max_days
      > MAX_DAYS_CEILING
    {
      tracing::warn!(
        max_days = self.max_days,
        ceiling = MAX_DAYS_CEILING,
        "max_days over ceiling; \
         clamping"
      );
      self.max_days =
        MAX_DAYS_CEILING;
    }
    if self.restriction_days == 0 {
      self.restriction_days =
        default_restriction_days();
    }
  }

  /// Builds the date-keyed message
  /// table. Malformed entries drop
  /// the whole list with a logged
  /// error; the picker still works
  /// without annotations.
  #[must_use]
  pub fn message_table(
    &self
  ) -> MessageTable {
    match MessageTable::from_messages(
      &self.date_messages
    ) {
      | Ok(table) => table,
      | Err(error) => {
        tracing::error!(%error, "invalid date messages in config; ignoring them");
        MessageTable::default()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::PickerConfig;

  #[test]
  fn defaults_match_shipped_product()
  {
    let config =
      PickerConfig::default();
    assert_eq!(
      config.initial_timezone,
      chrono_tz::Europe::Moscow
    );
    assert_eq!(config.max_days, 10);
    assert_eq!(
      config.restriction_days,
      90
    );
    assert!(config.range_mode);
    assert!(config
      .date_messages
      .is_empty());
  }

  #[test]
  fn parses_full_config() {
    let config =
      PickerConfig::from_toml_str(
        r#"
initial_timezone = "Asia/Dubai"
max_days = 14
range_mode = true

[bounds]
min_date = "2023-06-01"
future_window_days = 7

[[date_messages]]
date = "2024-06-05"
message = "inventory freeze"
disabled = true
kind = "error"
"#
      );

    assert_eq!(
      config.initial_timezone,
      chrono_tz::Asia::Dubai
    );
    assert_eq!(config.max_days, 14);
    assert_eq!(
      config.bounds.min_date,
      NaiveDate::from_ymd_opt(
        2023, 6, 1
      )
      .expect("valid date")
    );

    let table =
      config.message_table();
    assert!(table.is_disabled(
      NaiveDate::from_ymd_opt(
        2024, 6, 5
      )
      .expect("valid date")
    ));
  }

  #[test]
  fn bad_toml_falls_back_to_defaults()
  {
    let config =
      PickerConfig::from_toml_str(
        "max_days = \"ten\""
      );
    assert_eq!(config.max_days, 10);
  }

  #[test]
  fn zero_and_oversized_max_days_are_sanitized()
  {
    let config =
      PickerConfig::from_toml_str(
        "max_days = 0"
      );
    assert_eq!(config.max_days, 10);

    let config =
      PickerConfig::from_toml_str(
        "max_days = 400"
      );
    assert_eq!(config.max_days, 90);
  }

  #[test]
  fn malformed_messages_are_dropped()
  {
    let config =
      PickerConfig::from_toml_str(
        r#"
[[date_messages]]
date = "05/06/2024"
message = "bad key"
"#
      );
    assert!(config
      .message_table()
      .is_empty());
  }
}
