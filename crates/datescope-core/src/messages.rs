use std::collections::BTreeMap;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

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
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
  #[default]
  Info,
  Warning,
  Error,
  Success
}

impl MessageKind {
  #[must_use]
  pub fn as_str(&self) -> &'static str
  {
    match self {
      | Self::Info => "info",
      | Self::Warning => "warning",
      | Self::Error => "error",
      | Self::Success => "success"
    }
  }
}

/// Host-supplied per-date annotation,
/// keyed by a `YYYY-MM-DD` calendar
/// date. One message per date.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct DateMessage {
  pub date:    String,
  pub message: String,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default)]
  pub kind:    MessageKind
}

/// Resolved message for one day of
/// the grid.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct DayMessage {
  pub message:  String,
  pub disabled: bool,
  pub kind:     MessageKind
}

/// Message lookup keyed by canonical
/// date, built once per picker
/// session. A later entry for the
/// same date replaces the earlier
/// one.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct MessageTable {
  entries:
    BTreeMap<NaiveDate, DayMessage>
}

impl MessageTable {
  pub fn from_messages(
    messages: &[DateMessage]
  ) -> anyhow::Result<Self> {
    let mut entries = BTreeMap::new();

    for entry in messages {
      let date =
        NaiveDate::parse_from_str(
          &entry.date,
          "%Y-%m-%d"
        )
        .with_context(|| {
          format!(
            "invalid date key in \
             message table: {}",
            entry.date
          )
        })?;
      if entries
        .insert(
          date,
          DayMessage {
            message: entry
              .message
              .clone(),
            disabled: entry.disabled,
            kind: entry.kind
          }
        )
        .is_some()
      {
        tracing::warn!(
          date = %entry.date,
          "duplicate date message; \
           keeping the later entry"
        );
      }
    }

    Ok(Self { entries })
  }

  #[must_use]
  pub fn get(
    &self,
    date: NaiveDate
  ) -> Option<&DayMessage> {
    self.entries.get(&date)
  }

  #[must_use]
  pub fn is_disabled(
    &self,
    date: NaiveDate
  ) -> bool {
    self
      .get(date)
      .is_some_and(|msg| msg.disabled)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }
}
