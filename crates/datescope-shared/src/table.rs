use std::cmp::Ordering;

use serde::{
  Deserialize,
  Serialize
};

use crate::TableRecord;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
  Name,
  Date,
  Amount,
  Status
}

impl SortKey {
  #[must_use]
  pub fn label(&self) -> &'static str
  {
    match self {
      | Self::Name => "Product Name",
      | Self::Date => "Created Date",
      | Self::Amount => "Price ($)",
      | Self::Status => {
        "Availability"
      }
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SortDirection {
  Asc,
  Desc
}

/// Current sort of the results
/// table. Clicking the same header
/// cycles ascending, descending,
/// unsorted; clicking another header
/// starts ascending there.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct SortConfig {
  pub sort: Option<(
    SortKey,
    SortDirection
  )>
}

impl SortConfig {
  #[must_use]
  pub fn cycled(
    self,
    key: SortKey
  ) -> Self {
    let sort = match self.sort {
      | Some((
        current,
        SortDirection::Asc
      )) if current == key => {
        Some((
          key,
          SortDirection::Desc
        ))
      }
      | Some((
        current,
        SortDirection::Desc
      )) if current == key => None,
      | _ => {
        Some((key, SortDirection::Asc))
      }
    };
    Self { sort }
  }

  #[must_use]
  pub fn direction_for(
    &self,
    key: SortKey
  ) -> Option<SortDirection> {
    self.sort.and_then(
      |(current, direction)| {
        (current == key)
          .then_some(direction)
      }
    )
  }
}

fn compare_records(
  a: &TableRecord,
  b: &TableRecord,
  key: SortKey
) -> Ordering {
  match key {
    | SortKey::Name => a
      .name
      .to_lowercase()
      .cmp(&b.name.to_lowercase()),
    | SortKey::Date => {
      a.date.cmp(&b.date)
    }
    | SortKey::Amount => a
      .amount
      .partial_cmp(&b.amount)
      .unwrap_or(Ordering::Equal),
    | SortKey::Status => a
      .status
      .as_str()
      .cmp(b.status.as_str())
  }
}

/// Stable sort under the current
/// config; no-op while unsorted.
#[must_use]
pub fn sort_records(
  records: &[TableRecord],
  config: SortConfig
) -> Vec<TableRecord> {
  let mut sorted = records.to_vec();
  if let Some((key, direction)) =
    config.sort
  {
    sorted.sort_by(|a, b| {
      let ordering =
        compare_records(a, b, key);
      match direction {
        | SortDirection::Asc => {
          ordering
        }
        | SortDirection::Desc => {
          ordering.reverse()
        }
      }
    });
  }
  sorted
}

/// Case-insensitive substring match
/// over one column, or every column
/// when `column` is `None`.
#[must_use]
pub fn filter_records(
  records: &[TableRecord],
  term: &str,
  column: Option<SortKey>
) -> Vec<TableRecord> {
  let needle =
    term.trim().to_lowercase();
  if needle.is_empty() {
    return records.to_vec();
  }

  records
    .iter()
    .filter(|record| {
      match column {
        | Some(key) => {
          field_text(record, key)
            .to_lowercase()
            .contains(&needle)
        }
        | None => {
          [
            SortKey::Name,
            SortKey::Date,
            SortKey::Amount,
            SortKey::Status,
          ]
          .iter()
          .any(|key| {
            field_text(record, *key)
              .to_lowercase()
              .contains(&needle)
          })
        }
      }
    })
    .cloned()
    .collect()
}

fn field_text(
  record: &TableRecord,
  key: SortKey
) -> String {
  match key {
    | SortKey::Name => {
      record.name.clone()
    }
    | SortKey::Date => {
      record.date.clone()
    }
    | SortKey::Amount => {
      record.amount.to_string()
    }
    | SortKey::Status => record
      .status
      .as_str()
      .to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::RecordStatus;

  fn record(
    id: &str,
    name: &str,
    date: &str,
    amount: f64,
    status: RecordStatus
  ) -> TableRecord {
    TableRecord {
      id: id.to_string(),
      name: name.to_string(),
      date: date.to_string(),
      amount,
      status
    }
  }

  fn sample() -> Vec<TableRecord> {
    vec![
      record(
        "1",
        "Mascara",
        "2024-06-03",
        9.99,
        RecordStatus::Active
      ),
      record(
        "2",
        "eyeshadow",
        "2024-06-01",
        19.99,
        RecordStatus::Pending
      ),
      record(
        "3",
        "Lipstick",
        "2024-06-02",
        4.99,
        RecordStatus::Inactive
      ),
    ]
  }

  #[test]
  fn sort_cycle_asc_desc_none() {
    let config = SortConfig::default();
    let asc =
      config.cycled(SortKey::Name);
    assert_eq!(
      asc.direction_for(
        SortKey::Name
      ),
      Some(SortDirection::Asc)
    );

    let desc =
      asc.cycled(SortKey::Name);
    assert_eq!(
      desc.direction_for(
        SortKey::Name
      ),
      Some(SortDirection::Desc)
    );

    let cleared =
      desc.cycled(SortKey::Name);
    assert_eq!(cleared.sort, None);
  }

  #[test]
  fn switching_column_restarts_asc()
  {
    let config = SortConfig::default()
      .cycled(SortKey::Name)
      .cycled(SortKey::Name);
    let switched =
      config.cycled(SortKey::Amount);
    assert_eq!(
      switched.sort,
      Some((
        SortKey::Amount,
        SortDirection::Asc
      ))
    );
  }

  #[test]
  fn name_sort_is_case_insensitive()
  {
    let config = SortConfig {
      sort: Some((
        SortKey::Name,
        SortDirection::Asc
      ))
    };
    let sorted = sort_records(
      &sample(),
      config
    );
    let names: Vec<_> = sorted
      .iter()
      .map(|record| {
        record.name.as_str()
      })
      .collect();
    assert_eq!(
      names,
      vec![
        "eyeshadow",
        "Lipstick",
        "Mascara",
      ]
    );
  }

  #[test]
  fn amount_sort_is_numeric() {
    let config = SortConfig {
      sort: Some((
        SortKey::Amount,
        SortDirection::Desc
      ))
    };
    let sorted = sort_records(
      &sample(),
      config
    );
    assert_eq!(sorted[0].id, "2");
    assert_eq!(sorted[2].id, "3");
  }

  #[test]
  fn unsorted_keeps_input_order() {
    let sorted = sort_records(
      &sample(),
      SortConfig::default()
    );
    let ids: Vec<_> = sorted
      .iter()
      .map(|record| {
        record.id.as_str()
      })
      .collect();
    assert_eq!(
      ids,
      vec!["1", "2", "3"]
    );
  }

  #[test]
  fn filter_across_all_columns() {
    let filtered = filter_records(
      &sample(),
      "2024-06-02",
      None
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "3");
  }

  #[test]
  fn filter_single_column() {
    let filtered = filter_records(
      &sample(),
      "pending",
      Some(SortKey::Status)
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");

    let miss = filter_records(
      &sample(),
      "pending",
      Some(SortKey::Name)
    );
    assert!(miss.is_empty());
  }

  #[test]
  fn blank_term_returns_everything()
  {
    let filtered = filter_records(
      &sample(),
      "   ",
      None
    );
    assert_eq!(filtered.len(), 3);
  }
}
