use chrono::{
  DateTime,
  LocalResult,
  NaiveDate,
  TimeZone
};
use chrono_tz::Tz;
use datescope_core::range::DateRange;
use serde::{
  Deserialize,
  Serialize
};

use crate::{
  Product,
  RecordStatus,
  TableRecord
};

/// Boundary instants for a confirmed
/// range, formatted the way the
/// records endpoint expects:
/// `2024-06-02 00:00:00 +0300`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct FetchRequest {
  pub start_date: String,
  pub end_date:   String,
  pub timezone:   String
}

impl FetchRequest {
  #[must_use]
  pub fn for_range(
    start: NaiveDate,
    end: NaiveDate,
    tz: Tz
  ) -> Self {
    Self {
      start_date: format_boundary(
        start, 0, 0, 0, tz
      ),
      end_date: format_boundary(
        end, 23, 59, 59, tz
      ),
      timezone: tz.name().to_string()
    }
  }
}

/// What a completed fetch hands the
/// table: the rows, the upstream
/// total and the range they were
/// filtered against.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct FetchResponse {
  pub data:  Vec<TableRecord>,
  pub total: u64,
  pub range: DateRange
}

fn format_boundary(
  date: NaiveDate,
  hour: u32,
  minute: u32,
  second: u32,
  tz: Tz
) -> String {
  let naive = date
    .and_hms_opt(
      hour, minute, second
    )
    .unwrap_or_else(|| {
      date
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
    });

  let zoned = match tz
    .from_local_datetime(&naive)
  {
    | LocalResult::Single(dt) => dt,
    | LocalResult::Ambiguous(
      first,
      _second
    ) => first,
    | LocalResult::None => {
      tz.from_utc_datetime(&naive)
    }
  };

  zoned
    .format("%Y-%m-%d %H:%M:%S %z")
    .to_string()
}

fn product_status(
  product: &Product
) -> RecordStatus {
  match product
    .availability_status
    .as_deref()
  {
    | Some(availability) => {
      RecordStatus::from_availability(
        availability
      )
    }
    | None => {
      if product.stock > 0 {
        RecordStatus::Active
      } else {
        RecordStatus::Pending
      }
    }
  }
}

fn product_created_date(
  product: &Product
) -> Option<NaiveDate> {
  let raw = product
    .meta
    .as_ref()?
    .created_at
    .as_deref()?;
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.date_naive())
    .ok()
}

/// Products whose creation date falls
/// inside the confirmed range,
/// mapped to table rows.
#[must_use]
pub fn records_in_range(
  products: &[Product],
  start: NaiveDate,
  end: NaiveDate
) -> Vec<TableRecord> {
  let records: Vec<_> = products
    .iter()
    .filter_map(|product| {
      let created =
        product_created_date(
          product
        )?;
      if created < start
        || created > end
      {
        return None;
      }
      Some(TableRecord {
        id: product.id.to_string(),
        name: product.title.clone(),
        date: created
          .format("%Y-%m-%d")
          .to_string(),
        amount: product.price,
        status: product_status(
          product
        )
      })
    })
    .collect();

  tracing::debug!(
    total = products.len(),
    matched = records.len(),
    "filtered products by creation \
     date"
  );
  records
}

/// Fallback when nothing matches the
/// selected range (the demo data is
/// pinned to mid-2024): spread the
/// first products evenly across the
/// range so the table still has rows
/// to show.
#[must_use]
pub fn records_with_spread_dates(
  products: &[Product],
  start: NaiveDate,
  end: NaiveDate,
  limit: usize
) -> Vec<TableRecord> {
  let span =
    (end - start).num_days().max(0);
  let taken =
    products.len().min(limit.max(1));

  products
    .iter()
    .take(taken)
    .enumerate()
    .map(|(index, product)| {
      let offset = if taken > 1 {
        span * index as i64
          / (taken as i64 - 1)
      } else {
        0
      };
      let date = start
        .checked_add_signed(
          chrono::Duration::days(
            offset
          )
        )
        .unwrap_or(start);
      TableRecord {
        id: product.id.to_string(),
        name: product.title.clone(),
        date: date
          .format("%Y-%m-%d")
          .to_string(),
        amount: product.price,
        status: product_status(
          product
        )
      }
    })
    .collect()
}
