pub mod records;
pub mod table;

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
  Active,
  Inactive,
  Pending,
  Completed
}

impl RecordStatus {
  /// DummyJSON availability text to
  /// dashboard status.
  #[must_use]
  pub fn from_availability(
    availability: &str
  ) -> Self {
    match availability
      .to_ascii_lowercase()
      .as_str()
    {
      | "in stock" => Self::Active,
      | "low stock" => Self::Pending,
      | "out of stock" => {
        Self::Inactive
      }
      | _ => Self::Completed
    }
  }

  #[must_use]
  pub fn as_str(&self) -> &'static str
  {
    match self {
      | Self::Active => "active",
      | Self::Inactive => "inactive",
      | Self::Pending => "pending",
      | Self::Completed => {
        "completed"
      }
    }
  }
}

/// One row of the results table.
/// `date` is a `YYYY-MM-DD` calendar
/// date string.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TableRecord {
  pub id:     String,
  pub name:   String,
  pub date:   String,
  pub amount: f64,
  pub status: RecordStatus
}

/// DummyJSON product payload, pared
/// down to the fields the dashboard
/// reads.
#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id:    u64,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub stock: u32,
  #[serde(default)]
  pub availability_status:
    Option<String>,
  #[serde(default)]
  pub meta: Option<ProductMeta>
}

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
  #[serde(default)]
  pub created_at: Option<String>
}

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
pub struct ProductsPage {
  pub products: Vec<Product>,
  #[serde(default)]
  pub total:    u64
}
