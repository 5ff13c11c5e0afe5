use chrono::NaiveDate;
use chrono_tz::Tz;
use datescope_core::range::DateRange;
use datescope_shared::ProductsPage;
use datescope_shared::records::{
  FetchRequest,
  FetchResponse,
  records_in_range,
  records_with_spread_dates
};
use gloo::net::http::Request;

const PRODUCTS_ENDPOINT: &str =
  "https://dummyjson.com/products";
const FETCH_LIMIT: u32 = 30;
const FALLBACK_ROWS: usize = 15;

/// Fetches demo products and keeps
/// the rows whose creation date
/// falls inside the confirmed
/// range. The demo data is pinned to
/// mid-2024, so an empty match falls
/// back to rows with dates spread
/// across the range.
pub async fn fetch_records(
  start: NaiveDate,
  end: NaiveDate,
  tz: Tz
) -> Result<FetchResponse, String> {
  let request =
    FetchRequest::for_range(
      start, end, tz
    );
  tracing::info!(
    start = %request.start_date,
    end = %request.end_date,
    timezone = %request.timezone,
    "fetching records"
  );

  let page: ProductsPage =
    Request::get(&format!(
      "{PRODUCTS_ENDPOINT}?limit={FETCH_LIMIT}"
    ))
    .send()
    .await
    .map_err(|error| {
      format!(
        "request failed: {error}"
      )
    })?
    .json()
    .await
    .map_err(|error| {
      format!(
        "decode failed: {error}"
      )
    })?;

  let mut data = records_in_range(
    &page.products,
    start,
    end
  );
  if data.is_empty() {
    tracing::info!(
      fetched = page.products.len(),
      "no creation dates in range; \
       spreading demo rows"
    );
    data = records_with_spread_dates(
      &page.products,
      start,
      end,
      FALLBACK_ROWS
    );
  }

  tracing::info!(
    matched = data.len(),
    "records fetched"
  );
  Ok(FetchResponse {
    data,
    total: page.total,
    range: DateRange::complete(
      start, end
    )
  })
}
