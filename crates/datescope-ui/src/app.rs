use chrono::Utc;
use chrono_tz::Tz;
use datescope_core::config::PickerConfig;
use datescope_core::range::DateRange;
use datescope_core::timezone::format_date_range;
use datescope_shared::TableRecord;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_memo,
  use_state
};

use crate::api;
use crate::components::{
  ApiStatus,
  DataTable,
  DateInfo,
  DatePicker,
  LoadingOverlay,
  MaxDaysInput
};

const PICKER_CONFIG: &str =
  include_str!("../picker.toml");

/// Dashboard root. Owns the
/// confirmed range, the fetched
/// rows and the max-days control;
/// everything below it is driven by
/// props.
#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    let config =
      PickerConfig::from_toml_str(
        PICKER_CONFIG
      );
    let messages =
      config.message_table();
    (config, messages)
  });
  let (config, messages) = (
    config.0.clone(),
    config.1.clone()
  );

  let max_days =
    use_state(|| config.max_days);
  let selected = use_state(|| {
    None::<(DateRange, Tz)>
  });
  let records = use_state(
    Vec::<TableRecord>::new
  );
  let loading = use_state(|| false);
  let error =
    use_state(|| None::<String>);

  let on_confirm = {
    let selected = selected.clone();
    let records = records.clone();
    let loading = loading.clone();
    let error = error.clone();
    Callback::from(
      move |(range, tz): (
        DateRange,
        Tz
      )| {
        let (
          Some(start),
          Some(end)
        ) = (range.start, range.end)
        else {
          return;
        };
        selected
          .set(Some((range, tz)));
        loading.set(true);
        error.set(None);

        let records = records.clone();
        let loading = loading.clone();
        let error = error.clone();
        spawn_local(async move {
          match api::fetch_records(
            start, end, tz
          )
          .await
          {
            | Ok(response) => {
              records
                .set(response.data);
            }
            | Err(message) => {
              tracing::error!(
                %message,
                "record fetch failed"
              );
              records
                .set(Vec::new());
              error
                .set(Some(message));
            }
          }
          loading.set(false);
        });
      }
    )
  };

  let on_cancel =
    Callback::from(|(): ()| {
      tracing::debug!(
        "picker dismissed"
      );
    });

  let on_max_days = {
    let max_days = max_days.clone();
    Callback::from(
      move |days: u32| {
        max_days.set(days);
      }
    )
  };

  let now = Utc::now();
  let (info_range, info_tz) =
    match *selected {
      | Some((range, tz)) => {
        (range, tz)
      }
      | None => (
        DateRange::empty(),
        config.initial_timezone
      )
    };
  let label = (!info_range
    .is_empty())
  .then(|| {
    format_date_range(
      &info_range, info_tz, now
    )
  })
  .unwrap_or_else(|| {
    "Select date range".to_string()
  });

  html! {
      <main class="app">
          <h1>{ "Product dashboard" }</h1>
          <div class="dashboard-controls">
              <DatePicker
                  config={config.clone()}
                  messages={messages.clone()}
                  max_days={*max_days}
                  {label}
                  on_confirm={on_confirm}
                  on_cancel={on_cancel}
              />
              <MaxDaysInput
                  value={*max_days}
                  on_change={on_max_days}
              />
          </div>
          <DateInfo
              range={info_range}
              timezone={info_tz}
              {now}
          />
          <ApiStatus error={(*error).clone()} />
          <LoadingOverlay visible={*loading} />
          <DataTable records={(*records).clone()} />
      </main>
  }
}
