use chrono::{
  DateTime,
  Utc
};
use chrono_tz::Tz;
use datescope_core::range::DateRange;
use datescope_core::timezone::format_date_range;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DateInfoProps {
  pub range:    DateRange,
  pub timezone: Tz,
  pub now:      DateTime<Utc>
}

#[function_component(DateInfo)]
pub fn date_info(
  props: &DateInfoProps
) -> Html {
  if props.range.is_empty() {
    return html! {
        <p class="date-info muted">
            { "Pick a date range to load records." }
        </p>
    };
  }

  html! {
      <p class="date-info">
          { "Showing records for " }
          <strong>
              {
                  format_date_range(
                      &props.range,
                      props.timezone,
                      props.now,
                  )
              }
          </strong>
      </p>
  }
}
