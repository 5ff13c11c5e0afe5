use chrono::{
  DateTime,
  Utc
};
use chrono_tz::Tz;
use datescope_core::range::DateRange;
use datescope_core::timezone::format_date_range;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarFooterProps {
  pub range:      DateRange,
  pub timezone:   Tz,
  pub now:        DateTime<Utc>,
  pub on_cancel:  Callback<()>,
  pub on_confirm: Callback<()>
}

#[function_component(CalendarFooter)]
pub fn calendar_footer(
  props: &CalendarFooterProps
) -> Html {
  let cancel = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(())
      }
    )
  };
  let confirm = {
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_confirm.emit(())
      }
    )
  };

  let readout = format_date_range(
    &props.range,
    props.timezone,
    props.now
  );

  html! {
      <div class="calendar-footer">
          <span class="range-readout">{ readout }</span>
          <div class="footer-actions">
              <button
                  type="button"
                  class="btn-cancel"
                  onclick={cancel}
              >
                  { "Cancel" }
              </button>
              <button
                  type="button"
                  class="btn-confirm"
                  disabled={!props.range.is_complete()}
                  onclick={confirm}
              >
                  { "Go" }
              </button>
          </div>
      </div>
  }
}
