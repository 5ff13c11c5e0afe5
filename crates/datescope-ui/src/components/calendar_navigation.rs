use chrono::NaiveDate;
use chrono_tz::Tz;
use datescope_core::grid::MonthStep;
use datescope_core::timezone::month_year_display;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarNavigationProps {
  pub month:    NaiveDate,
  pub timezone: Tz,
  pub on_step:  Callback<MonthStep>
}

#[function_component(
  CalendarNavigation
)]
pub fn calendar_navigation(
  props: &CalendarNavigationProps
) -> Html {
  let prev = {
    let on_step = props.on_step.clone();
    Callback::from(move |_| {
      on_step.emit(MonthStep::Prev)
    })
  };
  let next = {
    let on_step = props.on_step.clone();
    Callback::from(move |_| {
      on_step.emit(MonthStep::Next)
    })
  };

  html! {
      <div class="calendar-nav">
          <button
              type="button"
              class="nav-btn"
              aria-label="Previous month"
              onclick={prev}
          >
              { "\u{2039}" }
          </button>
          <span class="nav-month" aria-live="polite">
              { month_year_display(props.month, props.timezone) }
          </span>
          <button
              type="button"
              class="nav-btn"
              aria-label="Next month"
              onclick={next}
          >
              { "\u{203a}" }
          </button>
      </div>
  }
}
