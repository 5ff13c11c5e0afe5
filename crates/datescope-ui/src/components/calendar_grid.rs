use chrono::NaiveDate;
use datescope_core::cell::{
  CellContext,
  resolve_cell_click,
  resolve_cell_state
};
use datescope_core::constraint::SelectionBounds;
use datescope_core::grid::{
  WEEKDAY_LABELS,
  calendar_days
};
use datescope_core::messages::MessageTable;
use datescope_core::range::DateRange;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::date_cell::DateCell;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
  pub month:    NaiveDate,
  pub today:    NaiveDate,
  pub range:    DateRange,
  pub bounds:   SelectionBounds,
  pub max_days: u32,
  pub messages: MessageTable,
  pub on_date_click:
    Callback<NaiveDate>,
  pub on_max_days_exceeded:
    Callback<NaiveDate>
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(
  props: &CalendarGridProps
) -> Html {
  let ctx = CellContext {
    range:    props.range,
    today:    props.today,
    bounds:   &props.bounds,
    max_days: props.max_days,
    messages: &props.messages
  };

  html! {
      <div class="calendar-grid-wrap">
          <div class="weekday-row">
              {
                  for WEEKDAY_LABELS.iter().map(|label| html! {
                      <div class="weekday">{ *label }</div>
                  })
              }
          </div>
          <div class="day-grid">
              {
                  for calendar_days(props.month, props.today).map(|day| {
                      let state = resolve_cell_state(day.date, &ctx);
                      let click = resolve_cell_click(day.date, &ctx);
                      let message = props.messages.get(day.date).cloned();
                      html! {
                          <DateCell
                              key={day.date.to_string()}
                              {day}
                              {state}
                              {click}
                              {message}
                              on_select={props.on_date_click.clone()}
                              on_max_days={props.on_max_days_exceeded.clone()}
                          />
                      }
                  })
              }
          </div>
      </div>
  }
}
