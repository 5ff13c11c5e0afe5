use chrono::NaiveDate;
use datescope_core::cell::{
  CellClick,
  CellState,
  EndpointKind
};
use datescope_core::grid::CalendarDay;
use datescope_core::messages::DayMessage;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::tooltip::Tooltip;

#[derive(Properties, PartialEq)]
pub struct DateCellProps {
  pub day:     CalendarDay,
  pub state:   CellState,
  pub click:   CellClick,
  pub message: Option<DayMessage>,
  pub on_select: Callback<NaiveDate>,
  pub on_max_days:
    Callback<NaiveDate>
}

fn state_class(
  state: CellState
) -> &'static str {
  match state {
    | CellState::Disabled => {
      "disabled"
    }
    | CellState::BeyondMaxSpan => {
      "beyond-span"
    }
    | CellState::Endpoint(
      EndpointKind::Start
    ) => "endpoint range-start",
    | CellState::Endpoint(
      EndpointKind::End
    ) => "endpoint range-end",
    | CellState::Endpoint(
      EndpointKind::Both
    ) => "endpoint",
    | CellState::InRange => {
      "in-range"
    }
    | CellState::Plain => ""
  }
}

#[function_component(DateCell)]
pub fn date_cell(
  props: &DateCellProps
) -> Html {
  let hovered = use_state(|| false);

  let date = props.day.date;
  let click = props.click;
  let activate = {
    let on_select =
      props.on_select.clone();
    let on_max_days =
      props.on_max_days.clone();
    move || match click {
      | CellClick::Ignore => {}
      | CellClick::NotifyMaxDays => {
        on_max_days.emit(date)
      }
      | CellClick::Select => {
        on_select.emit(date)
      }
    }
  };

  let onclick = {
    let activate = activate.clone();
    Callback::from(move |_| {
      activate()
    })
  };
  let onkeydown = Callback::from(
    move |event: KeyboardEvent| {
      let key = event.key();
      if key == "Enter" || key == " "
      {
        event.prevent_default();
        activate();
      }
    }
  );

  let onmouseenter = {
    let hovered = hovered.clone();
    let has_message = props
      .message
      .as_ref()
      .is_some_and(|msg| {
        !msg.message.is_empty()
      });
    Callback::from(move |_| {
      if has_message {
        hovered.set(true);
      }
    })
  };
  let onmouseleave = {
    let hovered = hovered.clone();
    Callback::from(move |_| {
      hovered.set(false)
    })
  };

  // The message ring is a visual
  // layer only; it is dropped while
  // the cell is a selected endpoint.
  let ring_class = props
    .message
    .as_ref()
    .filter(|_| {
      !matches!(
        props.state,
        CellState::Endpoint(_)
      )
    })
    .map(|msg| {
      format!(
        "message-ring {}",
        msg.kind.as_str()
      )
    });

  let label = {
    let mut label = props
      .day
      .day_number
      .to_string();
    if props.day.is_today {
      label.push_str(" (today)");
    }
    if matches!(
      props.state,
      CellState::Endpoint(_)
    ) {
      label.push_str(" (selected)");
    }
    if let Some(msg) = &props.message
    {
      if !msg.message.is_empty() {
        label.push_str(" - ");
        label.push_str(&msg.message);
      }
    }
    label
  };

  let content = props
    .message
    .as_ref()
    .map(|msg| msg.message.clone())
    .unwrap_or_default();
  let kind = props
    .message
    .as_ref()
    .map(|msg| msg.kind)
    .unwrap_or_default();

  html! {
      <Tooltip content={content} kind={kind} visible={*hovered}>
          <button
              type="button"
              class={classes!(
                  "date-cell",
                  state_class(props.state),
                  (!props.day.in_current_month).then_some("outside"),
                  (props.day.is_today && !matches!(props.state, CellState::Endpoint(_)))
                      .then_some("today"),
                  ring_class
              )}
              disabled={!props.state.is_interactive()}
              tabindex={if props.day.in_current_month { "0" } else { "-1" }}
              aria-label={label}
              aria-pressed={matches!(props.state, CellState::Endpoint(_)).to_string()}
              {onclick}
              {onkeydown}
              {onmouseenter}
              {onmouseleave}
          >
              { props.day.day_number }
          </button>
      </Tooltip>
  }
}
