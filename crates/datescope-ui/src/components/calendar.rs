use chrono::{
  Datelike,
  NaiveDate,
  Utc
};
use chrono_tz::Tz;
use datescope_core::config::PickerConfig;
use datescope_core::grid::{
  MonthStep,
  first_day_of_month,
  navigate_month
};
use datescope_core::messages::{
  MessageKind,
  MessageTable
};
use datescope_core::range::DateRange;
use datescope_core::selection::{
  RangeSelection,
  SelectionEvent
};
use datescope_core::timezone::TimezoneSet;
use gloo::timers::callback::Timeout;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use super::calendar_footer::CalendarFooter;
use super::calendar_grid::CalendarGrid;
use super::calendar_navigation::CalendarNavigation;
use super::timezone_selector::TimezoneSelector;
use super::tooltip::Tooltip;

const NOTICE_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
  pub config:   PickerConfig,
  pub messages: MessageTable,
  pub max_days: u32,
  #[prop_or_default]
  pub zones:    TimezoneSet,
  /// Fires on every selection
  /// mutation, partial included.
  #[prop_or_default]
  pub on_date_select:
    Callback<DateRange>,
  pub on_confirm:
    Callback<(DateRange, Tz)>,
  pub on_cancel: Callback<()>
}

/// Range-picking calendar. Owns the
/// selection machine, the visible
/// month and the display timezone;
/// confirmed ranges leave through
/// `on_confirm`.
#[function_component(Calendar)]
pub fn calendar(
  props: &CalendarProps
) -> Html {
  let timezone = use_state(|| {
    props.config.initial_timezone
  });
  let now = Utc::now();
  // The zone selector affects
  // formatting only; the reference
  // date for bounds and the today
  // ring never follows it.
  let today = now.date_naive();

  let selection = use_state(|| {
    RangeSelection::new(
      props.max_days,
      props.config.range_mode
    )
  });
  let month = use_state(|| {
    first_day_of_month(
      today.year(),
      today.month()
    )
  });

  let notice =
    use_state(|| None::<String>);
  // Holding the timeout keeps it
  // alive; replacing or dropping it
  // cancels the pending clear.
  let notice_timer =
    use_mut_ref(|| None::<Timeout>);

  let show_notice = {
    let notice = notice.clone();
    let notice_timer =
      notice_timer.clone();
    Callback::from(
      move |text: String| {
        notice.set(Some(text));
        let clear = {
          let notice = notice.clone();
          Timeout::new(
            NOTICE_MS,
            move || notice.set(None)
          )
        };
        *notice_timer.borrow_mut() =
          Some(clear);
      }
    )
  };

  let on_date_click = {
    let selection = selection.clone();
    let show_notice =
      show_notice.clone();
    let on_date_select =
      props.on_date_select.clone();
    let max_days = props.max_days;
    Callback::from(
      move |date: NaiveDate| {
        let mut next =
          (*selection).clone();
        next.set_max_days(max_days);
        match next.click(date) {
          | SelectionEvent::Changed(
            range
          ) => {
            tracing::debug!(
              ?range,
              "selection changed"
            );
            selection.set(next);
            on_date_select
              .emit(range);
          }
          | SelectionEvent::MaxDaysExceeded {
            max_days,
            ..
          } => {
            show_notice.emit(format!(
              "Maximum {max_days} \
               days allowed"
            ));
          }
          | SelectionEvent::Cancelled => {}
        }
      }
    )
  };

  let on_max_days_exceeded = {
    let show_notice =
      show_notice.clone();
    let max_days = props.max_days;
    Callback::from(
      move |_date: NaiveDate| {
        show_notice.emit(format!(
          "Maximum {max_days} days \
           allowed"
        ));
      }
    )
  };

  let on_step = {
    let month = month.clone();
    Callback::from(
      move |step: MonthStep| {
        month.set(navigate_month(
          *month, step
        ));
      }
    )
  };

  let on_tz_change = {
    let timezone = timezone.clone();
    Callback::from(move |tz: Tz| {
      tracing::debug!(
        timezone = %tz,
        "display timezone changed"
      );
      timezone.set(tz);
    })
  };

  let cancel = {
    let selection = selection.clone();
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |(): ()| {
      let mut next =
        (*selection).clone();
      next.cancel();
      selection.set(next);
      on_cancel.emit(());
    })
  };

  let confirm = {
    let selection = selection.clone();
    let timezone = timezone.clone();
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(move |(): ()| {
      if let Some(range) =
        selection.confirm()
      {
        on_confirm
          .emit((range, *timezone));
      }
    })
  };

  let range = selection.range();
  let notice_text = (*notice)
    .clone()
    .unwrap_or_default();

  html! {
      <div class="calendar" role="dialog" aria-label="Select date range">
          <CalendarNavigation
              month={*month}
              timezone={*timezone}
              on_step={on_step}
          />
          <Tooltip
              content={notice_text.clone()}
              kind={MessageKind::Warning}
              visible={!notice_text.is_empty()}
          >
              <CalendarGrid
                  month={*month}
                  {today}
                  {range}
                  bounds={props.config.bounds.clone()}
                  max_days={props.max_days}
                  messages={props.messages.clone()}
                  on_date_click={on_date_click}
                  on_max_days_exceeded={on_max_days_exceeded}
              />
          </Tooltip>
          <TimezoneSelector
              zones={props.zones.clone()}
              selected={*timezone}
              on_change={on_tz_change}
          />
          <CalendarFooter
              {range}
              timezone={*timezone}
              {now}
              on_cancel={cancel}
              on_confirm={confirm}
          />
      </div>
  }
}
