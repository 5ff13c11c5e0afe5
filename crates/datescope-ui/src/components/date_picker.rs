use chrono_tz::Tz;
use datescope_core::config::PickerConfig;
use datescope_core::messages::MessageTable;
use datescope_core::range::DateRange;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  HtmlElement,
  KeyboardEvent,
  Node
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

use super::calendar::Calendar;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
  pub config:   PickerConfig,
  pub messages: MessageTable,
  pub max_days: u32,
  pub label:    String,
  #[prop_or_default]
  pub on_date_select:
    Callback<DateRange>,
  pub on_confirm:
    Callback<(DateRange, Tz)>,
  #[prop_or_default]
  pub on_cancel: Callback<()>
}

/// Popover shell around the
/// calendar. Closing unmounts the
/// calendar, so every open starts
/// from an empty selection.
#[function_component(DatePicker)]
pub fn date_picker(
  props: &DatePickerProps
) -> Html {
  let open = use_state(|| false);
  let container = use_node_ref();
  let trigger = use_node_ref();

  let dismiss = {
    let open = open.clone();
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |(): ()| {
      open.set(false);
      on_cancel.emit(());
    })
  };

  {
    let container = container.clone();
    let trigger = trigger.clone();
    let dismiss = dismiss.clone();
    use_effect_with(
      *open,
      move |is_open: &bool| {
        let mut listeners =
          Vec::new();
        if *is_open {
          let document =
            gloo::utils::document();

          let outside_click = {
            let container =
              container.clone();
            let dismiss =
              dismiss.clone();
            EventListener::new(
              &document,
              "mousedown",
              move |event| {
                let inside = event
                  .target()
                  .and_then(|t| {
                    t.dyn_into::<Node>()
                      .ok()
                  })
                  .and_then(|node| {
                    container
                      .get()
                      .map(|c| {
                        c.contains(
                          Some(&node)
                        )
                      })
                  })
                  .unwrap_or(false);
                if !inside {
                  dismiss.emit(());
                }
              }
            )
          };

          // Escape closes and hands
          // focus back to the trigger.
          let escape = {
            let trigger =
              trigger.clone();
            let dismiss =
              dismiss.clone();
            EventListener::new(
              &document,
              "keydown",
              move |event| {
                let Some(key_event) =
                  event.dyn_ref::<KeyboardEvent>()
                else {
                  return;
                };
                if key_event.key()
                  != "Escape"
                {
                  return;
                }
                dismiss.emit(());
                if let Some(button) =
                  trigger
                    .cast::<HtmlElement>()
                {
                  let _ =
                    button.focus();
                }
              }
            )
          };

          listeners
            .push(outside_click);
          listeners.push(escape);
        }
        move || drop(listeners)
      }
    );
  }

  let toggle = {
    let open = open.clone();
    Callback::from(
      move |_: MouseEvent| {
        open.set(!*open);
      }
    )
  };

  let confirm = {
    let open = open.clone();
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(
      move |picked: (DateRange, Tz)| {
        open.set(false);
        on_confirm.emit(picked);
      }
    )
  };

  html! {
      <div class="date-picker" ref={container}>
          <button
              type="button"
              class="picker-trigger"
              ref={trigger}
              aria-haspopup="dialog"
              aria-expanded={open.to_string()}
              onclick={toggle}
          >
              { props.label.clone() }
          </button>
          if *open {
              <div class="picker-popover">
                  <Calendar
                      config={props.config.clone()}
                      messages={props.messages.clone()}
                      max_days={props.max_days}
                      on_date_select={props.on_date_select.clone()}
                      on_confirm={confirm}
                      on_cancel={dismiss}
                  />
              </div>
          }
      </div>
  }
}
