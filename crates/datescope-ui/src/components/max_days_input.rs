use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

const MIN_DAYS: u32 = 1;
const MAX_DAYS: u32 = 90;

#[derive(Properties, PartialEq)]
pub struct MaxDaysInputProps {
  pub value:     u32,
  pub on_change: Callback<u32>
}

/// Numeric control for the widest
/// selectable span. Out-of-range
/// input is clamped, unparseable
/// input is ignored.
#[function_component(MaxDaysInput)]
pub fn max_days_input(
  props: &MaxDaysInputProps
) -> Html {
  let oninput = {
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let Some(input) = e
          .target_dyn_into::<HtmlInputElement>()
        else {
          return;
        };
        if let Ok(days) = input
          .value()
          .trim()
          .parse::<u32>()
        {
          on_change.emit(
            days.clamp(
              MIN_DAYS, MAX_DAYS
            )
          );
        }
      }
    )
  };

  html! {
      <label class="max-days-input">
          <span>{ "Max days" }</span>
          <input
              type="number"
              min={MIN_DAYS.to_string()}
              max={MAX_DAYS.to_string()}
              value={props.value.to_string()}
              {oninput}
          />
      </label>
  }
}
