use chrono_tz::Tz;
use datescope_core::timezone::TimezoneSet;
use web_sys::HtmlSelectElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TimezoneSelectorProps {
  pub zones:    TimezoneSet,
  pub selected: Tz,
  pub on_change: Callback<Tz>
}

#[function_component(
  TimezoneSelector
)]
pub fn timezone_selector(
  props: &TimezoneSelectorProps
) -> Html {
  let onchange = {
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: Event| {
      let Some(select) = e
        .target_dyn_into::<HtmlSelectElement>()
      else {
        return;
      };
      match select.value().parse::<Tz>()
      {
        | Ok(tz) => on_change.emit(tz),
        | Err(_) => {
          tracing::warn!(
            value = %select.value(),
            "unknown timezone from \
             selector"
          );
        }
      }
    })
  };

  html! {
      <label class="tz-selector">
          <span class="tz-label">{ "Timezone" }</span>
          <select {onchange}>
              {
                  for props.zones.options().iter().map(|opt| html! {
                      <option
                          value={opt.tz.name().to_string()}
                          selected={opt.tz == props.selected}
                      >
                          { opt.label.clone() }
                      </option>
                  })
              }
          </select>
      </label>
  }
}
