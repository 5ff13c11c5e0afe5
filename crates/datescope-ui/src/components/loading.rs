use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
  pub visible: bool
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(
  props: &LoadingOverlayProps
) -> Html {
  if !props.visible {
    return html! {};
  }

  html! {
      <div class="loading-overlay" role="status">
          <div class="spinner" />
          <span>{ "Loading records\u{2026}" }</span>
      </div>
  }
}
