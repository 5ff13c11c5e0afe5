use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ApiStatusProps {
  #[prop_or_default]
  pub error: Option<String>
}

/// Fetch error banner. Renders
/// nothing while the last request
/// succeeded.
#[function_component(ApiStatus)]
pub fn api_status(
  props: &ApiStatusProps
) -> Html {
  let Some(error) = &props.error
  else {
    return html! {};
  };

  html! {
      <div class="api-status error" role="alert">
          { format!("Failed to load records: {error}") }
      </div>
  }
}
