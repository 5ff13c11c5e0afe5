use datescope_core::messages::MessageKind;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
  pub content:  String,
  #[prop_or(MessageKind::Info)]
  pub kind:     MessageKind,
  #[prop_or(false)]
  pub visible:  bool,
  pub children: Html
}

/// Positioned bubble above the
/// wrapped element; rendered only
/// while visible with non-empty
/// content.
#[function_component(Tooltip)]
pub fn tooltip(
  props: &TooltipProps
) -> Html {
  let show = props.visible
    && !props.content.is_empty();

  html! {
      <div class="tooltip-host">
          { props.children.clone() }
          {
              if show {
                  html! {
                      <div
                          class={classes!("tooltip", props.kind.as_str())}
                          role="tooltip"
                      >
                          { &props.content }
                          <div class="tooltip-arrow"></div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
