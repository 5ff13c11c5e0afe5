use datescope_shared::TableRecord;
use datescope_shared::table::{
  SortConfig,
  SortDirection,
  SortKey,
  filter_records,
  sort_records
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

const COLUMNS: [SortKey; 4] = [
  SortKey::Name,
  SortKey::Date,
  SortKey::Amount,
  SortKey::Status
];

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
  pub records: Vec<TableRecord>
}

fn column_key(
  key: SortKey
) -> &'static str {
  match key {
    | SortKey::Name => "name",
    | SortKey::Date => "date",
    | SortKey::Amount => "amount",
    | SortKey::Status => "status"
  }
}

fn column_from_value(
  value: &str
) -> Option<SortKey> {
  COLUMNS
    .into_iter()
    .find(|key| {
      column_key(*key) == value
    })
}

fn direction_marker(
  direction: Option<SortDirection>
) -> &'static str {
  match direction {
    | Some(SortDirection::Asc) => {
      " \u{25b2}"
    }
    | Some(SortDirection::Desc) => {
      " \u{25bc}"
    }
    | None => ""
  }
}

/// Sortable, searchable view of the
/// fetched records. Header clicks
/// cycle ascending, descending, then
/// back to the fetch order.
#[function_component(DataTable)]
pub fn data_table(
  props: &DataTableProps
) -> Html {
  let sort = use_state(
    SortConfig::default
  );
  let term =
    use_state(String::new);
  let column = use_state(
    || None::<SortKey>
  );

  let on_search = {
    let term = term.clone();
    Callback::from(
      move |e: InputEvent| {
        if let Some(input) = e
          .target_dyn_into::<HtmlInputElement>()
        {
          term.set(input.value());
        }
      }
    )
  };

  let on_column = {
    let column = column.clone();
    Callback::from(move |e: Event| {
      if let Some(select) = e
        .target_dyn_into::<HtmlSelectElement>()
      {
        column.set(column_from_value(
          &select.value()
        ));
      }
    })
  };

  let visible = {
    let filtered = filter_records(
      &props.records,
      &term,
      *column
    );
    sort_records(&filtered, *sort)
  };

  html! {
      <div class="data-table">
          <div class="table-controls">
              <input
                  type="search"
                  class="table-search"
                  placeholder="Search records"
                  value={(*term).clone()}
                  oninput={on_search}
              />
              <select class="table-column" onchange={on_column}>
                  <option value="all" selected={column.is_none()}>
                      { "All columns" }
                  </option>
                  {
                      for COLUMNS.into_iter().map(|key| html! {
                          <option
                              value={column_key(key)}
                              selected={*column == Some(key)}
                          >
                              { key.label() }
                          </option>
                      })
                  }
              </select>
          </div>
          <table>
              <thead>
                  <tr>
                      {
                          for COLUMNS.into_iter().map(|key| {
                              let sort_handle = sort.clone();
                              let onclick = Callback::from(move |_: MouseEvent| {
                                  sort_handle.set(sort_handle.cycled(key));
                              });
                              html! {
                                  <th scope="col" onclick={onclick}>
                                      { key.label() }
                                      { direction_marker(sort.direction_for(key)) }
                                  </th>
                              }
                          })
                      }
                  </tr>
              </thead>
              <tbody>
                  {
                      for visible.iter().map(|record| html! {
                          <tr key={record.id.to_string()}>
                              <td>{ record.name.clone() }</td>
                              <td>{ record.date.clone() }</td>
                              <td>{ format!("{:.2}", record.amount) }</td>
                              <td class={record.status.as_str()}>
                                  { record.status.as_str() }
                              </td>
                          </tr>
                      })
                  }
              </tbody>
          </table>
          if visible.is_empty() {
              <p class="table-empty">{ "No matching records" }</p>
          }
      </div>
  }
}
