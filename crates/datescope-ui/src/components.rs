mod api_status;
mod calendar;
mod calendar_footer;
mod calendar_grid;
mod calendar_navigation;
mod data_table;
mod date_cell;
mod date_info;
mod date_picker;
mod loading;
mod max_days_input;
mod timezone_selector;
mod tooltip;

pub use api_status::ApiStatus;
pub use data_table::DataTable;
pub use date_info::DateInfo;
pub use date_picker::DatePicker;
pub use loading::LoadingOverlay;
pub use max_days_input::MaxDaysInput;
