pub mod dashboard;
pub mod dataset_panel;
pub mod report;
pub mod user_list;

pub use dashboard::DashboardView;
pub use dataset_panel::{status_text, DatasetPanel};
pub use report::{render_report, Report};
pub use user_list::{UserList, UserListState};
