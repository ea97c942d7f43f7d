pub mod row;
pub mod status;

pub use row::{ListRow, RowAction, RowActions, RowRequest};
pub use status::{fetch_rows, toggle_status};
