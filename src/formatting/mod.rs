pub mod records;
pub mod theme;
pub mod utils;

pub use records::{print_record, print_rows};
pub use utils::{convert_iso_date_to_pt_br, format_relative_time, truncate};
