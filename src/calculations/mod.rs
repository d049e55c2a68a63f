pub mod offsets;
pub mod resolve;

pub use offsets::{DayOffsets, day_offsets, project_end, project_start};
pub use resolve::{resolve_row, resolve_rows};
