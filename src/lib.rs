pub mod calculations;
pub mod config;
pub mod duration;
pub mod error;
pub mod labels;
pub mod palette;
pub mod persistence;
pub mod render;
pub mod schedule;
pub mod task;

pub use config::{ChartConfig, load_config_from_json};
pub use duration::{SpanError, SpanUnit, TaskSpan, parse_span};
pub use error::{GanttError, GanttResult};
pub use labels::LabelTable;
pub use palette::{DEFAULT_PALETTE, Palette, assign_colors, distinct_sessions};
pub use persistence::{
    input_dataframe, load_task_rows, read_task_rows, save_schedule_to_csv, save_schedule_to_json,
};
pub use render::{ChartLayout, LayoutRenderer, Renderer, TableRenderer};
pub use schedule::GanttSchedule;
pub use task::{ResolvedTask, ScheduledTask, StartSpec, TaskRow, parse_date};
