use std::io::Write;

use crate::config::ChartConfig;
use crate::error::GanttResult;
use crate::schedule::GanttSchedule;

pub mod layout;
pub mod table;

pub use layout::{Bar, BarLabel, ChartLayout, LegendEntry, SessionBand, Tick, month_ticks};
pub use table::render_df_as_text_table;

/// Consumer of a resolved schedule.
pub trait Renderer {
    fn render(&mut self, schedule: &GanttSchedule, config: &ChartConfig) -> GanttResult<()>;
}

/// Writes the schedule table as text.
pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, schedule: &GanttSchedule, _config: &ChartConfig) -> GanttResult<()> {
        write!(self.out, "{}", render_df_as_text_table(schedule.dataframe()))?;
        Ok(())
    }
}

/// Writes the [`ChartLayout`] as pretty JSON for a plotting backend.
pub struct LayoutRenderer<W: Write> {
    out: W,
}

impl<W: Write> LayoutRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for LayoutRenderer<W> {
    fn render(&mut self, schedule: &GanttSchedule, config: &ChartConfig) -> GanttResult<()> {
        let layout = ChartLayout::from_schedule(schedule, config)?;
        serde_json::to_writer_pretty(&mut self.out, &layout)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
