use clap::Parser;
use gantt_tool::render::render_df_as_text_table;
use gantt_tool::{
    ChartConfig, GanttResult, GanttSchedule, LayoutRenderer, Renderer, TableRenderer,
    input_dataframe, load_config_from_json, load_task_rows,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a Gantt chart from a CSV task list.
#[derive(Parser, Debug)]
#[command(name = "gantt", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
    /// CSV input file (Session,Task,Start,Duration,Label)
    #[arg(short, long, value_name = "FILE", default_value = "gantt.csv")]
    input: PathBuf,

    /// Chart layout output file
    #[arg(short, long, value_name = "FILE", default_value = "gantt.json")]
    output: PathBuf,

    /// Title of the chart
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,

    /// Keep every NUM-th month tick
    #[arg(short = 'x', long = "xticks", value_name = "NUM", allow_negative_numbers = true)]
    xticks: Option<i64>,

    /// Print the layout instead of writing the output file
    #[arg(short, long)]
    show: bool,

    /// Print the input and computed tables and exit
    #[arg(short, long)]
    display: bool,

    /// JSON chart configuration; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn chart_config(args: &Args) -> GanttResult<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from_json(path)?,
        None => ChartConfig::default(),
    };
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(step) = args.xticks {
        config.tick_step = step;
    }
    if args.show {
        config.show = true;
    }
    Ok(config)
}

fn run(args: &Args) -> GanttResult<()> {
    let config = chart_config(args)?;
    let rows = load_task_rows(&args.input)?;
    let schedule = GanttSchedule::build_with_palette(&rows, config.palette()?)?;

    if args.display {
        println!("Input Data:");
        print!("{}", render_df_as_text_table(&input_dataframe(&rows)?));
        println!("Output Data:");
        TableRenderer::new(io::stdout().lock()).render(&schedule, &config)?;
        return Ok(());
    }

    if config.show {
        LayoutRenderer::new(io::stdout().lock()).render(&schedule, &config)?;
    } else {
        let file = File::create(&args.output)?;
        LayoutRenderer::new(BufWriter::new(file)).render(&schedule, &config)?;
        info!(path = %args.output.display(), "layout written");
        println!("Chart layout written to {}", args.output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
