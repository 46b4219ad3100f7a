use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridkernel::config::Params;
use gridkernel::render::render_table;
use gridkernel::{BoundaryPolicy, KernelKind};

#[derive(Parser)]
#[clap(name = "gridkernel")]
#[clap(about = "Extract cell neighborhoods and apply kernels over a sample grid", long_about = None)]
struct Cli {
    /// Increase output verbosity
    #[clap(short, long, action = clap::ArgAction::Count, default_value = "0")]
    verbose: u8,

    /// Sample grid height
    #[clap(long)]
    rows: Option<usize>,

    /// Sample grid width
    #[clap(long)]
    cols: Option<usize>,

    /// Value of the top-left cell; the rest count up row-major
    #[clap(long, allow_hyphen_values = true)]
    start: Option<i32>,

    /// Center row of the extracted neighborhood
    #[clap(long)]
    row: Option<usize>,

    /// Center column of the extracted neighborhood
    #[clap(long)]
    col: Option<usize>,

    /// Neighborhood radius
    #[clap(short, long)]
    radius: Option<usize>,

    /// Boundary policy: zero_fill or wrap
    #[clap(short, long)]
    policy: Option<BoundaryPolicy>,

    /// Kernel to apply over the whole grid (identity, sum, mean, max, min, median)
    #[clap(short, long)]
    kernel: Option<KernelKind>,

    /// Width of each printed cell
    #[clap(long)]
    width: Option<usize>,

    /// Print the report as JSON instead of tables
    #[clap(long)]
    json: bool,
}

impl Cli {
    fn params(&self) -> Params {
        let d = Params::default();
        Params {
            rows: self.rows.unwrap_or(d.rows),
            cols: self.cols.unwrap_or(d.cols),
            start: self.start.unwrap_or(d.start),
            center_row: self.row.unwrap_or(d.center_row),
            center_col: self.col.unwrap_or(d.center_col),
            radius: self.radius.unwrap_or(d.radius),
            policy: self.policy.unwrap_or(d.policy),
            kernel: self.kernel.or(d.kernel),
            cell_width: self.width.unwrap_or(d.cell_width),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = cli.params();
    let (report, timings) = gridkernel::run(&params)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let w = params.cell_width;
    print!("{}", render_table(&report.grid, w));
    println!();
    println!(
        "neighborhood of ({}, {}), radius {}, {}:",
        params.center_row, params.center_col, params.radius, params.policy
    );
    print!("{}", render_table(&report.window, w));

    if let (Some(kind), Some(out)) = (params.kernel, &report.transformed) {
        println!();
        println!("{kind} over every cell:");
        print!("{}", render_table(out, w));
    }

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.3} ms", t.name, t.ms);
    }

    Ok(())
}
