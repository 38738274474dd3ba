use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use field_planner::portal_list::parse_portal_list;
use field_planner::{MAX_AGENTS, PlanOptions, Planner, PortalInput};

/// Sample cluster used when no input file is given.
const SAMPLE_PORTALS: [(f64, f64); 3] = [
    (40.008008, 116.327477),
    (40.008102, 116.326605),
    (40.008034, 116.325578),
];

#[derive(Parser)]
#[command(name = "field-planner")]
#[command(about = "Plan non-crossing links and fields over a set of portals")]
struct Cmd {
    /// Portal list, one `lat,lon` or `name,lat,lon` per line
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Write the report here as well as to stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Split the plan across this many agents
    #[arg(long, short, default_value_t = 1)]
    agents: usize,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Drop fields covering more than this many other linked portals
    #[arg(long)]
    max_portals_in_field: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = Cmd::parse();
    if cmd.agents == 0 || cmd.agents > MAX_AGENTS {
        bail!("--agents must be between 1 and {}", MAX_AGENTS);
    }

    let mut options = PlanOptions::default();
    if let Some(max) = cmd.max_portals_in_field {
        options.max_portals_in_field = max;
    }

    let inputs = match &cmd.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading portal list {}", path.display()))?;
            parse_portal_list(&text)
        }
        None => {
            tracing::info!("no input given; using the built-in sample");
            SAMPLE_PORTALS
                .iter()
                .map(|&(lat, lon)| PortalInput::new(lat, lon))
                .collect()
        }
    };
    tracing::info!(portals = inputs.len(), agents = cmd.agents, "planning");

    let mut planner = Planner::new().with_options(options);
    planner.load_portals(inputs);

    let report = if cmd.agents > 1 {
        let split = planner.multi_agent_plan(cmd.agents)?;
        if cmd.json {
            serde_json::to_string_pretty(&split)?
        } else {
            split.to_string()
        }
    } else {
        let solution = planner.plan();
        if cmd.json {
            serde_json::to_string_pretty(&solution)?
        } else {
            solution.to_string()
        }
    };

    println!("{}", report);

    if let Some(path) = &cmd.output {
        std::fs::write(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "report saved");
    }

    Ok(())
}
