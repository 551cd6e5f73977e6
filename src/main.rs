use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use priority_capacity::{
    analysis::CapacityAnalyzer,
    config::{AnalysisParams, IntersectionVolumes, Scenario},
    report,
};

#[derive(Parser)]
#[command(name = "priority-capacity")]
#[command(about = "Capacity and level of service of a priority-controlled T-intersection")]
struct Args {
    /// Hourly volume of movement 2 (major road, through)
    #[arg(long, required_unless_present = "scenario")]
    i2: Option<u32>,

    /// Hourly volume of movement 3 (major road, right turn)
    #[arg(long, required_unless_present = "scenario")]
    i3: Option<u32>,

    /// Hourly volume of movement 4 (minor road, left turn)
    #[arg(long, required_unless_present = "scenario")]
    i4: Option<u32>,

    /// Hourly volume of movement 6 (minor road, right turn)
    #[arg(long, required_unless_present = "scenario")]
    i6: Option<u32>,

    /// Hourly volume of movement 7 (major road, left turn)
    #[arg(long, required_unless_present = "scenario")]
    i7: Option<u32>,

    /// Hourly volume of movement 8 (major road, through)
    #[arg(long, required_unless_present = "scenario")]
    i8: Option<u32>,

    /// TOML scenario file supplying the volumes; --iN options override it
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging of intermediate results
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Four-line text report
    Text,
    /// JSON object keyed by movement group
    Json,
}

impl Args {
    fn volumes(&self) -> Result<IntersectionVolumes> {
        let base = match &self.scenario {
            Some(path) => {
                let scenario = Scenario::load_from_file(path)?;
                info!(
                    "Loaded scenario {} from {}",
                    scenario.name.as_deref().unwrap_or("(unnamed)"),
                    path.display()
                );
                Some(scenario.volumes)
            }
            None => None,
        };

        let pick = |flag: Option<u32>, from_file: Option<u32>, name: &str| {
            flag.or(from_file)
                .ok_or_else(|| anyhow!("Missing volume --{}", name))
        };

        Ok(IntersectionVolumes {
            i2: pick(self.i2, base.map(|v| v.i2), "i2")?,
            i3: pick(self.i3, base.map(|v| v.i3), "i3")?,
            i4: pick(self.i4, base.map(|v| v.i4), "i4")?,
            i6: pick(self.i6, base.map(|v| v.i6), "i6")?,
            i7: pick(self.i7, base.map(|v| v.i7), "i7")?,
            i8: pick(self.i8, base.map(|v| v.i8), "i8")?,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();

    let volumes = args.volumes()?;
    info!(
        "Analysing volumes i2={} i3={} i4={} i6={} i7={} i8={}",
        volumes.i2, volumes.i3, volumes.i4, volumes.i6, volumes.i7, volumes.i8
    );

    let analyzer = CapacityAnalyzer::new(AnalysisParams::default())?;
    log::debug!("Analysis parameters: {:?}", analyzer.params());

    let analysis = analyzer.analyze(&volumes)?;

    match args.format {
        OutputFormat::Text => print!("{}", report::render_text(&analysis)),
        OutputFormat::Json => println!("{}", report::render_json(&analysis)?),
    }

    Ok(())
}
