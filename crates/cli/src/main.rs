use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use perspective::api::{drive, Classification, Configuration, CoordTable};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "perspective-cli")]
#[command(about = "Side-classified TikZ diagrams of two segments on four points")]
struct Cmd {
    /// Defaults to `generate` into the current directory
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Write `<code>.tex` for the configuration and its x/z, y/w swap
    Generate {
        #[arg(long, default_value = ".")]
        out: PathBuf,
        #[arg(long, default_value_t = Configuration::IDENTITY)]
        conf: Configuration,
        /// Also write `<code>.provenance.json` next to each diagram
        #[arg(long)]
        provenance: bool,
    },
    /// Print side codes without writing files
    Classify {
        #[arg(long, conflicts_with = "all")]
        conf: Option<Configuration>,
        /// Every role assignment of the four points
        #[arg(long)]
        all: bool,
    },
    /// Print a JSON summary of the configuration and its swap
    Report {
        #[arg(long, default_value_t = Configuration::IDENTITY)]
        conf: Configuration,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let table = CoordTable::standard();
    match cmd.action {
        None => generate(Path::new("."), Configuration::IDENTITY, false, &table),
        Some(Action::Generate {
            out,
            conf,
            provenance,
        }) => generate(&out, conf, provenance, &table),
        Some(Action::Classify { conf, all }) => classify(conf, all, &table),
        Some(Action::Report { conf }) => report(conf, &table),
    }
}

fn generate(out: &Path, conf: Configuration, provenance: bool, table: &CoordTable) -> Result<()> {
    tracing::info!(out = %out.display(), %conf, provenance, "generate");
    let paths = drive(&conf, table, out).with_context(|| format!("generating from {conf}"))?;
    for (conf, path) in [conf, conf.swapped()].iter().zip(&paths) {
        let cls = Classification::of(conf, table);
        tracing::debug!(%conf, sides = ?cls.sides, "classified");
        tracing::info!(%conf, code = %cls, path = %path.display(), "wrote");
        if provenance {
            let coords: Vec<(String, [f64; 2])> = table
                .iter()
                .map(|(n, p)| (n.to_string(), [p.x, p.y]))
                .collect();
            let payload = Payload::new(json!({
                "conf": conf.to_string(),
                "code": cls.code(),
                "coords": coords,
            }));
            provenance::write_sidecar(path, payload)
                .with_context(|| format!("provenance for {}", path.display()))?;
        }
    }
    Ok(())
}

fn classify(conf: Option<Configuration>, all: bool, table: &CoordTable) -> Result<()> {
    let confs = if all {
        Configuration::all()
    } else {
        vec![conf.unwrap_or_default()]
    };
    for conf in confs {
        println!("{conf}  {}", Classification::of(&conf, table));
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportRow {
    conf: String,
    code: String,
    sides: Vec<String>,
    file: String,
}

impl ReportRow {
    fn new(conf: &Configuration, table: &CoordTable) -> Self {
        let cls = Classification::of(conf, table);
        Self {
            conf: conf.to_string(),
            code: cls.code(),
            sides: cls.sides.iter().map(|s| s.to_string()).collect(),
            file: cls.file_name(),
        }
    }
}

#[derive(Serialize)]
struct Report {
    code_rev: String,
    version: &'static str,
    configurations: Vec<ReportRow>,
}

fn build_report(conf: Configuration, table: &CoordTable) -> Report {
    Report {
        code_rev: provenance::current_git_rev(),
        version: perspective::VERSION,
        configurations: [conf, conf.swapped()]
            .iter()
            .map(|c| ReportRow::new(c, table))
            .collect(),
    }
}

fn report(conf: Configuration, table: &CoordTable) -> Result<()> {
    let obj = build_report(conf, table);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
