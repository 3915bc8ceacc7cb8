//! uwsn-headless — run the underwater routing engine without a renderer.
//!
//! Loads a JSON `SimConfig` (or the defaults), applies command-line
//! overrides, runs the simulation to its configured duration, and writes
//! the energy-reading series as `uwsn_energy_<PROTOCOL>_<millis>.csv`.
//!
//! ```text
//! uwsn-headless --protocol olsr --nodes 60 --duration 30 --output out/
//! uwsn-headless --config run.json --all-protocols
//! RUST_LOG=debug uwsn-headless --stream
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use uw_core::{Protocol, SimConfig};
use uw_output::{CsvWriter, ExportOutcome, ReadingsObserver, export_readings, timestamped_path};
use uw_sim::{
    EnergyReading, FrameSnapshot, NoopObserver, PacketEvent, SimBuilder, SimObserver, Statistics,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a SimConfig; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Routing protocol (VBF, HHVBF, DBR, EEDBR, OLSR, BASIC)
    #[arg(short, long)]
    protocol: Option<Protocol>,

    /// Number of sensor nodes
    #[arg(short, long)]
    nodes: Option<usize>,

    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(short, long)]
    duration: Option<f64>,

    /// Directory for exported CSV files
    #[arg(short, long, default_value = "output/uwsn")]
    output: PathBuf,

    /// Run every protocol on the same layout, one export each
    #[arg(long)]
    all_protocols: bool,

    /// Write readings while the run progresses instead of once at the end
    #[arg(long)]
    stream: bool,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs run progress in quarter steps and counts packet events, then hands
/// every callback on to `inner`.
struct Progress<O: SimObserver> {
    inner:      O,
    next_pct:   u32,
    emitted:    u64,
    delivered:  u64,
    absorbed:   u64,
}

impl<O: SimObserver> Progress<O> {
    fn new(inner: O) -> Self {
        Self { inner, next_pct: 25, emitted: 0, delivered: 0, absorbed: 0 }
    }
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_frame(&mut self, frame: &FrameSnapshot) {
        let pct = (frame.progress * 100.0) as u32;
        if pct >= self.next_pct {
            info!(
                "{pct:>3}%  t={:.1}s  live packets={}  sent={}",
                frame.elapsed_secs,
                frame.packets.len(),
                frame.stats.packets_sent
            );
            self.next_pct += 25;
        }
        self.inner.on_frame(frame);
    }

    fn on_packet(&mut self, event: &PacketEvent) {
        match event {
            PacketEvent::Emitted { .. }   => self.emitted += 1,
            PacketEvent::Delivered { .. } => self.delivered += 1,
            PacketEvent::Absorbed { .. }  => self.absorbed += 1,
        }
        self.inner.on_packet(event);
    }

    fn on_statistics(&mut self, stats: &Statistics, reading: &EnergyReading) {
        self.inner.on_statistics(stats, reading);
    }

    fn on_sim_end(&mut self, final_stats: &Statistics) {
        self.inner.on_sim_end(final_stats);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(p) = args.protocol {
        config.protocol = p;
    }
    if let Some(n) = args.nodes {
        config.node_count = n;
    }
    if let Some(s) = args.seed {
        config.seed = s;
    }
    if let Some(d) = args.duration {
        config.duration_secs = d;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run_one(config: SimConfig, output: &Path, stream: bool) -> Result<Statistics> {
    let protocol = config.protocol;
    let mut sim = SimBuilder::from_config(config).build()?;
    let t0 = Instant::now();

    let (emitted, delivered, absorbed) = if stream {
        let path = timestamped_path(output, protocol);
        let writer = CsvWriter::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut obs = Progress::new(ReadingsObserver::new(writer));
        sim.run(&mut obs)?;
        if let Some(e) = obs.inner.take_error() {
            warn!("streaming output error: {e}");
        }
        info!("streamed {} readings to {}", obs.inner.written(), path.display());
        (obs.emitted, obs.delivered, obs.absorbed)
    } else {
        let mut obs = Progress::new(NoopObserver);
        sim.run(&mut obs)?;
        match export_readings(output, protocol, sim.readings())? {
            ExportOutcome::Written(path)   => info!("wrote {}", path.display()),
            ExportOutcome::NothingToExport => warn!("{protocol}: no readings to export"),
        }
        (obs.emitted, obs.delivered, obs.absorbed)
    };

    info!(
        "{protocol}: finished in {:.3} s wall, packets emitted={emitted} delivered={delivered} absorbed={absorbed}",
        t0.elapsed().as_secs_f64()
    );
    Ok(sim.statistics())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let protocols: Vec<Protocol> = if args.all_protocols {
        Protocol::ALL.to_vec()
    } else {
        vec![config.protocol]
    };

    info!(
        "{} nodes, seed {}, {:.1}s per run, {} run(s)",
        config.node_count,
        config.seed,
        config.duration_secs,
        protocols.len()
    );

    let mut results = Vec::with_capacity(protocols.len());
    for protocol in protocols {
        let stats = run_one(SimConfig { protocol, ..config.clone() }, &args.output, args.stream)?;
        results.push((protocol, stats));
    }

    println!();
    println!(
        "{:<8} {:>8} {:>9} {:>9} {:>10} {:>10} {:>10}",
        "Protocol", "Sent", "Received", "Ratio", "Bytes", "AvgE(J)", "MaxE(J)"
    );
    println!("{}", "-".repeat(70));
    for (protocol, s) in &results {
        println!(
            "{:<8} {:>8} {:>9} {:>9.3} {:>10} {:>10.2} {:>10.2}",
            protocol.as_str(),
            s.packets_sent,
            s.packets_received,
            s.delivery_ratio(),
            s.bytes_sent,
            s.avg_energy,
            s.max_energy
        );
    }
    Ok(())
}
