//! Build a choropleth-style legend from per-region rates
//!
//! Run with: cargo run -p breaks-labels --example legend [config.json]
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the classifier's stages.

use breaks_jenks::{JenksClassifier, JenksConfig};
use breaks_labels::BreaksFormatter;
use tracing_subscriber::EnvFilter;

/// Unemployment-style rates for a handful of regions
const REGIONS: &[(&str, f64)] = &[
    ("Aldermoor", 3.1),
    ("Brackenfield", 3.4),
    ("Calder Rise", 3.4),
    ("Dunmere", 4.0),
    ("Eastwick", 4.2),
    ("Farrowdale", 4.9),
    ("Glenholt", 5.1),
    ("Harrowgate", 5.1),
    ("Ivybridge", 6.8),
    ("Juniper Vale", 7.0),
    ("Kestrel Point", 7.3),
    ("Larkspur", 8.9),
    ("Moorcroft", 9.4),
    ("Northfold", 12.6),
    ("Oakhaven", 13.1),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => JenksConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => JenksConfig::default(),
    };
    let classifier = JenksClassifier::with_config(config)?;

    let rates: Vec<f64> = REGIONS.iter().map(|&(_, rate)| rate).collect();
    let selection = classifier.select(&rates)?;
    let classification = selection.classification();
    let labels = BreaksFormatter::new()
        .with_separator(" to ")
        .format(&rates, classification.maxima())?;

    println!(
        "{} classes, GVF {:.4}{}",
        selection.k(),
        selection.gvf(),
        if selection.searched() { "" } else { " (direct)" }
    );
    for (k, gvf) in selection.gvf_table() {
        println!("  k={k}: GVF {gvf:.4}");
    }

    println!("\nLegend");
    for (class, (label, size)) in labels
        .iter()
        .zip(classification.class_sizes())
        .enumerate()
    {
        println!("  [{class}] {label:<14} {size} region(s)");
    }

    println!("\nRegions");
    let classes = classification.assign(&rates);
    for (&(name, rate), class) in REGIONS.iter().zip(classes) {
        let class = class.map_or_else(|| "-".to_string(), |c| c.to_string());
        println!("  {name:<14} {rate:>5.1}  class {class}");
    }

    Ok(())
}
