// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `rings` — check discrete rings over a range of radii and print the mask catalogs.
//!
//! # Usage
//!
//! ```bash
//! # Radii 1..=120, two-neighbour masks, forbidden masks tracked
//! cargo run --release
//!
//! # A wider range on 8 threads, cataloguing every point's mask
//! cargo run --release -- --to 2000 --workers 8 --every-point --show-masks
//! ```
//!
//! Exits with status 1 if any radius fails the invariant.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use strum::IntoEnumIterator;

use ring_search::{
    CatalogScope, MaskCatalog, Survey, SurveyConfig, SurveyReport, ViolationKind,
};

#[derive(Parser, Debug)]
#[command(name = "rings")]
#[command(about = "Verify 8-connectivity of discrete lattice rings and catalogue their 3x3 masks")]
struct Args {
    /// First radius to check
    #[arg(long, default_value_t = 1)]
    from: i64,

    /// Last radius to check (inclusive)
    #[arg(long, default_value_t = 120)]
    to: i64,

    /// Do not track masks that break the adjacent-pair rule
    #[arg(long)]
    no_forbidden: bool,

    /// Catalogue the mask of every point, not only two-neighbour points
    #[arg(long)]
    every_point: bool,

    /// Worker threads (1 checks on the main thread, 0 is rejected)
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Print every catalogued mask as a 3x3 glyph grid
    #[arg(long)]
    show_masks: bool,

    /// With --show-masks, draw the centre cell like any other occupied cell
    #[arg(long)]
    plain: bool,

    /// Reduce catalogs to one mask per symmetry class before printing
    #[arg(long)]
    canonical: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scope = if args.every_point {
        CatalogScope::EveryPoint
    } else {
        CatalogScope::TwoNeighbors
    };
    let config = SurveyConfig::new()
        .with_forbidden(!args.no_forbidden)
        .with_scope(scope)
        .with_workers(args.workers);

    let survey = Survey::new(args.from, args.to, config).context("invalid radius range")?;
    let report = survey.execute().context("survey failed")?;

    print_report(&report, &args);

    if !report.all_passed() {
        process::exit(1);
    }
    Ok(())
}

fn print_report(report: &SurveyReport, args: &Args) {
    for outcome in &report.outcomes {
        let status = if outcome.verdict.is_pass() { "OK" } else { "FAIL" };
        println!(
            "r={}: |pts|={} -> {}",
            outcome.radius, outcome.point_count, status
        );
        if let Some(violation) = outcome.verdict.violation() {
            println!("       {}", violation);
        }
    }

    println!();
    if report.all_passed() {
        println!("All radii passed.");
    } else {
        let failed: Vec<String> = report.failures().map(|o| o.radius.to_string()).collect();
        println!("Failed radii: {}", failed.join(", "));
        for kind in ViolationKind::iter() {
            let count = report.statistics.failures(kind);
            if count > 0 {
                println!("  {}: {}", kind, count);
            }
        }
    }

    print_catalog("Configurations", report.catalogs.configurations(), args);
    match report.catalogs.forbidden() {
        Some(forbidden) => print_catalog("Forbidden configurations", forbidden, args),
        None => println!("Forbidden configurations: not tracked"),
    }
}

fn print_catalog(title: &str, catalog: &MaskCatalog, args: &Args) {
    let reduced;
    let catalog = if args.canonical {
        reduced = catalog.canonical_classes();
        &reduced
    } else {
        catalog
    };

    let masks: Vec<String> = catalog.iter().map(|m| m.bits().to_string()).collect();
    println!("{}: {} [{}]", title, catalog.len(), masks.join(", "));
    if args.show_masks {
        for mask in catalog.iter() {
            let grid = if args.plain { mask.plain_glyphs() } else { mask.glyphs() };
            println!("Mask {}:\n{}\n", mask.bits(), grid);
        }
    }
}
