use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use vowelspace::api::{
    measure, sanitize, vowel_space_center, vowel_vectors, CenterMethod, ConvexHullResult,
    CvsaCfg, EmGmm, Outcome, VowelSpaceCenter, VowelSpaceMeasure, VowelSpaceMethod, VsaCfg,
    VsdCfg,
};

mod provenance;

#[derive(Parser)]
#[command(name = "vowelspace")]
#[command(about = "Vowel-space geometry (center, VSA, VSD, cVSA) over formant tables")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Input table and output location shared by every measure.
#[derive(Args)]
struct Io {
    /// CSV or Parquet file with one row per formant measurement
    #[arg(long)]
    input: String,
    /// Write JSON here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<String>,
    #[arg(long, default_value = "f1")]
    f1_col: String,
    #[arg(long, default_value = "f2")]
    f2_col: String,
}

#[derive(Subcommand)]
enum Action {
    /// Vowel-space center
    Center {
        #[command(flatten)]
        io: Io,
        #[arg(long, default_value_t = CenterMethod::WCentroid)]
        method: CenterMethod,
        /// Keep rows with missing formants (NaN propagates)
        #[arg(long)]
        keep_missing: bool,
    },
    /// Per-row norm and angle around the center
    Vectors {
        #[command(flatten)]
        io: Io,
        #[arg(long, default_value_t = CenterMethod::WCentroid)]
        method: CenterMethod,
    },
    /// Corner polygon area (VSA)
    Vsa {
        #[command(flatten)]
        io: Io,
        #[arg(long, default_value_t = CenterMethod::WCentroid)]
        method: CenterMethod,
        #[arg(long, default_value_t = 3)]
        min_corner_support: usize,
        /// Center override (F1, Hz); requires --f2c
        #[arg(long, requires = "f2c")]
        f1c: Option<f64>,
        /// Center override (F2, Hz); requires --f1c
        #[arg(long, requires = "f1c")]
        f2c: Option<f64>,
    },
    /// Density-filtered hull area (VSD)
    Vsd {
        #[command(flatten)]
        io: Io,
        #[arg(long, default_value_t = 0.05)]
        resolution: f64,
        #[arg(long, default_value_t = 0.01)]
        grid_resolution: f64,
        #[arg(long, default_value_t = 0.25)]
        density_threshold: f64,
    },
    /// Mixture-filtered hull area (cVSA)
    Cvsa {
        #[command(flatten)]
        io: Io,
        #[arg(long, default_value_t = 5)]
        components: usize,
        #[arg(long, default_value_t = 0.3)]
        likelihood_threshold: f64,
        #[arg(long)]
        center: bool,
        #[arg(long)]
        scale: bool,
        /// Seed for the mixture initialisation (unseeded runs may differ slightly)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Center {
            io,
            method,
            keep_missing,
        } => center(io, method, keep_missing),
        Action::Vectors { io, method } => vectors(io, method),
        Action::Vsa {
            io,
            method,
            min_corner_support,
            f1c,
            f2c,
        } => {
            let cfg = VsaCfg {
                method,
                center: f1c.zip(f2c).map(|(a, b)| VowelSpaceCenter::new(a, b)),
                min_corner_support,
            };
            let params = json!({
                "method": method.as_str(),
                "min_corner_support": min_corner_support,
                "f1c": f1c,
                "f2c": f2c,
            });
            run_measure(io, VowelSpaceMethod::Area(cfg), params)
        }
        Action::Vsd {
            io,
            resolution,
            grid_resolution,
            density_threshold,
        } => {
            let cfg = VsdCfg {
                resolution,
                grid_resolution,
                density_threshold,
            };
            let params = json!({
                "resolution": resolution,
                "grid_resolution": grid_resolution,
                "density_threshold": density_threshold,
            });
            run_measure(io, VowelSpaceMethod::Density(cfg), params)
        }
        Action::Cvsa {
            io,
            components,
            likelihood_threshold,
            center,
            scale,
            seed,
        } => {
            let cfg = CvsaCfg {
                num_components: components,
                likelihood_threshold,
                center,
                scale,
            };
            let em = EmGmm {
                seed,
                ..EmGmm::default()
            };
            let params = json!({
                "num_components": components,
                "likelihood_threshold": likelihood_threshold,
                "center": center,
                "scale": scale,
                "seed": seed,
            });
            run_measure(io, VowelSpaceMethod::Continuous(cfg, em), params)
        }
        Action::Report => report(),
    }
}

/// Read two formant columns as `f64`; nulls and unparsable cells become NaN.
fn read_formants(input: &str, f1_col: &str, f2_col: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let lf = if input.ends_with(".parquet") {
        LazyFrame::scan_parquet(input, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(input)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .select([col(f1_col), col(f2_col)])
        .collect()
        .with_context(|| format!("reading columns {f1_col:?}, {f2_col:?} from {input}"))?;
    tracing::info!(rows = df.height(), input, "formant table");
    Ok((numeric_column(&df, f1_col)?, numeric_column(&df, f2_col)?))
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let s = df.column(name)?.cast(&DataType::Float64)?;
    let ca = s.f64()?;
    Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Print `result`, or write it to `io.out` with a provenance sidecar.
fn emit(io: &Io, measure: &'static str, params: Value, result: &impl Serialize) -> Result<()> {
    let Some(out) = io.out.as_deref() else {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {out}"))?;
    let payload = provenance::Payload::new(measure, io.input.clone(), params);
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "wrote result");
    Ok(())
}

#[derive(Serialize)]
struct CenterOut {
    method: &'static str,
    rows: usize,
    f1c: f64,
    f2c: f64,
}

fn center(io: Io, method: CenterMethod, keep_missing: bool) -> Result<()> {
    let (f1, f2) = read_formants(&io.input, &io.f1_col, &io.f2_col)?;
    let c = vowel_space_center(&f1, &f2, method, !keep_missing)?;
    tracing::info!(method = method.as_str(), f1c = c.f1c, f2c = c.f2c, "center");
    let out = CenterOut {
        method: method.as_str(),
        rows: f1.len(),
        f1c: c.f1c,
        f2c: c.f2c,
    };
    let params = json!({ "method": method.as_str(), "keep_missing": keep_missing });
    emit(&io, "center", params, &out)
}

#[derive(Serialize)]
struct VectorsOut {
    center: [f64; 2],
    norms: Vec<f64>,
    angles: Vec<f64>,
}

fn vectors(io: Io, method: CenterMethod) -> Result<()> {
    let (f1, f2) = read_formants(&io.input, &io.f1_col, &io.f2_col)?;
    let c = vowel_space_center(&f1, &f2, method, true)?;
    let v = vowel_vectors(&f1, &f2, &c)?;
    let out = VectorsOut {
        center: [c.f1c, c.f2c],
        norms: v.iter().map(|p| p.map_or(f64::NAN, |p| p.norm)).collect(),
        angles: v.iter().map(|p| p.map_or(f64::NAN, |p| p.angle)).collect(),
    };
    emit(&io, "vectors", json!({ "method": method.as_str() }), &out)
}

#[derive(Serialize)]
struct MeasureOut {
    measure: &'static str,
    /// NaN (null in JSON) when the measure produced no result.
    value: f64,
    no_result: Option<String>,
    rows: usize,
    dropped: usize,
    detail: Value,
}

fn hull_json(h: &ConvexHullResult) -> Value {
    let vertices: Vec<[f64; 2]> = h.vertices().map(|p| [p.y, p.x]).collect();
    json!({ "area": h.enclosed_area(), "perimeter": h.area, "vertices_f1_f2": vertices })
}

fn run_measure(io: Io, method: VowelSpaceMethod, params: Value) -> Result<()> {
    let (f1, f2) = read_formants(&io.input, &io.f1_col, &io.f2_col)?;
    let clean = sanitize(&f1, &f2)?;
    if clean.is_empty() && !f1.is_empty() {
        tracing::warn!(rows = f1.len(), "no usable formant rows");
    }
    let name = method.name();
    let result = measure(&clean.f1, &clean.f2, &method)?;
    let (no_result, detail) = match &result {
        VowelSpaceMeasure::Area(a) => {
            let corners: Vec<Value> = a
                .corners
                .iter()
                .map(|c| {
                    json!({
                        "corner": c.corner.name(),
                        "vowel": c.corner.label(),
                        "support": c.support,
                        "norm": c.mean.norm,
                        "angle": c.mean.angle,
                        "f1": c.point.y,
                        "f2": c.point.x,
                    })
                })
                .collect();
            (
                a.shortfall.map(|s| s.to_string()),
                json!({ "center": [a.center.f1c, a.center.f2c], "corners": corners }),
            )
        }
        VowelSpaceMeasure::Density(Outcome::Value(d)) => (
            None,
            json!({
                "hull": hull_json(&d.hull),
                "surviving_cells": d.surviving_cells,
                "max_count": d.grid.max_count,
                "medians": [d.grid.f1_median, d.grid.f2_median],
            }),
        ),
        VowelSpaceMeasure::Continuous(Outcome::Value(c)) => (
            None,
            json!({
                "hull": hull_json(&c.hull),
                "retained": c.retained.len(),
                "components": c.fit.weights.len(),
                "total_log_likelihood": c.fit.total_log_likelihood(),
            }),
        ),
        VowelSpaceMeasure::Density(Outcome::NoResult(s))
        | VowelSpaceMeasure::Continuous(Outcome::NoResult(s)) => (Some(s.to_string()), Value::Null),
    };
    tracing::info!(measure = name, value = result.value(), "measure");
    let out = MeasureOut {
        measure: name,
        value: result.value(),
        no_result,
        rows: f1.len(),
        dropped: clean.dropped,
        detail,
    };
    emit(&io, name, params, &out)
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "vowelspace_version": vowelspace::VERSION,
        "measures": ["center", "vectors", "vsa", "vsd", "cvsa"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
