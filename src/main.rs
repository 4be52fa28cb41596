use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use evalscore::chart::{plot_pr_steps_png, plot_score_bars_png};
use evalscore::input::{EvalInput, load_input};
use evalscore::model::{Average, IndicatorMatrix, Labels, PrCurve, ScoreSet};
use evalscore::report::json::{SummaryReport, render_curves_json, render_summary_json};
use evalscore::report::text::render_scores_text;
use evalscore::report::{CurveEntry, RunSummary};
use evalscore::{binarize, compute_scores, curve_for};

#[derive(Debug, Parser)]
#[command(name = "evalscore", version, about = "Score model predictions and render evaluation reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score model predictions against ground truth and write reports.
    Run {
        /// Evaluation input file (JSON: labels plus named model outputs).
        #[arg(long)]
        input: PathBuf,
        /// Output directory for report and chart files.
        #[arg(long)]
        out: PathBuf,
        /// Averaging mode: binary|micro|macro|weighted|samples.
        #[arg(long, default_value = "macro")]
        average: String,
        /// Also render scores.png and pr_curves.png (needs the plots feature).
        #[arg(long)]
        charts: bool,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            input,
            out,
            average,
            charts,
        } => run_eval(&input, &out, &average, charts),
    }
}

fn run_eval(input: &Path, out: &Path, average: &str, charts: bool) -> Result<(), String> {
    let average: Average = average.parse().map_err(|e: evalscore::EvalError| e.to_string())?;
    let data = load_input(input).map_err(|e| e.to_string())?;
    std::fs::create_dir_all(out).map_err(|e| e.to_string())?;

    // one binarization shared by every confidence matrix in the batch
    let label_matrix = if data.models.iter().any(|m| m.confidence.is_some()) {
        Some(
            binarize(&Labels::Classes(data.labels.clone()), None)
                .map_err(|e| e.to_string())?,
        )
    } else {
        None
    };

    let (runs, curves) = score_models(&data, label_matrix.as_ref(), average)?;

    let text = render_scores_text(&runs, average);
    print!("{text}");
    std::fs::write(out.join("report.txt"), &text).map_err(|e| e.to_string())?;

    let summary = SummaryReport {
        tool: "evalscore".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        average_mode: average.to_string(),
        n_samples: data.labels.len(),
        n_models: runs.len(),
        runs,
    };
    let json = render_summary_json(&summary).map_err(|e| e.to_string())?;
    std::fs::write(out.join("report.json"), json).map_err(|e| e.to_string())?;

    if !curves.is_empty() {
        let json = render_curves_json(&curves).map_err(|e| e.to_string())?;
        std::fs::write(out.join("curves.json"), json).map_err(|e| e.to_string())?;
    }
    tracing::info!(out = %out.display(), "wrote evaluation reports");

    if charts {
        render_charts(out, &summary.runs, &curves);
    }

    Ok(())
}

fn score_models(
    data: &EvalInput,
    label_matrix: Option<&IndicatorMatrix>,
    average: Average,
) -> Result<(Vec<RunSummary>, Vec<CurveEntry>), String> {
    let mut runs = Vec::with_capacity(data.models.len());
    let mut curves = Vec::new();
    for model in &data.models {
        let scores = compute_scores(&data.labels, &model.predictions, average)
            .map_err(|e| format!("{}: {e}", model.name))?;
        let average_precision = match (label_matrix, &model.confidence) {
            (Some(matrix), Some(confidence)) => {
                let curve = curve_for(matrix, confidence)
                    .map_err(|e| format!("{}: {e}", model.name))?;
                let ap = curve.average_precision;
                curves.push(CurveEntry {
                    name: model.name.clone(),
                    curve,
                });
                Some(ap)
            }
            _ => None,
        };
        runs.push(RunSummary {
            name: model.name.clone(),
            scores,
            average_precision,
        });
    }
    Ok((runs, curves))
}

fn render_charts(out: &Path, runs: &[RunSummary], curves: &[CurveEntry]) {
    let bar_path = out.join("scores.png");
    let bars: Vec<(String, ScoreSet)> = runs.iter().map(|r| (r.name.clone(), r.scores)).collect();
    match plot_score_bars_png(&bar_path, &bars) {
        Ok(()) => tracing::info!(path = %bar_path.display(), "wrote score chart"),
        Err(err) => tracing::warn!("score chart not rendered: {err}"),
    }

    if !curves.is_empty() {
        let pr_path = out.join("pr_curves.png");
        let entries: Vec<(String, PrCurve)> = curves
            .iter()
            .map(|c| (c.name.clone(), c.curve.clone()))
            .collect();
        match plot_pr_steps_png(&pr_path, &entries) {
            Ok(()) => tracing::info!(path = %pr_path.display(), "wrote precision-recall chart"),
            Err(err) => tracing::warn!("precision-recall chart not rendered: {err}"),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_macro_averaging() {
        let cli = Cli::try_parse_from([
            "evalscore", "run", "--input", "eval.json", "--out", "out",
        ])
        .unwrap();
        let Command::Run {
            average, charts, ..
        } = cli.command;
        assert_eq!(average, "macro");
        assert!(!charts);
    }

    #[test]
    fn test_cli_accepts_average_and_charts() {
        let cli = Cli::try_parse_from([
            "evalscore", "run", "--input", "eval.json", "--out", "out", "--average", "micro",
            "--charts",
        ])
        .unwrap();
        let Command::Run {
            average, charts, ..
        } = cli.command;
        assert_eq!(average, "micro");
        assert!(charts);
    }

    #[test]
    fn test_cli_requires_input_and_out() {
        assert!(Cli::try_parse_from(["evalscore", "run"]).is_err());
    }
}
