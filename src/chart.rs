use crate::model::{PrCurve, ScoreSet};

#[cfg(feature = "plots")]
const METRIC_NAMES: [&str; 4] = ["Accuracy", "F1", "Recall", "Precision"];

/// Grouped bar chart of score sets, one bar group per metric and one bar
/// per model, rendered to a PNG file.
#[cfg(feature = "plots")]
pub fn plot_score_bars_png<P: AsRef<std::path::Path>>(
    path: P,
    runs: &[(String, ScoreSet)],
) -> Result<(), Box<dyn std::error::Error>> {
    use plotters::prelude::*;

    const COLORS: [RGBColor; 6] = [BLUE, GREEN, RED, CYAN, MAGENTA, YELLOW];

    let root = BitMapBackend::new(path.as_ref(), (800, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Evaluation Metrics", ("sans-serif", 22))
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..METRIC_NAMES.len() as f64, 0f64..1f64)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(METRIC_NAMES.len())
        .x_label_formatter(&|x| {
            METRIC_NAMES
                .get(x.floor() as usize)
                .copied()
                .unwrap_or("")
                .to_string()
        })
        .y_desc("Score")
        .draw()?;

    let count = runs.len().max(1);
    let bar_width = 0.81 / count as f64;
    for (i, (name, scores)) in runs.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        let values = [scores.accuracy, scores.f1, scores.recall, scores.precision];
        chart
            .draw_series(values.iter().enumerate().map(|(metric, &v)| {
                let x0 = metric as f64 + 0.095 + bar_width * i as f64;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, v)], color.mix(0.4).filled())
            }))?
            .label(name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.mix(0.4).filled())
            });
    }
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

#[cfg(not(feature = "plots"))]
pub fn plot_score_bars_png<P: AsRef<std::path::Path>>(
    _path: P,
    _runs: &[(String, ScoreSet)],
) -> Result<(), Box<dyn std::error::Error>> {
    Err("plots feature is not enabled".into())
}

/// Post-step precision-vs-recall chart, one line per model, rendered to a
/// PNG file.
#[cfg(feature = "plots")]
pub fn plot_pr_steps_png<P: AsRef<std::path::Path>>(
    path: P,
    curves: &[(String, PrCurve)],
) -> Result<(), Box<dyn std::error::Error>> {
    use plotters::prelude::*;

    const COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, CYAN, MAGENTA, BLACK];

    let root = BitMapBackend::new(path.as_ref(), (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Precision-Recall Curves", ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..1f64, 0f64..1.05f64)?;
    chart
        .configure_mesh()
        .x_desc("Recall")
        .y_desc("Precision")
        .draw()?;

    for (i, (name, curve)) in curves.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        let series = step_points(&curve.recall, &curve.precision);
        chart
            .draw_series(LineSeries::new(series, color.mix(0.5).stroke_width(1)))?
            .label(name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.mix(0.5).filled())
            });
    }
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

#[cfg(not(feature = "plots"))]
pub fn plot_pr_steps_png<P: AsRef<std::path::Path>>(
    _path: P,
    _curves: &[(String, PrCurve)],
) -> Result<(), Box<dyn std::error::Error>> {
    Err("plots feature is not enabled".into())
}

// expand (x, y) pairs into a staircase holding y until the next x
#[cfg(feature = "plots")]
fn step_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(x.len() * 2);
    for i in 0..x.len().min(y.len()) {
        if i > 0 {
            points.push((x[i], y[i - 1]));
        }
        points.push((x[i], y[i]));
    }
    points
}
