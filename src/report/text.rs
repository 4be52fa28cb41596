use crate::model::Average;
use crate::report::{RunSummary, format_f64_4};

pub fn render_scores_text(runs: &[RunSummary], average: Average) -> String {
    let mut out = String::new();

    out.push_str("Classification Evaluation Report\n");
    out.push_str("================================\n\n");

    for run in runs {
        out.push_str(&format!("Model: {}\n", run.name));
        out.push_str(&format!(
            "Accuracy: {}\n",
            format_f64_4(run.scores.accuracy)
        ));
        out.push_str(&format!(
            "{average}-averaged F1: {}\n",
            format_f64_4(run.scores.f1)
        ));
        out.push_str(&format!(
            "{average}-averaged recall: {}\n",
            format_f64_4(run.scores.recall)
        ));
        out.push_str(&format!(
            "{average}-averaged precision: {}\n",
            format_f64_4(run.scores.precision)
        ));
        if let Some(ap) = run.average_precision {
            out.push_str(&format!(
                "Average precision (micro): {}\n",
                format_f64_4(ap)
            ));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreSet;

    #[test]
    fn test_report_lists_each_model_with_mode_label() {
        let runs = vec![
            RunSummary {
                name: "svm".to_string(),
                scores: ScoreSet {
                    accuracy: 0.9714,
                    f1: 0.9704,
                    recall: 0.9711,
                    precision: 0.9702,
                },
                average_precision: Some(0.9953),
            },
            RunSummary {
                name: "forest".to_string(),
                scores: ScoreSet {
                    accuracy: 0.5,
                    f1: 0.5,
                    recall: 0.5,
                    precision: 0.5,
                },
                average_precision: None,
            },
        ];
        let text = render_scores_text(&runs, Average::Macro);
        assert!(text.contains("Model: svm\n"));
        assert!(text.contains("Accuracy: 0.9714\n"));
        assert!(text.contains("macro-averaged F1: 0.9704\n"));
        assert!(text.contains("Average precision (micro): 0.9953\n"));
        assert!(text.contains("Model: forest\n"));
        // no curve for the second model, so no average-precision line
        assert_eq!(text.matches("Average precision").count(), 1);
    }
}
