/// Row-major confusion matrix over encoded class indices.
///
/// Entry `(i, j)` counts samples whose actual class is `i` and predicted
/// class is `j`.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    matrix: Vec<usize>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Build from encoded label vectors; indices outside `0..n_classes`
    /// are ignored.
    pub fn from_labels(actual: &[usize], predicted: &[usize], n_classes: usize) -> Self {
        let mut matrix = vec![0usize; n_classes * n_classes];
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            if a < n_classes && p < n_classes {
                matrix[a * n_classes + p] += 1;
            }
        }
        ConfusionMatrix { matrix, n_classes }
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.matrix[actual * self.n_classes + predicted]
    }

    pub fn total(&self) -> usize {
        self.matrix.iter().sum()
    }

    pub fn true_positives(&self, class: usize) -> usize {
        self.get(class, class)
    }

    pub fn false_positives(&self, class: usize) -> usize {
        let mut fp = 0;
        for i in 0..self.n_classes {
            if i != class {
                fp += self.get(i, class);
            }
        }
        fp
    }

    pub fn false_negatives(&self, class: usize) -> usize {
        let mut fn_ = 0;
        for j in 0..self.n_classes {
            if j != class {
                fn_ += self.get(class, j);
            }
        }
        fn_
    }

    /// Number of samples whose actual class is `class`.
    pub fn support(&self, class: usize) -> usize {
        self.true_positives(class) + self.false_negatives(class)
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|c| self.get(c, c)).sum();
        correct as f64 / total as f64
    }

    pub fn precision(&self, class: usize) -> f64 {
        let tp = self.true_positives(class) as f64;
        let fp = self.false_positives(class) as f64;
        if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 }
    }

    pub fn recall(&self, class: usize) -> f64 {
        let tp = self.true_positives(class) as f64;
        let fn_ = self.false_negatives(class) as f64;
        if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 }
    }

    pub fn f1(&self, class: usize) -> f64 {
        harmonic(self.precision(class), self.recall(class))
    }
}

pub fn harmonic(p: f64, r: f64) -> f64 {
    if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_class() {
        let actual = vec![0, 1, 1, 2, 1];
        let predicted = vec![0, 1, 0, 2, 1];
        let cm = ConfusionMatrix::from_labels(&actual, &predicted, 3);
        assert_eq!(cm.true_positives(1), 2);
        assert_eq!(cm.false_negatives(1), 1);
        assert_eq!(cm.false_positives(0), 1);
        assert_eq!(cm.support(1), 3);
        assert_eq!(cm.total(), 5);
    }

    #[test]
    fn test_accuracy_is_fraction_of_diagonal() {
        let cm = ConfusionMatrix::from_labels(&[0, 1, 1, 0], &[0, 1, 0, 0], 2);
        assert!((cm.accuracy() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators_score_zero() {
        // class 1 never predicted and never present
        let cm = ConfusionMatrix::from_labels(&[0, 0], &[0, 0], 2);
        assert_eq!(cm.precision(1), 0.0);
        assert_eq!(cm.recall(1), 0.0);
        assert_eq!(cm.f1(1), 0.0);
    }
}
