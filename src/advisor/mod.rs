//! Heuristic advisor predicting which algorithm should win on a dataset.
//!
//! Predictions look only at cheap structural features (size, sortedness and
//! duplicate density) and share no state with the benchmark runner.

mod features;
mod knn;
mod rules;

pub use features::{DatasetFeatures, sortedness, unique_ratio};
pub use knn::KnnAdvisor;
pub use rules::{CustomRulesAdvisor, DecisionTreeAdvisor};

use crate::Algorithm;
use std::fmt;
use tracing::debug;

/// Generic trait for advisors that map a dataset to an expected winner
pub trait Advisor {
    fn name(&self) -> &'static str;
    fn predict(&self, data: &[i32]) -> Algorithm;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvisorMode {
    #[default]
    DecisionTree,
    Knn,
    CustomRules,
}

impl AdvisorMode {
    pub const ALL: [AdvisorMode; 3] = [
        AdvisorMode::DecisionTree,
        AdvisorMode::Knn,
        AdvisorMode::CustomRules,
    ];

    pub fn advisor(self) -> Box<dyn Advisor> {
        match self {
            AdvisorMode::DecisionTree => Box::new(DecisionTreeAdvisor),
            AdvisorMode::Knn => Box::new(KnnAdvisor),
            AdvisorMode::CustomRules => Box::new(CustomRulesAdvisor),
        }
    }

    pub fn name(self) -> &'static str {
        self.advisor().name()
    }
}

impl fmt::Display for AdvisorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predict the best algorithm for `data` using the selected mode.
pub fn predict_best_algorithm(data: &[i32], mode: AdvisorMode) -> Algorithm {
    let advisor = mode.advisor();
    let prediction = advisor.predict(data);
    debug!(
        advisor = advisor.name(),
        n = data.len(),
        prediction = prediction.name(),
        "advisor prediction"
    );
    prediction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        let names: Vec<&str> = AdvisorMode::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Decision Tree", "k-NN", "Custom Rules"]);
        assert_eq!(AdvisorMode::default(), AdvisorMode::DecisionTree);
    }

    #[test]
    fn test_every_mode_predicts_a_known_label() {
        let data: Vec<i32> = (0..500).map(|i| (i * 7919) % 503).collect();
        for mode in AdvisorMode::ALL {
            let label = predict_best_algorithm(&data, mode).name();
            assert!(label.parse::<Algorithm>().is_ok(), "{}", label);
        }
    }
}
