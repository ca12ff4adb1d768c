use super::Advisor;
use super::features::DatasetFeatures;
use crate::Algorithm;

/// Interpretable thresholds over size, sortedness and duplicate density
pub struct DecisionTreeAdvisor;

impl Advisor for DecisionTreeAdvisor {
    fn name(&self) -> &'static str {
        "Decision Tree"
    }

    fn predict(&self, data: &[i32]) -> Algorithm {
        let f = DatasetFeatures::extract(data);

        // Bubble is only ever picked for tiny, visibly unsorted inputs
        if f.size <= 30 {
            return if f.sortedness < 0.80 {
                Algorithm::Bubble
            } else {
                Algorithm::Insertion
            };
        }
        if f.size <= 50 || f.sortedness >= 0.90 {
            return Algorithm::Insertion;
        }
        if f.unique_ratio <= 0.20 && f.size >= 1000 {
            return Algorithm::Merge;
        }
        if f.sortedness <= 0.10 {
            return Algorithm::Merge;
        }
        Algorithm::Quick
    }
}

/// Hand-tuned variant of the decision tree
pub struct CustomRulesAdvisor;

impl CustomRulesAdvisor {
    const SMALL_N: usize = 60;
    const SORTED_THRESHOLD: f64 = 0.88;
    const DUPLICATE_THRESHOLD: f64 = 0.15;
}

impl Advisor for CustomRulesAdvisor {
    fn name(&self) -> &'static str {
        "Custom Rules"
    }

    fn predict(&self, data: &[i32]) -> Algorithm {
        let f = DatasetFeatures::extract(data);

        if f.size <= 30 && f.sortedness < 0.80 {
            return Algorithm::Bubble;
        }
        if f.size <= Self::SMALL_N || f.sortedness >= Self::SORTED_THRESHOLD {
            return Algorithm::Insertion;
        }
        if f.unique_ratio <= Self::DUPLICATE_THRESHOLD {
            return Algorithm::Merge;
        }
        Algorithm::Quick
    }
}
