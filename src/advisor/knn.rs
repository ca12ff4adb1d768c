use super::Advisor;
use super::features::DatasetFeatures;
use crate::Algorithm;

const K: usize = 3;

/// Labelled point in (size, sortedness, unique ratio) space.
struct Prototype {
    size: usize,
    sortedness: f64,
    unique_ratio: f64,
    label: Algorithm,
}

const fn proto(size: usize, sortedness: f64, unique_ratio: f64, label: Algorithm) -> Prototype {
    Prototype {
        size,
        sortedness,
        unique_ratio,
        label,
    }
}

static PROTOTYPES: [Prototype; 11] = [
    // tiny unsorted
    proto(20, 0.30, 0.90, Algorithm::Bubble),
    proto(30, 0.20, 0.90, Algorithm::Bubble),
    proto(20, 0.50, 0.90, Algorithm::Insertion),
    proto(50, 0.95, 0.90, Algorithm::Insertion),
    // nearly sorted
    proto(500, 0.95, 0.80, Algorithm::Insertion),
    proto(5000, 0.92, 0.80, Algorithm::Insertion),
    // duplicates
    proto(2000, 0.50, 0.10, Algorithm::Merge),
    proto(20000, 0.50, 0.10, Algorithm::Merge),
    // random large
    proto(5000, 0.55, 0.95, Algorithm::Quick),
    proto(50000, 0.55, 0.95, Algorithm::Quick),
    // reversed-like
    proto(5000, 0.05, 0.90, Algorithm::Merge),
];

/// Maps n onto [0, 1] via log10(n) / 5, so sizes up to 100k spread evenly.
fn normalized_log_size(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    ((n as f64).log10() / 5.0).clamp(0.0, 1.0)
}

/// Majority vote of the three nearest prototypes
pub struct KnnAdvisor;

impl Advisor for KnnAdvisor {
    fn name(&self) -> &'static str {
        "k-NN"
    }

    fn predict(&self, data: &[i32]) -> Algorithm {
        let f = DatasetFeatures::extract(data);
        let x = normalized_log_size(f.size);

        let mut distances: Vec<(f64, Algorithm)> = PROTOTYPES
            .iter()
            .map(|p| {
                let dx = x - normalized_log_size(p.size);
                let ds = f.sortedness - p.sortedness;
                let du = f.unique_ratio - p.unique_ratio;
                (dx * dx + ds * ds + du * du, p.label)
            })
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut votes = [0usize; 4];
        for (_, label) in distances.iter().take(K) {
            votes[vote_slot(*label)] += 1;
        }

        // Ties go to the first label in this order
        let preference = [
            Algorithm::Insertion,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Bubble,
        ];
        let top = votes.iter().copied().max().unwrap_or(0);
        preference
            .into_iter()
            .find(|a| votes[vote_slot(*a)] == top)
            .unwrap_or(Algorithm::Bubble)
    }
}

fn vote_slot(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Bubble => 0,
        Algorithm::Insertion => 1,
        Algorithm::Merge => 2,
        Algorithm::Quick => 3,
    }
}
