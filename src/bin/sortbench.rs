use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use sortbench::advisor::{AdvisorMode, predict_best_algorithm};
use sortbench::benchmark::reporting::{
    PredictionOutcome, print_advisor_accuracy, print_compact_summary, print_prediction,
    print_suite_report,
};
use sortbench::benchmark::{
    BenchmarkConfig, BenchmarkRunner, DatasetKind, MultisetVerifier, QUADRATIC_SKIP_THRESHOLD,
    benchmark_results_to_csv, demo_datasets, generate_dataset, write_csv_report,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fixed set of five datasets
    Demo,
    /// One generated dataset chosen by --kind and --size
    Custom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Random,
    NearlySorted,
    Reversed,
    FewUnique,
    LargeRandom,
}

impl From<KindArg> for DatasetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Random => DatasetKind::Random,
            KindArg::NearlySorted => DatasetKind::NearlySorted,
            KindArg::Reversed => DatasetKind::Reversed,
            KindArg::FewUnique => DatasetKind::FewUnique,
            KindArg::LargeRandom => DatasetKind::LargeRandom,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AdvisorArg {
    DecisionTree,
    Knn,
    CustomRules,
}

impl From<AdvisorArg> for AdvisorMode {
    fn from(advisor: AdvisorArg) -> Self {
        match advisor {
            AdvisorArg::DecisionTree => AdvisorMode::DecisionTree,
            AdvisorArg::Knn => AdvisorMode::Knn,
            AdvisorArg::CustomRules => AdvisorMode::CustomRules,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sortbench",
    version,
    about = "Benchmark bubble, insertion, merge and quick sort and check the advisor's pick"
)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Demo)]
    mode: Mode,

    /// Dataset kind (custom mode)
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,

    /// Dataset size (custom mode)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// RNG seed for dataset generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = AdvisorArg::DecisionTree)]
    advisor: AdvisorArg,

    /// Skip bubble and insertion sort above this many elements
    #[arg(long, default_value_t = QUADRATIC_SKIP_THRESHOLD)]
    threshold: usize,

    /// Unmeasured sorts before each measured one
    #[arg(long, default_value_t = 0)]
    warmup_runs: usize,

    /// Also check that every output is a permutation of its input
    #[arg(long)]
    verify_contents: bool,

    /// Print the results as CSV after the tables
    #[arg(long)]
    csv: bool,

    /// Write the CSV results to this file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Log every run
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "sortbench=debug" } else { "sortbench=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let datasets = match args.mode {
        Mode::Demo => demo_datasets(&mut rng),
        Mode::Custom => {
            let (Some(kind), Some(size)) = (args.kind, args.size) else {
                return Err("--kind and --size are required in custom mode".into());
            };
            vec![generate_dataset(kind.into(), size, &mut rng)?]
        }
    };

    let config = BenchmarkConfig {
        quadratic_skip_threshold: args.threshold,
        warmup_runs: args.warmup_runs,
        ..BenchmarkConfig::default()
    };
    let mut runner = BenchmarkRunner::new(config);
    if args.verify_contents {
        runner.set_verifier(Box::new(MultisetVerifier));
    }

    let advisor = AdvisorMode::from(args.advisor);
    println!("Sorting Benchmark (advisor: {})", advisor);

    let mut reports = Vec::with_capacity(datasets.len());
    let mut outcomes = Vec::with_capacity(datasets.len());
    for dataset in &datasets {
        let report = runner.run_suite(dataset);
        print_suite_report(&report);

        let outcome = PredictionOutcome::new(&report, predict_best_algorithm(&dataset.values, advisor));
        print_prediction(&outcome);

        reports.push(report);
        outcomes.push(outcome);
    }

    if reports.len() > 1 {
        print_compact_summary(&reports);
        print_advisor_accuracy(advisor.name(), &outcomes);
    }

    if args.csv {
        println!();
        print!("{}", benchmark_results_to_csv(&reports));
    }
    if let Some(path) = &args.csv_out {
        write_csv_report(path, &reports)?;
    }

    Ok(())
}
