use clap::Parser;
use eca_complexity::attractor::{Attractor, basin_of, find_attractors};
use eca_complexity::complexity::ComplexityMeasure;
use eca_complexity::probability::{
    Distribution, ProbabilityError, estimate_probabilities, exact_probabilities,
};
use eca_complexity::transition::TransitionRelation;
use env_logger::Builder;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "eca_complexity")]
#[command(about = "Compute information fluctuation complexity of an elementary cellular automaton")]
struct Args {
    /// Rule number (0-255)
    #[arg(long, short = 'r', default_value_t = 110)]
    rule: u8,

    /// Number of cells of the automaton
    #[arg(long, short = 'l', default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..=24))]
    length: u64,

    /// Number of simulation iterations as a power of ten (0 = exact solution)
    #[arg(long, short = 'i', default_value_t = 7, value_parser = clap::value_parser!(u32).range(0..=15))]
    iterations: u32,

    /// Skip attractor search and treat the whole state space as a single attractor
    #[arg(long, short = 's')]
    skip_search: bool,

    /// Use the secondary (net information gain) complexity measure
    #[arg(long, short = 'n')]
    net_information_gain: bool,

    /// Print exact probabilities as fractions (requires exact solution)
    #[arg(long)]
    ratios: bool,

    /// Print the number of states that can reach each attractor
    #[arg(long)]
    basins: bool,

    /// Seed for the simulation (random if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for a specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let iterations = if args.iterations == 0 {
        0
    } else {
        10u64.pow(args.iterations)
    };

    if args.ratios && iterations != 0 {
        eprintln!("Fractions are only available for the exact solution (use -i 0).");
        std::process::exit(2);
    }

    let measure = if args.net_information_gain {
        ComplexityMeasure::NetInformationGain
    } else {
        ComplexityMeasure::InformationFluctuation
    };

    println!("Elementary cellular automaton complexity");
    print!("  rule {}, {} cells", args.rule, args.length);
    if args.skip_search {
        print!(", skip attractor search");
    }
    if iterations == 0 {
        print!(", exact solution");
    } else {
        print!(", {iterations} iteration simulation");
    }
    println!(", {} complexity measure\n", measure.name());

    let relation = TransitionRelation::build(args.rule, args.length as usize);

    let attractors = if args.skip_search {
        vec![Attractor::whole_space(&relation)]
    } else {
        find_attractors(&relation).unwrap_or_else(|e| {
            eprintln!("Error during attractor computation: {}", e);
            std::process::exit(1);
        })
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for attractor in &attractors {
        if !args.skip_search {
            println!(
                "  Attractor of size {} including state {}:",
                attractor.len(),
                attractor.representative()
            );
        }

        if args.basins {
            let basin = basin_of(&relation, attractor).unwrap_or_else(|e| {
                eprintln!("Error during basin computation: {}", e);
                std::process::exit(1);
            });
            println!("    Basin size = {}", basin.len());
        }

        let distribution =
            compute_distribution(&relation, attractor, iterations, args.ratios, &mut rng)
                .unwrap_or_else(|e| {
                    eprintln!("Error during probability computation: {}", e);
                    std::process::exit(1);
                });

        let result = measure.compute(&relation, attractor, &distribution);
        let ratio = match result.ratio() {
            Some(ratio) => format!("{ratio:.2}"),
            None => "indeterminate".to_string(),
        };
        println!(
            "    Entropy = {:.2}, Complexity = {:.2}, Complexity/Entropy = {}\n",
            result.entropy, result.complexity, ratio
        );
    }
}

/// Solve exactly if `iterations` is zero, otherwise simulate.
fn compute_distribution(
    relation: &TransitionRelation,
    attractor: &Attractor,
    iterations: u64,
    print_ratios: bool,
    rng: &mut StdRng,
) -> Result<Distribution, ProbabilityError> {
    if iterations == 0 {
        let exact = exact_probabilities(relation, attractor)?;
        if print_ratios {
            println!("    Probabilities = [{}]", exact.fractions().join(", "));
        }
        exact.to_distribution()
    } else {
        estimate_probabilities(relation, attractor, iterations, rng)
    }
}
