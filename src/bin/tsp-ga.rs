use anyhow::{Context, Result};
use clap::{arg, value_parser, ArgAction, Command};
use tsp_ga::dataset::minas_gerais;
use tsp_ga::ga::{GaConfig, GaRunner, MutationPolicy, Recombination};

fn cli() -> Command {
    Command::new("tsp-ga")
        .about("Searches a short tour through the Minas Gerais cities with a genetic algorithm")
        .arg(
            arg!(--generations [GENERATIONS] "Number of generations to evolve")
                .default_value("1")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--population [POPULATION] "Tours kept per generation")
                .default_value("30")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--mixing [MIXING] "Parents combined per child")
                .default_value("2")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--"mutation-rate" [RATE] "Mutation probability, used with --gated-mutation")
                .default_value("0.05")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--"gated-mutation" "Mutate children with probability --mutation-rate instead of always"))
        .arg(arg!(--ordered "Use the order-preserving splice instead of the positional one"))
        .arg(arg!(--seed [SEED] "Random seed").value_parser(value_parser!(u64)))
        .arg(arg!(-v --verbose ... "Increase log verbosity").action(ArgAction::Count))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let level = match matches.get_count("verbose") {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = GaConfig::default()
        .with_max_generations(*matches.get_one::<usize>("generations").unwrap())
        .with_population_size(*matches.get_one::<usize>("population").unwrap())
        .with_mixing_number(*matches.get_one::<usize>("mixing").unwrap())
        .with_mutation_rate(*matches.get_one::<f64>("mutation-rate").unwrap());
    if matches.get_flag("gated-mutation") {
        config = config.with_mutation_policy(MutationPolicy::Gated);
    }
    if matches.get_flag("ordered") {
        config = config.with_recombination(Recombination::OrderedSplice);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }

    let table = minas_gerais();
    table.validate().context("built-in distance table is invalid")?;

    let result = GaRunner::run_with_observer(&table, &config, |report| {
        println!("Generation: {}", report.generation);
        println!(
            "Best Route: {}. Distance: {:.1}",
            report.best, report.best_fitness
        );
    })
    .context("GA run failed")?;

    println!(
        "Final Route: {}. Distance: {:.1}",
        result.best, result.best_fitness
    );
    println!("Total time: {:.6} seconds", result.elapsed.as_secs_f64());
    Ok(())
}
