use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use tracing::debug;
use unitgen::config::Config;
use unitgen::emit::{Section, SiPrefixEmitter};
use unitgen::extract;
use unitgen::fuzz::{render_preamble, FuzzGenerator, RetryPolicy, UnitsOracle};

#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "Code generators for SI-prefixed units and unit-conversion fuzz tests", long_about = None)]
struct Cli {
    /// Config file (default: ./unitgen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print SI-prefixed unit declarations and registrations
    Prefixes {
        /// Block to print
        #[arg(short, long, value_enum, default_value_t = SectionArg::All)]
        section: SectionArg,
    },

    /// List unit symbols declared in a unit-definitions source
    Extract {
        /// Unit-definitions source file
        source: PathBuf,

        /// Drop repeated symbols
        #[arg(short, long)]
        unique: bool,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Generate randomized unit-conversion tests checked against `units`
    Fuzz {
        /// Unit-definitions source file to sample units from
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Oracle program
        #[arg(long)]
        oracle: Option<String>,

        /// Number of test cases to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many rejected samples per case
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Also print the test-file header defining `dotest!`
        #[arg(long)]
        preamble: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionArg {
    Declarations,
    Registrations,
    All,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Declarations => Section::Declarations,
            SectionArg::Registrations => Section::Registrations,
            SectionArg::All => Section::All,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Generated code goes to stdout, so diagnostics stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Prefixes { section } => print_prefixes(section.into()),
        Commands::Extract {
            source,
            unique,
            json,
        } => list_units(&source, unique, json),
        Commands::Fuzz {
            source,
            oracle,
            count,
            seed,
            max_attempts,
            preamble,
        } => Config::discover(cli.config.as_deref())
            .context("failed to load config")
            .and_then(|mut config| {
                if let Some(source) = source {
                    config.units_source = source;
                }
                if let Some(oracle) = oracle {
                    config.oracle.program = oracle;
                }
                if let Some(max_attempts) = max_attempts {
                    config.fuzz.max_attempts = max_attempts;
                }
                config.validate()?;
                generate_fuzz_cases(&config, count, seed, preamble)
            }),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_prefixes(section: Section) -> Result<()> {
    print!("{}", SiPrefixEmitter::standard().emit(section));
    Ok(())
}

fn read_units(source: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    Ok(extract::extract_units(&content))
}

fn list_units(source: &Path, unique: bool, json: bool) -> Result<()> {
    let mut units = read_units(source)?;
    if unique {
        units = extract::dedup_units(&units);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&units)?);
    } else {
        for unit in &units {
            println!("{}", unit);
        }
    }

    Ok(())
}

fn generate_fuzz_cases(
    config: &Config,
    count: usize,
    seed: Option<u64>,
    preamble: bool,
) -> Result<()> {
    let units = read_units(&config.units_source)?;
    debug!(
        units = units.len(),
        source = %config.units_source.display(),
        "loaded unit universe"
    );

    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let oracle = UnitsOracle::new(config.oracle.program.clone(), config.oracle.precision);
    let mut generator = FuzzGenerator::new(oracle, rng, units)
        .with_policy(RetryPolicy {
            max_attempts: config.fuzz.max_attempts,
        })
        .with_magnitude_bound(config.fuzz.magnitude_bound);

    if preamble {
        println!("{}", render_preamble());
    }

    for idx in 0..count {
        let case = generator.generate()?;
        let rendered = case
            .render()
            .context("generated case has no expected value")?;
        if idx > 0 {
            println!();
        }
        println!("{}", rendered);
    }

    Ok(())
}
