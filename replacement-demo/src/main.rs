mod table;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use vm::{
    format_sequence, generate_random_sequence, parse_frame_count, parse_sequence,
    sequence::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN},
    simulation::{DEFAULT_ADDRESS_SPACE_SIZE, DEFAULT_FRAME_COUNT},
    ReplacementPolicy, SimulationConfig, SimulationRunner,
};

/// Simulador de substituição de páginas.
///
/// Mostra, passo a passo, quais páginas ocupam cada frame, onde ocorrem
/// faltas de página e qual página foi substituída.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Sequência de acessos separada por vírgulas, ex. "1, 2, 3, 2, 1".
    /// Se omitida, uma sequência aleatória é gerada.
    #[arg(short, long)]
    sequence: Option<String>,

    /// Número de frames físicos.
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT.to_string(), allow_hyphen_values = true)]
    frames: String,

    /// Política de substituição: lru ou fifo.
    #[arg(short, long, default_value_t = ReplacementPolicy::Lru)]
    policy: ReplacementPolicy,

    /// Número de páginas no espaço de endereçamento.
    #[arg(long, default_value_t = DEFAULT_ADDRESS_SPACE_SIZE)]
    pages: usize,

    /// Semente para a sequência aleatória.
    #[arg(long)]
    seed: Option<u64>,

    /// Imprime o resultado em JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = SimulationConfig::default()
        .with_frame_count(parse_frame_count(&cli.frames)?)
        .with_policy(cli.policy)
        .with_address_space_size(cli.pages);

    let runner = SimulationRunner::new(config)?;

    let sequence = match &cli.sequence {
        Some(text) => parse_sequence(text)?,
        None => {
            let sequence = match cli.seed {
                Some(seed) => generate_random_sequence(
                    &mut StdRng::seed_from_u64(seed),
                    DEFAULT_MIN_LEN,
                    DEFAULT_MAX_LEN,
                    cli.pages,
                )?,
                None => generate_random_sequence(
                    &mut rand::thread_rng(),
                    DEFAULT_MIN_LEN,
                    DEFAULT_MAX_LEN,
                    cli.pages,
                )?,
            };

            info!("demo: sequência gerada {}", format_sequence(&sequence));

            sequence
        }
    };

    let result = runner.run(&sequence)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("serializando resultado")?;
        println!("{}", json);
    } else {
        println!("sequência: {}", format_sequence(&result.access_sequence));
        println!();
        print!("{}", table::render_table(&result));
    }

    Ok(())
}
