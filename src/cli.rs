use std::error::Error;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use modelmatch_rs::{GameService, Persona, concepts_json, data, generator};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "modelmatch-rs", about = "Guess which generator wrote it", version)]
pub struct Cli {
    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Continue a prompt with one of the three personas.
    Generate {
        /// Prompt to continue. Defaults to the game's standard prompt.
        prompt: Option<String>,
        /// Persona to generate with (gpt, gpm, or gph); random when omitted.
        #[arg(short, long)]
        persona: Option<String>,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the concept comparison table.
    Concepts,
    /// Print one random quiz question.
    Quiz {
        /// Seed for reproducible selection.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the HTTP game server.
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "0.0.0.0")]
        host: std::net::IpAddr,
        /// Port to listen on.
        #[arg(long, default_value_t = 5010)]
        port: u16,
        /// Quiet production mode: warnings and errors only.
        #[arg(long)]
        quiet: bool,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            prompt,
            persona,
            seed,
        } => handle_generate(prompt, persona, seed, cli.json),
        Command::Concepts => handle_concepts(cli.json),
        Command::Quiz { seed } => handle_quiz(seed, cli.json),
        #[cfg(feature = "web")]
        Command::Serve { host, port, quiet } => handle_serve(host, port, quiet),
    }
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn handle_generate(
    prompt: Option<String>,
    persona: Option<String>,
    seed: Option<u64>,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.unwrap_or_else(|| data::DEFAULT_PROMPT.to_string());
    let mut rng = seeded_rng(seed);
    let persona = match persona {
        Some(label) => Persona::from_str(&label)?,
        None => {
            use rand::seq::SliceRandom;
            *Persona::ALL.choose(&mut rng).unwrap_or(&Persona::Gpt)
        }
    };
    let text = generator::generate(persona, &prompt, &mut rng);

    if as_json {
        let payload = json!({
            "persona": persona.tag(),
            "prompt": prompt,
            "text": text,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("[{}] {}", persona.label(), text);
    }
    Ok(())
}

fn handle_concepts(as_json: bool) -> Result<(), Box<dyn Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&concepts_json())?);
        return Ok(());
    }
    for entry in data::CONCEPTS {
        println!("{}", entry.dimension);
        println!("  GPT: {}", entry.gpt);
        println!("  GPM: {}", entry.gpm);
        println!("  GPH: {}", entry.gph);
        println!("  Analogy: {}", entry.analogy);
        println!();
    }
    Ok(())
}

fn handle_quiz(seed: Option<u64>, as_json: bool) -> Result<(), Box<dyn Error>> {
    let service = match seed {
        Some(seed) => GameService::with_seed(seed),
        None => GameService::new(),
    };
    let question = service.random_quiz();

    if as_json {
        println!("{}", serde_json::to_string_pretty(question)?);
    } else {
        println!("Q: {}", question.question);
        println!("Options: {}", question.options.join(", "));
        println!("Answer: {}", question.correct);
        println!("Why: {}", question.explanation);
    }
    Ok(())
}

#[cfg(feature = "web")]
fn handle_serve(host: std::net::IpAddr, port: u16, quiet: bool) -> Result<(), Box<dyn Error>> {
    use modelmatch_rs::web::{self, WebConfig};
    use tracing_subscriber::EnvFilter;

    let default_filter = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = WebConfig {
        addr: std::net::SocketAddr::from((host, port)),
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(config, GameService::new()))?;
    Ok(())
}
