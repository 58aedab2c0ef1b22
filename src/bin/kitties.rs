//! Kitties CLI — terminal front-end for the genome codec and Birth feed
//!
//! Commands:
//!   kitties default  — show the default cat
//!   kitties random   — draw a random cat
//!   kitties decode   — decode a genome numeral
//!   kitties color    — recolor the default cat's body
//!   kitties palette  — list the palette
//!   kitties watch    — mint kitties on a local chain and watch their births

use kitties_core::app::{AppConfig, Controller};
use kitties_core::chain::{BirthWatcher, LocalChain, Session, StaticWallet};
use kitties_core::genome::{GeneSlices, Genome, GenomeError};
use kitties_core::render::{MemoryView, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::time::Duration;

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        Kitties v0.1 — Genome Codec + Birth Watcher           ║
╚══════════════════════════════════════════════════════════════╝

Usage: kitties <command> [options]

Commands:
  default                 Show the default cat
  random   [seed]         Draw a random cat (seeded when given)
  decode   <numeral>      Decode a 16-digit genome numeral
  color    <value>        Recolor the default cat's body (00-99)
  palette                 List the palette
  watch    [count]        Mint kitties on a local chain, show their births

Config:
  $KITTIES_CONFIG         Path to a JSON config (contract_address, palette,
                          abi_path, mint_interval_ms, owner)

Examples:
  kitties decode 1234567890123456
  kitties random 42
  kitties watch 5
"#
    );
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  Failed to load config: {}", e);
            return;
        }
    };

    match args[1].as_str() {
        "default" => cmd_default(&config),
        "random" => cmd_random(&config, &args[2..]),
        "decode" => cmd_decode(&config, &args[2..]),
        "color" => cmd_color(&config, &args[2..]),
        "palette" => cmd_palette(&config),
        "watch" => cmd_watch(&config, &args[2..]).await,
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

/// Controller over an in-memory view, default cat rendered
fn load_controller(config: &AppConfig) -> Option<Controller<MemoryView>> {
    match Controller::new(Renderer::new(config.palette()), MemoryView::new()) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("  Failed to render the default cat: {}", e);
            None
        }
    }
}

fn print_cat(controller: &Controller<MemoryView>) {
    println!("\n  {}", controller.genome().summary());
    println!("  {}", "-".repeat(60));
    println!("{}", controller.view().describe());
    println!("  {}", "-".repeat(60));
    println!("  dna: {}", controller.dna());
}

fn cmd_default(config: &AppConfig) {
    if let Some(controller) = load_controller(config) {
        print_cat(&controller);
    }
}

fn cmd_random(config: &AppConfig, args: &[String]) {
    let Some(mut controller) = load_controller(config) else { return };
    let result = match args.first().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => controller.random_cat(&mut StdRng::seed_from_u64(seed)).map(|_| ()),
        None => controller.random_cat(&mut rand::thread_rng()).map(|_| ()),
    };
    match result {
        Ok(()) => print_cat(&controller),
        Err(e) => eprintln!("  Render failed: {}", e),
    }
}

fn cmd_decode(config: &AppConfig, args: &[String]) {
    let Some(numeral) = args.first() else {
        eprintln!("Usage: kitties decode <numeral>");
        return;
    };
    let genome = match Genome::from_numeral(numeral) {
        Ok(g) => g,
        Err(GenomeError::Length { expected, actual }) => {
            println!("  Numeral has {} digits (expected {}), decoding leniently", actual, expected);
            match GeneSlices::of(numeral).parse() {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("  Decode failed: {}", e);
                    return;
                }
            }
        }
        Err(e) => {
            eprintln!("  Decode failed: {}", e);
            return;
        }
    };
    let Some(mut controller) = load_controller(config) else { return };
    match controller.show(genome) {
        Ok(()) => print_cat(&controller),
        Err(e) => eprintln!("  Render failed: {}", e),
    }
}

fn cmd_color(config: &AppConfig, args: &[String]) {
    let Some(value) = args.first() else {
        eprintln!("Usage: kitties color <value>");
        return;
    };
    let Some(mut controller) = load_controller(config) else { return };
    match controller.set_body_color(value) {
        Ok(v) => {
            println!("  Body color set to {}", v);
            print_cat(&controller);
        }
        Err(e) => eprintln!("  Recolor failed: {}", e),
    }
}

fn cmd_palette(config: &AppConfig) {
    let palette = config.palette();
    println!("\n  Palette ({} colors):", palette.len());
    let entries: Vec<String> = palette
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:02} {}", i, c))
        .collect();
    for row in entries.chunks(5) {
        println!("  {}", row.join("   "));
    }
}

async fn cmd_watch(config: &AppConfig, args: &[String]) {
    let count: u64 = args.first().and_then(|s| s.parse().ok()).unwrap_or(5);

    let abi = match config.abi() {
        Ok(abi) => abi,
        Err(e) => {
            eprintln!("  {}", e);
            return;
        }
    };
    let chain = LocalChain::new(config.contract_address);
    let wallet = StaticWallet::approving(vec![config.owner]);

    let session = match Session::connect(&wallet, &chain, &abi, config.contract_address).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("  Failed to start session: {}", e);
            return;
        }
    };
    println!("\n  Watching Birth events as {}", session.account());
    let subscription = session.subscribe_birth();

    let minter = chain.clone();
    let owner = config.owner;
    let interval = Duration::from_millis(config.mint_interval_ms.max(1));
    let minting = tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            minter.mint_random(owner, &mut rng);
        }
    });

    let renderer = Renderer::new(config.palette());
    let mut view = MemoryView::new();
    let stats = BirthWatcher::with_limit(count)
        .run_with(subscription, &mut view, |event, view| {
            println!("  {}", event.notification());
            match event.genome() {
                Ok(genome) => match renderer.render(&genome, view) {
                    Ok(()) => println!("{}\n", view.describe()),
                    Err(e) => eprintln!("  Render failed: {}", e),
                },
                Err(e) => println!("  (not rendered: {})\n", e),
            }
        })
        .await;
    minting.abort();

    println!(
        "  Saw {} birth(s), {} stream error(s); last: {}",
        stats.births,
        stats.errors,
        view.last_notification().unwrap_or("-")
    );
    if let (Some(first), Some(span)) = (stats.first_birth, stats.span()) {
        println!(
            "  First birth at {}, {} ms to the last",
            first.format("%H:%M:%S%.3f"),
            span.num_milliseconds()
        );
    }
}
