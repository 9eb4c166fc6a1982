//! feed-replay: turret feed replay and synthetic feed generator.
//!
//! Usage:
//!   feed-replay replay --feed match.jsonl
//!   feed-replay synth --seed 42 --turrets 6 --casts 40 --output feed_synth.jsonl

mod feed;
mod synth;

use std::cell::Cell;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use rampart_tracker::{TrackerConfig, TurretTracker};
use rampart_world::GameWorld;

use crate::feed::{apply_entry, load_feed, write_feed};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "replay" => cmd_replay(&args[2..]),
        "synth" => cmd_synth(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        "feed-replay: RAMPART turret feed replay tool\n\
         \n\
         Commands:\n\
         \n\
         replay    Replay a JSONL feed through the turret tracker\n\
         \n\
           --feed <path>      Feed file to replay (required)\n\
           --quiet            Suppress per-attack and per-turret output\n\
         \n\
         synth     Generate a synthetic feed for testing/demo\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --turrets <N>      Turret count (default: 6)\n\
           --casts <N>        Cast count (default: 40)\n\
           --output <path>    Output feed path (default: feed_synth.jsonl)\n\
         \n\
         Examples:\n\
         \n\
           feed-replay synth --seed 7 --output demo.jsonl\n\
           feed-replay replay --feed demo.jsonl\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_count(args: &[String], flag: &str, default: usize) -> usize {
    match parse_value(args, flag) {
        Some(raw) => raw.parse().unwrap_or(default),
        None => default,
    }
}

fn parse_seed(args: &[String], default: u64) -> u64 {
    match parse_value(args, "--seed") {
        Some(raw) => raw.parse().unwrap_or(default),
        None => default,
    }
}

// --- Replay command ---

fn cmd_replay(args: &[String]) {
    let feed_path = match parse_value(args, "--feed") {
        Some(raw) => PathBuf::from(raw),
        None => {
            eprintln!("Error: --feed <path> is required");
            process::exit(1);
        }
    };
    let quiet = args.iter().any(|arg| arg == "--quiet");

    let entries = match load_feed(&feed_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading feed: {e}");
            process::exit(1);
        }
    };
    eprintln!(
        "Replaying {} entries from {}...",
        entries.len(),
        feed_path.display()
    );

    let mut world = GameWorld::new();
    let mut tracker = TurretTracker::new(TrackerConfig::default());

    let count = Rc::new(Cell::new(0usize));
    let sink = Rc::clone(&count);
    tracker.subscribe(move |attack| {
        sink.set(sink.get() + 1);
        if !quiet {
            let target = attack
                .target
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "turret {:>4}  start {:>8}ms  delay {:>7.1}ms  end {:>10.1}ms  target {target}",
                attack.turret, attack.attack_start, attack.attack_delay, attack.attack_end
            );
        }
    });

    for (index, entry) in entries.iter().enumerate() {
        if let Err(e) = apply_entry(&mut world, &mut tracker, entry) {
            eprintln!("Error at entry {}: {e}", index + 1);
            process::exit(1);
        }
    }

    if !quiet && !tracker.registry().is_empty() {
        println!("tracked turrets:");
        for state in tracker.registry().iter() {
            let name = world
                .object_info(state.turret)
                .map(|info| info.name)
                .unwrap_or_default();
            let bolt = state
                .bolt_object
                .map(|b| b.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>4}  {name:<24}  last start {:>8}ms  last end {:>10.1}ms  bolt {bolt}",
                state.turret, state.attack_start, state.attack_end
            );
        }
    }

    eprintln!(
        "Done! {} entries, {} attack notifications, {} tracked turrets, {} live objects",
        entries.len(),
        count.get(),
        tracker.registry().len(),
        world.object_count()
    );
}

// --- Synth command ---

fn cmd_synth(args: &[String]) {
    let seed = parse_seed(args, 42);
    let turret_count = parse_count(args, "--turrets", 6);
    let cast_count = parse_count(args, "--casts", 40);
    let output = match parse_value(args, "--output") {
        Some(raw) => PathBuf::from(raw),
        None => PathBuf::from("feed_synth.jsonl"),
    };

    eprintln!("Generating {turret_count} turrets / {cast_count} casts with seed {seed}...");
    let entries = synth::generate(seed, turret_count, cast_count);

    match write_feed(&output, &entries) {
        Ok(()) => eprintln!(
            "Done! {} entries written to {}",
            entries.len(),
            output.display()
        ),
        Err(e) => {
            eprintln!("Error writing feed: {e}");
            process::exit(1);
        }
    }
}
