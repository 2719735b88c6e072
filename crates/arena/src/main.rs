//! Arena CLI
//!
//! Pit two baseline policies against each other on a built-in rule set.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use arena::{Arena, ArenaConfig, BatchError, ConsoleProgress, Scoreboard};
use game_core::{Game, Policy};
use greedy_policy::GreedyPolicy;
use random_policy::RandomPolicy;
use score_race::ScoreRace;
use tictactoe::TicTacToe;

fn print_usage() {
    println!("Policy Arena");
    println!();
    println!("Usage:");
    println!("  arena match <policyA> <policyB> [--game NAME] [--games N] [--verbose] [--json]");
    println!();
    println!("Policies:");
    println!("  random        - uniform random legal action");
    println!("  random:SEED   - seeded random (reproducible)");
    println!("  greedy        - wins on the spot if possible, else first legal action");
    println!("  human         - prompt on stdin");
    println!();
    println!("Games:");
    println!("  tictactoe     - 3x3 tictactoe (default)");
    println!("  score-race    - fixed-ply banking duel");
    println!();
    println!("Examples:");
    println!("  arena match greedy random --games 20");
    println!("  arena match human greedy --games 1 --verbose");
}

struct MatchArgs {
    policy_a: String,
    policy_b: String,
    game: String,
    num_matches: u32,
    verbose: bool,
    json: bool,
}

fn parse_match_args(args: &[String]) -> Option<MatchArgs> {
    if args.len() < 2 {
        eprintln!("Error: match requires two policy specifications");
        return None;
    }

    let mut parsed = MatchArgs {
        policy_a: args[0].clone(),
        policy_b: args[1].clone(),
        game: "tictactoe".to_string(),
        num_matches: 10,
        verbose: false,
        json: false,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    parsed.num_matches = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--game" => {
                if i + 1 < args.len() {
                    parsed.game = args[i + 1].clone();
                    i += 1;
                }
            }
            "--verbose" | "-v" => parsed.verbose = true,
            "--json" => parsed.json = true,
            _ => {}
        }
        i += 1;
    }

    Some(parsed)
}

/// Stdin prompt wrapped as a closure policy.
fn human_policy<'g, G>(game: &'g G) -> impl FnMut(&G::Position) -> G::Action + 'g
where
    G: Game,
    G::Action: FromStr,
{
    move |view: &G::Position| {
        let legal = game.legal_actions(view);
        loop {
            print!("{}", game.render(view));
            println!("legal actions: {legal:?}");
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            let read = io::stdin()
                .lock()
                .read_line(&mut line)
                .expect("failed to read stdin");
            if read == 0 {
                panic!("stdin closed while the human policy was waiting for input");
            }
            match line.trim().parse::<G::Action>() {
                Ok(action) if legal.contains(&action) => return action,
                _ => println!("not a legal action"),
            }
        }
    }
}

fn create_policy<'g, G>(spec: &str, game: &'g G) -> Box<dyn Policy<G> + 'g>
where
    G: Game,
    G::Action: FromStr,
{
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "random" | "rand" => {
            if parts.len() > 1 {
                match parts[1].parse() {
                    Ok(seed) => Box::new(RandomPolicy::seeded(game, seed)),
                    Err(_) => {
                        eprintln!("Warning: bad seed {:?}, using entropy", parts[1]);
                        Box::new(RandomPolicy::new(game))
                    }
                }
            } else {
                Box::new(RandomPolicy::new(game))
            }
        }
        "greedy" => Box::new(GreedyPolicy::new(game)),
        "human" => Box::new(human_policy(game)),
        _ => {
            eprintln!("Unknown policy: {spec}, using random");
            Box::new(RandomPolicy::new(game))
        }
    }
}

fn run_batch<G>(game: G, args: &MatchArgs) -> Result<Scoreboard, BatchError>
where
    G: Game + Copy,
    G::Action: FromStr,
{
    let mut policy_a = create_policy(&args.policy_a, &game);
    let mut policy_b = create_policy(&args.policy_b, &game);

    let config = ArenaConfig {
        num_matches: args.num_matches,
        verbose: args.verbose,
        ..Default::default()
    };

    let mut arena = Arena::new(game, config);
    if !args.json {
        arena = arena.with_progress(ConsoleProgress);
    }
    arena.play_batch(policy_a.as_mut(), policy_b.as_mut())
}

fn run_match_cmd(args: &[String]) -> ExitCode {
    let Some(parsed) = parse_match_args(args) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    if !parsed.json {
        println!(
            "=== Match: {} vs {} on {} ===",
            parsed.policy_a, parsed.policy_b, parsed.game
        );
        println!("Matches: {}", parsed.num_matches);
        println!();
    }

    let result = match parsed.game.as_str() {
        "tictactoe" | "ttt" => run_batch(TicTacToe::new(), &parsed),
        "score-race" | "race" => run_batch(ScoreRace::default(), &parsed),
        other => {
            eprintln!("Unknown game: {other}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(scoreboard) => {
            if parsed.json {
                match serde_json::to_string_pretty(&scoreboard) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize scoreboard: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!();
                println!("=== Final Score ===");
                println!("{}: {} wins", parsed.policy_a, scoreboard.wins_a);
                println!("{}: {} wins", parsed.policy_b, scoreboard.wins_b);
                println!("draws: {}", scoreboard.draws);
                println!(
                    "win ratio ({}): {:.1}%",
                    parsed.policy_a,
                    scoreboard.win_ratio_a() * 100.0
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Batch abandoned: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "match" => run_match_cmd(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
