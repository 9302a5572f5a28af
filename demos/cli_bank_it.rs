//! CLI "Bank It!" example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bankit::{Game, GameOptions, Phase, RoundCount, SELECTABLE_NUMBERS};

fn main() {
    println!("Bank It! CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        if !setup(&game) {
            println!("Goodbye.");
            return;
        }

        match game.start_game() {
            Ok(pending) => {
                println!("Starting...");
                if let Err(err) = game.settle_blocking(pending) {
                    println!("Start error: {err}");
                    continue;
                }
            }
            Err(err) => {
                println!("Start error: {err}");
                continue;
            }
        }

        loop {
            if !play(&game) {
                println!("Goodbye.");
                return;
            }

            print_results(&game);
            let pending = match prompt_line("(p)lay again, (m)enu, or (q)uit: ").as_str() {
                "p" | "play" => game.reset_game(),
                "m" | "menu" => game.return_to_menu(),
                _ => {
                    println!("Goodbye.");
                    return;
                }
            };
            match pending.map(|pending| game.settle_blocking(pending)) {
                Ok(Ok(_)) if game.phase() == Phase::NotStarted => break,
                Ok(Ok(_)) => {}
                Ok(Err(err)) | Err(err) => println!("Transition error: {err}"),
            }
        }
    }
}

/// Collects the round count and roster. Returns `false` if the user quit.
fn setup(game: &Game) -> bool {
    let rounds = loop {
        let input = prompt_line("Rounds (5, 10 or 20): ");
        if input == "q" || input == "quit" {
            return false;
        }
        match input.parse::<u32>().map(RoundCount::try_from) {
            Ok(Ok(rounds)) => break rounds,
            Ok(Err(err)) => println!("{err}"),
            Err(_) => println!("Please enter a number."),
        }
    };
    if let Err(err) = game.set_round_count(rounds) {
        println!("Setup error: {err}");
    }

    game.set_show_player_setup(true);
    loop {
        let names = game
            .players()
            .iter()
            .map(|p| p.name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Players: [{names}]");

        let input = prompt_raw("Add a player (blank to start, 'q' to quit): ");
        if input.eq_ignore_ascii_case("q") {
            return false;
        }
        if input.is_empty() {
            if game.player_count() >= game.options.min_players {
                return true;
            }
            println!("Need at least {} players.", game.options.min_players);
            continue;
        }

        game.set_new_player_name(&input);
        if let Err(err) = game.submit_new_player() {
            println!("Could not add player: {err}");
        }
    }
}

/// Runs turns until the game is over. Returns `false` if the user quit.
fn play(game: &Game) -> bool {
    while !game.is_game_over() {
        print_table(game);

        let input = prompt_line("Number (2-12), (r)oll, (d)ouble, (b)ank, (c)lear: ");
        let result = match input.as_str() {
            "q" | "quit" => return false,
            "r" | "roll" => {
                let roll = game.roll_dice();
                println!(
                    "Rolled {} + {} = {}{}",
                    roll.first,
                    roll.second,
                    roll.total(),
                    if roll.is_doubles() { " (doubles)" } else { "" }
                );
                game.handle_roll(roll).map(|_| ())
            }
            "d" | "double" => game.double_pot().map(|_| ()),
            "b" | "bank" => game
                .bank_points()
                .map(|(_, amount)| println!("Banked {amount}.")),
            "c" | "clear" => game.clear_round(),
            other => match other.parse::<u64>() {
                Ok(number) if SELECTABLE_NUMBERS.contains(&number) => {
                    game.handle_number_select(number).map(|_| ())
                }
                _ => {
                    println!("Unknown action.");
                    Ok(())
                }
            },
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
    true
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    println!(
        "\nRound {} of {}  |  Pot: {}",
        snapshot.current_round, snapshot.round_count, snapshot.total_points
    );
    for (index, player) in snapshot.players.iter().enumerate() {
        let marker = if index == snapshot.current_player_index {
            ">"
        } else {
            " "
        };
        let status = if player.has_finished { " (banked)" } else { "" };
        println!("{marker} {}: {} points{status}", player.name, player.points);
    }
    println!();
}

fn print_results(game: &Game) {
    let Some(result) = game.result() else {
        return;
    };

    println!("\nGame Over!");
    if let Some(winner) = &result.winner {
        println!("{} wins with {} points!", winner.name, winner.points);
    }
    for standing in result.standings.iter().skip(1) {
        println!(
            "{}. {}: {} points",
            standing.place, standing.name, standing.points
        );
    }
    println!();
}
