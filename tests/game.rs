//! Game integration tests.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use bankit::{
    ConfigError, DiceRoll, Game, GameEvent, GameOptions, Phase, RoundCount, SELECTABLE_NUMBERS,
    SetupError, TransitionError, TransitionKind, TurnError,
};

fn options() -> GameOptions {
    GameOptions::default().with_settle_delay(Duration::ZERO)
}

fn game_with(names: &[&str]) -> Game {
    let game = Game::new(options(), 7);
    for name in names {
        game.add_player(name).unwrap();
    }
    game
}

fn started(names: &[&str]) -> Game {
    let game = game_with(names);
    let pending = game.start_game().unwrap();
    game.complete_transition(pending).unwrap();
    game
}

fn record_events(game: &Game) -> Arc<StdMutex<Vec<GameEvent>>> {
    let log = Arc::new(StdMutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    game.subscribe(move |event| sink.lock().unwrap().push(*event));
    log
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_round_count(RoundCount::Twenty)
        .with_settle_delay(Duration::from_millis(10))
        .with_min_players(0);

    assert_eq!(options.round_count, RoundCount::Twenty);
    assert_eq!(options.settle_delay, Duration::from_millis(10));
    assert_eq!(options.min_players, 1);
    assert_eq!(
        GameOptions::default().settle_delay,
        Duration::from_millis(300)
    );
}

#[test]
fn round_count_choices() {
    assert_eq!(RoundCount::default().rounds(), 5);
    assert_eq!(RoundCount::try_from(10), Ok(RoundCount::Ten));
    assert_eq!(RoundCount::try_from(20), Ok(RoundCount::Twenty));
    assert_eq!(
        RoundCount::try_from(7),
        Err(ConfigError::UnsupportedRoundCount(7))
    );

    let game = game_with(&[]);
    game.set_round_count(RoundCount::Ten).unwrap();
    assert_eq!(game.round_count(), RoundCount::Ten);
    assert_eq!(game.snapshot().round_count, 10);
}

#[test]
fn roster_rejects_blank_names_and_assigns_unique_ids() {
    let game = game_with(&[]);
    assert_eq!(game.add_player("   ").unwrap_err(), SetupError::EmptyName);
    assert_eq!(game.add_player("").unwrap_err(), SetupError::EmptyName);

    let alice = game.add_player("  Alice ").unwrap();
    let bob = game.add_player("Bob").unwrap();
    game.remove_player(alice).unwrap();
    let cleo = game.add_player("Cleo").unwrap();

    assert_ne!(alice, bob);
    assert_ne!(bob, cleo);
    assert_ne!(alice, cleo);

    let players = game.players();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| !p.name.trim().is_empty()));
    assert_eq!(players[0].name, "Bob");
    assert_eq!(players[1].name, "Cleo");
}

#[test]
fn removing_unknown_player_leaves_roster_unchanged() {
    let game = game_with(&["Alice", "Bob"]);
    let before = game.players();

    assert_eq!(
        game.remove_player(9_999).unwrap_err(),
        SetupError::PlayerNotFound
    );
    assert_eq!(game.players(), before);
}

#[test]
fn reordering_swaps_neighbours_and_stops_at_edges() {
    let game = game_with(&["Alice", "Bob", "Cleo"]);

    game.move_player_up(2).unwrap();
    game.move_player_down(0).unwrap();
    let names: Vec<String> = game.players().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Cleo", "Alice", "Bob"]);

    assert_eq!(game.move_player_up(0).unwrap_err(), SetupError::AtBoundary);
    assert_eq!(
        game.move_player_down(2).unwrap_err(),
        SetupError::AtBoundary
    );
    assert_eq!(
        game.move_player_down(3).unwrap_err(),
        SetupError::IndexOutOfBounds(3)
    );
    assert_eq!(
        game.move_player_up(5).unwrap_err(),
        SetupError::IndexOutOfBounds(5)
    );
}

#[test]
fn roster_is_locked_once_started() {
    let game = started(&["Alice", "Bob"]);
    let bob = game.players()[1].id;

    assert_eq!(
        game.add_player("Cleo").unwrap_err(),
        SetupError::GameInProgress
    );
    assert_eq!(
        game.remove_player(bob).unwrap_err(),
        SetupError::GameInProgress
    );
    assert_eq!(
        game.move_player_up(1).unwrap_err(),
        SetupError::GameInProgress
    );
    assert_eq!(
        game.set_round_count(RoundCount::Ten).unwrap_err(),
        SetupError::GameInProgress
    );
    assert_eq!(game.player_count(), 2);
}

#[test]
fn start_requires_two_players() {
    let game = game_with(&["Solo"]);

    assert_eq!(
        game.start_game().unwrap_err(),
        TransitionError::NotEnoughPlayers {
            required: 2,
            found: 1
        }
    );
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(!game.is_transitioning());
    assert!(!game.is_game_started());
}

#[test]
fn single_player_game_does_not_stall() {
    let game = Game::new(options().with_min_players(1), 1);
    game.add_player("Solo").unwrap();
    let pending = game.start_game().unwrap();
    game.complete_transition(pending).unwrap();

    game.handle_number_select(5).unwrap();
    assert_eq!(game.current_player_index(), 0);

    game.bank_points().unwrap();
    assert_eq!(game.current_round(), 2);
    assert_eq!(game.total_points(), 0);
    assert_eq!(game.current_player_index(), 0);
    assert!(!game.players()[0].has_finished);
    assert_eq!(game.players()[0].points, 5);
}

#[test]
fn start_transition_settles_into_a_fresh_game() {
    let game = game_with(&["Alice", "Bob"]);
    game.set_show_player_setup(true);

    let pending = game.start_game().unwrap();
    assert_eq!(pending.kind, TransitionKind::Start);
    assert_eq!(game.phase(), Phase::Starting);
    assert!(!game.show_player_setup());
    assert!(!game.is_game_started());
    assert_eq!(
        game.handle_number_select(4).unwrap_err(),
        TurnError::NotInProgress
    );

    assert_eq!(game.complete_transition(pending), Ok(TransitionKind::Start));
    assert_eq!(game.phase(), Phase::InProgress);
    assert!(game.is_game_started());
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.total_points(), 0);
    let players = game.players();
    assert!(players.iter().all(|p| p.points == 0 && !p.has_finished));

    assert_eq!(
        game.start_game().unwrap_err(),
        TransitionError::AlreadyStarted
    );
}

#[test]
fn turn_actions_need_a_running_game() {
    let game = game_with(&["Alice", "Bob"]);
    assert_eq!(
        game.handle_number_select(6).unwrap_err(),
        TurnError::NotInProgress
    );
    assert_eq!(game.bank_points().unwrap_err(), TurnError::NotInProgress);
    assert_eq!(game.clear_round().unwrap_err(), TurnError::NotInProgress);
    assert_eq!(game.total_points(), 0);

    assert_eq!(game.reset_game().unwrap_err(), TransitionError::NotStarted);
    assert_eq!(
        game.return_to_menu().unwrap_err(),
        TransitionError::NotStarted
    );
}

#[test]
fn seven_pays_flat_bonus_and_passes_turn() {
    let game = started(&["Alice", "Bob"]);

    assert_eq!(game.handle_number_select(7), Ok(50));
    assert_eq!(game.current_player().unwrap().name, "Bob");

    // Still a flat bonus after round 3, and the round carries on.
    game.state.lock().current_round = 4;
    assert_eq!(game.handle_number_select(7), Ok(100));
    assert_eq!(game.current_round(), 4);
    assert_eq!(game.current_player().unwrap().name, "Alice");
}

#[test]
fn other_numbers_add_to_pot() {
    let game = started(&["Alice", "Bob", "Cleo"]);
    for number in [2, 3, 12] {
        game.handle_number_select(number).unwrap();
    }
    assert_eq!(game.total_points(), 17);
    assert_eq!(game.current_player_index(), 0);
    assert!(SELECTABLE_NUMBERS.contains(&12));
}

#[test]
fn bank_with_empty_pot_is_rejected() {
    let game = started(&["Alice", "Bob"]);
    assert_eq!(game.bank_points().unwrap_err(), TurnError::EmptyPot);
    assert_eq!(game.current_player_index(), 0);
    assert!(game.players().iter().all(|p| !p.has_finished));
}

#[test]
fn scenario_bank_after_seven() {
    let game = Game::new(options().with_round_count(RoundCount::Five), 3);
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();
    let pending = game.start_game().unwrap();
    game.complete_transition(pending).unwrap();

    game.handle_number_select(7).unwrap();
    assert_eq!(game.total_points(), 50);
    assert_eq!(game.current_player().unwrap().name, "Bob");

    assert_eq!(game.bank_points().unwrap().1, 50);
    let players = game.players();
    assert_eq!(players[1].points, 50);
    assert!(players[1].has_finished);
    assert!(!players[0].has_finished);
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.current_player().unwrap().name, "Alice");
    // Banking leaves the pot for whoever is still rolling.
    assert_eq!(game.total_points(), 50);
}

#[test]
fn scenario_clear_round_advances() {
    let game = started(&["Alice", "Bob"]);
    game.handle_number_select(7).unwrap();
    game.bank_points().unwrap();

    game.clear_round().unwrap();
    assert_eq!(game.current_round(), 2);
    assert_eq!(game.total_points(), 0);
    let players = game.players();
    assert!(players.iter().all(|p| !p.has_finished));
    assert_eq!(players[0].points, 0);
    assert_eq!(players[1].points, 50);
}

#[test]
fn points_accumulate_across_rounds() {
    let game = started(&["Alice", "Bob"]);

    for round in 1..=3 {
        assert_eq!(game.current_round(), round);
        game.handle_number_select(10).unwrap();
        game.bank_points().unwrap();
        game.bank_points().unwrap();
    }

    let players = game.players();
    assert_eq!(players.iter().map(|p| p.points).sum::<u64>(), 60);
    assert_eq!(game.current_round(), 4);
}

#[test]
fn scenario_final_round_ends_the_game() {
    let game = started(&["Alice", "Bob"]);
    game.state.lock().current_round = 5;

    game.handle_number_select(3).unwrap();
    game.bank_points().unwrap();
    assert!(!game.is_game_over());
    game.bank_points().unwrap();

    assert!(game.state.lock().is_game_finished);
    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.current_round(), 5);

    assert_eq!(
        game.handle_number_select(4).unwrap_err(),
        TurnError::GameOver
    );
    assert_eq!(game.bank_points().unwrap_err(), TurnError::GameOver);
    assert_eq!(game.clear_round().unwrap_err(), TurnError::GameOver);
    assert_eq!(game.total_points(), 3);

    let result = game.result().unwrap();
    assert_eq!(result.rounds_played, 5);
    assert_eq!(result.winner.unwrap().name, "Alice");
    assert_eq!(result.standings.len(), 2);
}

#[test]
fn scenario_double_from_round_three() {
    let game = started(&["Alice", "Bob"]);
    game.state.lock().current_round = 3;
    assert!(game.is_round_three_or_later());

    game.handle_number_select(10).unwrap();
    assert_eq!(game.double_pot(), Ok(20));
    assert_eq!(game.double_pot(), Ok(40));
    assert_eq!(game.current_player_index(), 1);
}

#[test]
fn rolled_doubles_add_their_total() {
    let game = started(&["Alice", "Bob"]);
    game.state.lock().current_round = 3;
    game.handle_number_select(10).unwrap();

    assert_eq!(game.handle_roll(DiceRoll::new(3, 3)), Ok(16));
    assert_eq!(game.handle_roll(DiceRoll::new(3, 4)), Ok(66));
    assert_eq!(game.current_player_index(), 1);
}

#[test]
fn game_over_is_suppressed_while_transitioning() {
    let game = started(&["Alice", "Bob"]);
    game.state.lock().current_round = 5;
    game.clear_round().unwrap();
    assert!(game.is_game_over());

    let pending = game.reset_game().unwrap();
    assert!(game.is_transitioning());
    assert!(!game.is_game_over());
    assert_eq!(game.phase(), Phase::Resetting);

    game.state.lock().current_round = 42;
    assert!(!game.is_game_over());
    assert!(game.result().is_none());

    game.complete_transition(pending).unwrap();
    assert!(!game.is_game_over());
    assert_eq!(game.current_round(), 1);
    assert!(game.is_game_started());
}

#[test]
fn play_again_keeps_roster_and_zeroes_scores() {
    let game = started(&["Alice", "Bob"]);
    game.handle_number_select(8).unwrap();
    game.bank_points().unwrap();

    let pending = game.reset_game().unwrap();
    // Scores are only wiped once the transition settles.
    assert_eq!(game.players()[1].points, 8);
    game.complete_transition(pending).unwrap();

    let players = game.players();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.points == 0 && !p.has_finished));
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.total_points(), 0);
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn return_to_menu_clears_everything() {
    let game = started(&["Alice", "Bob"]);
    game.handle_number_select(9).unwrap();

    let pending = game.return_to_menu().unwrap();
    assert_eq!(game.phase(), Phase::ReturningToMenu);
    game.complete_transition(pending).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::NotStarted);
    assert!(!snapshot.is_game_started);
    assert!(snapshot.players.is_empty());
    assert_eq!(snapshot.current_round, 1);
    assert_eq!(snapshot.total_points, 0);
    assert_eq!(snapshot.current_player_index, 0);

    game.add_player("Dana").unwrap();
    assert_eq!(game.player_count(), 1);
}

#[test]
fn newer_transition_supersedes_pending_one() {
    let game = game_with(&["Alice", "Bob"]);
    let log = record_events(&game);

    let start = game.start_game().unwrap();
    let back = game.return_to_menu().unwrap();
    assert!(back.generation > start.generation);
    assert_eq!(game.pending_transition(), Some(back));

    assert_eq!(
        game.complete_transition(start).unwrap_err(),
        TransitionError::Superseded
    );
    assert_eq!(game.phase(), Phase::ReturningToMenu);

    assert_eq!(
        game.complete_transition(back),
        Ok(TransitionKind::ReturnToMenu)
    );
    assert_eq!(
        game.complete_transition(back).unwrap_err(),
        TransitionError::NothingPending
    );
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.player_count(), 0);

    let events = log.lock().unwrap().clone();
    let superseded = GameEvent::TransitionSuperseded(TransitionKind::Start);
    let completed = GameEvent::TransitionCompleted(TransitionKind::Start);
    let returned = GameEvent::TransitionCompleted(TransitionKind::ReturnToMenu);
    assert!(events.contains(&superseded));
    assert!(!events.contains(&completed));
    assert!(events.contains(&returned));
}

#[test]
fn play_again_during_start_still_starts() {
    let game = game_with(&["Alice", "Bob"]);
    let start = game.start_game().unwrap();
    let reset = game.reset_game().unwrap();

    assert!(game.complete_transition(start).is_err());
    game.complete_transition(reset).unwrap();
    assert!(game.is_game_started());
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn subscribers_see_changes_and_can_read_the_game() {
    let game = Arc::new(game_with(&["Alice", "Bob"]));
    let log = record_events(&game);

    let pots = Arc::new(StdMutex::new(Vec::new()));
    let reader = {
        let weak = Arc::downgrade(&game);
        let pots = Arc::clone(&pots);
        game.subscribe(move |event| {
            if let (GameEvent::PotChanged { .. }, Some(game)) = (event, weak.upgrade()) {
                pots.lock().unwrap().push(game.total_points());
            }
        })
    };

    let pending = game.start_game().unwrap();
    game.complete_transition(pending).unwrap();
    game.handle_number_select(6).unwrap();

    assert_eq!(*pots.lock().unwrap(), [6]);
    let events = log.lock().unwrap().clone();
    let starting = GameEvent::TransitionStarted(TransitionKind::Start);
    assert!(events.contains(&starting));
    assert!(events.contains(&GameEvent::PotChanged { total_points: 6 }));
    assert!(events.contains(&GameEvent::TurnChanged { player_index: 1 }));

    assert!(game.unsubscribe(reader));
    assert!(!game.unsubscribe(reader));
    game.handle_number_select(2).unwrap();
    assert_eq!(pots.lock().unwrap().len(), 1);
}

#[test]
fn callbacks_can_subscribe_from_inside_a_callback() {
    let game = Arc::new(started(&["Alice", "Bob"]));
    let late = Arc::new(StdMutex::new(Vec::new()));
    {
        let weak = Arc::downgrade(&game);
        let late = Arc::clone(&late);
        game.subscribe(move |event| {
            let (GameEvent::PotChanged { .. }, Some(game)) = (event, weak.upgrade()) else {
                return;
            };
            let late = Arc::clone(&late);
            game.subscribe(move |event| late.lock().unwrap().push(*event));
        });
    }

    game.handle_number_select(4).unwrap();
    assert!(late.lock().unwrap().is_empty());

    game.bank_points().unwrap();
    let events = late.lock().unwrap().clone();
    assert!(events.contains(&GameEvent::TurnChanged { player_index: 0 }));
}

#[test]
fn failed_intents_emit_nothing() {
    let game = game_with(&["Alice"]);
    let log = record_events(&game);

    let _ = game.add_player(" ");
    let _ = game.move_player_up(0);
    let _ = game.start_game();
    let _ = game.bank_points();
    game.set_show_rules(false);

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn view_flags_and_new_player_input() {
    let game = game_with(&[]);
    let log = record_events(&game);

    game.set_show_rules(true);
    game.set_show_player_setup(true);
    assert!(game.show_rules());
    assert!(game.show_player_setup());

    game.set_new_player_name("   ");
    assert_eq!(game.submit_new_player().unwrap_err(), SetupError::EmptyName);
    assert_eq!(game.new_player_name(), "   ");

    game.set_new_player_name("  Cleo ");
    let id = game.submit_new_player().unwrap();
    assert_eq!(game.new_player_name(), "");
    assert_eq!(game.players()[0].id, id);
    assert_eq!(game.players()[0].name, "Cleo");

    let events = log.lock().unwrap().clone();
    assert!(events.contains(&GameEvent::PlayerAdded(id)));
    let view_changes = events
        .iter()
        .filter(|e| **e == GameEvent::ViewChanged)
        .count();
    assert!(view_changes >= 4);
}

#[test]
fn standings_rank_by_points() {
    let game = started(&["Alice", "Bob", "Cleo"]);
    game.handle_number_select(4).unwrap(); // Bob up
    game.bank_points().unwrap(); // Bob 4, Cleo up
    game.handle_number_select(8).unwrap(); // pot 12, Alice up
    game.bank_points().unwrap(); // Alice 12

    let standings = game.standings();
    let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Cleo"]);
    assert_eq!(standings[0].points, 12);
    assert_eq!(standings[1].place, 2);
    assert!(game.result().is_none());
}

#[test]
fn dice_are_seeded() {
    let a = Game::new(options(), 99);
    let b = Game::new(options(), 99);

    for _ in 0..50 {
        let roll = a.roll_dice();
        assert_eq!(roll, b.roll_dice());
        assert!((1..=6).contains(&roll.first));
        assert!((1..=6).contains(&roll.second));
        assert!(SELECTABLE_NUMBERS.contains(&roll.total()));
    }
}

#[test]
fn settle_blocking_completes_after_delay() {
    let delay = Duration::from_millis(5);
    let game = Game::new(options().with_settle_delay(delay), 1);
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();

    let pending = game.start_game().unwrap();
    assert_eq!(pending.delay, delay);
    assert_eq!(game.settle_blocking(pending), Ok(TransitionKind::Start));
    assert!(game.is_game_started());
}
