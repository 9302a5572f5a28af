use bankit::{
    Game, GameOptions, GameSnapshot, PendingTransition, Phase, Player, RoundCount, Standing,
    TransitionKind,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    pending: Option<PendingTransition>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            pending: None,
        }
    }

    pub fn set_round_count(&self, rounds: u32) -> Result<(), JsValue> {
        let rounds = RoundCount::try_from(rounds).map_err(js_err)?;
        self.game.set_round_count(rounds).map_err(js_err)
    }

    pub fn set_new_player_name(&self, name: &str) {
        self.game.set_new_player_name(name);
    }

    pub fn add_player(&self) -> Result<u32, JsValue> {
        self.game.submit_new_player().map_err(js_err)
    }

    pub fn remove_player(&self, id: u32) -> Result<(), JsValue> {
        self.game.remove_player(id).map(|_| ()).map_err(js_err)
    }

    pub fn move_player_up(&self, index: u32) -> Result<(), JsValue> {
        self.game.move_player_up(index as usize).map_err(js_err)
    }

    pub fn move_player_down(&self, index: u32) -> Result<(), JsValue> {
        self.game.move_player_down(index as usize).map_err(js_err)
    }

    pub fn set_show_player_setup(&self, show: bool) {
        self.game.set_show_player_setup(show);
    }

    pub fn set_show_rules(&self, show: bool) {
        self.game.set_show_rules(show);
    }

    /// Begins the start transition; JS should call `complete_transition`
    /// with the returned generation after `delay_ms`.
    pub fn start_game(&mut self) -> Result<JsValue, JsValue> {
        let pending = self.game.start_game().map_err(js_err)?;
        self.track(pending)
    }

    pub fn reset_game(&mut self) -> Result<JsValue, JsValue> {
        let pending = self.game.reset_game().map_err(js_err)?;
        self.track(pending)
    }

    pub fn return_to_menu(&mut self) -> Result<JsValue, JsValue> {
        let pending = self.game.return_to_menu().map_err(js_err)?;
        self.track(pending)
    }

    pub fn complete_transition(&mut self, generation: u32) -> Result<String, JsValue> {
        let pending = self
            .pending
            .filter(|pending| pending.generation as u32 == generation)
            .ok_or_else(|| JsValue::from_str("transition superseded"))?;
        let kind = self.game.complete_transition(pending).map_err(js_err)?;
        self.pending = None;
        Ok(transition_to_str(kind).to_owned())
    }

    pub fn handle_number_select(&self, number: u32) -> Result<(), JsValue> {
        self.game
            .handle_number_select(u64::from(number))
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn double_pot(&self) -> Result<(), JsValue> {
        self.game.double_pot().map(|_| ()).map_err(js_err)
    }

    pub fn bank_points(&self) -> Result<(), JsValue> {
        self.game.bank_points().map(|_| ()).map_err(js_err)
    }

    pub fn clear_round(&self) -> Result<(), JsValue> {
        self.game.clear_round().map_err(js_err)
    }

    pub fn roll_dice(&self) -> Result<JsValue, JsValue> {
        let roll = self.game.roll_dice();
        to_js_value(&JsRoll {
            first: roll.first,
            second: roll.second,
            total: roll.total(),
            doubles: roll.is_doubles(),
        })
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }

    pub fn standings(&self) -> Result<JsValue, JsValue> {
        let standings: Vec<JsStanding> = self
            .game
            .standings()
            .into_iter()
            .map(JsStanding::from)
            .collect();
        to_js_value(&standings)
    }
}

impl WasmGame {
    fn track(&mut self, pending: PendingTransition) -> Result<JsValue, JsValue> {
        self.pending = Some(pending);
        to_js_value(&JsTransition {
            kind: transition_to_str(pending.kind),
            generation: pending.generation as u32,
            delay_ms: pending.delay.as_millis() as u32,
        })
    }
}

#[derive(Serialize)]
struct JsTransition {
    kind: &'static str,
    generation: u32,
    delay_ms: u32,
}

#[derive(Serialize)]
struct JsRoll {
    first: u8,
    second: u8,
    total: u64,
    doubles: bool,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u32,
    name: String,
    points: u64,
    has_finished: bool,
}

impl From<Player> for JsPlayer {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            points: player.points,
            has_finished: player.has_finished,
        }
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    round_count: u32,
    current_round: u32,
    players: Vec<JsPlayer>,
    current_player_index: u32,
    total_points: u64,
    is_game_started: bool,
    is_game_over: bool,
    is_round_three_or_later: bool,
    is_transitioning: bool,
    show_player_setup: bool,
    show_rules: bool,
    new_player_name: String,
}

impl From<GameSnapshot> for JsSnapshot {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            round_count: snapshot.round_count,
            current_round: snapshot.current_round,
            players: snapshot.players.into_iter().map(JsPlayer::from).collect(),
            current_player_index: snapshot.current_player_index as u32,
            total_points: snapshot.total_points,
            is_game_started: snapshot.is_game_started,
            is_game_over: snapshot.is_game_over,
            is_round_three_or_later: snapshot.is_round_three_or_later,
            is_transitioning: snapshot.is_transitioning,
            show_player_setup: snapshot.show_player_setup,
            show_rules: snapshot.show_rules,
            new_player_name: snapshot.new_player_name,
        }
    }
}

#[derive(Serialize)]
struct JsStanding {
    place: u32,
    player_id: u32,
    name: String,
    points: u64,
}

impl From<Standing> for JsStanding {
    fn from(standing: Standing) -> Self {
        Self {
            place: standing.place as u32,
            player_id: standing.player_id,
            name: standing.name,
            points: standing.points,
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "NotStarted",
        Phase::Starting => "Starting",
        Phase::InProgress => "InProgress",
        Phase::Resetting => "Resetting",
        Phase::ReturningToMenu => "ReturningToMenu",
        Phase::GameOver => "GameOver",
    }
}

fn transition_to_str(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::Start => "Start",
        TransitionKind::Reset => "Reset",
        TransitionKind::ReturnToMenu => "ReturnToMenu",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
