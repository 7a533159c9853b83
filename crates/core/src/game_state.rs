//! Game state module - round bookkeeping and tick orchestration
//!
//! `GameState` is the single owner of the board and all round fields.
//! Nothing else mutates them; input arrives through [`GameState::apply_command`]
//! between ticks and the driver calls [`GameState::tick`] once per fixed
//! 16ms timestep.
//!
//! Two cadences run off that timestep. Every tick advances the countdown
//! clock machinery (one second per `TICKS_PER_SECOND` ticks, with the
//! idle facial animation riding the half-second boundary). Every
//! `PHYSICS_INTERVAL` ticks a physics pass runs: sweep stale blast
//! debris, gravity, actor AI, then win/loss evaluation in that order.

use crate::board::Board;
use crate::hero::{self, HeroError};
use crate::level::{Level, LevelError, LevelStore};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Command, Direction, HeroFacing, MoveMode, SoundEvent, Tile, IDLE_FIDGET_SECS,
    PHYSICS_INTERVAL, TICKS_PER_SECOND,
};
use crate::{actors, explosion, physics};

pub struct GameState {
    board: Board,
    store: LevelStore,
    rng: SimpleRng,

    current_level: usize,
    diamonds_required: u32,
    diamonds: u32,
    time_total: i32,
    time: i32,

    facing: HeroFacing,
    move_mode: MoveMode,
    last_pos: (usize, usize),
    /// Countdown value at the moment of the last real move; the idle
    /// animation compares against it.
    last_move_time: i32,

    sound_enabled: bool,
    pending_sound: Option<SoundEvent>,

    second_timer: u32,
    physics_timer: u32,
    /// Ticks left on the level-intro banner after a load.
    banner_timer: u32,
    /// Set when level loading failed terminally; drivers should stop.
    fatal: Option<LevelError>,
}

impl GameState {
    /// Engine with no level loaded yet; call [`start`](Self::start).
    pub fn new(store: LevelStore, seed: u32) -> Self {
        Self {
            board: Board::new(),
            store,
            rng: SimpleRng::new(seed),
            current_level: 0,
            diamonds_required: 0,
            diamonds: 0,
            time_total: 0,
            time: 0,
            facing: HeroFacing::Neutral1,
            move_mode: MoveMode::Real,
            last_pos: (1, 1),
            last_move_time: 0,
            sound_enabled: true,
            pending_sound: None,
            second_timer: 0,
            physics_timer: 0,
            banner_timer: 0,
            fatal: None,
        }
    }

    /// Load the first level and begin the round.
    pub fn start(&mut self) -> Result<(), LevelError> {
        self.start_level(0)
    }

    /// Engine pre-loaded with a specific parsed level; used by tests that
    /// need a handcrafted board. Level advancement still goes through the
    /// built-in store.
    pub fn from_level(level: Level, seed: u32) -> Self {
        let mut state = Self::new(LevelStore::builtin(), seed);
        state.apply_level(0, &level);
        state
    }

    fn start_level(&mut self, level: usize) -> Result<(), LevelError> {
        let (actual, data) = self.store.load_with_fallback(level)?;
        self.apply_level(actual, &data);
        log::info!(
            "level {} started: {} diamonds, {}s",
            actual + 1,
            self.diamonds_required,
            self.time_total
        );
        Ok(())
    }

    fn apply_level(&mut self, number: usize, level: &Level) {
        self.board = level.build_board();
        self.current_level = number;
        self.diamonds_required = level.diamonds_required;
        self.diamonds = level.diamonds_required;
        self.time_total = level.time_total;
        self.time = level.time_total;
        self.last_move_time = level.time_total;
        self.facing = HeroFacing::Neutral1;
        self.move_mode = MoveMode::Real;
        self.second_timer = 0;
        self.physics_timer = 0;
        self.banner_timer = TICKS_PER_SECOND;
        if let Some(pos) = self.board.find(Tile::Hero) {
            self.last_pos = pos;
        }
    }

    /// Reload a level; a terminal load failure is latched into
    /// [`fatal_error`](Self::fatal_error) instead of panicking mid-tick.
    fn reload(&mut self, level: usize) {
        if let Err(e) = self.start_level(level) {
            log::error!("cannot load level {}: {}", level + 1, e);
            self.fatal = Some(e);
        }
    }

    /// One full-rate tick: clock and animation every call, physics every
    /// `PHYSICS_INTERVAL` calls.
    pub fn tick(&mut self) {
        self.banner_timer = self.banner_timer.saturating_sub(1);
        self.advance_clock();

        self.physics_timer += 1;
        if self.physics_timer >= PHYSICS_INTERVAL {
            self.physics_timer = 0;
            self.physics_pass();
        }
    }

    fn advance_clock(&mut self) {
        if self.time <= 0 || self.facing == HeroFacing::Killed {
            return;
        }

        self.second_timer += 1;
        if self.second_timer >= TICKS_PER_SECOND {
            self.second_timer = 0;
            self.time -= 1;
            self.animate_idle();
        } else if self.second_timer == TICKS_PER_SECOND / 2 {
            self.animate_idle();
        }
    }

    /// The hero taps a foot when the player has been idle for a while;
    /// otherwise any transient facing falls back to neutral.
    fn animate_idle(&mut self) {
        if self.facing == HeroFacing::Neutral1
            && self.last_move_time - self.time > IDLE_FIDGET_SECS
        {
            self.facing = HeroFacing::Neutral2;
        } else {
            self.facing = HeroFacing::Neutral1;
        }
    }

    fn physics_pass(&mut self) {
        explosion::clear(&mut self.board);

        let mut exploded = physics::step(&mut self.board, &mut self.rng);
        exploded |= actors::step(&mut self.board);
        if exploded {
            self.request_sound(SoundEvent::Explosion);
        }

        self.evaluate_round();
    }

    /// Win/loss evaluation, run at the end of every physics pass.
    fn evaluate_round(&mut self) {
        if self.time <= 0 && self.facing != HeroFacing::Killed {
            self.kill_hero();
        }

        match self.board.find(Tile::Hero) {
            Some(pos) => self.last_pos = pos,
            None => {
                if self.facing != HeroFacing::Killed {
                    log::info!("hero lost on level {}", self.current_level + 1);
                    self.facing = HeroFacing::Killed;
                }
            }
        }

        // Win: all diamonds collected and the door has been entered
        // (entering replaces the Door tile, so its absence is the test).
        // Reloading resets the round fields, so this fires exactly once
        // per completed level.
        if self.facing != HeroFacing::Killed
            && self.diamonds == 0
            && !self.board.contains(Tile::Door)
        {
            let next = self.current_level + 1;
            log::info!("level {} complete", self.current_level + 1);
            self.reload(next);
        }
    }

    fn kill_hero(&mut self) {
        if let Some((row, col)) = self.board.find(Tile::Hero) {
            explosion::trigger(&mut self.board, Tile::Crash, row, col);
            self.request_sound(SoundEvent::Explosion);
        }
    }

    /// Apply one command from the input surface.
    ///
    /// Commands that do not apply in the current state are ignored.
    pub fn apply_command(&mut self, cmd: Command) {
        match cmd {
            Command::Move(dir) => self.move_hero(dir),
            Command::GhostInteract => {
                if self.facing == HeroFacing::Killed {
                    self.reload(self.current_level);
                } else {
                    self.move_mode = MoveMode::Ghost;
                }
            }
            Command::ToggleSound => self.sound_enabled = !self.sound_enabled,
            Command::NextLevel => self.reload(self.current_level + 1),
            Command::PreviousLevel => {
                if self.current_level > 0 {
                    self.reload(self.current_level - 1);
                }
            }
            Command::Restart => self.reload(self.current_level),
            Command::KillSelf => self.kill_hero(),
            Command::RespawnAtLastPosition => {
                let (row, col) = self.last_pos;
                self.board.set(row, col, Tile::Hero);
                self.facing = HeroFacing::Neutral1;
            }
            Command::ResetTimer => self.time = self.time_total,
            Command::Quit => {
                // Termination is the driver's call; nothing to do here.
            }
        }
    }

    fn move_hero(&mut self, dir: Direction) {
        if self.facing == HeroFacing::Killed {
            return;
        }

        // Ghost mode is one-shot: consumed by this invocation no matter
        // how the move resolves.
        let mode = self.move_mode;
        self.move_mode = MoveMode::Real;

        let (dr, dc) = dir.delta();
        match hero::move_hero(&mut self.board, dr, dc, mode, &mut self.diamonds) {
            Ok(outcome) => {
                if outcome.exploded {
                    self.request_sound(SoundEvent::Explosion);
                } else if outcome.collected {
                    self.request_sound(SoundEvent::Collect);
                }
                if outcome.entered {
                    if self.pending_sound.is_none() {
                        self.request_sound(SoundEvent::Move);
                    }
                    self.last_move_time = self.time;
                }
            }
            Err(HeroError::NoHero) => {
                // Loss evaluation lags input by at most one physics tick.
                log::debug!("move ignored: no hero on the board");
            }
        }

        match dir {
            Direction::East => self.facing = HeroFacing::Right,
            Direction::West => self.facing = HeroFacing::Left,
            _ => {}
        }
    }

    fn request_sound(&mut self, event: SoundEvent) {
        self.pending_sound = Some(event);
    }

    /// Consume the pending sound event, if any. Last request wins; there
    /// is no queue.
    pub fn take_sound(&mut self) -> Option<SoundEvent> {
        self.pending_sound.take()
    }

    /// Terminal load failure, if one occurred. The round is unusable once
    /// this is set.
    pub fn fatal_error(&self) -> Option<&LevelError> {
        self.fatal.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for tests that stage scenarios directly.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn diamonds_required(&self) -> u32 {
        self.diamonds_required
    }

    pub fn diamonds_remaining(&self) -> u32 {
        self.diamonds
    }

    pub fn time_remaining(&self) -> i32 {
        self.time
    }

    pub fn facing(&self) -> HeroFacing {
        self.facing
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn game_over(&self) -> bool {
        self.facing == HeroFacing::Killed
    }

    /// Copy out everything a frontend needs for one frame.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut tiles = [[Tile::Tunnel; crate::types::GRID_WIDTH]; crate::types::GRID_HEIGHT];
        for (row, line) in tiles.iter_mut().enumerate() {
            for (col, tile) in line.iter_mut().enumerate() {
                *tile = self.board.get(row, col);
            }
        }
        GameSnapshot {
            tiles,
            facing: self.facing,
            level: self.current_level,
            diamonds: self.diamonds,
            time: self.time,
            sound_enabled: self.sound_enabled,
            hero_pos: self.last_pos,
            level_banner: self.banner_timer > 0,
        }
    }

    /// Run physics passes directly, ignoring the full-rate cadence.
    /// Test helper: one call is one physics tick.
    pub fn step_physics(&mut self, passes: u32) {
        for _ in 0..passes {
            self.physics_pass();
        }
    }
}
