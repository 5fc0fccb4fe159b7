use thiserror::Error;

/// One side of the board. Doubles as the index into the player array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Snapshot taken when a player's clock starts running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    /// Wall-clock time (epoch seconds) the turn began.
    pub started_at: f64,
    /// Remaining seconds at that moment.
    pub started_with: f64,
}

impl Turn {
    fn remaining_at(&self, now: f64) -> f64 {
        (self.started_with - (now - self.started_at)).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    remaining: f64,
    turn: Option<Turn>,
}

impl Player {
    fn idle(seconds: f64) -> Self {
        Self {
            remaining: seconds.max(0.0),
            turn: None,
        }
    }

    /// Seconds left as of the last tick or turn change.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.turn.is_some()
    }

    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    pub fn is_out_of_time(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Nobody has started a turn yet.
    NotStarted,
    /// A clock is running, or both are paused mid-game.
    InProgress,
    /// Someone ran out of time.
    GameOver,
}

/// A turn transition that was refused. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameOver,
    #[error("the {} clock is already running", .0.label())]
    AlreadyRunning(Side),
    #[error("the {} clock is not running", .0.label())]
    NotRunning(Side),
    #[error("the {} clock is running", .0.label())]
    OpponentRunning(Side),
}

/// What a tap on one half of the clock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped side ended its turn and the opponent's clock started.
    Switched { to: Side },
    /// Both clocks were idle; the opponent's clock started.
    Started { side: Side },
    /// Tap had no effect.
    Ignored,
}

/// Two players sharing one time budget, at most one of them running.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    players: [Player; 2],
    total_budget: f64,
    started: bool,
}

impl Game {
    /// A fresh game with both clocks idle. The larger budget normalizes
    /// urgency for both sides.
    pub fn new(left_seconds: f64, right_seconds: f64) -> Self {
        Self {
            players: [Player::idle(left_seconds), Player::idle(right_seconds)],
            total_budget: left_seconds.max(right_seconds),
            started: false,
        }
    }

    /// Throw away the current game and start over with new budgets.
    pub fn reset(&mut self, left_seconds: f64, right_seconds: f64) {
        *self = Game::new(left_seconds, right_seconds);
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn running_side(&self) -> Option<Side> {
        Side::BOTH.into_iter().find(|&s| self.player(s).is_running())
    }

    pub fn is_over(&self) -> bool {
        self.players.iter().any(Player::is_out_of_time)
    }

    /// The side whose flag fell, if any.
    pub fn flagged_side(&self) -> Option<Side> {
        Side::BOTH.into_iter().find(|&s| self.player(s).is_out_of_time())
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::GameOver
        } else if self.started {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// Fraction of the shared budget `side` has used, in `[0, 1]`.
    pub fn progress(&self, side: Side) -> f64 {
        if self.total_budget <= 0.0 {
            return 1.0;
        }
        (1.0 - self.player(side).remaining / self.total_budget).clamp(0.0, 1.0)
    }

    /// Project the running clock to `now`. Only the cached remaining time
    /// changes; the turn snapshot is kept. A `now` earlier than a previous
    /// tick (wall clock stepped back) never gives time back.
    pub fn tick(&mut self, now: f64) {
        for player in &mut self.players {
            if let Some(turn) = &player.turn {
                player.remaining = turn.remaining_at(now).min(player.remaining);
            }
        }
    }

    pub fn start_turn(&mut self, side: Side, now: f64) -> Result<(), TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        if self.player(side).is_running() {
            return Err(TurnError::AlreadyRunning(side));
        }
        if self.player(side.opponent()).is_running() {
            return Err(TurnError::OpponentRunning(side.opponent()));
        }

        let player = self.player_mut(side);
        player.turn = Some(Turn {
            started_at: now,
            started_with: player.remaining,
        });
        self.started = true;
        Ok(())
    }

    pub fn end_turn(&mut self, side: Side, now: f64) -> Result<(), TurnError> {
        let player = self.player_mut(side);
        let turn = player.turn.take().ok_or(TurnError::NotRunning(side))?;
        player.remaining = turn.remaining_at(now).min(player.remaining);
        Ok(())
    }

    /// End the running turn and hand the clock to the opponent in one step.
    /// Returns the side that is now running.
    pub fn switch_turn(&mut self, now: f64) -> Result<Side, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        let Some(running) = self.running_side() else {
            return Err(TurnError::NotRunning(Side::Left));
        };

        // Work on a copy so a refused start leaves the original untouched.
        let mut next = self.clone();
        next.end_turn(running, now)?;
        if next.player(running).is_out_of_time() {
            // The flag fell during this turn. Leave the game as it was; the
            // next tick shows the flagged side at zero.
            return Err(TurnError::GameOver);
        }
        next.start_turn(running.opponent(), now)?;
        *self = next;
        Ok(running.opponent())
    }

    /// Both clocks idle: tapping a side starts the other side's clock.
    pub fn begin_opponent_turn(&mut self, tapped: Side, now: f64) -> Result<Side, TurnError> {
        let opponent = tapped.opponent();
        if self.player(tapped).is_running() {
            return Err(TurnError::AlreadyRunning(tapped));
        }
        self.start_turn(opponent, now)?;
        Ok(opponent)
    }

    /// Stop whichever clock is running. Does nothing when nothing runs or the
    /// game is over.
    pub fn pause(&mut self, now: f64) -> Option<Side> {
        if self.is_over() {
            return None;
        }
        let running = self.running_side()?;
        self.end_turn(running, now).ok()?;
        Some(running)
    }

    /// Apply a tap on one half of the clock face.
    pub fn tap(&mut self, tapped: Side, now: f64) -> TapOutcome {
        if self.is_over() {
            return TapOutcome::Ignored;
        }

        let result = if self.player(tapped).is_running() {
            self.switch_turn(now).map(|to| TapOutcome::Switched { to })
        } else if !self.player(tapped.opponent()).is_running() {
            self.begin_opponent_turn(tapped, now)
                .map(|side| TapOutcome::Started { side })
        } else {
            Ok(TapOutcome::Ignored)
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("tap on {} side refused: {err}", tapped.label());
                TapOutcome::Ignored
            }
        }
    }
}
