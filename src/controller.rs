use anyhow::Result;

use crate::clock::{Game, Side, TapOutcome, UrgencyPalette};
use crate::hit::{hit_test, Target};
use crate::layout::{ButtonKind, Geometry};
use crate::render::{self, Surface};

/// Whatever hosts the clock: the window, the terminal, a test double.
pub trait Host {
    /// Switch in or out of fullscreen. Best-effort; errors are logged and
    /// otherwise ignored.
    fn toggle_fullscreen(&mut self) -> Result<()>;
}

/// Starting budgets for both sides, kept so a reset can rebuild the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialTimes {
    pub left: f64,
    pub right: f64,
}

/// Owns the game and the layout, and turns pointer presses and frame ticks
/// into state changes and draw calls.
pub struct Controller {
    game: Game,
    geometry: Geometry,
    initial: InitialTimes,
    palette: UrgencyPalette,
    buttons: bool,
}

impl Controller {
    pub fn new(initial: InitialTimes, palette: UrgencyPalette, buttons: bool) -> Self {
        Self {
            game: Game::new(initial.left, initial.right),
            geometry: Geometry::compute(0.0, 0.0, buttons),
            initial,
            palette,
            buttons,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Viewport changed size; must be called before the next frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.geometry.width == width && self.geometry.height == height {
            return;
        }
        log::debug!("viewport resized to {width}x{height}");
        self.geometry = Geometry::compute(width, height, self.buttons);
    }

    /// Advance the clocks to `now` and paint.
    pub fn frame(&mut self, now: f64, surface: &mut impl Surface) {
        let was_over = self.game.is_over();
        self.game.tick(now);
        if !was_over {
            if let Some(side) = self.game.flagged_side() {
                log::info!("{} flag fell", side.label());
            }
        }
        render::draw_frame(surface, &self.game, &self.geometry, &self.palette);
    }

    /// Handle a press at `(x, y)`. Returns what was hit, if anything.
    pub fn pointer_down(&mut self, x: f64, y: f64, now: f64, host: &mut impl Host) -> Option<Target> {
        let target = hit_test(&self.geometry, x, y)?;
        match target {
            Target::Button(kind) => self.press(kind, now, host),
            Target::Player(side) => {
                self.tap(side, now);
            }
        }
        Some(target)
    }

    /// Tap one half of the clock.
    pub fn tap(&mut self, side: Side, now: f64) -> TapOutcome {
        // Bring the running clock up to date so a tap that lands after the
        // flag fell is seen as game over.
        self.game.tick(now);
        let outcome = self.game.tap(side, now);
        let (verb, running) = match outcome {
            TapOutcome::Switched { to } => ("turn passed to", to),
            TapOutcome::Started { side } => ("clock started for", side),
            TapOutcome::Ignored => return outcome,
        };
        if let Some(turn) = self.game.player(running).turn() {
            log::info!("{verb} {} with {:.1}s", running.label(), turn.started_with);
        }
        outcome
    }

    /// Tap the side whose clock is running, if any.
    pub fn tap_running(&mut self, now: f64) -> TapOutcome {
        match self.game.running_side() {
            Some(side) => self.tap(side, now),
            None => TapOutcome::Ignored,
        }
    }

    pub fn press(&mut self, kind: ButtonKind, now: f64, host: &mut impl Host) {
        match kind {
            ButtonKind::Pause => self.pause(now),
            ButtonKind::Reset => self.reset(),
            ButtonKind::Fullscreen => {
                if let Err(err) = host.toggle_fullscreen() {
                    log::warn!("fullscreen toggle failed: {err:#}");
                }
            }
        }
    }

    /// Stop the running clock. Ticks first so a flag that fell since the
    /// last frame freezes the game instead of being paused away.
    pub fn pause(&mut self, now: f64) {
        self.game.tick(now);
        if let Some(side) = self.game.pause(now) {
            log::info!("paused with {} to move", side.label());
        }
    }

    pub fn reset(&mut self) {
        self.game.reset(self.initial.left, self.initial.right);
        log::info!(
            "game reset to {}s / {}s (budget {}s)",
            self.initial.left,
            self.initial.right,
            self.game.total_budget()
        );
    }
}
