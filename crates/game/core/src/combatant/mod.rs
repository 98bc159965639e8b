//! Per-frame combatant state machine.
//!
//! A [`Combatant`] is driven in three calls per frame:
//!
//! 1. intents: [`Combatant::apply_input`] (or the individual `deploy_*` and
//!    [`Combatant::walk`] entry points) record what the controller wants;
//! 2. [`Combatant::advance`] runs every timer in a fixed order and computes
//!    this frame's velocity;
//! 3. [`Combatant::apply_movement`] moves the body and clamps it to the arena.
//!
//! Intents that are not allowed in the current state are silently ignored.
//! The referee in the runtime crate resolves contact between the two
//! combatants after both have moved.
mod action;
mod countdown;
mod gesture;
mod stamina;
mod tuning;

pub use action::{Action, StrikePhase, StrikeTiming};
pub use countdown::Countdown;
pub use gesture::DashGesture;
pub use stamina::Stamina;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use self::tuning::Tuning;
use crate::arena::Arena;
use crate::config::{Attachment, CombatantConfig};
use crate::cue::{Cue, VisualState};
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{Direction, Rect, Velocity};
use crate::input::{Button, InputFrame, KeyBindings};

/// Cues a combatant can emit before they are drained.
pub const MAX_PENDING_CUES: usize = 8;

/// Which end of the arena a combatant spawns at.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Combatants face the middle of the arena for the whole match.
    pub const fn facing(self) -> Direction {
        match self {
            Self::Left => Direction::Right,
            Self::Right => Direction::Left,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn default_bindings(self) -> KeyBindings {
        match self {
            Self::Left => KeyBindings::left_side(),
            Self::Right => KeyBindings::right_side(),
        }
    }
}

/// One fighter in the arena.
#[derive(Clone, Debug)]
pub struct Combatant {
    side: Side,
    facing: Direction,
    rect: Rect,
    velocity: Velocity,
    action: Action,
    knockback: Option<Countdown>,
    invincibility: Option<Countdown>,
    gesture: DashGesture,
    stamina: Stamina,
    life: u32,
    on_top: bool,
    /// Fall ramp carried by an action that has no fall of its own; zero while
    /// supported.
    carried_fall: u32,
    walk_intent: Option<Direction>,
    bindings: KeyBindings,
    arena: Arena,
    tuning: Tuning,
    cues: ArrayVec<Cue, MAX_PENDING_CUES>,
}

impl Combatant {
    /// Places a combatant on the ground at its side of the arena.
    ///
    /// Tunables are validated and scaled here; nothing after construction can
    /// fail.
    pub fn spawn(
        side: Side,
        config: &CombatantConfig,
        arena: Arena,
        bindings: KeyBindings,
    ) -> ConfigResult<Self> {
        config.validate()?;

        let scale = arena.scale();
        let body = scale.apply(config.body_size);
        let margin = scale.apply(config.spawn_margin);
        if arena.width() < 2 * (margin + body) || arena.ground() < body {
            return Err(ConfigError::ArenaTooSmall {
                width: arena.width(),
                height: arena.height(),
                body,
            });
        }

        let mut rect = Rect::new(0, 0, body, body);
        match side {
            Side::Left => rect.set_left(margin),
            Side::Right => rect.set_right(arena.width() - margin),
        }
        rect.set_bottom(arena.ground());

        debug!(%side, %rect, "combatant spawned");

        Ok(Self {
            side,
            facing: side.facing(),
            rect,
            velocity: Velocity::ZERO,
            action: Action::Idle,
            knockback: None,
            invincibility: None,
            gesture: DashGesture::Idle,
            stamina: Stamina::new(
                config.start_stamina,
                config.max_stamina,
                config.stamina_reload_frames,
            ),
            life: config.life,
            on_top: false,
            carried_fall: 0,
            walk_intent: None,
            bindings,
            arena,
            tuning: Tuning::scaled(config, scale),
            cues: ArrayVec::new(),
        })
    }

    // ===== read-only surface =====

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    #[inline]
    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    #[inline]
    pub fn max_life(&self) -> u32 {
        self.tuning.max_life
    }

    pub fn is_defeated(&self) -> bool {
        self.life == 0
    }

    #[inline]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn gesture(&self) -> DashGesture {
        self.gesture
    }

    #[inline]
    pub fn is_on_top(&self) -> bool {
        self.on_top
    }

    /// Frames of knockback left, if knocked back.
    pub fn knockback_remaining(&self) -> Option<u32> {
        self.knockback.map(Countdown::remaining)
    }

    /// Frames of invincibility left, if invincible.
    pub fn invincibility_remaining(&self) -> Option<u32> {
        self.invincibility.map(Countdown::remaining)
    }

    /// True when new intents are accepted at all.
    pub fn is_ready(&self) -> bool {
        self.knockback.is_none() && !self.action.is_landing_stunned()
    }

    /// True while any action other than idling is running.
    pub fn is_acting(&self) -> bool {
        !self.action.is_idle()
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knockback.is_some()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_some()
    }

    pub fn is_jumping(&self) -> bool {
        self.action.is_jumping()
    }

    pub fn is_falling(&self) -> bool {
        self.action.is_falling()
    }

    pub fn is_dashing(&self) -> bool {
        self.action.is_dashing()
    }

    pub fn is_striking(&self) -> bool {
        self.action.is_striking()
    }

    pub fn is_downstriking(&self) -> bool {
        self.action.is_downstriking()
    }

    pub fn is_landing_stunned(&self) -> bool {
        self.action.is_landing_stunned()
    }

    pub fn is_shielding(&self) -> bool {
        self.action.is_shielding()
    }

    /// Standing on the ground line or on the opponent.
    pub fn is_grounded(&self) -> bool {
        self.rect.bottom() >= self.arena.ground() || self.on_top
    }

    /// Phase of the running strike, if any.
    pub fn strike_phase(&self) -> Option<StrikePhase> {
        match self.action {
            Action::Striking { elapsed } => Some(self.tuning.strike.phase(elapsed)),
            _ => None,
        }
    }

    /// The sword can register a hit this frame.
    pub fn sword_hurtbox(&self) -> bool {
        self.strike_phase() == Some(StrikePhase::Active)
    }

    /// The guard blocks swords this frame.
    pub fn shield_active(&self) -> bool {
        self.action.is_shielding()
    }

    /// Where the sword would be; only meaningful while [`Self::sword_hurtbox`].
    pub fn sword_rect(&self) -> Rect {
        self.attachment_rect(&self.tuning.sword)
    }

    pub fn downstrike_rect(&self) -> Rect {
        self.attachment_rect(&self.tuning.downstrike_blade)
    }

    pub fn shield_rect(&self) -> Rect {
        self.attachment_rect(&self.tuning.shield)
    }

    pub fn visual(&self) -> VisualState {
        VisualState {
            body: self.rect,
            sword: self.sword_hurtbox().then(|| self.sword_rect()),
            downstrike: self.is_downstriking().then(|| self.downstrike_rect()),
            shield: self.shield_active().then(|| self.shield_rect()),
            invincible: self.is_invincible(),
        }
    }

    /// Takes the cues emitted since the last drain.
    pub fn drain_cues(&mut self) -> impl Iterator<Item = Cue> + '_ {
        self.cues.drain(..)
    }

    // ===== intents =====

    /// Routes one frame of logical input to the intent entry points.
    ///
    /// Every held button is forwarded; gating decides what actually happens.
    pub fn apply_input(&mut self, input: &InputFrame) {
        let press = input.horizontal();
        self.check_dash(press);
        if let Some(direction) = press {
            self.walk(direction);
        }
        if input.is_pressed(Button::Jump) {
            self.deploy_jump();
        }
        if input.is_pressed(Button::Down) {
            self.deploy_downstrike();
        }
        if input.is_pressed(Button::Attack) {
            self.deploy_strike();
        }
        if input.is_pressed(Button::Guard) {
            self.deploy_shield();
        }
    }

    /// Walk this frame. Ignored unless ready.
    pub fn walk(&mut self, direction: Direction) {
        if self.is_ready() {
            self.walk_intent = Some(direction);
        }
    }

    /// Feeds the dash gesture detector with this frame's horizontal press.
    pub fn check_dash(&mut self, press: Option<Direction>) {
        if let Some(direction) = self.gesture.observe(press, self.tuning.dash_window) {
            trace!(side = %self.side, %direction, "dash gesture confirmed");
            self.deploy_dash(direction);
        }
    }

    pub fn deploy_jump(&mut self) {
        if !self.is_ready() || !self.action.is_idle() {
            self.gated("jump");
            return;
        }
        self.action = Action::Jumping { elapsed: 0 };
        self.emit(Cue::Jump);
        debug!(side = %self.side, "jump");
    }

    pub fn deploy_dash(&mut self, direction: Direction) {
        if !self.try_spend() {
            self.gated("dash");
            return;
        }
        self.action = Action::Dashing {
            direction,
            elapsed: 0,
        };
        self.velocity.dx = self.tuning.dash_profile[0] * direction.sign();
        self.emit(Cue::Dash);
        debug!(side = %self.side, %direction, stamina = self.stamina.current(), "dash");
    }

    pub fn deploy_strike(&mut self) {
        if !self.try_spend() {
            self.gated("strike");
            return;
        }
        self.action = Action::Striking { elapsed: 0 };
        self.emit(Cue::Strike);
        debug!(side = %self.side, stamina = self.stamina.current(), "strike");
    }

    /// Turns a jump or fall into a downstrike.
    pub fn deploy_downstrike(&mut self) {
        let ticker = match self.action {
            Action::Jumping { .. } => 1,
            Action::Falling { ticker } => ticker,
            _ => {
                self.gated("downstrike");
                return;
            }
        };
        if !self.is_ready() || !self.stamina.try_consume() {
            self.gated("downstrike");
            return;
        }
        self.action = Action::Downstriking { ticker };
        self.velocity.dx = 0;
        self.emit(Cue::Strike);
        debug!(side = %self.side, stamina = self.stamina.current(), "downstrike");
    }

    pub fn deploy_shield(&mut self) {
        if !self.try_spend() {
            self.gated("shield");
            return;
        }
        self.action = Action::Shielding {
            remaining: Countdown::start(self.tuning.shield_frames),
        };
        self.velocity.dx = 0;
        self.emit(Cue::Shield);
        debug!(side = %self.side, stamina = self.stamina.current(), "shield");
    }

    /// Registers a hit: one life lost, invincibility (re)started and, when
    /// asked for and not already running, knockback.
    pub fn take_hit(&mut self, apply_knockback: bool) {
        self.life = self.life.saturating_sub(1);
        if apply_knockback && self.knockback.is_none() {
            self.knockback = Some(Countdown::start(self.tuning.knockback_frames));
            self.velocity.dx = self.knockback_dx();
        }
        self.invincibility = Some(Countdown::start(self.tuning.invincibility_frames));
        debug!(side = %self.side, life = self.life, knockback = apply_knockback, "hit taken");
    }

    // ===== referee hooks =====

    /// Stands this combatant on a surface at height `top`.
    pub fn rest_on(&mut self, top: i32) {
        self.rect.set_bottom(top);
        self.on_top = true;
    }

    pub fn set_on_top(&mut self, on_top: bool) {
        self.on_top = on_top;
    }

    // ===== per-frame update =====

    /// Runs every timer once, in a fixed order, and sets this frame's
    /// velocity.
    pub fn advance(&mut self) {
        self.step_locomotion();
        self.step_knockback();
        self.step_dash();
        self.step_jump();
        self.detect_fall();
        self.step_fall();
        self.step_carried_fall();
        self.stamina.regenerate(self.action.is_jumping());
        self.step_strike();
        self.step_downstrike();
        self.step_landing_stun();
        self.step_shield();
        self.invincibility = self.invincibility.and_then(Countdown::tick);
        self.gesture.tick();

        if self.knockback.is_some() {
            self.velocity.dx = self.knockback_dx();
        }

        self.check_invariants();
        self.walk_intent = None;
    }

    /// Applies velocity and clamps to the arena and the ground line.
    pub fn apply_movement(&mut self) {
        self.rect.translate(self.velocity);

        let width = self.arena.width();
        if self.rect.left() < 0 {
            self.rect.set_left(0);
        } else if self.rect.right() > width {
            self.rect.set_right(width);
        }

        let ground = self.arena.ground();
        if self.rect.bottom() > ground {
            self.rect.set_bottom(ground);
        }
    }

    fn step_locomotion(&mut self) {
        match self.action {
            Action::Idle
            | Action::Jumping { .. }
            | Action::Falling { .. }
            | Action::Striking { .. } => {
                self.velocity.dx = self
                    .walk_intent
                    .map_or(0, |direction| direction.sign() * self.tuning.walk_speed);
            }
            Action::Dashing { .. } => {}
            Action::Downstriking { .. }
            | Action::LandingStunned { .. }
            | Action::Shielding { .. } => self.velocity.dx = 0,
        }
    }

    fn step_knockback(&mut self) {
        if let Some(countdown) = self.knockback {
            self.knockback = countdown.tick();
            if self.knockback.is_none() {
                trace!(side = %self.side, "knockback ended");
            }
        }
    }

    fn step_dash(&mut self) {
        if let Action::Dashing { direction, elapsed } = self.action {
            self.velocity.dx = self.tuning.dash_profile[elapsed as usize] * direction.sign();
            let elapsed = elapsed + 1;
            self.action = if elapsed as usize >= self.tuning.dash_profile.len() {
                Action::Idle
            } else {
                Action::Dashing { direction, elapsed }
            };
        }
    }

    fn step_jump(&mut self) {
        if let Action::Jumping { elapsed } = self.action {
            match self.tuning.jump_profile.get(elapsed as usize) {
                Some(&dy) => {
                    self.velocity.dy = dy;
                    self.action = Action::Jumping { elapsed: elapsed + 1 };
                }
                None => {
                    self.velocity.dy = 0;
                    self.action = Action::Idle;
                    trace!(side = %self.side, "jump ended");
                }
            }
        }
    }

    fn detect_fall(&mut self) {
        if self.action.is_idle() && !self.is_grounded() {
            trace!(side = %self.side, bottom = self.rect.bottom(), "fall started");
            self.action = Action::Falling {
                ticker: self.carried_fall.max(1),
            };
        }
    }

    fn step_fall(&mut self) {
        if let Action::Falling { ticker } = self.action {
            if self.is_grounded() {
                self.action = Action::Idle;
                if self.velocity.dy >= 0 {
                    self.velocity.dy = 0;
                }
                trace!(side = %self.side, on_top = self.on_top, "landed");
            } else {
                let ticker = self.ramp(ticker);
                self.velocity.dy = self.tuning.fall_speed * ticker as i32;
                self.action = Action::Falling { ticker };
            }
        }
    }

    /// Gravity for strikes, shields, dashes and stuns that lose their footing,
    /// typically when the opponent moves out from under them.
    fn step_carried_fall(&mut self) {
        match self.action {
            Action::Striking { .. }
            | Action::Shielding { .. }
            | Action::Dashing { .. }
            | Action::LandingStunned { .. } => {
                if self.is_grounded() {
                    self.carried_fall = 0;
                    self.velocity.dy = self.velocity.dy.min(0);
                } else {
                    self.carried_fall = self.ramp(self.carried_fall.max(1));
                    self.velocity.dy = self.tuning.fall_speed * self.carried_fall as i32;
                }
            }
            _ => self.carried_fall = 0,
        }
    }

    fn step_strike(&mut self) {
        if let Action::Striking { elapsed } = self.action {
            let elapsed = elapsed + 1;
            self.action = if elapsed >= self.tuning.strike.total() {
                Action::Idle
            } else {
                Action::Striking { elapsed }
            };
        }
    }

    fn step_downstrike(&mut self) {
        if let Action::Downstriking { ticker } = self.action {
            if self.is_grounded() {
                let frames = if self.on_top {
                    self.tuning.stun_short
                } else {
                    self.tuning.stun_long
                };
                self.action = Action::LandingStunned {
                    remaining: Countdown::start(frames),
                };
                self.velocity = Velocity::ZERO;
                self.emit(Cue::SwordHitsGround);
                debug!(side = %self.side, on_top = self.on_top, frames, "downstrike landed");
            } else {
                let ticker = self.ramp(ticker);
                self.velocity = Velocity::new(0, self.tuning.fall_speed * ticker as i32);
                self.action = Action::Downstriking { ticker };
            }
        }
    }

    fn step_landing_stun(&mut self) {
        if let Action::LandingStunned { remaining } = self.action {
            self.action = remaining
                .tick()
                .map_or(Action::Idle, |remaining| Action::LandingStunned { remaining });
        }
    }

    fn step_shield(&mut self) {
        if let Action::Shielding { remaining } = self.action {
            self.velocity.dx = 0;
            self.action = remaining
                .tick()
                .map_or(Action::Idle, |remaining| Action::Shielding { remaining });
        }
    }

    fn ramp(&self, ticker: u32) -> u32 {
        (ticker + 1).min(self.tuning.fall_ramp)
    }

    fn knockback_dx(&self) -> i32 {
        self.facing.opposite().sign() * self.tuning.knockback_speed
    }

    fn attachment_rect(&self, attachment: &Attachment) -> Rect {
        let offset_x = match self.facing {
            Direction::Right => attachment.offset_x_right,
            Direction::Left => attachment.offset_x_left,
        };
        Rect::new(
            self.rect.x + offset_x,
            self.rect.y + attachment.offset_y,
            attachment.width,
            attachment.height,
        )
    }

    /// Spends one stamina point if a ground action may start now.
    fn try_spend(&mut self) -> bool {
        self.is_ready() && !self.is_acting() && self.stamina.try_consume()
    }

    fn gated(&self, intent: &'static str) {
        trace!(
            side = %self.side,
            intent,
            action = self.action.name(),
            ready = self.is_ready(),
            stamina = self.stamina.current(),
            "intent ignored"
        );
    }

    fn emit(&mut self, cue: Cue) {
        if self.cues.try_push(cue).is_err() {
            trace!(side = %self.side, %cue, "cue buffer full, dropping");
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.stamina.current() <= self.stamina.max());
        debug_assert!(self.life <= self.tuning.max_life);
        debug_assert!(self.carried_fall <= self.tuning.fall_ramp);
        match self.action {
            Action::Jumping { elapsed } => {
                debug_assert!((elapsed as usize) <= self.tuning.jump_profile.len());
            }
            Action::Dashing { elapsed, .. } => {
                debug_assert!((elapsed as usize) < self.tuning.dash_profile.len());
            }
            Action::Striking { elapsed } => {
                debug_assert!(elapsed < self.tuning.strike.total());
            }
            Action::Falling { ticker } | Action::Downstriking { ticker } => {
                debug_assert!((1..=self.tuning.fall_ramp).contains(&ticker));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Scale;
    use crate::input::InputSet;
    use proptest::prelude::*;

    fn spawn(side: Side) -> Combatant {
        Combatant::spawn(
            side,
            &CombatantConfig::default(),
            Arena::default(),
            side.default_bindings(),
        )
        .unwrap()
    }

    fn step(combatant: &mut Combatant) {
        combatant.advance();
        combatant.apply_movement();
    }

    fn press(combatant: &mut Combatant, set: InputSet) {
        combatant.apply_input(&InputFrame::new(set));
        step(combatant);
    }

    #[test]
    fn spawns_face_each_other_on_the_ground() {
        let left = spawn(Side::Left);
        let right = spawn(Side::Right);

        assert_eq!(left.rect().left(), 100);
        assert_eq!(left.rect().bottom(), 562);
        assert_eq!(left.facing(), Direction::Right);

        assert_eq!(right.rect().right(), 1180);
        assert_eq!(right.facing(), Direction::Left);
        assert_eq!(right.stamina().current(), 5);
        assert_eq!(right.life(), 5);
    }

    #[test]
    fn spawn_rejects_arena_narrower_than_both_spawn_points() {
        let arena = Arena::new(250, 720, Scale::IDENTITY).unwrap();
        let result = Combatant::spawn(
            Side::Left,
            &CombatantConfig::default(),
            arena,
            KeyBindings::left_side(),
        );
        assert!(matches!(result, Err(ConfigError::ArenaTooSmall { .. })));
    }

    #[test]
    fn jump_runs_its_profile_then_falls_back_to_the_ground() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_jump();
        assert_eq!(combatant.drain_cues().collect::<Vec<_>>(), vec![Cue::Jump]);

        for _ in 0..15 {
            step(&mut combatant);
            assert!(combatant.is_jumping());
        }
        assert_eq!(combatant.rect().bottom(), 562 - 179);
        step(&mut combatant);
        assert!(combatant.is_falling());
        // Apex of the profile plus the first frame of fall speed.
        assert_eq!(combatant.rect().bottom(), 562 - 179 + 6);

        for _ in 0..200 {
            if combatant.action().is_idle() {
                break;
            }
            step(&mut combatant);
        }
        assert!(combatant.action().is_idle());
        assert_eq!(combatant.rect().bottom(), 562);
        assert_eq!(combatant.velocity().dy, 0);
    }

    #[test]
    fn every_jump_profile_entry_moves_the_body() {
        let config = CombatantConfig {
            jump_profile: vec![-10, -10, -10],
            ..CombatantConfig::default()
        };
        let mut combatant =
            Combatant::spawn(Side::Left, &config, Arena::default(), KeyBindings::left_side())
                .unwrap();
        combatant.deploy_jump();

        let mut trace = Vec::new();
        for _ in 0..4 {
            step(&mut combatant);
            trace.push((combatant.action().name(), 562 - combatant.rect().bottom()));
        }
        assert_eq!(
            trace,
            vec![("jumping", 10), ("jumping", 20), ("jumping", 30), ("falling", 24)]
        );
    }

    #[test]
    fn strike_started_on_the_opponent_falls_when_the_support_leaves() {
        let mut combatant = spawn(Side::Left);
        combatant.rest_on(462);
        combatant.deploy_strike();
        combatant.set_on_top(false);

        step(&mut combatant);
        assert!(combatant.is_striking());
        assert_eq!(combatant.rect().bottom(), 462 + 6);

        for _ in 0..9 {
            step(&mut combatant);
        }
        assert!(combatant.is_striking());
        assert_eq!(combatant.rect().bottom(), 562);
        assert_eq!(combatant.velocity().dy, 0);
    }

    #[test]
    fn shield_keeps_its_height_while_standing_on_the_opponent() {
        let mut combatant = spawn(Side::Left);
        combatant.rest_on(462);
        combatant.deploy_shield();

        for _ in 0..5 {
            step(&mut combatant);
        }
        assert!(combatant.is_shielding());
        assert_eq!(combatant.rect().bottom(), 462);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_jump();
        for _ in 0..3 {
            step(&mut combatant);
        }
        combatant.deploy_jump();
        assert_eq!(combatant.action(), Action::Jumping { elapsed: 3 });
    }

    #[test]
    fn strike_spends_stamina_and_is_live_only_in_its_active_phase() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_strike();
        assert_eq!(combatant.stamina().current(), 4);
        assert!(!combatant.sword_hurtbox());

        combatant.deploy_strike();
        assert_eq!(combatant.stamina().current(), 4);

        for elapsed in 1..24 {
            step(&mut combatant);
            assert_eq!(
                combatant.sword_hurtbox(),
                (3..=14).contains(&elapsed),
                "elapsed {elapsed}"
            );
        }
        step(&mut combatant);
        assert!(combatant.action().is_idle());
    }

    #[test]
    fn sword_and_shield_follow_facing() {
        let mut left = spawn(Side::Left);
        let mut right = spawn(Side::Right);
        left.deploy_strike();
        right.deploy_shield();
        for _ in 0..3 {
            step(&mut left);
            step(&mut right);
        }

        let sword = left.visual().sword.unwrap();
        assert_eq!(sword.x, left.rect().x + 50);
        assert_eq!(sword.y, left.rect().y + 10);
        assert_eq!((sword.width, sword.height), (75, 30));

        let shield = right.visual().shield.unwrap();
        assert_eq!(shield.x, right.rect().x - 5);
        assert!(right.visual().sword.is_none());
        assert_eq!(right.sword_rect().x, right.rect().x - 75);
    }

    #[test]
    fn double_tap_dashes_in_the_tapped_direction() {
        let mut combatant = spawn(Side::Left);
        press(&mut combatant, InputSet::RIGHT);
        press(&mut combatant, InputSet::empty());
        press(&mut combatant, InputSet::RIGHT);
        assert!(combatant.is_dashing());
        assert_eq!(combatant.stamina().current(), 4);

        for _ in 0..6 {
            step(&mut combatant);
        }
        assert!(combatant.action().is_idle());
        assert_eq!(combatant.rect().left(), 100 + 8 + 180);
    }

    #[test]
    fn slow_double_tap_only_walks() {
        let mut combatant = spawn(Side::Right);
        press(&mut combatant, InputSet::LEFT);
        for _ in 0..13 {
            press(&mut combatant, InputSet::empty());
        }
        press(&mut combatant, InputSet::LEFT);
        assert!(!combatant.is_dashing());
        assert_eq!(combatant.stamina().current(), 5);
        assert_eq!(combatant.rect().right(), 1180 - 16);
    }

    #[test]
    fn hit_costs_life_and_knocks_back_against_facing() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_strike();
        combatant.take_hit(true);
        assert_eq!(combatant.life(), 4);
        assert_eq!(combatant.invincibility_remaining(), Some(60));

        combatant.walk(Direction::Right);
        step(&mut combatant);
        assert_eq!(combatant.velocity().dx, -15);
        assert!(!combatant.is_ready());
        assert_eq!(combatant.knockback_remaining(), Some(14));

        combatant.deploy_jump();
        assert!(!combatant.is_jumping());

        combatant.take_hit(true);
        assert_eq!(combatant.life(), 3);
        assert_eq!(combatant.knockback_remaining(), Some(14));
        assert_eq!(combatant.invincibility_remaining(), Some(60));

        for _ in 0..14 {
            step(&mut combatant);
        }
        assert!(combatant.is_ready());
    }

    #[test]
    fn hit_without_knockback_still_grants_invincibility() {
        let mut combatant = spawn(Side::Right);
        combatant.take_hit(false);
        assert!(!combatant.is_knocked_back());
        assert!(combatant.is_invincible());

        for _ in 0..60 {
            step(&mut combatant);
        }
        assert!(!combatant.is_invincible());
    }

    #[test]
    fn life_saturates_at_zero() {
        let mut combatant = spawn(Side::Left);
        for _ in 0..7 {
            combatant.take_hit(false);
        }
        assert_eq!(combatant.life(), 0);
        assert!(combatant.is_defeated());
    }

    #[test]
    fn downstrike_needs_to_be_airborne() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_downstrike();
        assert!(combatant.action().is_idle());
        assert_eq!(combatant.stamina().current(), 5);
    }

    #[test]
    fn downstrike_on_the_ground_stuns_for_the_long_duration() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_jump();
        for _ in 0..5 {
            step(&mut combatant);
        }
        combatant.deploy_downstrike();
        assert!(combatant.is_downstriking());
        assert_eq!(combatant.stamina().current(), 4);

        let mut frames = 0;
        while combatant.is_downstriking() && frames < 200 {
            combatant.walk(Direction::Right);
            step(&mut combatant);
            if combatant.is_downstriking() {
                assert_eq!(combatant.velocity().dx, 0);
            }
            frames += 1;
        }
        assert!(combatant.is_landing_stunned());
        assert!(!combatant.is_ready());

        let cues: Vec<_> = combatant.drain_cues().collect();
        assert_eq!(cues, vec![Cue::Jump, Cue::Strike, Cue::SwordHitsGround]);

        let mut stunned = 1;
        while combatant.is_landing_stunned() {
            step(&mut combatant);
            stunned += 1;
        }
        assert_eq!(stunned, 30);
        assert!(combatant.is_ready());
    }

    #[test]
    fn downstrike_landing_on_the_opponent_stuns_briefly() {
        let mut combatant = spawn(Side::Left);
        combatant.deploy_jump();
        for _ in 0..4 {
            step(&mut combatant);
        }
        combatant.deploy_downstrike();
        step(&mut combatant);

        let top = combatant.rect().bottom() + 10;
        combatant.rest_on(top);
        step(&mut combatant);
        assert_eq!(
            combatant.action(),
            Action::LandingStunned {
                remaining: Countdown::start(4)
            }
        );
        assert_eq!(combatant.rect().bottom(), top);
    }

    #[test]
    fn shield_holds_position_for_its_duration() {
        let mut combatant = spawn(Side::Right);
        combatant.deploy_shield();
        let start = combatant.rect();

        for _ in 0..28 {
            combatant.walk(Direction::Left);
            step(&mut combatant);
            assert!(combatant.shield_active());
        }
        assert_eq!(combatant.rect(), start);

        step(&mut combatant);
        assert!(!combatant.shield_active());
    }

    #[test]
    fn stamina_regenerates_except_while_jumping() {
        let config = CombatantConfig {
            start_stamina: 3,
            ..CombatantConfig::default()
        };
        let mut combatant =
            Combatant::spawn(Side::Left, &config, Arena::default(), KeyBindings::left_side())
                .unwrap();

        combatant.deploy_jump();
        for _ in 0..14 {
            step(&mut combatant);
        }
        assert_eq!(combatant.stamina().reload(), 48);

        let mut combatant =
            Combatant::spawn(Side::Left, &config, Arena::default(), KeyBindings::left_side())
                .unwrap();
        for _ in 0..48 {
            step(&mut combatant);
        }
        assert_eq!(combatant.stamina().current(), 4);
    }

    #[test]
    fn movement_is_clamped_to_the_arena() {
        let mut combatant = spawn(Side::Left);
        for _ in 0..20 {
            press(&mut combatant, InputSet::LEFT);
        }
        assert_eq!(combatant.rect().left(), 0);

        let mut combatant = spawn(Side::Right);
        for _ in 0..20 {
            press(&mut combatant, InputSet::RIGHT);
        }
        assert_eq!(combatant.rect().right(), 1280);
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_input(
            frames in prop::collection::vec((0u8..64, any::<bool>(), 0u8..24), 1..400)
        ) {
            let mut combatant = spawn(Side::Left);
            for (bits, knockback, roll) in frames {
                let before = combatant.stamina().current();
                combatant.apply_input(&InputFrame::new(InputSet::from_bits_truncate(bits)));
                prop_assert!(before - combatant.stamina().current() <= 2);

                step(&mut combatant);
                if roll == 0 {
                    combatant.take_hit(knockback);
                }

                let rect = combatant.rect();
                let arena = *combatant.arena();
                prop_assert!(rect.left() >= 0 && rect.right() <= arena.width());
                prop_assert!(rect.bottom() <= arena.ground());
                prop_assert!(combatant.stamina().current() <= combatant.stamina().max());
                prop_assert!(!combatant.sword_hurtbox() || combatant.is_striking());
                prop_assert!(!combatant.shield_active() || combatant.is_shielding());
                prop_assert!(!combatant.is_knocked_back() || !combatant.is_ready());
                if combatant.is_knocked_back() {
                    prop_assert_eq!(combatant.velocity().dx, -15);
                }
                let _ = combatant.drain_cues().count();
            }
        }
    }
}
