//! Frame loop for one match between two combatants.
//!
//! A [`Duel`] owns both combatants and their input providers. Every call to
//! [`Duel::step`] runs one frame in a fixed order:
//!
//! 1. poll both providers against the same pre-frame snapshot
//! 2. decode keys through each combatant's bindings and apply intents
//! 3. advance both state machines, then move both bodies
//! 4. resolve stacking, then weapon contact
//! 5. drain cues and decide the outcome
//!
//! Rendering and sound are left to the caller, which reads
//! [`Combatant::visual`] and the [`FrameReport`] after each step.

use duel_content::{AiProfile, ControllerKind, DuelSetup};
use duel_core::{Arena, ArenaConfig, Combatant, CombatantConfig, Cue, KeyBindings, Side};
use tracing::{debug, info};

use crate::api::{IdleInputProvider, InputProvider, Result, RuntimeError};
use crate::providers::AiScheme;
use crate::referee::{self, Footprint, Hit};

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Side),
    /// Both combatants lost their last life in the same frame.
    Draw,
}

impl Outcome {
    fn decide(left: &Combatant, right: &Combatant) -> Option<Self> {
        match (left.is_defeated(), right.is_defeated()) {
            (true, true) => Some(Self::Draw),
            (true, false) => Some(Self::Winner(Side::Right)),
            (false, true) => Some(Self::Winner(Side::Left)),
            (false, false) => None,
        }
    }
}

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame number, starting at 1.
    pub frame: u64,
    pub cues: Vec<(Side, Cue)>,
    pub hits: Vec<Hit>,
    /// Set on the frame the match is decided and every frame after.
    pub outcome: Option<Outcome>,
}

/// A combatant with the controller that drives it.
pub struct Fighter {
    combatant: Combatant,
    provider: Box<dyn InputProvider>,
}

impl Fighter {
    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn controller(&self) -> &'static str {
        self.provider.label()
    }
}

/// One match, stepped a frame at a time.
pub struct Duel {
    arena: Arena,
    left: Fighter,
    right: Fighter,
    frame: u64,
    outcome: Option<Outcome>,
}

impl Duel {
    pub fn builder() -> DuelBuilder {
        DuelBuilder::new()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.fighter(side).combatant
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Runs one frame. Stepping after the match is decided keeps the bodies
    /// moving but never changes the outcome.
    pub fn step(&mut self) -> FrameReport {
        self.frame += 1;
        let Self { left, right, .. } = &mut *self;

        let left_keys = left.provider.poll(&left.combatant, &right.combatant);
        let right_keys = right.provider.poll(&right.combatant, &left.combatant);

        let left_input = left.combatant.bindings().decode(&left_keys);
        let right_input = right.combatant.bindings().decode(&right_keys);
        left.combatant.apply_input(&left_input);
        right.combatant.apply_input(&right_input);

        left.combatant.advance();
        right.combatant.advance();

        let before = Footprint::of(&left.combatant, &right.combatant);
        left.combatant.apply_movement();
        right.combatant.apply_movement();

        referee::resolve_stacking(&mut left.combatant, &mut right.combatant, before);
        let hits = referee::resolve_hits(&mut left.combatant, &mut right.combatant);

        let cues = left
            .combatant
            .drain_cues()
            .map(|cue| (Side::Left, cue))
            .chain(right.combatant.drain_cues().map(|cue| (Side::Right, cue)))
            .collect();

        if self.outcome.is_none() {
            self.outcome = Outcome::decide(&self.left.combatant, &self.right.combatant);
            if let Some(outcome) = self.outcome {
                info!(frame = self.frame, ?outcome, "duel decided");
            }
        }

        FrameReport {
            frame: self.frame,
            cues,
            hits,
            outcome: self.outcome,
        }
    }

    /// Steps until the match is decided or `max_frames` more frames have run.
    pub fn run(&mut self, max_frames: u64) -> Option<Outcome> {
        for _ in 0..max_frames {
            if self.is_over() {
                break;
            }
            self.step();
        }
        if self.outcome.is_none() {
            debug!(frame = self.frame, "frame budget spent without a winner");
        }
        self.outcome
    }
}

/// Builder for [`Duel`].
///
/// Bindings default to each side's standard layout. Both providers must be
/// set before [`DuelBuilder::build`].
pub struct DuelBuilder {
    arena: ArenaConfig,
    combatant: CombatantConfig,
    left_bindings: KeyBindings,
    right_bindings: KeyBindings,
    left_provider: Option<Box<dyn InputProvider>>,
    right_provider: Option<Box<dyn InputProvider>>,
}

impl DuelBuilder {
    pub fn new() -> Self {
        Self {
            arena: ArenaConfig::default(),
            combatant: CombatantConfig::default(),
            left_bindings: Side::Left.default_bindings(),
            right_bindings: Side::Right.default_bindings(),
            left_provider: None,
            right_provider: None,
        }
    }

    /// Takes everything from a setup document and builds providers for
    /// every computer or idle controller. Human sides are left for the
    /// caller to attach with [`DuelBuilder::provider`].
    pub fn from_setup(setup: &DuelSetup) -> Self {
        let mut builder = Self::new()
            .arena(setup.arena.clone())
            .combatant(setup.combatant.clone())
            .bindings(Side::Left, setup.left.bindings_for(Side::Left))
            .bindings(Side::Right, setup.right.bindings_for(Side::Right));

        for side in [Side::Left, Side::Right] {
            let kind = setup.side(side).controller;
            let seed = side_seed(setup.seed, side);
            if let Some(provider) = builtin_provider(kind, builder.bindings_of(side), &setup.ai, seed) {
                builder = builder.boxed_provider(side, provider);
            }
        }
        builder
    }

    pub fn arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    pub fn combatant(mut self, config: CombatantConfig) -> Self {
        self.combatant = config;
        self
    }

    pub fn bindings(mut self, side: Side, bindings: KeyBindings) -> Self {
        match side {
            Side::Left => self.left_bindings = bindings,
            Side::Right => self.right_bindings = bindings,
        }
        self
    }

    pub fn provider(self, side: Side, provider: impl InputProvider + 'static) -> Self {
        self.boxed_provider(side, Box::new(provider))
    }

    pub fn boxed_provider(mut self, side: Side, provider: Box<dyn InputProvider>) -> Self {
        match side {
            Side::Left => self.left_provider = Some(provider),
            Side::Right => self.right_provider = Some(provider),
        }
        self
    }

    /// Attaches a computer controller built the same way a setup document
    /// would.
    pub fn ai(self, side: Side, scheme: AiScheme, profile: &AiProfile, seed: u64) -> Self {
        let provider = scheme.build(self.bindings_of(side).clone(), profile, seed);
        self.boxed_provider(side, provider)
    }

    pub fn bindings_of(&self, side: Side) -> &KeyBindings {
        match side {
            Side::Left => &self.left_bindings,
            Side::Right => &self.right_bindings,
        }
    }

    pub fn build(self) -> Result<Duel> {
        let left_provider = self
            .left_provider
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Left })?;
        let right_provider = self
            .right_provider
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Right })?;

        let arena = Arena::from_config(&self.arena)?;
        let left = Combatant::spawn(Side::Left, &self.combatant, arena, self.left_bindings)?;
        let right = Combatant::spawn(Side::Right, &self.combatant, arena, self.right_bindings)?;

        info!(
            width = arena.width(),
            height = arena.height(),
            scale = arena.scale().factor(),
            left = left_provider.label(),
            right = right_provider.label(),
            "duel ready"
        );

        Ok(Duel {
            arena,
            left: Fighter {
                combatant: left,
                provider: left_provider,
            },
            right: Fighter {
                combatant: right,
                provider: right_provider,
            },
            frame: 0,
            outcome: None,
        })
    }
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider for controllers the runtime can build on its own.
fn builtin_provider(
    kind: ControllerKind,
    bindings: &KeyBindings,
    profile: &AiProfile,
    seed: u64,
) -> Option<Box<dyn InputProvider>> {
    match kind {
        ControllerKind::Idle => Some(Box::new(IdleInputProvider)),
        ControllerKind::Human => None,
        kind => AiScheme::from_controller(kind)
            .map(|scheme| scheme.build(bindings.clone(), profile, seed)),
    }
}

/// Separate random streams for the two sides of one seeded match.
pub fn side_seed(seed: u64, side: Side) -> u64 {
    match side {
        Side::Left => seed,
        Side::Right => seed ^ 0x9E37_79B9_7F4A_7C15,
    }
}

/// Fails with [`RuntimeError::ExternalController`] if `setup` names a
/// controller that needs a frontend.
pub fn require_headless(setup: &DuelSetup) -> Result<()> {
    for side in [Side::Left, Side::Right] {
        let kind = setup.side(side).controller;
        if kind == ControllerKind::Human {
            return Err(RuntimeError::ExternalController { side, kind });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScriptedInputProvider;
    use duel_core::InputSet;

    fn idle_duel() -> Duel {
        Duel::builder()
            .provider(Side::Left, IdleInputProvider)
            .provider(Side::Right, IdleInputProvider)
            .build()
            .unwrap()
    }

    #[test]
    fn missing_provider_is_an_error() {
        let err = Duel::builder()
            .provider(Side::Left, IdleInputProvider)
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            RuntimeError::ProviderNotSet { side: Side::Right }
        ));
    }

    #[test]
    fn bad_arena_is_a_config_error() {
        let err = Duel::builder()
            .arena(ArenaConfig {
                width: 120,
                ..ArenaConfig::default()
            })
            .provider(Side::Left, IdleInputProvider)
            .provider(Side::Right, IdleInputProvider)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, RuntimeError::Config(_)));
    }

    #[test]
    fn idle_duel_never_ends() {
        let mut duel = idle_duel();
        assert_eq!(duel.run(300), None);
        assert_eq!(duel.frame(), 300);
        assert_eq!(duel.combatant(Side::Left).life(), duel.combatant(Side::Left).max_life());
    }

    #[test]
    fn scripted_jump_reports_its_cue() {
        let mut duel = Duel::builder()
            .provider(
                Side::Left,
                ScriptedInputProvider::new(Side::Left.default_bindings(), [InputSet::JUMP]),
            )
            .provider(Side::Right, IdleInputProvider)
            .build()
            .unwrap();

        let report = duel.step();
        assert_eq!(report.frame, 1);
        assert_eq!(report.cues, vec![(Side::Left, Cue::Jump)]);
        assert!(duel.combatant(Side::Left).is_jumping());
    }

    #[test]
    fn setup_builds_ai_and_idle_sides() {
        let mut setup = DuelSetup::default();
        setup.right.controller = ControllerKind::Idle;
        let duel = DuelBuilder::from_setup(&setup).build().unwrap();
        assert_eq!(duel.fighter(Side::Left).controller(), "heuristic");
        assert_eq!(duel.fighter(Side::Right).controller(), "idle");
    }

    #[test]
    fn human_sides_need_a_provider() {
        let mut setup = DuelSetup::default();
        setup.left.controller = ControllerKind::Human;
        assert!(matches!(
            require_headless(&setup),
            Err(RuntimeError::ExternalController { side: Side::Left, .. })
        ));
        assert!(matches!(
            DuelBuilder::from_setup(&setup).build(),
            Err(RuntimeError::ProviderNotSet { side: Side::Left })
        ));
    }

    #[test]
    fn side_seeds_differ() {
        assert_ne!(side_seed(5, Side::Left), side_seed(5, Side::Right));
    }
}
