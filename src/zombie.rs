//! Zombie markers - Records the transformation attaches to (or reads from) a target.

use bevy::prelude::*;
use hashbrown::HashSet;
use std::collections::BTreeMap;

use crate::components::{damage_spec, DamageSpec, LayerSlot, Rgba, SessionId};
use crate::constants::*;

// ============================================================================
// TRIGGER / GUARD MARKERS
// ============================================================================

/// Infected but not yet transformed. Removed at the end of the step that transforms.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct PendingZombie;

/// Never transformed, whatever the trigger.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ZombieImmune;

/// Transform when this entity's mob state becomes Dead.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ZombifyOnDeath;

/// Granted action: the entity may transform itself once.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ZombifySelfAction;

// ============================================================================
// PERMANENT ZOMBIE MARKER
// ============================================================================

/// Attached at the commit point and kept for the rest of the entity's life.
///
/// The `before_*` fields snapshot what the entity looked like before the
/// transformation so a clone can be restored. `None` = nothing was captured
/// (e.g. the entity wasn't humanoid). The remaining fields tune ongoing zombie
/// behavior; this crate sets them once and never reads most of them again.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ZombieMarker {
    pub before_skin_color: Option<Rgba>,
    pub before_eye_color: Option<Rgba>,
    pub before_custom_layers: Option<BTreeMap<LayerSlot, String>>,
    pub before_blood_reagent: Option<String>,

    pub bite_damage: DamageSpec,
    pub bite_sound: String,
    pub attack_animation: String,
    pub wide_animation: String,

    pub min_infection_chance: f32,
    pub max_infection_chance: f32,
    pub passive_heal: DamageSpec,
    pub passive_heal_crit: DamageSpec,
    pub movement_speed_debuff: f32,
}

impl Default for ZombieMarker {
    fn default() -> Self {
        Self {
            before_skin_color: None,
            before_eye_color: None,
            before_custom_layers: None,
            before_blood_reagent: None,
            bite_damage: damage_spec(&ZOMBIE_BITE_DAMAGE),
            bite_sound: ZOMBIE_BITE_SOUND.into(),
            attack_animation: ZOMBIE_ATTACK_ANIMATION.into(),
            wide_animation: ZOMBIE_ATTACK_ANIMATION.into(),
            min_infection_chance: ZOMBIE_MIN_INFECTION_CHANCE,
            max_infection_chance: ZOMBIE_MAX_INFECTION_CHANCE,
            passive_heal: damage_spec(&ZOMBIE_PASSIVE_HEAL),
            passive_heal_crit: damage_spec(&ZOMBIE_PASSIVE_HEAL_CRIT),
            movement_speed_debuff: ZOMBIE_MOVEMENT_DEBUFF,
        }
    }
}

// ============================================================================
// TRANSFORMATION STATE
// ============================================================================

/// Forward-only phase of one transformation run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum TransformPhase {
    #[default]
    NotStarted,
    PreTransformation,
    Transforming,
    PostTransformation,
    Completed,
    Cancelled,
}

/// One of the five mutation handlers, in pipeline order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HandlerId {
    Appearance,
    Physiology,
    Combat,
    Mind,
    Ai,
}

impl HandlerId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Appearance => "appearance",
            Self::Physiology => "physiology",
            Self::Combat => "combat",
            Self::Mind => "mind",
            Self::Ai => "ai",
        }
    }
}

/// Bookkeeping for a run in progress. Attached at the commit point,
/// removed once the run completes.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TransformationState {
    pub phase: TransformPhase,
    pub completed_handlers: HashSet<HandlerId>,
    /// Entity the config was read from. Lookup only; `None` = process default.
    pub config_source: Option<Entity>,
    pub cancellable: bool,
    pub cancellation_reason: Option<String>,
    pub had_owning_session: bool,
    pub owner_session: Option<SessionId>,
}

impl TransformationState {
    pub fn new(config_source: Option<Entity>, owner_session: Option<SessionId>) -> Self {
        Self {
            phase: TransformPhase::NotStarted,
            completed_handlers: HashSet::new(),
            config_source,
            cancellable: true,
            cancellation_reason: None,
            had_owning_session: owner_session.is_some(),
            owner_session,
        }
    }

    /// Move to `next`. Returns false (and stays put) if that would go backwards
    /// or revisit the current phase, or if the run already ended.
    pub fn advance(&mut self, next: TransformPhase) -> bool {
        if self.is_finished() || next <= self.phase {
            return false;
        }
        self.phase = next;
        true
    }

    /// Cancel before the commit point. Fails once the run is no longer cancellable.
    pub fn cancel(&mut self, reason: Option<String>) -> bool {
        if !self.cancellable || !self.advance(TransformPhase::Cancelled) {
            return false;
        }
        self.cancellation_reason = reason;
        true
    }

    /// Passing the commit point: the run can no longer be cancelled.
    pub fn commit(&mut self) -> bool {
        if !self.advance(TransformPhase::Transforming) {
            return false;
        }
        self.cancellable = false;
        true
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TransformPhase::Completed | TransformPhase::Cancelled)
    }

    pub fn has_run(&self, handler: HandlerId) -> bool {
        self.completed_handlers.contains(&handler)
    }

    pub fn mark_run(&mut self, handler: HandlerId) {
        self.completed_handlers.insert(handler);
    }
}
