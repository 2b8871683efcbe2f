//! ECS Messages - Inbound triggers and outbound notifications of the zombify pipeline.

use bevy::prelude::*;

use crate::components::{MobState, SessionId};

// ============================================================================
// INBOUND (triggers)
// ============================================================================

/// What asked for a transformation. Only used for logging.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransformTrigger {
    Death,
    Admin,
    SelfAction,
    Bite,
}

/// Mob state transition, written by whatever changed it (damage, healing, ...).
/// The death observer transforms `ZombifyOnDeath` entities on `new == Dead`.
#[derive(Message, Clone, Debug)]
pub struct MobStateChangedMsg {
    pub entity: Entity,
    pub old: MobState,
    pub new: MobState,
}

/// Administrative / scripted transformation request.
#[derive(Message, Clone, Debug)]
pub struct ZombifyRequestMsg {
    pub target: Entity,
    pub config_source: Option<Entity>,
    pub trigger: TransformTrigger,
}

/// Player used the self-transform action.
#[derive(Message, Clone, Debug)]
pub struct ZombifySelfMsg {
    pub performer: Entity,
}

/// A melee bite landed.
#[derive(Message, Clone, Debug)]
pub struct ZombieBiteMsg {
    pub biter: Entity,
    pub target: Entity,
}

/// `clone` was duplicated from `original` (cloning pod etc).
#[derive(Message, Clone, Debug)]
pub struct EntityClonedMsg {
    pub original: Entity,
    pub clone: Entity,
}

// ============================================================================
// OUTBOUND (completion events)
// ============================================================================

/// Transformation finished. `config_source` = entity the config was read from,
/// `None` when the process default was used.
#[derive(Message, Clone, Debug)]
pub struct EntityZombified {
    pub entity: Entity,
    pub config_source: Option<Entity>,
}

/// Legacy broadcast of the same completion, for consumers that only take the entity.
#[derive(Message, Clone, Debug)]
pub struct ZombifiedBroadcast {
    pub entity: Entity,
}

// ============================================================================
// OUTBOUND (presentation / collaborators)
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopupSize {
    Small,
    Large,
}

/// In-world popup shown to observers near `entity`.
#[derive(Message, Clone, Debug)]
pub struct PopupMsg {
    pub entity: Entity,
    pub text: String,
    pub size: PopupSize,
}

/// Chat line sent to one session only.
#[derive(Message, Clone, Debug)]
pub struct SessionChatMsg {
    pub session: SessionId,
    pub text: String,
}

/// Sound played to one session only.
#[derive(Message, Clone, Debug)]
pub struct SessionSoundMsg {
    pub session: SessionId,
    pub sound: String,
}

/// Role added to a session's mind. `silent` = no antag greeting broadcast.
#[derive(Message, Clone, Debug)]
pub struct RoleAssignedMsg {
    pub session: SessionId,
    pub entity: Entity,
    pub role: String,
    pub silent: bool,
}

/// Session was unbound from `body` by a role ban. The session registry owns
/// spawning the spectator it lands in.
#[derive(Message, Clone, Debug)]
pub struct SpectatorRedirectMsg {
    pub session: SessionId,
    pub body: Entity,
}

/// Display name / identity presentation must be recomputed.
#[derive(Message, Clone, Debug)]
pub struct IdentityRefreshMsg {
    pub entity: Entity,
}

/// Item force-removed from a slot. The inventory owner decides where it lands.
#[derive(Message, Clone, Debug)]
pub struct ItemUnequippedMsg {
    pub owner: Entity,
    pub slot: String,
    pub item: String,
}
