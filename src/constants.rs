//! Constants - Default tuning for the zombie transformation.
//! Everything here seeds `ZombieConfig::default()` / `ZombieMarker::default()`
//! and can be overridden per entity or from a JSON config file.

use crate::components::{LayerSlot, Rgba};

// ============================================================================
// IDENTITY
// ============================================================================

pub const ZOMBIE_FACTION: &str = "Zombie";
pub const ZOMBIE_ROLE: &str = "MindRoleZombie";
pub const ZOMBIE_ROOT_TASK: &str = "SimpleHostileCompound";
pub const ZOMBIE_ACCENT: &str = "zombie";

// ============================================================================
// APPEARANCE
// ============================================================================

/// Sickly green-grey skin applied to humanoids.
pub const ZOMBIE_SKIN_COLOR: Rgba = Rgba::rgb(0.45, 0.51, 0.29);

/// Bloodshot red eyes.
pub const ZOMBIE_EYE_COLOR: Rgba = Rgba::rgb(0.96, 0.13, 0.24);

/// Layer id that makes a base layer follow the (now zombie) skin color.
pub const ZOMBIE_EXTERNAL_LAYER: &str = "MobHumanoidMarkingMatchSkin";

/// Base layers overwritten with the external layer id. Hair and the rest stay.
pub const ZOMBIE_OVERRIDE_LAYERS: [LayerSlot; 4] = [
    LayerSlot::Tail,
    LayerSlot::HeadSide,
    LayerSlot::HeadTop,
    LayerSlot::Snout,
];

// ============================================================================
// PHYSIOLOGY
// ============================================================================

pub const ZOMBIE_BLOOD: &str = "ZombieBlood";
pub const ZOMBIE_DAMAGE_MODIFIER_SET: &str = "Zombie";

/// Slots emptied on transformation (zombies can't keep gloves or headsets on).
pub const ZOMBIE_UNEQUIP_SLOTS: [&str; 2] = ["gloves", "ears"];

/// Walk/sprint multiplier applied while the entity is a zombie.
pub const ZOMBIE_MOVEMENT_DEBUFF: f32 = 0.70;

// ============================================================================
// COMBAT
// ============================================================================

pub const ZOMBIE_MELEE_RANGE: f32 = 1.2;
pub const ZOMBIE_SWING_ANGLE: f32 = 0.0;
pub const ZOMBIE_PRY_SPEED: f32 = 0.75;

pub const ZOMBIE_ATTACK_ANIMATION: &str = "WeaponArcBite";
pub const ZOMBIE_BITE_SOUND: &str = "/Audio/Effects/bite.ogg";

/// Bite damage by damage type.
pub const ZOMBIE_BITE_DAMAGE: [(&str, f32); 3] = [
    ("Slash", 13.0),
    ("Piercing", 7.0),
    ("Structural", 10.0),
];

/// Passive regeneration per second (negative = healing).
pub const ZOMBIE_PASSIVE_HEAL: [(&str, f32); 5] = [
    ("Blunt", -0.4),
    ("Slash", -0.2),
    ("Piercing", -0.2),
    ("Heat", -0.02),
    ("Shock", -0.02),
];

/// Passive regeneration while critical. Faster so downed zombies get back up.
pub const ZOMBIE_PASSIVE_HEAL_CRIT: [(&str, f32); 5] = [
    ("Blunt", -2.0),
    ("Slash", -2.0),
    ("Piercing", -2.0),
    ("Heat", -1.0),
    ("Shock", -1.0),
];

pub const ZOMBIE_MIN_INFECTION_CHANCE: f32 = 0.25;
pub const ZOMBIE_MAX_INFECTION_CHANCE: f32 = 0.95;

// ============================================================================
// MIND / PRESENTATION
// ============================================================================

pub const ZOMBIE_GREETING: &str = "You have become a zombie. Your goal is to seek out the living \
    and to try to infect them. Work together with the other zombies to overtake the station.";
pub const ZOMBIE_START_SOUND: &str = "/Audio/Ambience/Antag/zombie_start.ogg";

pub const ZOMBIE_ROLE_NAME: &str = "Zombie";
pub const ZOMBIE_ROLE_DESCRIPTION: &str = "A malevolent creature of the dead.";
pub const ZOMBIE_ROLE_RULES: &str = "You are an antagonist. Search out the living and bite them \
    in order to infect them and turn them into zombies.";

/// Sent to a player whose session was moved off the body because of a role ban.
pub const ZOMBIE_BANNED_NOTICE: &str = "You are banned from playing as a zombie. \
    You have been moved to a spectator.";

/// Display name used in popups when the entity has no `Name`.
pub const UNNAMED_ENTITY: &str = "Something";
