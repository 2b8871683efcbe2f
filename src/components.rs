//! ECS Components - Entity state owned by the surrounding simulation.
//! The zombify pipeline only reads and rewrites these; it never spawns
//! or despawns the entities that carry them.

use bevy::prelude::*;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// SHARED VALUE TYPES
// ============================================================================

/// Linear RGBA color. Serialized as a plain struct so config files stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Damage amounts keyed by damage type ("Slash", "Blunt", ...).
pub type DamageSpec = BTreeMap<String, f32>;

/// Build a `DamageSpec` from a constant table.
pub fn damage_spec(entries: &[(&str, f32)]) -> DamageSpec {
    entries.iter().map(|(kind, amount)| (kind.to_string(), *amount)).collect()
}

/// Player connection that controls a mind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct SessionId(pub u64);

// ============================================================================
// LIFE STATE
// ============================================================================

/// Living/dead state. Presence is the minimal "can be transformed" capability.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MobState {
    #[default]
    Alive,
    Critical,
    Dead,
}

impl MobState {
    /// Critical or dead: can't act, can be bitten into a zombie.
    pub fn is_incapacitated(&self) -> bool {
        matches!(self, Self::Critical | Self::Dead)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Critical => "Critical",
            Self::Dead => "Dead",
        }
    }
}

/// Accumulated damage by type plus the resistance set applied to new damage.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Damageable {
    pub damage: DamageSpec,
    pub modifier_set: Option<String>,
}

impl Damageable {
    pub fn total(&self) -> f32 {
        self.damage.values().sum()
    }

    pub fn clear(&mut self) {
        self.damage.clear();
    }
}

// ============================================================================
// APPEARANCE
// ============================================================================

/// Base sprite layers a humanoid can customize.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum LayerSlot {
    Tail,
    HeadSide,
    HeadTop,
    Snout,
    Hair,
    FacialHair,
    Chest,
}

/// Humanoid appearance store. Only entities with this get appearance changes.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct HumanoidAppearance {
    pub species: String,
    pub skin_color: Rgba,
    pub eye_color: Rgba,
    /// Custom base layer id per slot. Slots absent here use the species default.
    pub custom_layers: BTreeMap<LayerSlot, String>,
}

impl HumanoidAppearance {
    pub fn new(species: impl Into<String>, skin_color: Rgba, eye_color: Rgba) -> Self {
        Self {
            species: species.into(),
            skin_color,
            eye_color,
            custom_layers: BTreeMap::new(),
        }
    }

    pub fn with_layer(mut self, slot: LayerSlot, id: impl Into<String>) -> Self {
        self.custom_layers.insert(slot, id.into());
        self
    }
}

// ============================================================================
// PHYSIOLOGY
// ============================================================================

/// Breathes. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Respirator {
    pub saturation: f32,
}

/// Gets hungry. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Hunger {
    pub current: f32,
}

/// Gets thirsty. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Thirst {
    pub current: f32,
}

/// Can reproduce. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Reproductive;

/// Can be a reproduction partner. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ReproductivePartner;

/// Movement impaired (e.g. paralyzed legs). Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct MovementImpairment;

/// Can use complex machinery. Removed from zombies.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ComplexInteraction;

/// Circulating blood. `bloodloss_threshold` = blood fraction below which bleeding kills.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Bloodstream {
    pub reagent: String,
    pub bloodloss_threshold: f32,
}

impl Default for Bloodstream {
    fn default() -> Self {
        Self {
            reagent: "Blood".into(),
            bloodloss_threshold: 0.9,
        }
    }
}

/// Body temperature. Cold damage is dealt while below `cold_damage_threshold`.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Temperature {
    pub current: f32,
    pub cold_damage_threshold: f32,
}

impl Default for Temperature {
    fn default() -> Self {
        Self {
            current: 310.15,
            cold_damage_threshold: 260.0,
        }
    }
}

/// Equipment slots. `None` = slot exists but is empty.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Inventory {
    pub slots: BTreeMap<String, Option<String>>,
}

impl Inventory {
    pub fn with_item(mut self, slot: impl Into<String>, item: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), Some(item.into()));
        self
    }

    /// Empty a slot regardless of what's in it. Returns the removed item.
    pub fn force_unequip(&mut self, slot: &str) -> Option<String> {
        self.slots.get_mut(slot).and_then(Option::take)
    }
}

/// This entity is pulling something.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Puller {
    pub pulling: Option<Entity>,
}

/// This entity can be pulled, and may currently be.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Pullable {
    pub pulled_by: Option<Entity>,
}

/// Base speeds plus the multiplier last computed by `refresh_movement_speed`.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct MovementSpeed {
    pub base_walk: f32,
    pub base_sprint: f32,
    pub modifier: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            base_walk: 2.5,
            base_sprint: 4.5,
            modifier: 1.0,
        }
    }
}

impl MovementSpeed {
    pub fn walk(&self) -> f32 {
        self.base_walk * self.modifier
    }

    pub fn sprint(&self) -> f32 {
        self.base_sprint * self.modifier
    }
}

/// Speech is rewritten through this accent.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ReplacementAccent(pub String);

/// Per-entity accent used instead of the config accent when this entity zombifies.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ZombieAccentOverride(pub String);

// ============================================================================
// COMBAT
// ============================================================================

/// Combat stance. `can_disarm` gates the non-lethal shove/disarm maneuver.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CombatMode {
    pub active: bool,
    pub can_disarm: bool,
}

impl Default for CombatMode {
    fn default() -> Self {
        Self {
            active: false,
            can_disarm: true,
        }
    }
}

/// Unarmed / natural melee attack.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct MeleeWeapon {
    pub animation: String,
    pub wide_animation: String,
    /// Swing arc in degrees. 0 = single target.
    pub angle: f32,
    pub hit_sound: Option<String>,
    pub damage: DamageSpec,
    pub range: f32,
}

impl Default for MeleeWeapon {
    fn default() -> Self {
        Self {
            animation: "WeaponArcPunch".into(),
            wide_animation: "WeaponArcSlash".into(),
            angle: 60.0,
            hit_sound: None,
            damage: damage_spec(&[("Blunt", 5.0)]),
            range: 1.0,
        }
    }
}

/// Can force doors open.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct DoorPryer {
    pub speed_modifier: f32,
    pub pry_powered: bool,
    pub force: bool,
}

/// Hand manipulation. Removing it stops item and tool use entirely.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Hands {
    pub hands: Vec<String>,
}

impl Default for Hands {
    fn default() -> Self {
        Self {
            hands: vec!["left".into(), "right".into()],
        }
    }
}

// ============================================================================
// MIND / ROLES
// ============================================================================

/// Mind inhabiting the body. `session` = controlling player, if any.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Mind {
    pub session: Option<SessionId>,
    pub roles: Vec<String>,
}

impl Mind {
    pub fn controlled_by(session: SessionId) -> Self {
        Self {
            session: Some(session),
            roles: Vec::new(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Can host a player mind.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Sentient;

/// Offer for an idle spectator to take control of this body.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TakeoverOffer {
    pub role_name: String,
    pub description: String,
    pub rules: String,
    pub mind_role: String,
}

/// Spawns mobs for spectators; must not also get a takeover offer.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct MultiSpawnSource;

// ============================================================================
// AI
// ============================================================================

/// Faction memberships used for hostility checks.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct NpcFactions(pub HashSet<String>);

impl NpcFactions {
    pub fn contains(&self, faction: &str) -> bool {
        self.0.contains(faction)
    }
}

/// Key/value store the behavior tree reads. Only the owner binding matters here.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Blackboard {
    pub owner: Option<Entity>,
}

/// Hierarchical task network agent: root task plus blackboard.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct HtnAgent {
    pub root_task: String,
    pub blackboard: Blackboard,
}

/// Marker: AI scheduler ticks this agent. Absent = asleep.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct ActiveNpc;

// ============================================================================
// TAGS
// ============================================================================

/// Opaque tag ids used by other systems for quick filtering.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Tags(pub HashSet<String>);

impl Tags {
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }
}
