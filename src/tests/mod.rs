//! Test Framework - Fixtures shared by the zombify test modules.
//!
//! World-level tests call the coordinator directly on a bare `World`.
//! App-level tests (`triggers`, `cloning`) go through `ZombifyPlugin` and
//! `app.update()` the way the game loop does.

mod cloning;
mod config;
mod role_ban;

use bevy::prelude::*;

use crate::ZombifyPlugin;
use crate::components::*;
use crate::config::{DefaultZombieConfig, ZombieConfig};
use crate::messages::*;
use crate::resources::*;
use crate::zombie::*;

// ============================================================================
// WORLD / APP
// ============================================================================

/// Bare world with every message channel and resource the pipeline touches.
pub fn test_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<MobStateChangedMsg>>();
    world.init_resource::<Messages<EntityZombified>>();
    world.init_resource::<Messages<ZombifiedBroadcast>>();
    world.init_resource::<Messages<PopupMsg>>();
    world.init_resource::<Messages<SessionChatMsg>>();
    world.init_resource::<Messages<SessionSoundMsg>>();
    world.init_resource::<Messages<RoleAssignedMsg>>();
    world.init_resource::<Messages<SpectatorRedirectMsg>>();
    world.init_resource::<Messages<IdentityRefreshMsg>>();
    world.init_resource::<Messages<ItemUnequippedMsg>>();
    world.init_resource::<RoleBans>();
    world.init_resource::<ZombifyHooks>();
    world.init_resource::<PendingZombieCleanup>();
    world.init_resource::<ZombifyDebug>();
    world.insert_resource(DefaultZombieConfig::default());
    world
}

pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(ZombifyPlugin::default());
    app
}

/// Take every message of type `M` written so far.
pub fn drain<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}

pub fn entity_count(world: &mut World) -> usize {
    let mut all = world.query::<Entity>();
    all.iter(world).count()
}

// ============================================================================
// FIXTURES
// ============================================================================

pub const HUMAN_SKIN: Rgba = Rgba::rgb(0.9, 0.75, 0.65);
pub const HUMAN_EYES: Rgba = Rgba::rgb(0.2, 0.4, 0.8);

/// A dead crew member with every store the handlers touch.
/// `session` = controlling player, `None` = braindead body.
pub fn spawn_humanoid(world: &mut World, name: &str, session: Option<SessionId>) -> Entity {
    let mind = Mind { session, roles: Vec::new() };
    let appearance = HumanoidAppearance::new("Human", HUMAN_SKIN, HUMAN_EYES)
        .with_layer(LayerSlot::Hair, "HumanHairBob")
        .with_layer(LayerSlot::Snout, "HumanSnoutNone");
    let entity = world
        .spawn((
            Name::new(name.to_string()),
            MobState::Dead,
            Damageable { damage: damage_spec(&[("Slash", 80.0), ("Blunt", 120.0)]), modifier_set: None },
            appearance,
            mind,
            Bloodstream::default(),
            Temperature::default(),
            MovementSpeed::default(),
            Hands::default(),
        ))
        .id();
    world.entity_mut(entity).insert((
        Respirator::default(),
        Hunger::default(),
        Thirst::default(),
        Reproductive,
        ComplexInteraction,
        Inventory::default()
            .with_item("gloves", "ClothingHandsGlovesColorYellow")
            .with_item("ears", "ClothingHeadsetGrey")
            .with_item("jumpsuit", "ClothingUniformJumpsuitColorGrey"),
        NpcFactions(["NanoTrasen".to_string()].into_iter().collect()),
        CombatMode::default(),
    ));
    entity
}

/// A non-humanoid animal mob with its own natural attack.
pub fn spawn_mob(world: &mut World) -> Entity {
    world
        .spawn((
            Name::new("mouse"),
            MobState::Alive,
            MeleeWeapon {
                damage: damage_spec(&[("Piercing", 2.0)]),
                range: 0.8,
                ..default()
            },
            MovementSpeed::default(),
            NpcFactions(["Mice".to_string()].into_iter().collect()),
        ))
        .id()
}

/// Every component the pipeline might write, cloned for before/after comparison.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    appearance: Option<HumanoidAppearance>,
    mob_state: Option<MobState>,
    damageable: Option<Damageable>,
    blood: Option<Bloodstream>,
    temperature: Option<Temperature>,
    inventory: Option<Inventory>,
    speed: Option<MovementSpeed>,
    mind: Option<Mind>,
    factions: Option<NpcFactions>,
    combat: Option<CombatMode>,
    melee: Option<MeleeWeapon>,
    hands: Option<Hands>,
    tags: Option<Tags>,
    accent: Option<ReplacementAccent>,
    offer: Option<TakeoverOffer>,
    htn: Option<HtnAgent>,
    marker: Option<ZombieMarker>,
    config: Option<ZombieConfig>,
    flags: [bool; 8],
}

pub fn snapshot(world: &World, entity: Entity) -> Snapshot {
    let e = world.entity(entity);
    Snapshot {
        appearance: e.get::<HumanoidAppearance>().cloned(),
        mob_state: e.get::<MobState>().cloned(),
        damageable: e.get::<Damageable>().cloned(),
        blood: e.get::<Bloodstream>().cloned(),
        temperature: e.get::<Temperature>().cloned(),
        inventory: e.get::<Inventory>().cloned(),
        speed: e.get::<MovementSpeed>().cloned(),
        mind: e.get::<Mind>().cloned(),
        factions: e.get::<NpcFactions>().cloned(),
        combat: e.get::<CombatMode>().cloned(),
        melee: e.get::<MeleeWeapon>().cloned(),
        hands: e.get::<Hands>().cloned(),
        tags: e.get::<Tags>().cloned(),
        accent: e.get::<ReplacementAccent>().cloned(),
        offer: e.get::<TakeoverOffer>().cloned(),
        htn: e.get::<HtnAgent>().cloned(),
        marker: e.get::<ZombieMarker>().cloned(),
        config: e.get::<ZombieConfig>().cloned(),
        flags: [
            e.contains::<Respirator>(),
            e.contains::<Hunger>(),
            e.contains::<Thirst>(),
            e.contains::<Reproductive>(),
            e.contains::<Sentient>(),
            e.contains::<DoorPryer>(),
            e.contains::<ActiveNpc>(),
            e.contains::<TransformationState>(),
        ],
    }
}
