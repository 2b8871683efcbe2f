//! Config Resolution Tests
//! Validates: caller source > target override > process default, and per-entity accent override.

use bevy::prelude::*;

use super::*;
use crate::constants::*;
use crate::systems::{attempt_transform, resolve_config};

fn config_with_faction(faction: &str) -> ZombieConfig {
    ZombieConfig { faction: faction.into(), ..default() }
}

#[test]
fn caller_source_beats_target_override() {
    let mut world = test_world();
    let bob = spawn_mob(&mut world);
    world.entity_mut(bob).insert(config_with_faction("Own"));
    let source = world.spawn(config_with_faction("Caller")).id();

    let (config, from) = resolve_config(&world, bob, Some(source));
    assert_eq!(config.faction, "Caller");
    assert_eq!(from, Some(source));

    assert!(attempt_transform(&mut world, bob, Some(source)));
    assert!(world.get::<NpcFactions>(bob).unwrap().contains("Caller"));
    assert_eq!(world.get::<ZombieConfig>(bob).unwrap().faction, "Caller");
    let zombified = drain::<EntityZombified>(&mut world);
    assert_eq!(zombified[0].config_source, Some(source));
}

#[test]
fn target_override_beats_default() {
    let mut world = test_world();
    world.insert_resource(DefaultZombieConfig(config_with_faction("Default")));
    let bob = spawn_mob(&mut world);
    world.entity_mut(bob).insert(config_with_faction("Own"));

    assert_eq!(resolve_config(&world, bob, None), (config_with_faction("Own"), Some(bob)));

    let plain = spawn_mob(&mut world);
    assert_eq!(resolve_config(&world, plain, None), (config_with_faction("Default"), None));
}

#[test]
fn source_without_config_falls_back() {
    let mut world = test_world();
    let bob = spawn_mob(&mut world);
    let empty = world.spawn_empty().id();

    let (config, from) = resolve_config(&world, bob, Some(empty));
    assert_eq!(config, ZombieConfig::default());
    assert_eq!(from, None);
}

#[test]
fn accent_override_beats_config() {
    let mut world = test_world();
    let moth = spawn_humanoid(&mut world, "Moth", None);
    world.entity_mut(moth).insert(ZombieAccentOverride("zombieMoth".into()));
    let plain = spawn_humanoid(&mut world, "Plain", None);
    world.entity_mut(plain).insert(ZombieConfig { accent: "grunt".into(), ..default() });

    assert!(attempt_transform(&mut world, moth, None));
    assert!(attempt_transform(&mut world, plain, None));
    assert_eq!(world.get::<ReplacementAccent>(moth).unwrap().0, "zombieMoth");
    assert_eq!(world.get::<ReplacementAccent>(plain).unwrap().0, "grunt");
}

#[test]
fn custom_palette_from_source() {
    let mut world = test_world();
    let ada = spawn_humanoid(&mut world, "Ada", None);
    let source = world
        .spawn(ZombieConfig {
            skin_color: Rgba::rgb(0.1, 0.1, 0.1),
            external_layer_id: "MobHumanoidMarkingRot".into(),
            ..default()
        })
        .id();

    assert!(attempt_transform(&mut world, ada, Some(source)));
    let appearance = world.get::<HumanoidAppearance>(ada).unwrap();
    assert_eq!(appearance.skin_color, Rgba::rgb(0.1, 0.1, 0.1));
    assert_eq!(appearance.eye_color, ZOMBIE_EYE_COLOR);
    assert_eq!(appearance.custom_layers[&LayerSlot::Tail], "MobHumanoidMarkingRot");
}
