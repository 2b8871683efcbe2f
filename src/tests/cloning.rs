//! Cloning Tests (full app)
//! Validates: clone of a zombie gets the pre-transformation look and blood back.

use bevy::prelude::*;

use super::*;
use crate::systems::attempt_transform;

fn clone_body(world: &mut World, original: Entity) -> Entity {
    let appearance = world.get::<HumanoidAppearance>(original).cloned();
    let blood = world.get::<Bloodstream>(original).cloned();
    let mut clone = world.spawn((Name::new("clone"), MobState::Alive));
    if let Some(appearance) = appearance {
        clone.insert(appearance);
    }
    if let Some(blood) = blood {
        clone.insert(blood);
    }
    clone.id()
}

#[test]
fn clone_of_zombie_is_restored() {
    let mut app = test_app();
    let world = app.world_mut();
    let ada = spawn_humanoid(world, "Ada", None);
    let original_layers = world.get::<HumanoidAppearance>(ada).unwrap().custom_layers.clone();
    assert!(attempt_transform(world, ada, None));
    let clone = clone_body(world, ada);
    world.write_message(EntityClonedMsg { original: ada, clone });

    app.update();

    let world = app.world();
    let appearance = world.get::<HumanoidAppearance>(clone).unwrap();
    assert_eq!(appearance.skin_color, HUMAN_SKIN);
    assert_eq!(appearance.eye_color, HUMAN_EYES);
    assert_eq!(appearance.custom_layers, original_layers);
    assert_eq!(world.get::<Bloodstream>(clone).unwrap().reagent, "Blood");
    assert!(!world.entity(clone).contains::<ZombieMarker>());
    assert_eq!(world.resource::<ZombifyDebug>().clones_restored, 1);
}

#[test]
fn clone_of_living_is_untouched() {
    let mut app = test_app();
    let world = app.world_mut();
    let bob = spawn_humanoid(world, "Bob", None);
    let clone = clone_body(world, bob);
    world.entity_mut(clone).insert(HumanoidAppearance::new("Human", Rgba::WHITE, Rgba::WHITE));
    world.write_message(EntityClonedMsg { original: bob, clone });

    app.update();

    let world = app.world();
    assert_eq!(world.get::<HumanoidAppearance>(clone).unwrap().skin_color, Rgba::WHITE);
    assert_eq!(world.resource::<ZombifyDebug>().clones_restored, 0);
}
