//! Movement - Speed modifier recompute

use bevy::prelude::*;

use crate::components::MovementSpeed;
use crate::zombie::ZombieMarker;

/// Recompute the speed multiplier from every modifier source on the entity.
/// Zombies are the only source this crate knows about.
pub fn refresh_movement_speed(world: &mut World, entity: Entity) {
    let modifier = world
        .get::<ZombieMarker>(entity)
        .map_or(1.0, |zombie| zombie.movement_speed_debuff);

    if let Some(mut speed) = world.get_mut::<MovementSpeed>(entity) {
        speed.modifier = modifier;
    }
}
