//! AI handler - Zombie faction, behavior tree and scheduler wake/sleep

use bevy::prelude::*;
use tracing::debug;

use crate::components::*;
use crate::config::ZombieConfig;
use crate::systems::mind::controlling_session;
use crate::zombie::ZombieMarker;

pub fn apply_zombie_ai(
    world: &mut World,
    target: Entity,
    _zombie: &mut ZombieMarker,
    config: &ZombieConfig,
) {
    let player_controlled = controlling_session(world, target).is_some();
    {
        let Ok(mut entity) = world.get_entity_mut(target) else {
            return;
        };

        if !entity.contains::<NpcFactions>() {
            entity.insert(NpcFactions::default());
        }
        if let Some(mut factions) = entity.get_mut::<NpcFactions>() {
            if config.clear_existing_factions {
                factions.0.clear();
            }
            factions.0.insert(config.faction.clone());
        }

        entity.insert(HtnAgent {
            root_task: config.root_task.clone(),
            blackboard: Blackboard { owner: Some(target) },
        });
    }

    sleep_npc(world, target);
    // A player-controlled zombie must not fight the player's input
    if !player_controlled {
        wake_npc(world, target);
    }
}

/// Stop the AI scheduler from ticking `entity`.
pub fn sleep_npc(world: &mut World, entity: Entity) {
    if let Ok(mut e) = world.get_entity_mut(entity) {
        if e.take::<ActiveNpc>().is_some() {
            debug!("npc: {entity:?} asleep");
        }
    }
}

/// Let the AI scheduler tick `entity`. Only agents with an `HtnAgent` can wake.
pub fn wake_npc(world: &mut World, entity: Entity) {
    if let Ok(mut e) = world.get_entity_mut(entity) {
        if e.contains::<HtnAgent>() && !e.contains::<ActiveNpc>() {
            e.insert(ActiveNpc);
            debug!("npc: {entity:?} awake");
        }
    }
}
