//! Triggers - Everything that can ask for a transformation funnels into `ZombifyQueue`.
//! `process_zombify_queue` is the only system that calls the coordinator.

use bevy::prelude::*;
use tracing::{debug, info};

use crate::components::MobState;
use crate::messages::*;
use crate::resources::ZombifyQueue;
use crate::systems::transform::{try_zombify, TransformOutcome};
use crate::zombie::{ZombieImmune, ZombieMarker, ZombifyOnDeath, ZombifySelfAction};

// ============================================================================
// TRIGGER SYSTEMS
// ============================================================================

/// Entities flagged `ZombifyOnDeath` turn when their mob state becomes Dead.
pub fn zombify_on_death_system(
    mut events: MessageReader<MobStateChangedMsg>,
    candidates: Query<(), (With<ZombifyOnDeath>, Without<ZombieMarker>)>,
    mut queue: ResMut<ZombifyQueue>,
) {
    for event in events.read() {
        if event.new != MobState::Dead || !candidates.contains(event.entity) {
            continue;
        }
        debug!("zombify: {:?} died ({} -> Dead)", event.entity, event.old.name());
        queue.push(event.entity, None, TransformTrigger::Death);
    }
}

/// Admin / scripted requests go straight through.
pub fn zombify_request_system(
    mut events: MessageReader<ZombifyRequestMsg>,
    mut queue: ResMut<ZombifyQueue>,
) {
    for event in events.read() {
        queue.push(event.target, event.config_source, event.trigger);
    }
}

/// Self-transform action. One use: consumed by `process_zombify_queue` once it
/// actually transforms the performer.
pub fn zombify_self_system(
    mut events: MessageReader<ZombifySelfMsg>,
    granted: Query<(), With<ZombifySelfAction>>,
    mut queue: ResMut<ZombifyQueue>,
) {
    for event in events.read() {
        if !granted.contains(event.performer) {
            debug!("zombify: {:?} has no self-transform action", event.performer);
            continue;
        }
        queue.push(event.performer, None, TransformTrigger::SelfAction);
    }
}

/// A zombie's bite turns a target that is already down.
pub fn zombie_bite_system(
    mut events: MessageReader<ZombieBiteMsg>,
    biters: Query<(), With<ZombieMarker>>,
    targets: Query<&MobState, (Without<ZombieMarker>, Without<ZombieImmune>)>,
    mut queue: ResMut<ZombifyQueue>,
) {
    for event in events.read() {
        if !biters.contains(event.biter) {
            continue;
        }
        let Ok(state) = targets.get(event.target) else {
            continue;
        };
        if state.is_incapacitated() {
            queue.push(event.target, None, TransformTrigger::Bite);
        }
    }
}

// ============================================================================
// DRAIN
// ============================================================================

/// Run every queued request through the coordinator, in arrival order.
/// Exclusive: the coordinator needs the whole world, and nothing else may
/// write the targets while a run is in flight.
pub fn process_zombify_queue(world: &mut World) {
    let queued = match world.get_resource_mut::<ZombifyQueue>() {
        Some(mut queue) => std::mem::take(&mut queue.0),
        None => return,
    };

    for request in queued {
        let outcome = try_zombify(world, request.target, request.config_source);
        match outcome {
            TransformOutcome::Transformed => {
                info!("zombify: {:?} turned ({:?})", request.target, request.trigger);
                // A vetoed or rejected self-transform keeps the action
                if request.trigger == TransformTrigger::SelfAction {
                    if let Ok(mut performer) = world.get_entity_mut(request.target) {
                        performer.remove::<ZombifySelfAction>();
                    }
                }
            }
            other => {
                debug!("zombify: {:?} request ({:?}) ended as {other:?}", request.target, request.trigger);
            }
        }
    }
}
