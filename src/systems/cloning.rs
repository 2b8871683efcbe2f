//! Cloning - A clone of a zombie comes back with its pre-transformation look and blood

use bevy::prelude::*;
use tracing::debug;

use crate::components::{Bloodstream, HumanoidAppearance};
use crate::messages::EntityClonedMsg;
use crate::resources::ZombifyDebug;
use crate::systems::appearance::restore_appearance;
use crate::zombie::ZombieMarker;

pub fn restore_cloned_zombie_system(
    mut events: MessageReader<EntityClonedMsg>,
    zombies: Query<&ZombieMarker>,
    mut clones: Query<(Option<&mut HumanoidAppearance>, Option<&mut Bloodstream>), Without<ZombieMarker>>,
    mut debug: ResMut<ZombifyDebug>,
) {
    for event in events.read() {
        let Ok(zombie) = zombies.get(event.original) else {
            continue;
        };
        let Ok((appearance, blood)) = clones.get_mut(event.clone) else {
            continue;
        };

        if let Some(mut appearance) = appearance {
            restore_appearance(zombie, &mut appearance);
        }
        if let (Some(mut blood), Some(reagent)) = (blood, zombie.before_blood_reagent.as_ref()) {
            blood.reagent = reagent.clone();
        }

        debug.clones_restored += 1;
        debug!("zombify: clone {:?} of zombie {:?} restored", event.clone, event.original);
    }
}
