//! Cleanup - Deferred removal of `PendingZombie` once the step that transformed is over

use bevy::prelude::*;

use crate::resources::PendingZombieCleanup;
use crate::zombie::PendingZombie;

pub fn apply_pending_zombie_cleanup(world: &mut World) {
    let pending = match world.get_resource_mut::<PendingZombieCleanup>() {
        Some(mut cleanup) => std::mem::take(&mut cleanup.0),
        None => return,
    };

    for entity in pending {
        // Despawned in the meantime: nothing to clean
        if let Ok(mut e) = world.get_entity_mut(entity) {
            e.remove::<PendingZombie>();
        }
    }
}
