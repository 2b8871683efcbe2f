//! Zombify - ECS pipeline that turns a living entity into a zombie.
//!
//! One coordinator (`attempt_transform`) runs five handlers in a fixed order
//! against an entity's components. Triggers (death, bite, admin command, self
//! action) only queue requests; a single exclusive system drains the queue.

// ============================================================================
// MODULES
// ============================================================================

pub mod components;
pub mod config;
pub mod constants;
pub mod messages;
pub mod resources;
pub mod systems;
pub mod zombie;

#[cfg(test)]
mod tests;

// ============================================================================
// IMPORTS
// ============================================================================

use bevy::prelude::*;

use config::{DefaultZombieConfig, ZombieConfig};
use messages::*;
use resources::*;
use systems::*;

// ============================================================================
// PLUGIN
// ============================================================================

/// Step phases. Chained sets get automatic apply_deferred between them, so a
/// consumed self-action is gone before the transform runs.
#[derive(bevy::ecs::schedule::SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZombifySet {
    Triggers,  // Read inbound messages, queue requests
    Transform, // Drain the queue through the coordinator
    Cleanup,   // Deferred marker removal, clone restoration
}

/// Registers every message, resource and system of the pipeline.
#[derive(Default)]
pub struct ZombifyPlugin {
    pub default_config: ZombieConfig,
}

impl ZombifyPlugin {
    pub fn with_config(default_config: ZombieConfig) -> Self {
        Self { default_config }
    }
}

impl Plugin for ZombifyPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MobStateChangedMsg>()
            .add_message::<ZombifyRequestMsg>()
            .add_message::<ZombifySelfMsg>()
            .add_message::<ZombieBiteMsg>()
            .add_message::<EntityClonedMsg>()
            .add_message::<EntityZombified>()
            .add_message::<ZombifiedBroadcast>()
            .add_message::<PopupMsg>()
            .add_message::<SessionChatMsg>()
            .add_message::<SessionSoundMsg>()
            .add_message::<RoleAssignedMsg>()
            .add_message::<SpectatorRedirectMsg>()
            .add_message::<IdentityRefreshMsg>()
            .add_message::<ItemUnequippedMsg>()
            .init_resource::<RoleBans>()
            .init_resource::<ZombifyHooks>()
            .init_resource::<ZombifyQueue>()
            .init_resource::<PendingZombieCleanup>()
            .init_resource::<ZombifyDebug>()
            .insert_resource(DefaultZombieConfig(self.default_config.clone()))
            .configure_sets(
                Update,
                (ZombifySet::Triggers, ZombifySet::Transform, ZombifySet::Cleanup).chain(),
            )
            .add_systems(
                Update,
                (
                    zombify_on_death_system,
                    zombify_request_system,
                    zombify_self_system,
                    zombie_bite_system,
                )
                    .in_set(ZombifySet::Triggers),
            )
            .add_systems(Update, process_zombify_queue.in_set(ZombifySet::Transform))
            .add_systems(
                Update,
                (apply_pending_zombie_cleanup, restore_cloned_zombie_system).in_set(ZombifySet::Cleanup),
            );
    }
}
