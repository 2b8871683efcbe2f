//! Appearance handler - Zombie palette and base layers for humanoids

use bevy::prelude::*;

use crate::components::HumanoidAppearance;
use crate::config::ZombieConfig;
use crate::constants::ZOMBIE_OVERRIDE_LAYERS;
use crate::messages::IdentityRefreshMsg;
use crate::zombie::ZombieMarker;

/// Snapshot the current look into the marker, then repaint.
/// Non-humanoids are left alone.
pub fn apply_zombie_appearance(
    world: &mut World,
    target: Entity,
    zombie: &mut ZombieMarker,
    config: &ZombieConfig,
) {
    {
        let Some(mut appearance) = world.get_mut::<HumanoidAppearance>(target) else {
            return;
        };

        zombie.before_skin_color = Some(appearance.skin_color);
        zombie.before_eye_color = Some(appearance.eye_color);
        zombie.before_custom_layers = Some(appearance.custom_layers.clone());

        appearance.skin_color = config.skin_color;
        appearance.eye_color = config.eye_color;
        for slot in ZOMBIE_OVERRIDE_LAYERS {
            appearance.custom_layers.insert(slot, config.external_layer_id.clone());
        }
    }

    world.write_message(IdentityRefreshMsg { entity: target });
}

/// Put a zombie's pre-transformation look back on a fresh body.
/// Fields the marker never captured are left as they are.
pub fn restore_appearance(zombie: &ZombieMarker, appearance: &mut HumanoidAppearance) {
    if let Some(skin) = zombie.before_skin_color {
        appearance.skin_color = skin;
    }
    if let Some(eyes) = zombie.before_eye_color {
        appearance.eye_color = eyes;
    }
    if let Some(layers) = &zombie.before_custom_layers {
        appearance.custom_layers = layers.clone();
    }
}
