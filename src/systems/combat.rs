//! Combat handler - Combat stance, bite attack, door prying and hand removal

use bevy::prelude::*;

use crate::components::*;
use crate::config::ZombieConfig;
use crate::zombie::ZombieMarker;

pub fn apply_zombie_combat(
    world: &mut World,
    target: Entity,
    zombie: &mut ZombieMarker,
    config: &ZombieConfig,
) {
    let Ok(mut entity) = world.get_entity_mut(target) else {
        return;
    };
    let humanoid = entity.contains::<HumanoidAppearance>();

    if !entity.contains::<CombatMode>() {
        entity.insert(CombatMode::default());
    }
    if let Some(mut combat) = entity.get_mut::<CombatMode>() {
        if config.force_combat_mode {
            combat.active = true;
        }
        if config.disable_combat_disarm {
            combat.can_disarm = false;
        }
    }

    if !entity.contains::<MeleeWeapon>() {
        entity.insert(MeleeWeapon::default());
    }
    if let Some(mut melee) = entity.get_mut::<MeleeWeapon>() {
        melee.animation = zombie.attack_animation.clone();
        melee.wide_animation = zombie.wide_animation.clone();
        melee.angle = config.swing_angle;
        melee.hit_sound = Some(zombie.bite_sound.clone());
        // Non-humanoid mobs keep their natural damage and reach
        if humanoid {
            melee.damage = zombie.bite_damage.clone();
            melee.range = config.melee_range;
        }
    }

    if humanoid && config.door_prying.enabled {
        entity.insert(DoorPryer {
            speed_modifier: config.door_prying.speed_multiplier,
            pry_powered: config.door_prying.can_open_powered,
            force: config.door_prying.always_succeeds,
        });
    }

    if config.remove_hands {
        entity.remove::<Hands>();
    }
}
