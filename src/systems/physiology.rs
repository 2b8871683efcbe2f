//! Physiology handler - Needs, blood, damage, equipment and speed of the undead

use bevy::prelude::*;
use tracing::debug;

use crate::components::*;
use crate::config::ZombieConfig;
use crate::messages::{ItemUnequippedMsg, MobStateChangedMsg};
use crate::systems::movement::refresh_movement_speed;
use crate::zombie::ZombieMarker;

pub fn apply_zombie_physiology(
    world: &mut World,
    target: Entity,
    zombie: &mut ZombieMarker,
    config: &ZombieConfig,
) {
    let (unequipped, revived, pulled, dragger) = {
        let Ok(mut entity) = world.get_entity_mut(target) else {
            return;
        };

        // Undead don't breathe, eat, drink or breed
        entity
            .remove::<Respirator>()
            .remove::<Hunger>()
            .remove::<Thirst>()
            .remove::<Reproductive>()
            .remove::<ReproductivePartner>()
            .remove::<MovementImpairment>()
            .remove::<ComplexInteraction>();

        // Entity-specific accent wins over the config accent
        let accent = entity
            .get::<ZombieAccentOverride>()
            .map(|o| o.0.clone())
            .unwrap_or_else(|| config.accent.clone());
        entity.insert(ReplacementAccent(accent));

        if let Some(mut blood) = entity.get_mut::<Bloodstream>() {
            zombie.before_blood_reagent = Some(blood.reagent.clone());
            blood.reagent = config.blood_reagent.clone();
            if config.disable_blood_loss {
                blood.bloodloss_threshold = 0.0;
            }
        }

        if let Some(mut damageable) = entity.get_mut::<Damageable>() {
            damageable.modifier_set = Some(config.damage_modifier_set.clone());
        }

        if let Some(mut temperature) = entity.get_mut::<Temperature>() {
            temperature.cold_damage_threshold = 0.0;
        }

        let mut unequipped = Vec::new();
        if let Some(mut inventory) = entity.get_mut::<Inventory>() {
            for slot in &config.unequip_slots {
                if let Some(item) = inventory.force_unequip(slot) {
                    unequipped.push((slot.clone(), item));
                }
            }
        }

        let mut revived = None;
        if config.heal_on_transformation {
            if let Some(mut damageable) = entity.get_mut::<Damageable>() {
                damageable.clear();
            }
            if let Some(mut state) = entity.get_mut::<MobState>() {
                if *state != MobState::Alive {
                    revived = Some(*state);
                    *state = MobState::Alive;
                }
            }
        }

        // Both directions: whatever the target drags, and whoever drags the target
        let (pulled, dragger) = if config.remove_puller {
            let pulled = entity.take::<Puller>().and_then(|p| p.pulling);
            let dragger = entity.get_mut::<Pullable>().and_then(|mut p| p.pulled_by.take());
            (pulled, dragger)
        } else {
            (None, None)
        };

        (unequipped, revived, pulled, dragger)
    };

    for (slot, item) in unequipped {
        debug!("zombify: {target:?} dropped {item} from {slot}");
        world.write_message(ItemUnequippedMsg { owner: target, slot, item });
    }

    if let Some(old) = revived {
        world.write_message(MobStateChangedMsg { entity: target, old, new: MobState::Alive });
    }

    if let Some(pulled) = pulled {
        if let Some(mut pullable) = world.get_mut::<Pullable>(pulled) {
            if pullable.pulled_by == Some(target) {
                pullable.pulled_by = None;
            }
        }
    }

    if let Some(dragger) = dragger {
        if let Some(mut puller) = world.get_mut::<Puller>(dragger) {
            if puller.pulling == Some(target) {
                puller.pulling = None;
            }
        }
    }

    refresh_movement_speed(world, target);
}
