//! Mind handler - Sentience, antagonist role or takeover offer.
//! Also holds the role-ban redirect the coordinator applies before committing.

use bevy::prelude::*;
use tracing::info;

use crate::components::*;
use crate::config::ZombieConfig;
use crate::constants::ZOMBIE_BANNED_NOTICE;
use crate::messages::{RoleAssignedMsg, SessionChatMsg, SessionSoundMsg, SpectatorRedirectMsg};
use crate::resources::RoleBans;
use crate::zombie::ZombieMarker;

/// Session currently controlling `entity`, if any.
pub fn controlling_session(world: &World, entity: Entity) -> Option<SessionId> {
    world.get::<Mind>(entity).and_then(|mind| mind.session)
}

pub fn apply_zombie_mind(
    world: &mut World,
    target: Entity,
    _zombie: &mut ZombieMarker,
    config: &ZombieConfig,
) {
    if config.make_sentient {
        if let Ok(mut entity) = world.get_entity_mut(target) {
            if !entity.contains::<Sentient>() {
                entity.insert(Sentient);
            }
        }
    }

    match controlling_session(world, target) {
        Some(session) => {
            if let Some(mut mind) = world.get_mut::<Mind>(target) {
                if !mind.has_role(&config.role_id) {
                    mind.roles.push(config.role_id.clone());
                }
            }
            world.write_message(RoleAssignedMsg {
                session,
                entity: target,
                role: config.role_id.clone(),
                silent: true,
            });
            world.write_message(SessionChatMsg {
                session,
                text: config.greeting.clone(),
            });
            world.write_message(SessionSoundMsg {
                session,
                sound: config.transformation_sound.clone(),
            });
        }
        None => {
            let Ok(mut entity) = world.get_entity_mut(target) else {
                return;
            };
            if !entity.contains::<MultiSpawnSource>() {
                entity.insert(TakeoverOffer {
                    role_name: config.role_name.clone(),
                    description: config.role_description.clone(),
                    rules: config.role_rules.clone(),
                    mind_role: config.role_id.clone(),
                });
            }
        }
    }
}

// ============================================================================
// ROLE-BAN POLICY
// ============================================================================

/// Session that must be moved off `target` because it's banned from `role`.
pub fn banned_session(world: &World, target: Entity, role: &str) -> Option<SessionId> {
    let session = controlling_session(world, target)?;
    let bans = world.get_resource::<RoleBans>()?;
    bans.is_banned(session, role).then_some(session)
}

/// Unbind `session` from `body` and ask the session registry to park it in a
/// spectator. The body is left uncontrolled; the transformation carries on without them.
pub fn redirect_to_spectator(world: &mut World, body: Entity, session: SessionId) {
    if let Some(mut mind) = world.get_mut::<Mind>(body) {
        mind.session = None;
    }
    world.write_message(SpectatorRedirectMsg { session, body });
    world.write_message(SessionChatMsg {
        session,
        text: ZOMBIE_BANNED_NOTICE.into(),
    });
    info!("zombify: session {session:?} is role-banned, moved off {body:?}");
}
