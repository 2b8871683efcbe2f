//! Role-Ban Tests
//! Validates: banned session unbound and redirected → body still transforms uncontrolled.

use bevy::prelude::*;

use super::*;
use crate::constants::*;
use crate::systems::attempt_transform;

#[test]
fn banned_session_is_moved_to_spectator() {
    let mut world = test_world();
    let ada = spawn_humanoid(&mut world, "Ada", Some(SessionId(9)));
    let entities_before = entity_count(&mut world);
    world.resource_mut::<RoleBans>().ban(SessionId(9), ZOMBIE_ROLE);

    assert!(attempt_transform(&mut world, ada, None));

    let redirects = drain::<SpectatorRedirectMsg>(&mut world);
    assert_eq!(redirects.len(), 1);
    assert_eq!(redirects[0].session, SessionId(9));
    assert_eq!(redirects[0].body, ada);

    // Body went on as an uncontrolled zombie
    let e = world.entity(ada);
    assert_eq!(e.get::<Mind>().unwrap().session, None);
    assert!(!e.get::<Mind>().unwrap().has_role(ZOMBIE_ROLE));
    assert!(e.contains::<TakeoverOffer>());
    assert!(e.contains::<ActiveNpc>());

    let chat = drain::<SessionChatMsg>(&mut world);
    assert_eq!(chat.len(), 1);
    assert_eq!(chat[0].text, ZOMBIE_BANNED_NOTICE);
    assert!(drain::<RoleAssignedMsg>(&mut world).is_empty());
    assert_eq!(world.resource::<ZombifyDebug>().redirected_sessions, 1);
    assert_eq!(entity_count(&mut world), entities_before, "spectator is spawned by the session registry");
}

#[test]
fn ban_on_another_role_is_ignored() {
    let mut world = test_world();
    let ada = spawn_humanoid(&mut world, "Ada", Some(SessionId(3)));
    {
        let mut bans = world.resource_mut::<RoleBans>();
        bans.ban(SessionId(3), "Traitor");
        bans.ban(SessionId(3), ZOMBIE_ROLE);
        bans.unban(SessionId(3), ZOMBIE_ROLE);
    }

    assert!(attempt_transform(&mut world, ada, None));
    assert_eq!(world.get::<Mind>(ada).unwrap().session, Some(SessionId(3)));
    assert_eq!(drain::<RoleAssignedMsg>(&mut world).len(), 1);
    assert_eq!(world.resource::<ZombifyDebug>().redirected_sessions, 0);
}

#[test]
fn veto_keeps_banned_session_in_place() {
    let mut world = test_world();
    let ada = spawn_humanoid(&mut world, "Ada", Some(SessionId(9)));
    world.resource_mut::<RoleBans>().ban(SessionId(9), ZOMBIE_ROLE);
    world.resource_mut::<ZombifyHooks>().subscribe("no", |_, _| Verdict::Veto(None));

    assert!(!attempt_transform(&mut world, ada, None));
    assert_eq!(world.get::<Mind>(ada).unwrap().session, Some(SessionId(9)));
    assert!(drain::<SpectatorRedirectMsg>(&mut world).is_empty());
    assert!(drain::<SessionChatMsg>(&mut world).is_empty());
}
