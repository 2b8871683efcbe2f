//! Zombify coordinator - The one entry point that turns an entity into a zombie.
//!
//! Order is fixed: resolve config → role-ban policy → veto subscribers →
//! commit (marker + config attached) → popup → five handlers → tags →
//! deferred `PendingZombie` cleanup → completion messages. Nothing before the
//! commit point touches the target; nothing after it is rolled back.

use bevy::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::components::{MobState, Tags};
use crate::config::{DefaultZombieConfig, ZombieConfig};
use crate::constants::UNNAMED_ENTITY;
use crate::messages::{EntityZombified, PopupMsg, PopupSize, ZombifiedBroadcast};
use crate::resources::{PendingZombieCleanup, ZombifyAttempt, ZombifyDebug, ZombifyHooks};
use crate::systems::ai::apply_zombie_ai;
use crate::systems::appearance::apply_zombie_appearance;
use crate::systems::combat::apply_zombie_combat;
use crate::systems::mind::{apply_zombie_mind, banned_session, controlling_session, redirect_to_spectator};
use crate::systems::physiology::apply_zombie_physiology;
use crate::zombie::*;

// ============================================================================
// PIPELINE
// ============================================================================

/// A mutation handler. Owns one slice of entity state; never calls another handler.
pub type ZombieHandler = fn(&mut World, Entity, &mut ZombieMarker, &ZombieConfig);

/// Handlers in the order they run.
pub const ZOMBIE_PIPELINE: [(HandlerId, ZombieHandler); 5] = [
    (HandlerId::Appearance, apply_zombie_appearance),
    (HandlerId::Physiology, apply_zombie_physiology),
    (HandlerId::Combat, apply_zombie_combat),
    (HandlerId::Mind, apply_zombie_mind),
    (HandlerId::Ai, apply_zombie_ai),
];

/// Result of one call into the coordinator. Only `Transformed` touched the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    Transformed,
    /// Entity doesn't exist (despawned before the request was processed).
    Missing,
    AlreadyZombie,
    Immune,
    /// No `MobState`: not something that can live, die or turn.
    NotMob,
    Vetoed { reason: Option<String> },
}

impl TransformOutcome {
    pub fn is_transformed(&self) -> bool {
        matches!(self, Self::Transformed)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Transform `target`, reading config from `config_source` if given.
/// Returns false if nothing happened. Calling it twice is a no-op the second time.
pub fn attempt_transform(world: &mut World, target: Entity, config_source: Option<Entity>) -> bool {
    try_zombify(world, target, config_source).is_transformed()
}

/// Same as `attempt_transform`, but says why nothing happened.
pub fn try_zombify(world: &mut World, target: Entity, config_source: Option<Entity>) -> TransformOutcome {
    note(world, |d| d.attempts += 1);

    if let Some(rejected) = precheck(world, target) {
        debug!("zombify: {target:?} rejected ({rejected:?})");
        note(world, |d| d.rejected += 1);
        return rejected;
    }

    let mut state = TransformationState::new(None, controlling_session(world, target));
    state.advance(TransformPhase::PreTransformation);

    let (config, config_source) = resolve_config(world, target, config_source);
    state.config_source = config_source;

    // Evaluated before the veto, applied after it, so a vetoed run leaves the
    // session where it was.
    let banned = banned_session(world, target, &config.role_id);

    let attempt = ZombifyAttempt { target, config_source, config: &config };
    let vetoes = world
        .get_resource::<ZombifyHooks>()
        .map(|hooks| hooks.collect_vetoes(world, &attempt))
        .unwrap_or_default();
    if !vetoes.is_empty() {
        for (subscriber, reason) in &vetoes {
            debug!(
                "zombify: {target:?} vetoed by {subscriber}: {}",
                reason.as_deref().unwrap_or("no reason given")
            );
        }
        let reason = vetoes.into_iter().find_map(|(_, reason)| reason);
        state.cancel(reason.clone());
        note(world, |d| d.vetoed += 1);
        return TransformOutcome::Vetoed { reason };
    }

    if let Some(session) = banned {
        redirect_to_spectator(world, target, session);
        note(world, |d| d.redirected_sessions += 1);
    }

    // Commit point: from here on the run is not cancellable and not undone.
    state.commit();
    match world.get_entity_mut(target) {
        Ok(mut entity) => {
            entity.insert((ZombieMarker::default(), config.clone(), state.clone()));
        }
        Err(_) => return TransformOutcome::Missing,
    }

    announce(world, target);

    run_handlers(world, target, &mut state, &config);

    state.advance(TransformPhase::PostTransformation);
    sync_state(world, target, &state);

    add_tags(world, target, &config.tags);
    {
        // Other systems may still look at PendingZombie this step
        let mut cleanup = world.get_resource_or_insert_with(PendingZombieCleanup::default);
        cleanup.0.push(target);
    }

    world.write_message(EntityZombified { entity: target, config_source });
    world.write_message(ZombifiedBroadcast { entity: target });

    state.advance(TransformPhase::Completed);
    if let Ok(mut entity) = world.get_entity_mut(target) {
        entity.remove::<TransformationState>();
    }

    note(world, |d| d.transformed += 1);
    info!(
        "zombify: {target:?} transformed (controlled={}, config={config_source:?})",
        state.had_owning_session
    );
    TransformOutcome::Transformed
}

// ============================================================================
// STEPS
// ============================================================================

/// Run every handler `state` hasn't recorded yet, in pipeline order.
/// The target must already carry its `ZombieMarker`; each handler gets a copy
/// and the copy is written back after it returns.
pub fn run_handlers(
    world: &mut World,
    target: Entity,
    state: &mut TransformationState,
    config: &ZombieConfig,
) {
    for (id, handler) in ZOMBIE_PIPELINE {
        if state.has_run(id) {
            debug!("zombify: {target:?} {} handler already ran, skipping", id.name());
            continue;
        }
        let Some(mut zombie) = world.get::<ZombieMarker>(target).cloned() else {
            warn!("zombify: {target:?} lost its ZombieMarker before the {} handler", id.name());
            break;
        };
        handler(world, target, &mut zombie, config);
        if let Some(mut marker) = world.get_mut::<ZombieMarker>(target) {
            *marker = zombie;
        }
        state.mark_run(id);
        sync_state(world, target, state);
    }
}

/// Fast-fail guard. `None` = the target may be transformed.
fn precheck(world: &World, target: Entity) -> Option<TransformOutcome> {
    let Ok(entity) = world.get_entity(target) else {
        return Some(TransformOutcome::Missing);
    };
    if entity.contains::<ZombieMarker>() {
        Some(TransformOutcome::AlreadyZombie)
    } else if entity.contains::<ZombieImmune>() {
        Some(TransformOutcome::Immune)
    } else if !entity.contains::<MobState>() {
        Some(TransformOutcome::NotMob)
    } else {
        None
    }
}

/// Caller's config source, else the target's own override, else the process default.
/// Returns the config and the entity it came from (`None` = default).
pub fn resolve_config(
    world: &World,
    target: Entity,
    config_source: Option<Entity>,
) -> (ZombieConfig, Option<Entity>) {
    if let Some(source) = config_source {
        if let Some(config) = world.get::<ZombieConfig>(source) {
            return (config.clone(), Some(source));
        }
        warn!("zombify: config source {source:?} has no ZombieConfig, falling back");
    }
    if let Some(config) = world.get::<ZombieConfig>(target) {
        return (config.clone(), Some(target));
    }
    let config = world
        .get_resource::<DefaultZombieConfig>()
        .map(|default| default.0.clone())
        .unwrap_or_default();
    (config, None)
}

/// Large popup for everyone nearby. Presentation only.
fn announce(world: &mut World, target: Entity) {
    let name = world
        .get::<Name>(target)
        .map_or_else(|| UNNAMED_ENTITY.to_string(), |name| name.as_str().to_string());
    world.write_message(PopupMsg {
        entity: target,
        text: format!("{name} turns into a zombie!"),
        size: PopupSize::Large,
    });
}

fn add_tags(world: &mut World, target: Entity, tags: &BTreeSet<String>) {
    if tags.is_empty() {
        return;
    }
    let Ok(mut entity) = world.get_entity_mut(target) else {
        return;
    };
    if !entity.contains::<Tags>() {
        entity.insert(Tags::default());
    }
    if let Some(mut existing) = entity.get_mut::<Tags>() {
        existing.0.extend(tags.iter().cloned());
    }
}

fn sync_state(world: &mut World, target: Entity, state: &TransformationState) {
    if let Some(mut attached) = world.get_mut::<TransformationState>(target) {
        *attached = state.clone();
    }
}

fn note(world: &mut World, update: impl FnOnce(&mut ZombifyDebug)) {
    if let Some(mut debug) = world.get_resource_mut::<ZombifyDebug>() {
        update(&mut *debug);
    }
}
