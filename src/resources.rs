//! ECS Resources - Shared state accessible by the zombify systems

use bevy::prelude::*;
use hashbrown::{HashMap, HashSet};

use crate::components::SessionId;
use crate::config::ZombieConfig;
use crate::messages::TransformTrigger;

// ============================================================================
// ROLE BANS
// ============================================================================

/// Roles each session is banned from. Read-only for the pipeline.
#[derive(Resource, Default, Debug)]
pub struct RoleBans {
    banned: HashMap<SessionId, HashSet<String>>,
}

impl RoleBans {
    pub fn ban(&mut self, session: SessionId, role: impl Into<String>) {
        self.banned.entry(session).or_default().insert(role.into());
    }

    pub fn unban(&mut self, session: SessionId, role: &str) {
        if let Some(roles) = self.banned.get_mut(&session) {
            roles.remove(role);
        }
    }

    pub fn is_banned(&self, session: SessionId, role: &str) -> bool {
        self.banned.get(&session).is_some_and(|roles| roles.contains(role))
    }
}

// ============================================================================
// PRE-TRANSFORMATION VETO
// ============================================================================

/// What a veto subscriber sees. Everything is borrowed; subscribers can't mutate.
#[derive(Debug)]
pub struct ZombifyAttempt<'a> {
    pub target: Entity,
    pub config_source: Option<Entity>,
    pub config: &'a ZombieConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Veto(Option<String>),
}

type VetoHook = Box<dyn Fn(&World, &ZombifyAttempt<'_>) -> Verdict + Send + Sync>;

/// Subscribers consulted before the commit point. Any veto cancels the run.
#[derive(Resource, Default)]
pub struct ZombifyHooks {
    hooks: Vec<(String, VetoHook)>,
}

impl ZombifyHooks {
    pub fn subscribe(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&World, &ZombifyAttempt<'_>) -> Verdict + Send + Sync + 'static,
    ) {
        self.hooks.push((name.into(), Box::new(hook)));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Ask every subscriber. Returns `(subscriber, reason)` for each veto, in
    /// subscription order.
    pub fn collect_vetoes(&self, world: &World, attempt: &ZombifyAttempt<'_>) -> Vec<(String, Option<String>)> {
        self.hooks
            .iter()
            .filter_map(|(name, hook)| match hook(world, attempt) {
                Verdict::Allow => None,
                Verdict::Veto(reason) => Some((name.clone(), reason)),
            })
            .collect()
    }
}

// ============================================================================
// QUEUES
// ============================================================================

/// One pending call into the coordinator.
#[derive(Clone, Debug)]
pub struct QueuedZombify {
    pub target: Entity,
    pub config_source: Option<Entity>,
    pub trigger: TransformTrigger,
}

/// Requests collected by the trigger systems, drained by `process_zombify_queue`.
#[derive(Resource, Default, Debug)]
pub struct ZombifyQueue(pub Vec<QueuedZombify>);

impl ZombifyQueue {
    pub fn push(&mut self, target: Entity, config_source: Option<Entity>, trigger: TransformTrigger) {
        self.0.push(QueuedZombify { target, config_source, trigger });
    }
}

/// Entities whose `PendingZombie` marker is removed at the end of the step.
#[derive(Resource, Default, Debug)]
pub struct PendingZombieCleanup(pub Vec<Entity>);

// ============================================================================
// DEBUG INFO
// ============================================================================

/// Running counters for the debug overlay / logs.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct ZombifyDebug {
    pub attempts: usize,
    pub transformed: usize,
    pub rejected: usize,
    pub vetoed: usize,
    pub redirected_sessions: usize,
    pub clones_restored: usize,
}
