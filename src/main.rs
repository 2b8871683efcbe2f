//! Zombify demo - Runs a few headless steps of the pipeline and logs what happened.
//!
//! `RUST_LOG` controls verbosity (default `zombify=info`); `ZOMBIFY_CONFIG`
//! points at a JSON file overriding the default zombie config.

use bevy::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zombify::components::*;
use zombify::config::{load_or_default, ZombieConfig};
use zombify::messages::*;
use zombify::resources::ZombifyDebug;
use zombify::zombie::ZombifyOnDeath;
use zombify::{ZombifyPlugin, ZombifySet};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zombify=info")))
        .init();

    let config = std::env::var_os("ZOMBIFY_CONFIG")
        .map(PathBuf::from)
        .map_or_else(ZombieConfig::default, |path| load_or_default(&path));

    let mut app = App::new();
    app.add_plugins(ZombifyPlugin::with_config(config))
        .add_systems(Update, (log_popups, log_zombified).after(ZombifySet::Cleanup));

    // Step 1: a player and a guard who rises when killed
    let world = app.world_mut();
    let player = world
        .spawn((
            Name::new("Ada"),
            MobState::Alive,
            HumanoidAppearance::new("Human", Rgba::rgb(0.9, 0.75, 0.65), Rgba::rgb(0.2, 0.4, 0.8)),
            Mind::controlled_by(SessionId(1)),
            Inventory::default().with_item("gloves", "ClothingHandsGlovesColorYellow"),
            Bloodstream::default(),
            MovementSpeed::default(),
            Hands::default(),
        ))
        .id();
    let guard = world
        .spawn((
            Name::new("Guard"),
            MobState::Alive,
            ZombifyOnDeath,
            HumanoidAppearance::new("Human", Rgba::rgb(0.6, 0.45, 0.35), Rgba::rgb(0.3, 0.2, 0.1)),
            Mind::default(),
            MovementSpeed::default(),
        ))
        .id();

    world.write_message(MobStateChangedMsg { entity: guard, old: MobState::Alive, new: MobState::Dead });
    app.update();

    // Step 2: the risen guard bites the downed player
    if let Some(mut state) = app.world_mut().get_mut::<MobState>(player) {
        *state = MobState::Critical;
    }
    app.world_mut().write_message(ZombieBiteMsg { biter: guard, target: player });
    app.update();

    // Step 3: repeat request is a no-op
    app.world_mut().write_message(ZombifyRequestMsg {
        target: player,
        config_source: None,
        trigger: TransformTrigger::Admin,
    });
    app.update();

    let stats = app.world().resource::<ZombifyDebug>();
    info!(
        "attempts={} transformed={} rejected={} vetoed={}",
        stats.attempts, stats.transformed, stats.rejected, stats.vetoed
    );
}

fn log_popups(mut popups: MessageReader<PopupMsg>) {
    for popup in popups.read() {
        info!("[popup] {}", popup.text);
    }
}

fn log_zombified(mut events: MessageReader<EntityZombified>) {
    for event in events.read() {
        info!("[zombified] {:?} (config from {:?})", event.entity, event.config_source);
    }
}
