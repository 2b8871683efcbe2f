//! Zombie transformation config - Per-entity override or process-wide default,
//! loadable from a JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

use crate::components::Rgba;
use crate::constants::*;

// ============================================================================
// CONFIG
// ============================================================================

/// Door-prying settings granted to humanoid zombies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorPrying {
    pub enabled: bool,
    pub speed_multiplier: f32,
    pub can_open_powered: bool,
    pub always_succeeds: bool,
}

impl Default for DoorPrying {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_multiplier: ZOMBIE_PRY_SPEED,
            can_open_powered: true,
            always_succeeds: true,
        }
    }
}

/// Every tunable of one transformation. Read-only for the duration of a run.
///
/// Attach to the target to override the default for that entity, or to any
/// other entity and pass it as the config source. Missing JSON fields fall
/// back to the defaults below.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieConfig {
    // Identity
    pub faction: String,
    pub role_id: String,
    pub root_task: String,
    pub accent: String,

    // Appearance
    pub skin_color: Rgba,
    pub eye_color: Rgba,
    pub external_layer_id: String,

    // Equipment + tagging
    pub unequip_slots: Vec<String>,
    pub tags: BTreeSet<String>,

    // Physiology
    pub blood_reagent: String,
    pub damage_modifier_set: String,
    pub disable_blood_loss: bool,
    pub heal_on_transformation: bool,
    pub remove_hands: bool,
    pub remove_puller: bool,

    // Combat
    pub melee_range: f32,
    pub swing_angle: f32,
    pub disable_combat_disarm: bool,
    pub force_combat_mode: bool,
    pub door_prying: DoorPrying,

    // Sentience
    pub make_sentient: bool,
    pub clear_existing_factions: bool,

    // Presentation
    pub greeting: String,
    pub transformation_sound: String,
    pub role_name: String,
    pub role_description: String,
    pub role_rules: String,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            faction: ZOMBIE_FACTION.into(),
            role_id: ZOMBIE_ROLE.into(),
            root_task: ZOMBIE_ROOT_TASK.into(),
            accent: ZOMBIE_ACCENT.into(),
            skin_color: ZOMBIE_SKIN_COLOR,
            eye_color: ZOMBIE_EYE_COLOR,
            external_layer_id: ZOMBIE_EXTERNAL_LAYER.into(),
            unequip_slots: ZOMBIE_UNEQUIP_SLOTS.iter().map(|s| s.to_string()).collect(),
            tags: BTreeSet::from(["Zombie".to_string()]),
            blood_reagent: ZOMBIE_BLOOD.into(),
            damage_modifier_set: ZOMBIE_DAMAGE_MODIFIER_SET.into(),
            disable_blood_loss: true,
            heal_on_transformation: true,
            remove_hands: true,
            remove_puller: true,
            melee_range: ZOMBIE_MELEE_RANGE,
            swing_angle: ZOMBIE_SWING_ANGLE,
            disable_combat_disarm: true,
            force_combat_mode: true,
            door_prying: DoorPrying::default(),
            make_sentient: true,
            clear_existing_factions: true,
            greeting: ZOMBIE_GREETING.into(),
            transformation_sound: ZOMBIE_START_SOUND.into(),
            role_name: ZOMBIE_ROLE_NAME.into(),
            role_description: ZOMBIE_ROLE_DESCRIPTION.into(),
            role_rules: ZOMBIE_ROLE_RULES.into(),
        }
    }
}

/// Process-wide config used when neither the caller nor the target supplies one.
#[derive(Resource, Clone, Debug, Default)]
pub struct DefaultZombieConfig(pub ZombieConfig);

// ============================================================================
// LOADING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read zombie config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid zombie config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ZombieConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn load_zombie_config(path: &Path) -> Result<ZombieConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    ZombieConfig::from_json(&json)
}

/// Load `path`, or fall back to the built-in defaults with a warning.
pub fn load_or_default(path: &Path) -> ZombieConfig {
    match load_zombie_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; using default zombie config");
            ZombieConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ZombieConfig::from_json(r#"{ "faction": "Undead", "remove_hands": false }"#)
            .expect("valid json");
        assert_eq!(config.faction, "Undead");
        assert!(!config.remove_hands);
        assert_eq!(config.role_id, ZOMBIE_ROLE);
        assert_eq!(config.door_prying, DoorPrying::default());
    }

    #[test]
    fn nested_door_prying_overrides() {
        let config = ZombieConfig::from_json(r#"{ "door_prying": { "enabled": false } }"#)
            .expect("valid json");
        assert!(!config.door_prying.enabled);
        assert_eq!(config.door_prying.speed_multiplier, ZOMBIE_PRY_SPEED);
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let mut config = ZombieConfig::default();
        config.tags.insert("NoSuicide".into());
        config.unequip_slots.push("mask".into());
        let json = config.to_json().expect("serializes");
        assert_eq!(ZombieConfig::from_json(&json).expect("parses"), config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(ZombieConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = Path::new("/definitely/not/here/zombie.json");
        assert!(matches!(load_zombie_config(path), Err(ConfigError::Read { .. })));
        assert_eq!(load_or_default(path), ZombieConfig::default());
    }
}
