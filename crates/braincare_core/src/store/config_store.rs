//! Site configuration backed by the `site_config` slot.
//!
//! # Invariants
//! - A missing or unreadable slot yields `SiteConfig::default()`, which is
//!   not written back until the first edit.
//! - Every edit persists the full `SiteConfig`, theme included.

use crate::model::site_config::{SiteConfig, SiteField, ThemePatch};
use crate::snapshot::{decode_snapshot, encode_snapshot};
use crate::storage::{SlotStorage, SITE_CONFIG_SLOT};
use crate::store::StoreResult;
use log::{error, info, warn};

/// Payload schema version of the `site_config` slot.
pub const CONFIG_SCHEMA_VERSION: u32 = 3;

pub struct ConfigStore<S: SlotStorage> {
    storage: S,
    config: SiteConfig,
}

impl<S: SlotStorage> ConfigStore<S> {
    /// Hydrates the configuration, falling back to built-in defaults.
    pub fn load(storage: S) -> Self {
        let config = match storage.read_slot(SITE_CONFIG_SLOT) {
            Ok(Some(raw)) => {
                match decode_snapshot(&raw, CONFIG_SCHEMA_VERSION, |_: &SiteConfig| Ok(())) {
                    Ok(config) => {
                        info!("event=config_load module=store status=ok source=slot");
                        config
                    }
                    Err(err) => {
                        warn!(
                            "event=config_load module=store status=default reason={} error={}",
                            err.code(),
                            err
                        );
                        SiteConfig::default()
                    }
                }
            }
            Ok(None) => {
                info!("event=config_load module=store status=default reason=missing");
                SiteConfig::default()
            }
            Err(err) => {
                warn!(
                    "event=config_load module=store status=default reason=read_failed error={}",
                    err
                );
                SiteConfig::default()
            }
        };

        Self { storage, config }
    }

    pub fn get(&self) -> &SiteConfig {
        &self.config
    }

    /// Merges `patch` over the current theme and persists the full config.
    pub fn update_theme(&mut self, patch: ThemePatch) -> StoreResult<()> {
        self.config.theme.apply(patch);
        self.persist()
    }

    /// Overrides one top-level scalar field and persists the full config.
    pub fn update_field(&mut self, field: SiteField, value: impl Into<String>) -> StoreResult<()> {
        self.config.set_field(field, value);
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        let payload = encode_snapshot(CONFIG_SCHEMA_VERSION, &self.config)?;
        self.storage
            .write_slot(SITE_CONFIG_SLOT, &payload)
            .map_err(|err| {
                error!(
                    "event=config_persist module=store status=error error={}",
                    err
                );
                err.into()
            })
    }
}
