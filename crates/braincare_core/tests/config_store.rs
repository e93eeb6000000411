use braincare_core::snapshot::encode_snapshot;
use braincare_core::storage::SITE_CONFIG_SLOT;
use braincare_core::store::CONFIG_SCHEMA_VERSION;
use braincare_core::{
    ConfigStore, HeroAlignment, MemorySlotStorage, SiteConfig, SiteField, SlotStorage, ThemePatch,
};
use std::num::NonZeroU32;

fn persisted(slots: &impl SlotStorage) -> SiteConfig {
    let raw = slots.read_slot(SITE_CONFIG_SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schema_version"], CONFIG_SCHEMA_VERSION);
    serde_json::from_value(value["data"].clone()).unwrap()
}

#[test]
fn missing_config_uses_defaults_without_persisting() {
    let slots = MemorySlotStorage::new();
    let store = ConfigStore::load(&slots);

    assert_eq!(store.get(), &SiteConfig::default());
    assert!(slots.read_slot(SITE_CONFIG_SLOT).unwrap().is_none());
}

#[test]
fn malformed_config_uses_defaults_without_persisting() {
    let slots = MemorySlotStorage::new();
    slots.write_slot(SITE_CONFIG_SLOT, "][").unwrap();

    let store = ConfigStore::load(&slots);
    assert_eq!(store.get(), &SiteConfig::default());
    assert_eq!(slots.read_slot(SITE_CONFIG_SLOT).unwrap().as_deref(), Some("]["));
}

#[test]
fn update_theme_merges_fields_and_persists_full_config() {
    let slots = MemorySlotStorage::new();
    let mut store = ConfigStore::load(&slots);

    store
        .update_theme(ThemePatch {
            primary_color: Some("#ff00ff".to_string()),
            hero_alignment: Some(HeroAlignment::Center),
            ..ThemePatch::default()
        })
        .unwrap();
    store
        .update_theme(ThemePatch {
            grid_columns: NonZeroU32::new(3),
            ..ThemePatch::default()
        })
        .unwrap();

    let theme = &store.get().theme;
    assert_eq!(theme.primary_color, "#ff00ff");
    assert_eq!(theme.hero_alignment, HeroAlignment::Center);
    assert_eq!(theme.grid_columns.get(), 3);
    assert_eq!(theme.surface_color, SiteConfig::default().theme.surface_color);

    let saved = persisted(&slots);
    assert_eq!(&saved, store.get());
    assert_eq!(saved.hero_title, SiteConfig::default().hero_title);
}

#[test]
fn update_field_changes_one_scalar_and_keeps_theme() {
    let slots = MemorySlotStorage::new();
    let mut store = ConfigStore::load(&slots);
    let theme_before = store.get().theme.clone();

    store
        .update_field(SiteField::AuthorName, "Grace Hopper")
        .unwrap();

    assert_eq!(store.get().author_name, "Grace Hopper");
    assert_eq!(store.get().field(SiteField::AuthorName), "Grace Hopper");
    assert_eq!(store.get().theme, theme_before);
    assert_eq!(persisted(&slots).author_name, "Grace Hopper");
}

#[test]
fn persisted_config_is_reloaded() {
    let slots = MemorySlotStorage::new();
    {
        let mut store = ConfigStore::load(&slots);
        store.update_field(SiteField::HeroTitle, "Notes on").unwrap();
    }

    let reloaded = ConfigStore::load(&slots);
    assert_eq!(reloaded.get().hero_title, "Notes on");
}

#[test]
fn config_from_other_schema_version_is_ignored() {
    let slots = MemorySlotStorage::new();
    let mut old = SiteConfig::default();
    old.hero_title = "from v2".to_string();
    slots
        .write_slot(SITE_CONFIG_SLOT, &encode_snapshot(2, &old).unwrap())
        .unwrap();

    let store = ConfigStore::load(&slots);
    assert_eq!(store.get(), &SiteConfig::default());
}
