use braincare_core::{
    ArticleDraft, CatalogService, Category, CategoryFilter, ConfigStore, Confirmation,
    MemorySlotStorage, RecordStore, ServiceError, SessionGuard, SharedSecretAuthenticator,
    SiteField, ThemePatch,
};

type Service<'a> =
    CatalogService<&'a MemorySlotStorage, &'a MemorySlotStorage, SharedSecretAuthenticator>;

fn service<'a>(durable: &'a MemorySlotStorage, session: &'a MemorySlotStorage) -> Service<'a> {
    CatalogService::new(
        RecordStore::load(durable),
        ConfigStore::load(durable),
        SessionGuard::new(session, SharedSecretAuthenticator::default()),
    )
}

fn draft(title: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: "Some prose.".to_string(),
        category: Category::Agent,
        tags: "agents, planning".to_string(),
        ..ArticleDraft::default()
    }
}

#[test]
fn writes_require_privileged_session() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);
    let before = catalog.records().list().to_vec();

    assert!(matches!(
        catalog.save_draft(draft("Nope"), None),
        Err(ServiceError::NotPrivileged)
    ));
    assert!(matches!(
        catalog.delete_article("1", Confirmation::Confirmed),
        Err(ServiceError::NotPrivileged)
    ));
    assert!(matches!(
        catalog.edit_site_field(SiteField::HeroTitle, "x"),
        Err(ServiceError::NotPrivileged)
    ));
    assert!(matches!(
        catalog.update_theme(ThemePatch::default()),
        Err(ServiceError::NotPrivileged)
    ));
    assert_eq!(catalog.records().list(), before.as_slice());
}

#[test]
fn privileged_create_prepends_and_edit_preserves_position() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);
    catalog.login(Some("admin123")).unwrap();

    let created = catalog.save_draft(draft("Agent Memory"), None).unwrap();
    assert_eq!(catalog.records().list()[0].id, created);
    assert_eq!(catalog.article(&created).unwrap().author, "Admin");

    let mut edit = ArticleDraft::from_article(catalog.article("2").unwrap());
    edit.title = "Neural-Symbolic, revisited".to_string();
    catalog.save_draft(edit, Some("2")).unwrap();
    let ids: Vec<&str> = catalog.records().list().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec![created.as_str(), "1", "2", "3"]);
    assert_eq!(catalog.article("2").unwrap().title, "Neural-Symbolic, revisited");
}

#[test]
fn consecutive_creates_get_distinct_ids() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);
    catalog.login(Some("admin123")).unwrap();

    let first = catalog.save_draft(draft("One"), None).unwrap();
    let second = catalog.save_draft(draft("Two"), None).unwrap();
    assert_ne!(first, second);
    assert_eq!(catalog.records().len(), 5);
}

#[test]
fn incomplete_draft_and_unknown_edit_target_are_rejected() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);
    catalog.login(Some("admin123")).unwrap();

    let mut empty_body = draft("Title only");
    empty_body.content.clear();
    assert!(matches!(
        catalog.save_draft(empty_body, None),
        Err(ServiceError::IncompleteDraft)
    ));
    assert!(matches!(
        catalog.save_draft(draft("Ghost"), Some("missing")),
        Err(ServiceError::ArticleNotFound(id)) if id == "missing"
    ));
    assert_eq!(catalog.records().len(), 3);
}

#[test]
fn declined_delete_is_a_no_op() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);
    catalog.login(Some("admin123")).unwrap();

    assert!(!catalog.delete_article("1", Confirmation::Declined).unwrap());
    assert!(catalog.article("1").is_some());

    assert!(catalog.delete_article("1", Confirmation::Confirmed).unwrap());
    assert!(catalog.article("1").is_none());
}

#[test]
fn visible_articles_follow_category_query_and_mutations() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    let mut catalog = service(&durable, &session);

    assert_eq!(catalog.visible_articles().len(), 3);

    catalog.set_category(CategoryFilter::Only(Category::Agent));
    let ids: Vec<String> = catalog.visible_articles().iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, vec!["2"]);

    catalog.login(Some("admin123")).unwrap();
    let created = catalog.save_draft(draft("Planner Agents"), None).unwrap();
    let ids: Vec<String> = catalog.visible_articles().iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, vec![created, "2".to_string()]);

    catalog.set_query("PLANNING");
    assert_eq!(catalog.visible_articles().len(), 1);
    catalog.set_category(CategoryFilter::All);
    catalog.set_query("");
    assert_eq!(catalog.visible_articles().len(), 4);
}

#[test]
fn site_edits_persist_across_reload() {
    let durable = MemorySlotStorage::new();
    let session = MemorySlotStorage::new();
    {
        let mut catalog = service(&durable, &session);
        catalog.login(Some("admin123")).unwrap();
        catalog
            .edit_site_field(SiteField::HeroHighlight, "Quiet Future.")
            .unwrap();
        catalog
            .update_theme(ThemePatch {
                glass_effect: Some(false),
                ..ThemePatch::default()
            })
            .unwrap();
    }

    let fresh_session = MemorySlotStorage::new();
    let catalog = service(&durable, &fresh_session);
    assert!(!catalog.is_privileged(), "session flag does not survive");
    assert_eq!(catalog.site_config().hero_highlight, "Quiet Future.");
    assert!(!catalog.site_config().theme.glass_effect);
}
