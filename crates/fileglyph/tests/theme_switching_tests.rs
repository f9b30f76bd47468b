//! Theme switching tests.

use std::sync::Arc;
use std::time::Duration;

use fileglyph::prelude::*;
use serde_json::json;

struct Fixture {
    service: IconThemeService,
    surface: Arc<InMemorySurface>,
    _dir: tempfile::TempDir,
}

fn fixture() -> Fixture {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fileglyph=debug")
        .with_test_writer()
        .try_init();

    let dir = tempfile::tempdir().expect("tempdir");
    let surface = Arc::new(InMemorySurface::new());
    let storage = Arc::new(SettingsFile::new(dir.path().join("data")));
    let service = IconThemeService::new(surface.clone(), Arc::new(ModeTable::builtin()), storage);
    Fixture {
        service,
        surface,
        _dir: dir,
    }
}

fn seti() -> ThemeDescriptor {
    ThemeDescriptor::new(
        "",
        "Seti",
        InlineSource::new(json!({
            "0": {
                "1": { "1": "\\E001", "2": "#cbcb41" },
                "6": { "0": "npm.svg" }
            },
            "1": { "json": 1, "js": 1 },
            "2": { "package.json": 6 }
        })),
    )
    .with_css_url("/seti/assets/seti.css")
    .with_root_url("/seti/icons")
}

fn material() -> ThemeDescriptor {
    ThemeDescriptor::new(
        "",
        "Material",
        InlineSource::new(json!({
            "iconDefinitions": { "20": { "iconPath": "json.svg" } },
            "fileExtensions": { "json": 20 }
        })),
    )
    .with_css_url("/material/assets/material.css")
    .with_encoding(ThemeEncoding::Verbose)
}

fn all_rules(surface: &InMemorySurface) -> Vec<String> {
    [
        ContainerKind::LanguageIds,
        ContainerKind::FileExtensions,
        ContainerKind::FileNames,
    ]
    .into_iter()
    .filter_map(|kind| surface.bucket(kind))
    .flat_map(|bucket| bucket.read().rules().to_vec())
    .collect()
}

#[tokio::test]
async fn test_set_active_loads_theme() {
    let f = fixture();
    f.service.register("seti", seti());

    let hook = f.service.set_active("seti").await;

    assert_eq!(f.service.state(), ThemeState::Loaded);
    assert_eq!(f.service.active_id(), "seti");
    assert_eq!(f.service.active_theme_name(), "Seti");
    assert_eq!(
        hook.class_names("package.json"),
        "file file_type_default file_type_json file_type_npm file_id_6"
    );
    assert_eq!(f.surface.rule_count(ContainerKind::FileNames), 1);
}

#[tokio::test]
async fn test_hook_is_idempotent_per_name() {
    let f = fixture();
    f.service.register("seti", seti());
    let hook = f.service.set_active("seti").await;

    for _ in 0..3 {
        hook.class_names("package.json");
        hook.class_names("data.json");
    }

    assert_eq!(f.surface.rule_count(ContainerKind::FileNames), 1);
    assert_eq!(f.surface.rule_count(ContainerKind::FileExtensions), 1);
}

#[tokio::test]
async fn test_switch_does_not_leak_rules() {
    let f = fixture();
    f.service.register("seti", seti());
    f.service.register("material", material());

    let hook = f.service.set_active("seti").await;
    hook.class_names("package.json");
    hook.class_names("index.js");
    assert_eq!(all_rules(&f.surface).len(), 2);

    let hook = f.service.set_active("material").await;
    assert!(all_rules(&f.surface).is_empty());
    assert_eq!(
        f.surface.link(ContainerKind::Folders).as_deref(),
        Some("/material/assets/material.css")
    );

    assert!(hook.class_names("package.json").ends_with("file_id_20"));
    let rules = all_rules(&f.surface);
    assert_eq!(rules.len(), 1);
    assert!(rules[0].contains("file_id_20"));
    assert!(!f.surface.stylesheet().contains("file_id_6"));
}

#[tokio::test]
async fn test_unknown_id_falls_back_to_default() {
    let f = fixture();
    f.service.register("seti", seti());
    f.service.set_active("seti").await;

    let hook = f.service.set_active("nonexistent-id").await;

    assert_eq!(f.service.active_id(), "default");
    assert_eq!(f.service.settings().icon_theme, "default");
    assert_eq!(f.service.state(), ThemeState::Unloaded);
    assert!(f.surface.attached().is_empty());
    assert!(!hook.is_themed());
    assert_eq!(
        hook.class_names("package.json"),
        "file file_type_default file_type_json file_type_npm"
    );
}

#[tokio::test]
async fn test_ui_handle_follows_switches() {
    let f = fixture();
    f.service.register("seti", seti());
    f.service.register("material", material());
    let held_by_ui = f.service.hook();

    f.service.set_active("seti").await;
    assert_eq!(held_by_ui.theme_id().as_deref(), Some("seti"));

    f.service.set_active("material").await;
    assert_eq!(held_by_ui.theme_id().as_deref(), Some("material"));

    f.service.set_active("default").await;
    assert_eq!(held_by_ui.theme_id(), None);
}

#[tokio::test]
async fn test_list_and_unregister() {
    let f = fixture();
    f.service.register("seti", seti());
    f.service.register("material", material());

    let ids: Vec<_> = f.service.list().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["default", "material", "seti"]);
    assert_eq!(f.service.theme_names(), ["Default", "Material", "Seti"]);

    for id in ["seti", "material"] {
        f.service.unregister(id);
        assert!(f.service.get_theme(id).is_none());
    }
    assert_eq!(f.service.list().len(), 1);
}

#[tokio::test]
async fn test_select_by_name() {
    let f = fixture();
    f.service.register("seti", seti());

    f.service.select_by_name("Seti").await;
    assert_eq!(f.service.active_id(), "seti");

    f.service.select_by_name("Nope").await;
    assert_eq!(f.service.active_id(), "default");
    assert_eq!(f.service.active_theme_name(), "Default");
}

#[tokio::test]
async fn test_concurrent_loads_serialize() {
    let f = fixture();
    let slow = ThemeDescriptor::new(
        "",
        "Slow",
        FnSource::new(|| async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<_, fileglyph::Error>(Some(json!({
                "iconDefinitions": { "9": { "fontCharacter": "\\E009" } },
                "fileExtensions": { "json": 9 }
            })))
        }),
    )
    .with_encoding(ThemeEncoding::Verbose);
    f.service.register("slow", slow);
    f.service.register("seti", seti());

    let (_, hook) = tokio::join!(f.service.set_active("slow"), f.service.set_active("seti"));

    // Exactly one theme is attached and it is the one that loaded last.
    assert_eq!(f.surface.attached(), ContainerKind::ALL);
    let loaded = f.service.manager().loaded_theme();
    assert_eq!(hook.theme_id(), loaded);

    hook.class_names("data.json");
    let rules = all_rules(&f.surface);
    assert_eq!(rules.len(), 1);
}

#[tokio::test]
async fn test_reset_supersedes_pending_load() {
    let f = fixture();
    let slow = ThemeDescriptor::new(
        "slow",
        "Slow",
        FnSource::new(|| async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok::<_, fileglyph::Error>(Some(json!({ "0": {} })))
        }),
    );

    let manager = f.service.manager();
    let reset = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        manager.reset();
    };
    let (hook, _) = tokio::join!(manager.load(Some(&slow)), reset);

    assert_eq!(f.service.state(), ThemeState::Unloaded);
    assert!(f.surface.attached().is_empty());
    assert!(!hook.is_themed());
}

#[tokio::test]
async fn test_theme_pack_round_trip() {
    let f = fixture();
    let base = tempfile::tempdir().expect("tempdir");
    tokio::fs::create_dir_all(base.path().join("iconThemes"))
        .await
        .unwrap();
    tokio::fs::write(
        base.path().join(fileglyph::bundle::PACK_MANIFEST),
        r#"[{ "id": "seti", "name": "Seti", "root": "seti" }]"#,
    )
    .await
    .unwrap();
    tokio::fs::write(
        base.path().join("iconThemes").join("seti.json"),
        r#"{ "0": { "3": { "0": "rust.svg" } }, "1": { "rs": 3 } }"#,
    )
    .await
    .unwrap();

    let pack = ThemePack::open(base.path()).await.unwrap();
    pack.register(f.service.registry());

    let hook = f.service.set_active("seti").await;
    assert!(hook.class_names("main.rs").ends_with("file_id_3"));

    let rule = f.surface.bucket(ContainerKind::FileExtensions).unwrap().read().rules()[0].clone();
    let image = base.path().join("seti").join("rust.svg");
    assert!(rule.contains(&*image.to_string_lossy()));

    pack.dispose(f.service.registry());
    assert!(f.service.get_theme("seti").is_none());
    // Disposing the pack does not unload the active theme.
    assert_eq!(f.service.state(), ThemeState::Loaded);
}

#[tokio::test]
async fn test_select_by_name_picks_first_registered_duplicate() {
    let f = fixture();
    f.service.register("seti-dark", seti());
    f.service.register("seti-light", seti());

    f.service.select_by_name("Seti").await;
    assert_eq!(f.service.active_id(), "seti-dark");
}
