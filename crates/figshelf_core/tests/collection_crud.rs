use figshelf_core::{
    CollectionService, Figure, FigureGenre, FigureKind, FigureRepository, FileFigureRepository,
    Outcome, RepoError, ValueTier,
};
use std::fs;
use tempfile::TempDir;

fn open_service() -> (TempDir, CollectionService<FileFigureRepository>) {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileFigureRepository::open(dir.path().join("data")).unwrap();
    (dir, CollectionService::new(repo))
}

fn figure(id: &str, market_value: f64) -> Figure {
    Figure::new(
        id,
        "Batman",
        "The Dark Knight",
        FigureKind::Pop,
        FigureGenre::MoviesAndTv,
        "DC Comics",
        2,
        false,
        "Bobble head",
        market_value,
    )
    .unwrap()
}

fn found_tier(outcome: Outcome) -> ValueTier {
    match outcome {
        Outcome::Found(view) => view.tier,
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn open_creates_missing_ancestors_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("a").join("b").join("data");

    FileFigureRepository::open(&root).unwrap();
    FileFigureRepository::open(&root).unwrap();
    assert!(root.is_dir());
}

#[test]
fn create_then_get_returns_created_record() {
    let (_dir, service) = open_service();
    let created = figure("7", 250.0);

    let outcome = service.create("alice", &created).unwrap();
    assert_eq!(
        outcome,
        Outcome::Created {
            user: "alice".to_string(),
            id: "7".to_string()
        }
    );

    let stored = service.repository().get("alice", "7").unwrap().unwrap();
    assert_eq!(stored, created);

    let path = service.repository().root().join("alice").join("7.json");
    let body = fs::read_to_string(path).unwrap();
    assert!(body.contains("\n  \"name\": \"Batman\""));
}

#[test]
fn get_renders_tier_from_strict_thresholds() {
    let (_dir, service) = open_service();
    for (id, value) in [("top", 250.0), ("mid", 60.0), ("low", 10.0), ("edge", 200.0)] {
        service.create("alice", &figure(id, value)).unwrap();
    }

    assert_eq!(found_tier(service.get("alice", "top").unwrap()), ValueTier::Top);
    assert_eq!(found_tier(service.get("alice", "mid").unwrap()), ValueTier::MidLow);
    assert_eq!(found_tier(service.get("alice", "low").unwrap()), ValueTier::Bottom);
    assert_eq!(found_tier(service.get("alice", "edge").unwrap()), ValueTier::MidHigh);

    let message = service.get("alice", "top").unwrap().message();
    assert!(message.ends_with("Valor de mercado: 250€ [alto]"));
}

#[test]
fn second_create_reports_collision_and_keeps_first_record() {
    let (_dir, service) = open_service();
    let first = figure("a", 10.0);
    let mut second = figure("a", 99.0);
    second.name = "Robin".to_string();

    service.create("bob", &first).unwrap();
    let outcome = service.create("bob", &second).unwrap();

    assert!(outcome.is_failure());
    assert!(outcome.message().contains("ya existe"));
    let stored = service.repository().get("bob", "a").unwrap().unwrap();
    assert_eq!(stored, first);
    match service.list("bob").unwrap() {
        Outcome::Listing { figures, .. } => assert_eq!(figures.len(), 1),
        other => panic!("expected Listing, got {other:?}"),
    }
}

#[test]
fn repository_create_collision_is_typed() {
    let (_dir, service) = open_service();
    service.create("bob", &figure("a", 1.0)).unwrap();

    let err = service.repository().create("bob", &figure("a", 1.0)).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists { ref id, .. } if id == "a"));
}

#[test]
fn update_missing_reports_not_found_and_creates_nothing() {
    let (_dir, service) = open_service();

    let outcome = service.update("carol", &figure("ghost", 5.0)).unwrap();
    assert_eq!(
        outcome,
        Outcome::NotFound {
            user: "carol".to_string(),
            id: "ghost".to_string()
        }
    );
    let path = service.repository().root().join("carol").join("ghost.json");
    assert!(!path.exists());
}

#[test]
fn update_replaces_whole_record() {
    let (_dir, service) = open_service();
    service.create("alice", &figure("1", 150.0)).unwrap();

    let replacement = Figure::new(
        "1",
        "Classic Sonic Updated",
        "",
        FigureKind::VinylSoda,
        FigureGenre::VideoGames,
        "",
        0,
        true,
        "",
        0.0,
    )
    .unwrap();
    let outcome = service.update("alice", &replacement).unwrap();
    assert!(matches!(outcome, Outcome::Updated { .. }));

    let stored = service.repository().get("alice", "1").unwrap().unwrap();
    assert_eq!(stored, replacement);
}

#[test]
fn remove_then_get_reports_not_found_and_keeps_user_dir() {
    let (_dir, service) = open_service();
    service.create("dave", &figure("1", 1.0)).unwrap();

    assert!(matches!(
        service.remove("dave", "1").unwrap(),
        Outcome::Removed { .. }
    ));
    assert!(matches!(
        service.get("dave", "1").unwrap(),
        Outcome::NotFound { .. }
    ));
    assert!(matches!(
        service.remove("dave", "1").unwrap(),
        Outcome::NotFound { .. }
    ));

    assert!(service.repository().collection_exists("dave").unwrap());
    assert_eq!(
        service.list("dave").unwrap(),
        Outcome::EmptyCollection {
            user: "dave".to_string()
        }
    );
}

#[test]
fn list_distinguishes_missing_empty_and_populated() {
    let (_dir, service) = open_service();

    assert_eq!(
        service.list("nobody").unwrap(),
        Outcome::NoSuchCollection {
            user: "nobody".to_string()
        }
    );

    fs::create_dir_all(service.repository().root().join("empty")).unwrap();
    assert!(matches!(
        service.list("empty").unwrap(),
        Outcome::EmptyCollection { .. }
    ));

    for id in ["3", "1", "2"] {
        service.create("erin", &figure(id, 20.0)).unwrap();
    }
    match service.list("erin").unwrap() {
        Outcome::Listing { figures, .. } => {
            let ids: Vec<&str> = figures.iter().map(|view| view.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
        other => panic!("expected Listing, got {other:?}"),
    }

    let message = service.list("erin").unwrap().message();
    assert!(message.starts_with("Colección de figuras de erin:"));
    assert_eq!(message.matches("ID: ").count(), 3);
}

#[test]
fn malformed_record_propagates_parse_error() {
    let (_dir, service) = open_service();
    let user_dir = service.repository().root().join("frank");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("bad.json"), "{ not json").unwrap();

    let err = service.get("frank", "bad").unwrap_err();
    assert!(matches!(err, RepoError::Parse { .. }));
    assert!(matches!(
        service.list("frank").unwrap_err(),
        RepoError::Parse { .. }
    ));
}

#[test]
fn path_like_keys_are_rejected() {
    let (_dir, service) = open_service();

    let err = service.create("../escape", &figure("1", 1.0)).unwrap_err();
    assert!(matches!(err, RepoError::InvalidKey { kind: "user", .. }));
    let err = service.get("alice", "../../etc/passwd").unwrap_err();
    assert!(matches!(err, RepoError::InvalidKey { kind: "id", .. }));
}

#[test]
fn rejected_create_leaves_no_user_directory() {
    let (_dir, service) = open_service();

    let err = service.create("zoe", &figure("a/b", 1.0)).unwrap_err();
    assert!(matches!(err, RepoError::InvalidKey { kind: "id", .. }));
    assert!(!service.repository().root().join("zoe").exists());
    assert_eq!(
        service.list("zoe").unwrap(),
        Outcome::NoSuchCollection {
            user: "zoe".to_string()
        }
    );
}
