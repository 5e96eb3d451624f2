//! Integration tests for the portal stores
//!
//! Tests file-backed storage and slice snapshots

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use stuhealth::store::{load_slice, save_slice};
use stuhealth::types::{Article, Program, Resource, SupportRequest, SupportStatus};
use stuhealth::{FileStore, KeyValueStore, MemoryStore, Slice};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_store(name: &str) -> FileStore {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "stuhealth-test-{}-{}-{}",
        name,
        std::process::id(),
        n
    ));
    cleanup(&FileStore::new(&dir));
    FileStore::new(dir)
}

fn cleanup(store: &FileStore) {
    let _ = std::fs::remove_dir_all(store.dir());
}

mod file_store_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = temp_store("set-get");
        let value = r#"[{"title":"Rest","content":"Sleep well"}]"#;

        store.set("articles", value).expect("Failed to set");
        assert_eq!(store.get("articles"), Some(value.to_string()));

        cleanup(&store);
    }

    #[test]
    fn test_get_nonexistent() {
        let store = temp_store("missing");
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_remove() {
        let store = temp_store("remove");
        store.set("currentUser", "{}").expect("Failed to set");
        store.remove("currentUser").expect("Failed to remove");
        assert!(store.get("currentUser").is_none());

        // removing again is fine
        store.remove("currentUser").expect("Failed to remove twice");
        cleanup(&store);
    }

    #[test]
    fn test_special_characters_in_key() {
        let store = temp_store("special");
        store.set("user:prefs/theme", "dark").expect("Failed to set");
        assert_eq!(store.get("user:prefs/theme"), Some("dark".to_string()));
        assert!(store.dir().join("user_prefs_theme.json").exists());
        cleanup(&store);
    }
}

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_lists_round_trip() {
        let store = MemoryStore::new();

        let programs = vec![
            Program::new("Yoga for Students", "2025-10-15", "Stretch"),
            Program::new("Healthy Eating Talk", "2025-10-20", "Food"),
        ];
        let resources = vec![Resource {
            title: "Hotline".into(),
            category: "Mental Health".into(),
            description: "24/7".into(),
        }];
        let articles = vec![
            Article {
                title: "B".into(),
                content: "second".into(),
            },
            Article {
                title: "A".into(),
                content: "first".into(),
            },
        ];
        let requests = vec![SupportRequest {
            user: "a@x.com".into(),
            message: "help".into(),
            status: SupportStatus::Pending,
        }];

        save_slice(&store, Slice::Programs, &programs).unwrap();
        save_slice(&store, Slice::Resources, &resources).unwrap();
        save_slice(&store, Slice::Articles, &articles).unwrap();
        save_slice(&store, Slice::SupportRequests, &requests).unwrap();

        let loaded_programs: Vec<Program> = load_slice(&store, Slice::Programs, Vec::new);
        let loaded_resources: Vec<Resource> = load_slice(&store, Slice::Resources, Vec::new);
        let loaded_articles: Vec<Article> = load_slice(&store, Slice::Articles, Vec::new);
        let loaded_requests: Vec<SupportRequest> =
            load_slice(&store, Slice::SupportRequests, Vec::new);

        assert_eq!(loaded_programs, programs);
        assert_eq!(loaded_resources, resources);
        assert_eq!(loaded_articles, articles);
        assert_eq!(loaded_requests, requests);
    }

    #[test]
    fn test_reads_browser_portal_snapshot() {
        let store = MemoryStore::new();
        store
            .set(
                "currentUser",
                r#"{"email":"s@x.com","role":"student","joinedPrograms":[{"name":"Yoga for Students","start":"2025-10-15","description":"Yoga for relaxation and stress relief","completed":true}]}"#,
            )
            .unwrap();

        let user: Option<stuhealth::types::User> = load_slice(&store, Slice::CurrentUser, || None);
        let user = user.expect("user should load");
        assert_eq!(user.email, "s@x.com");
        assert_eq!(user.joined_programs.len(), 1);
        assert!(user.joined_programs[0].completed);
    }
}
