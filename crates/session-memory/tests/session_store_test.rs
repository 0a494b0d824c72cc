//! Integration tests for [`session_memory::SessionStore`]: window bound, key isolation, and
//! concurrent appends on one key.

use std::sync::Arc;

use session_memory::{ConversationKey, Role, SessionStore, Turn};

/// **Test: any sequence of appends leaves at most W turns, equal to the last W appended, in order.**
#[test]
fn test_window_bound_holds_for_every_prefix() {
    let store = SessionStore::new(5);
    let key = ConversationKey::new(-100, Some(308));
    let mut appended = Vec::new();

    for i in 0..23 {
        let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
        let turn = Turn::new(role, format!("turn {i}"));
        appended.push(turn.clone());
        store.append(key, role, turn.content());

        let stored = store.snapshot(&key).unwrap();
        let expected_start = appended.len().saturating_sub(5);
        assert_eq!(stored, appended[expected_start..].to_vec());
    }
}

/// **Test: "C:1", "C:2" and "C" are independent sessions.**
#[test]
fn test_threads_never_share_a_session() {
    let store = SessionStore::default();
    let thread_one = ConversationKey::new(77, Some(1));
    let thread_two = ConversationKey::new(77, Some(2));
    let whole_chat = ConversationKey::new(77, None);

    store.append(thread_one, Role::User, "about polity");
    store.append(thread_two, Role::User, "about economy");
    store.append(thread_two, Role::Assistant, "economy answer");

    assert_eq!(store.turn_count(&thread_one), 1);
    assert_eq!(store.turn_count(&thread_two), 2);
    assert_eq!(store.turn_count(&whole_chat), 0);
    assert_eq!(
        store.snapshot(&thread_one).unwrap(),
        vec![Turn::user("about polity")]
    );
}

/// **Test: concurrent appends to one key never exceed the window nor lose ordering within a task.**
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_respect_window() {
    let store = Arc::new(SessionStore::new(5));
    let key = ConversationKey::new(1, None);

    let mut tasks = Vec::new();
    for task in 0..8 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..50 {
                let window = store.append(key, Role::User, format!("{task}-{i}"));
                assert!(window.len() <= 5);
                tokio::task::yield_now().await;
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    let stored = store.snapshot(&key).unwrap();
    assert_eq!(stored.len(), 5);
    for task in 0..8 {
        let indices: Vec<u32> = stored
            .iter()
            .filter_map(|t| t.content().strip_prefix(&format!("{task}-")))
            .map(|i| i.parse().unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}
