//! Link resolution tests
//!
//! A decoded token that names a missing stream group is a lookup miss, not a
//! token failure, and the two must stay distinguishable for callers.

use std::collections::HashMap;
use stream_links::links::{accept_token, clean_file_name, resolve_stream_link, stream_url};
use stream_links::{SecretKey, StreamLink, StreamLinksError, TokenErrorKind};

#[derive(Debug, Clone, PartialEq)]
struct StreamGroup {
    id: u32,
    name: String,
}

fn test_key() -> SecretKey {
    SecretKey::from_hex("0f0e0d0c0b0a09080706050403020100").unwrap()
}

fn groups() -> HashMap<u32, StreamGroup> {
    let mut map = HashMap::new();
    map.insert(
        7,
        StreamGroup {
            id: 7,
            name: "Sports".to_string(),
        },
    );
    map
}

#[test]
fn test_resolves_known_group() {
    let key = test_key();
    let store = groups();
    let resolver = |id: u32| store.get(&id).cloned();

    let token = StreamLink::new(7, 3, 42).encode(&key);
    let (group, link) = resolve_stream_link(&token, &key, &resolver).unwrap();

    assert_eq!(group.name, "Sports");
    assert_eq!(group.id, 7);
    assert_eq!(link, StreamLink::new(7, 3, 42));
}

#[test]
fn test_missing_group_is_not_found() {
    let key = test_key();
    let store = groups();
    let resolver = |id: u32| store.get(&id).cloned();

    let token = StreamLink::new(8, 3, 42).encode(&key);
    let err = resolve_stream_link(&token, &key, &resolver).unwrap_err();

    assert!(matches!(
        err,
        StreamLinksError::NotFound { kind: "Stream group", id: 8 }
    ));
    assert_eq!(err.token_kind(), None);
}

#[test]
fn test_token_failures_skip_resolver() {
    let key = test_key();
    let resolver = |_: u32| -> Option<StreamGroup> { panic!("resolver must not be called") };

    let err = resolve_stream_link("garbage!", &key, &resolver).unwrap_err();
    assert_eq!(err.token_kind(), Some(TokenErrorKind::Malformed));

    let other_key = SecretKey::from_hex("ffffffffffffffffffffffffffffffff").unwrap();
    let token = StreamLink::new(7, 3, 42).encode(&other_key);
    let err = resolve_stream_link(&token, &key, &resolver).unwrap_err();
    assert_eq!(err.token_kind(), Some(TokenErrorKind::IntegrityFailure));
}

#[test]
fn test_accept_token_wrong_shape() {
    let key = test_key();
    let token = StreamLink::new(1, 2, 3).encode(&key);

    let err = accept_token::<u32>(&token, &key).unwrap_err();
    assert_eq!(err.token_kind(), Some(TokenErrorKind::WrongLength));
}

#[test]
fn test_stream_url_round_trip() {
    let key = test_key();
    let link = StreamLink::new(7, 3, 42);

    let url = stream_url("https://tv.example.com", &link, &key, "Sky Sports F1");
    let segments: Vec<&str> = url.rsplitn(3, '/').collect();

    assert_eq!(segments[0], "Sky_Sports_F1");
    assert_eq!(StreamLink::decode(segments[1], &key).unwrap(), link);
    assert!(segments[2].ends_with("/api/videostreams/stream"));
}

#[test]
fn test_clean_file_name_is_path_safe() {
    let cleaned = clean_file_name("../../etc/passwd ?#%");
    assert!(!cleaned.contains('/'));
    assert!(!cleaned.contains('?'));
    assert!(!cleaned.contains('#'));
    assert_eq!(cleaned, "....etcpasswd");
}
