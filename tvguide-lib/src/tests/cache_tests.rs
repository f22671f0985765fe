use super::*;
use tvguide_core::EpisodeInfo;

fn key(name: &str) -> LookupKey {
    LookupKey::build("https://meta.example.com/ep", name, None, None)
}

fn record() -> EpisodeMetadata {
    EpisodeMetadata {
        genres: vec!["Animation".to_string(), "Action".to_string()],
        production_co: vec!["Sunrise".to_string()],
        creators: vec!["Hajime Yatate".to_string()],
        release_date: Some("1998-10-24".to_string()),
        summary: Some("Bounty hunters in space.".to_string()),
        image: Some("https://img.example.com/bebop.jpg".to_string()),
        content_rating: Some("TV-14".to_string()),
        rating: Some(8.9),
        name: Some("Cowboy Bebop".to_string()),
        episode: Some(EpisodeInfo {
            season: Some(1),
            ep_num: Some(5),
            name: Some("Ballad of Fallen Angels".to_string()),
            summary: None,
        }),
    }
}

#[test]
fn test_put_never_overwrites() {
    let mut cache = EpisodeCache::new();
    assert!(cache.put(key("Bebop"), record()));

    let other = EpisodeMetadata {
        name: Some("Something Else".to_string()),
        ..Default::default()
    };
    assert!(!cache.put(key("Bebop"), other));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("Bebop")), Some(&record()));
}

#[test]
fn test_lookup_is_exact() {
    let mut cache = EpisodeCache::new();
    cache.put(key("Bebop"), record());
    assert!(cache.has(&key("Bebop")));
    assert!(!cache.has(&key("bebop")));
    assert!(cache.get(&key("Bebop ")).is_none());
}

#[test]
fn test_save_then_load_reproduces_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("episode-cache.json");

    let mut cache = EpisodeCache::new();
    cache.put(key("Bebop"), record());
    cache.put(key("Empty"), EpisodeMetadata::default());
    cache.save_to(&path).unwrap();

    let loaded = EpisodeCache::load_from(&path).unwrap();
    assert_eq!(loaded, cache);
}

#[test]
fn test_file_shape() {
    let mut cache = EpisodeCache::new();
    cache.put(key("Bebop"), record());
    let mut buf = Vec::new();
    cache.to_writer(&mut buf).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["version"], CACHE_VERSION);
    let entry = &value["episodes"][key("Bebop").as_str()];
    assert_eq!(entry["productionCo"][0], "Sunrise");
    assert_eq!(entry["episode"]["epNum"], 5);
}

#[test]
fn test_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cache = EpisodeCache::load_from(&dir.path().join("none.json")).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_version_mismatch_discards_entries() {
    let json = format!(
        r#"{{"version": {}, "episodes": {{"https://meta.example.com/ep?name=X": {{"name": "X"}}}}}}"#,
        CACHE_VERSION + 1
    );
    let cache = EpisodeCache::from_reader(json.as_bytes()).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    assert!(matches!(
        EpisodeCache::from_reader("{not json".as_bytes()),
        Err(CacheError::Json(_))
    ));
}
