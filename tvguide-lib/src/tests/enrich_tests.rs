use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{FixedOffset, TimeZone};
use tvguide_scraper::ScrapeError;

use super::*;

#[derive(Default)]
struct FakeSource {
    bodies: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeSource {
    fn with(key: &LookupKey, body: &str) -> Self {
        let mut source = Self::default();
        source.bodies.insert(key.as_str().to_string(), body.to_string());
        source
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl JsonSource for FakeSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .map(|b| b.as_bytes().to_vec())
            .ok_or_else(|| ScrapeError::Status {
                status: 503,
                url: url.to_string(),
            })
    }
}

fn key(name: &str) -> LookupKey {
    LookupKey::build("https://meta.example.com/ep", name, None, None)
}

fn program(key: Option<LookupKey>) -> ProgramEntry {
    ProgramEntry {
        channel_id: "ch1".to_string(),
        start: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .unwrap(),
        stop: None,
        title: Some("Show".to_string()),
        full_name: None,
        lang: "en".to_string(),
        key,
        channel_url: String::new(),
    }
}

#[test]
fn test_fetches_once_then_uses_cache() {
    let source = FakeSource::with(&key("Show"), r#"{"name": "Show", "genres": ["Comedy"]}"#);
    let mut cache = EpisodeCache::new();
    let mut enricher = Enricher::new(&source);
    let entry = program(Some(key("Show")));

    assert_eq!(enricher.enrich(&entry, &mut cache), EnrichOutcome::Fetched);
    assert_eq!(enricher.enrich(&entry, &mut cache), EnrichOutcome::Cached);
    assert_eq!(source.request_count(), 1);
    assert_eq!(cache.get(&key("Show")).unwrap().genres, vec!["Comedy".to_string()]);
}

#[test]
fn test_prefilled_cache_makes_no_request() {
    let source = FakeSource::default();
    let mut cache = EpisodeCache::new();
    cache.put(key("Show"), Default::default());
    let mut enricher = Enricher::new(&source);

    assert_eq!(
        enricher.enrich(&program(Some(key("Show"))), &mut cache),
        EnrichOutcome::Cached
    );
    assert_eq!(source.request_count(), 0);
}

#[test]
fn test_failed_key_is_not_retried_this_run() {
    let source = FakeSource::default();
    let mut cache = EpisodeCache::new();
    let mut enricher = Enricher::new(&source);
    let entry = program(Some(key("Gone")));

    assert_eq!(enricher.enrich(&entry, &mut cache), EnrichOutcome::Failed);
    assert_eq!(enricher.enrich(&entry, &mut cache), EnrichOutcome::KnownMiss);
    assert_eq!(source.request_count(), 1);
    assert!(cache.is_empty());

    // A fresh run tries again.
    let mut next_run = Enricher::new(&source);
    assert_eq!(next_run.enrich(&entry, &mut cache), EnrichOutcome::Failed);
    assert_eq!(source.request_count(), 2);
}

#[test]
fn test_empty_body_stores_nothing() {
    let source = FakeSource::with(&key("Blank"), "  \n");
    let mut cache = EpisodeCache::new();
    let mut enricher = Enricher::new(&source);

    assert_eq!(
        enricher.enrich(&program(Some(key("Blank"))), &mut cache),
        EnrichOutcome::Failed
    );
    assert!(!cache.has(&key("Blank")));
}

#[test]
fn test_no_key_is_left_alone() {
    let source = FakeSource::default();
    let mut cache = EpisodeCache::new();
    let mut enricher = Enricher::new(&source);
    assert_eq!(enricher.enrich(&program(None), &mut cache), EnrichOutcome::NoKey);
    assert_eq!(source.request_count(), 0);
}

#[test]
fn test_denylisted_strings_are_absent_in_cache() {
    let source = FakeSource::with(
        &key("Show"),
        r#"[{"name": "Show", "summary": "See more", "creators": ["IMDbPro", "A. Writer"]}]"#,
    );
    let mut cache = EpisodeCache::new();
    Enricher::new(&source).enrich(&program(Some(key("Show"))), &mut cache);

    let record = cache.get(&key("Show")).unwrap();
    assert!(record.summary.is_none());
    assert_eq!(record.creators, vec!["A. Writer".to_string()]);
}

#[test]
fn test_malformed_json_stores_nothing() {
    let source = FakeSource::with(&key("Broken"), "{not json");
    let mut cache = EpisodeCache::new();
    let mut enricher = Enricher::new(&source);

    assert_eq!(
        enricher.enrich(&program(Some(key("Broken"))), &mut cache),
        EnrichOutcome::Failed
    );
    assert!(cache.is_empty());
    assert_eq!(source.request_count(), 1);
}
