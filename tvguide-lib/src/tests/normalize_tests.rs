use super::*;
use tvguide_core::time::format_xmltv;
use tvguide_scraper::RawInfo;

fn channel(offset: &str, query_url: Option<&str>) -> ChannelDescriptor {
    ChannelDescriptor {
        id: "ch2".to_string(),
        display_name: "Channel Two".to_string(),
        lang: "en".to_string(),
        icon: String::new(),
        url: "https://stream.example.com/ch2.m3u8".to_string(),
        schedule_url: Some("https://sched.example.com/ch2".to_string()),
        episode_query_url: query_url.map(str::to_string),
        offset: offset.to_string(),
        country: "US".to_string(),
        group: String::new(),
    }
}

fn entry(start: &str, name: &str) -> RawScheduleEntry {
    RawScheduleEntry {
        start_date: Some(start.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_stop_is_next_start_and_last_is_open() {
    let raw = vec![
        entry("20240101120000", "Show A"),
        entry("20240101130000", "Show B"),
    ];
    let programs = normalize_schedule(&channel("-0500", None), raw);

    assert_eq!(programs.len(), 2);
    assert_eq!(format_xmltv(&programs[0].start), "20240101120000 -0500");
    assert_eq!(
        programs[0].stop.as_ref().map(format_xmltv).as_deref(),
        Some("20240101130000 -0500")
    );
    assert_eq!(format_xmltv(&programs[1].start), "20240101130000 -0500");
    assert!(programs[1].stop.is_none());
    assert_eq!(programs[0].title.as_deref(), Some("Show A"));
    assert_eq!(programs[0].channel_id, "ch2");
    assert_eq!(programs[0].channel_url, "https://stream.example.com/ch2.m3u8");
}

#[test]
fn test_chain_holds_for_every_pair() {
    let raw: Vec<_> = (0..6)
        .map(|h| entry(&format!("2024-03-01T{:02}:30:00", 10 + h), "Block"))
        .collect();
    let programs = normalize_schedule(&channel("+0100", None), raw);
    assert_eq!(programs.len(), 6);
    for pair in programs.windows(2) {
        assert_eq!(pair[0].stop, Some(pair[1].start));
    }
    assert!(programs[5].stop.is_none());
}

#[test]
fn test_unparseable_start_is_dropped_before_chaining() {
    let raw = vec![
        entry("20240101120000", "Show A"),
        entry("soon", "Show B"),
        RawScheduleEntry {
            start_date: None,
            name: Some("Show C".to_string()),
            ..Default::default()
        },
        entry("20240101140000", "Show D"),
    ];
    let programs = normalize_schedule(&channel("-0500", None), raw);
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0].stop, Some(programs[1].start));
    assert_eq!(programs[1].title.as_deref(), Some("Show D"));
}

#[test]
fn test_zoned_start_keeps_instant() {
    let raw = vec![entry("2024-01-01T17:00:00Z", "Show A")];
    let programs = normalize_schedule(&channel("-0500", None), raw);
    assert_eq!(format_xmltv(&programs[0].start), "20240101120000 -0500");
}

#[test]
fn test_bad_offset_yields_nothing() {
    let programs = normalize_schedule(
        &channel("EST", None),
        vec![entry("20240101120000", "Show A")],
    );
    assert!(programs.is_empty());
}

#[test]
fn test_title_falls_back_to_block_name() {
    let raw = vec![RawScheduleEntry {
        start_date: Some("20240101120000".to_string()),
        block_name: Some("Late Night Block".to_string()),
        ..Default::default()
    }];
    let programs = normalize_schedule(&channel("", Some("https://meta.example.com/ep")), raw);
    assert_eq!(programs[0].title.as_deref(), Some("Late Night Block"));
    assert_eq!(
        programs[0].key.as_ref().map(LookupKey::as_str),
        Some("https://meta.example.com/ep?name=Late%20Night%20Block")
    );
}

#[test]
fn test_key_prefers_full_name_and_carries_year_and_episode() {
    let raw = vec![RawScheduleEntry {
        start_date: Some("20240101120000".to_string()),
        name: Some("Bebop".to_string()),
        episode_number: Some("5".to_string()),
        info: Some(RawInfo {
            fullname: Some("Cowboy Bebop".to_string()),
            year: Some("1998".to_string()),
        }),
        ..Default::default()
    }];
    let programs = normalize_schedule(&channel("-0500", Some("https://meta.example.com/ep")), raw);
    let expected = LookupKey::build("https://meta.example.com/ep", "Cowboy Bebop", Some("1998"), Some("5"));
    assert_eq!(programs[0].key, Some(expected));
    assert_eq!(programs[0].full_name.as_deref(), Some("Cowboy Bebop"));
    assert_eq!(programs[0].guide_title(), Some("Cowboy Bebop"));
}

#[test]
fn test_untitled_entry_is_kept_without_key() {
    let raw = vec![RawScheduleEntry {
        start_date: Some("20240101120000".to_string()),
        ..Default::default()
    }];
    let programs = normalize_schedule(&channel("-0500", Some("https://meta.example.com/ep")), raw);
    assert_eq!(programs.len(), 1);
    assert!(programs[0].title.is_none());
    assert!(programs[0].key.is_none());
}

#[test]
fn test_no_metadata_source_means_no_key() {
    let programs = normalize_schedule(
        &channel("-0500", None),
        vec![entry("20240101120000", "Show A")],
    );
    assert!(programs[0].key.is_none());
}
