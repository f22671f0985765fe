use chrono::{FixedOffset, NaiveDate, TimeZone};
use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;
use tvguide_core::{ChannelDescriptor, GeneratorInfo, GuideChannel, GuideDocument, GuideProgramme, LangText};
use tvguide_frontend::{write_guide, write_playlist};

fn channel() -> ChannelDescriptor {
    ChannelDescriptor {
        id: "ch1".to_string(),
        display_name: "Channel One".to_string(),
        lang: "en".to_string(),
        icon: String::new(),
        url: "https://stream.example.com/ch1.m3u8".to_string(),
        schedule_url: None,
        episode_query_url: None,
        offset: "-0500".to_string(),
        country: "US".to_string(),
        group: String::new(),
    }
}

#[test]
fn test_write_guide_produces_well_formed_xml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("guide.xml");

    let mut doc = GuideDocument::new(GeneratorInfo {
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        source_info_name: "src".to_string(),
        source_info_url: "https://src.example.com".to_string(),
        generator_info_name: "tvguide".to_string(),
        generator_info_url: "https://example.com".to_string(),
    });
    let ch = channel();
    doc.channels.push(GuideChannel::from(&ch));
    let start = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .unwrap();
    doc.programmes.push(GuideProgramme::new(
        "ch1",
        start,
        None,
        LangText::new("Tom & Jerry's <Best>", "en"),
    ));

    write_guide(&doc, &path).unwrap();
    let xml = std::fs::read_to_string(&path).unwrap();

    let mut reader = Reader::from_str(&xml);
    let mut titles = Vec::new();
    let mut programmes = 0;
    let mut in_title = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"programme" => programmes += 1,
            Event::Start(e) if e.name().as_ref() == b"title" => in_title = true,
            Event::Text(t) if in_title => {
                titles.push(t.unescape().unwrap().into_owned());
                in_title = false;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(programmes, 1);
    assert_eq!(titles, vec!["Tom & Jerry's <Best>".to_string()]);
}

#[test]
fn test_write_playlist_creates_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("channels.m3u");
    write_playlist(&[channel()], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("#EXTM3U\n"));
    assert!(contents.contains("https://stream.example.com/ch1.m3u8"));
}
