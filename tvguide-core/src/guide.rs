//! The guide document in XMLTV terms.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::channel::ChannelDescriptor;

/// Root of the guide: generator info, channels, then programmes.
#[derive(Debug, Clone)]
pub struct GuideDocument {
    pub generator: GeneratorInfo,
    pub channels: Vec<GuideChannel>,
    pub programmes: Vec<GuideProgramme>,
}

impl GuideDocument {
    pub fn new(generator: GeneratorInfo) -> Self {
        Self {
            generator,
            channels: Vec::new(),
            programmes: Vec::new(),
        }
    }

    /// Programmes for one channel, in document order.
    pub fn programmes_for<'a>(
        &'a self,
        channel_id: &'a str,
    ) -> impl Iterator<Item = &'a GuideProgramme> + 'a {
        self.programmes
            .iter()
            .filter(move |p| p.channel == channel_id)
    }
}

/// Attributes of the `<tv>` root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub date: NaiveDate,
    pub source_info_name: String,
    pub source_info_url: String,
    pub generator_info_name: String,
    pub generator_info_url: String,
}

/// Text with an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangText {
    pub text: String,
    pub lang: Option<String>,
}

impl LangText {
    pub fn new(text: impl Into<String>, lang: &str) -> Self {
        let lang = lang.trim();
        Self {
            text: text.into(),
            lang: (!lang.is_empty()).then(|| lang.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideChannel {
    pub id: String,
    pub display_name: LangText,
    pub icon: Option<String>,
    pub url: Option<String>,
}

impl From<&ChannelDescriptor> for GuideChannel {
    fn from(channel: &ChannelDescriptor) -> Self {
        Self {
            id: channel.id.clone(),
            display_name: LangText::new(channel.display_name.clone(), &channel.lang),
            icon: non_empty(&channel.icon),
            url: non_empty(&channel.url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits {
    pub writers: Vec<String>,
    pub producers: Vec<String>,
}

impl Credits {
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty() && self.producers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeNum {
    pub value: String,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub value: String,
    pub system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRating {
    pub value: String,
    pub system: String,
}

/// One `<programme>` of the guide.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideProgramme {
    pub channel: String,
    pub start: DateTime<FixedOffset>,
    pub stop: Option<DateTime<FixedOffset>>,
    pub title: LangText,
    pub sub_title: Option<LangText>,
    pub desc: Option<LangText>,
    pub credits: Option<Credits>,
    pub date: Option<NaiveDate>,
    pub categories: Vec<LangText>,
    pub language: Option<LangText>,
    pub icon: Option<String>,
    pub episode_num: Option<EpisodeNum>,
    pub rating: Option<Rating>,
    pub star_rating: Option<StarRating>,
}

impl GuideProgramme {
    /// A programme with only the required fields set.
    pub fn new(
        channel: impl Into<String>,
        start: DateTime<FixedOffset>,
        stop: Option<DateTime<FixedOffset>>,
        title: LangText,
    ) -> Self {
        Self {
            channel: channel.into(),
            start,
            stop,
            title,
            sub_title: None,
            desc: None,
            credits: None,
            date: None,
            categories: Vec::new(),
            language: None,
            icon: None,
            episode_num: None,
            rating: None,
            star_rating: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
