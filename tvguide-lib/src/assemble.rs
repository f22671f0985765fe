//! Builds guide programmes from normalized entries and cached metadata.

use tvguide_core::time::parse_release_date;
use tvguide_core::{
    ChannelDescriptor, Credits, EpisodeMetadata, EpisodeNum, GuideProgramme, LangText,
    ProgramEntry, StarRating,
};
use tvguide_frontend::rating_for;

use crate::error::FieldAccessError;

/// Result of assembling one programme. A skipped programme is left out of
/// the guide; the rest of the run carries on.
#[derive(Debug)]
pub enum AssemblyOutcome {
    Built(GuideProgramme),
    Skipped { reason: FieldAccessError },
}

/// Assemble one programme from its entry and the metadata matched by its key.
pub fn assemble_programme(
    channel: &ChannelDescriptor,
    entry: &ProgramEntry,
    metadata: Option<&EpisodeMetadata>,
) -> AssemblyOutcome {
    let title = entry.guide_title().unwrap_or(&channel.display_name);
    let mut programme = GuideProgramme::new(
        entry.channel_id.clone(),
        entry.start,
        entry.stop,
        LangText::new(title, &entry.lang),
    );
    if !entry.lang.trim().is_empty() {
        programme.language = Some(LangText::new(entry.lang.trim(), &entry.lang));
    }

    let Some(metadata) = metadata else {
        return AssemblyOutcome::Built(programme);
    };

    match apply_metadata(&mut programme, metadata, &entry.lang) {
        Ok(()) => AssemblyOutcome::Built(programme),
        Err(reason) => {
            log::warn!(
                "Skipping '{title}' at {} on '{}' (metadata {}): {reason}",
                entry.start,
                entry.channel_id,
                entry.key.as_ref().map(|k| k.as_str()).unwrap_or("none"),
            );
            AssemblyOutcome::Skipped { reason }
        }
    }
}

fn apply_metadata(
    programme: &mut GuideProgramme,
    metadata: &EpisodeMetadata,
    lang: &str,
) -> Result<(), FieldAccessError> {
    let episode = metadata.episode.as_ref();

    programme.categories = metadata
        .genres
        .iter()
        .map(|genre| LangText::new(genre.as_str(), lang))
        .collect();

    let credits = Credits {
        writers: metadata.creators.clone(),
        producers: metadata.production_co.clone(),
    };
    programme.credits = (!credits.is_empty()).then_some(credits);

    programme.date = metadata
        .release_date
        .as_deref()
        .map(parse_release_date)
        .transpose()?;

    let desc = match episode {
        Some(episode) => episode.summary.as_deref(),
        None => metadata.summary.as_deref(),
    };
    programme.desc = desc.map(|d| LangText::new(d, lang));

    programme.sub_title = episode
        .and_then(|e| e.name.as_deref())
        .or(metadata.name.as_deref())
        .map(|name| LangText::new(name, lang));

    if let Some(episode) = episode {
        let season = episode
            .season
            .ok_or(FieldAccessError::MissingEpisodeField("season"))?;
        let number = episode
            .ep_num
            .ok_or(FieldAccessError::MissingEpisodeField("epNum"))?;
        programme.episode_num = Some(EpisodeNum {
            value: format!(
                "{}.{}.0/1",
                season.saturating_sub(1),
                number.saturating_sub(1)
            ),
            system: "xmltv_ns".to_string(),
        });
    }

    programme.star_rating = metadata.rating.map(|rating| StarRating {
        value: format!("{rating}/10"),
        system: "imdb".to_string(),
    });
    programme.rating = metadata.content_rating.as_deref().map(rating_for);
    programme.icon = metadata.image.clone();

    Ok(())
}

#[cfg(test)]
#[path = "tests/assemble_tests.rs"]
mod tests;
