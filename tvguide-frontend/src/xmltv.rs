//! XMLTV guide writer.

use std::path::Path;

use quick_xml::escape::escape;
use tvguide_core::time::{format_xmltv, format_xmltv_date};
use tvguide_core::{GuideChannel, GuideDocument, GuideProgramme, LangText};

use crate::error::FrontendError;
use crate::write_document;

/// Render the guide as an XMLTV document.
///
/// Child elements are written in the order the XMLTV DTD requires.
pub fn render_guide(doc: &GuideDocument) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<!DOCTYPE tv SYSTEM \"xmltv.dtd\">\n");

    let generator = &doc.generator;
    xml.push_str(&format!(
        "<tv date=\"{}\" source-info-url=\"{}\" source-info-name=\"{}\" generator-info-name=\"{}\" generator-info-url=\"{}\">\n",
        format_xmltv_date(&generator.date),
        escape(generator.source_info_url.as_str()),
        escape(generator.source_info_name.as_str()),
        escape(generator.generator_info_name.as_str()),
        escape(generator.generator_info_url.as_str()),
    ));

    for channel in &doc.channels {
        write_channel(&mut xml, channel);
    }
    for programme in &doc.programmes {
        write_programme(&mut xml, programme);
    }

    xml.push_str("</tv>\n");
    xml
}

/// Render and write the guide to `path`.
pub fn write_guide(doc: &GuideDocument, path: &Path) -> Result<(), FrontendError> {
    write_document(path, &render_guide(doc))
}

fn write_channel(xml: &mut String, channel: &GuideChannel) {
    xml.push_str(&format!("  <channel id=\"{}\">\n", escape(channel.id.as_str())));
    write_lang_tag(xml, "display-name", &channel.display_name);
    if let Some(ref icon) = channel.icon {
        write_icon(xml, icon);
    }
    if let Some(ref url) = channel.url {
        write_tag(xml, "url", url);
    }
    xml.push_str("  </channel>\n");
}

fn write_programme(xml: &mut String, programme: &GuideProgramme) {
    xml.push_str(&format!("  <programme start=\"{}\"", format_xmltv(&programme.start)));
    if let Some(ref stop) = programme.stop {
        xml.push_str(&format!(" stop=\"{}\"", format_xmltv(stop)));
    }
    xml.push_str(&format!(" channel=\"{}\">\n", escape(programme.channel.as_str())));

    write_lang_tag(xml, "title", &programme.title);
    if let Some(ref sub_title) = programme.sub_title {
        write_lang_tag(xml, "sub-title", sub_title);
    }
    if let Some(ref desc) = programme.desc {
        write_lang_tag(xml, "desc", desc);
    }
    if let Some(ref credits) = programme.credits {
        if !credits.is_empty() {
            xml.push_str("    <credits>\n");
            for writer in &credits.writers {
                write_nested_tag(xml, "writer", writer);
            }
            for producer in &credits.producers {
                write_nested_tag(xml, "producer", producer);
            }
            xml.push_str("    </credits>\n");
        }
    }
    if let Some(ref date) = programme.date {
        write_tag(xml, "date", &format_xmltv_date(date));
    }
    for category in &programme.categories {
        write_lang_tag(xml, "category", category);
    }
    if let Some(ref language) = programme.language {
        write_lang_tag(xml, "language", language);
    }
    if let Some(ref icon) = programme.icon {
        write_icon(xml, icon);
    }
    if let Some(ref episode_num) = programme.episode_num {
        xml.push_str(&format!(
            "    <episode-num system=\"{}\">{}</episode-num>\n",
            escape(episode_num.system.as_str()),
            escape(episode_num.value.as_str()),
        ));
    }
    if let Some(ref rating) = programme.rating {
        match rating.system {
            Some(ref system) => {
                xml.push_str(&format!("    <rating system=\"{}\">\n", escape(system.as_str())))
            }
            None => xml.push_str("    <rating>\n"),
        }
        write_nested_tag(xml, "value", &rating.value);
        xml.push_str("    </rating>\n");
    }
    if let Some(ref star_rating) = programme.star_rating {
        xml.push_str(&format!(
            "    <star-rating system=\"{}\">\n",
            escape(star_rating.system.as_str())
        ));
        write_nested_tag(xml, "value", &star_rating.value);
        xml.push_str("    </star-rating>\n");
    }

    xml.push_str("  </programme>\n");
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str(&format!("    <{tag}>{}</{tag}>\n", escape(value)));
}

fn write_nested_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str(&format!("      <{tag}>{}</{tag}>\n", escape(value)));
}

fn write_lang_tag(xml: &mut String, tag: &str, text: &LangText) {
    match text.lang {
        Some(ref lang) => xml.push_str(&format!(
            "    <{tag} lang=\"{}\">{}</{tag}>\n",
            escape(lang.as_str()),
            escape(text.text.as_str()),
        )),
        None => write_tag(xml, tag, &text.text),
    }
}

fn write_icon(xml: &mut String, src: &str) {
    xml.push_str(&format!("    <icon src=\"{}\"/>\n", escape(src)));
}

#[cfg(test)]
#[path = "tests/xmltv_tests.rs"]
mod tests;
