//! Headless mode: run the pipeline once and print the result set.

use anyhow::Context;
use dex_core::{search::Hit, Segment};
use serde::Serialize;

/// Output format for `--headless`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One line per hit, matched spans in brackets.
    #[default]
    Text,
    /// A JSON array of hits.
    Json,
}

/// A hit as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct HitRecord<'a> {
    pub name: &'a str,
    pub tags: &'a [String],
    pub strength: Option<f64>,
    pub image: &'a str,
    pub segments: &'a [Segment<'a>],
}

impl<'a> From<&'a Hit<'a>> for HitRecord<'a> {
    fn from(hit: &'a Hit<'a>) -> Self {
        Self {
            name: &hit.entity.name,
            tags: &hit.entity.tags,
            strength: hit.entity.strength,
            image: &hit.entity.image,
            segments: &hit.segments,
        }
    }
}

/// Render `hits` for stdout. Text output always ends with a newline unless
/// there is nothing to print.
pub fn render(hits: &[Hit<'_>], query: &str, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(render_text(hits, query)),
        Format::Json => {
            let records: Vec<HitRecord<'_>> = hits.iter().map(HitRecord::from).collect();
            let mut out =
                serde_json::to_string_pretty(&records).context("serializing results")?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// `Pika[chu]  CP 1000  Electric`, one line per hit, or `No results` when a
/// non-empty query matched nothing.
pub fn render_text(hits: &[Hit<'_>], query: &str) -> String {
    if hits.is_empty() {
        return if query.is_empty() {
            String::new()
        } else {
            "No results\n".to_string()
        };
    }

    let mut out = String::new();
    for hit in hits {
        for seg in &hit.segments {
            if seg.is_match {
                out.push('[');
                out.push_str(seg.text);
                out.push(']');
            } else {
                out.push_str(seg.text);
            }
        }
        match hit.entity.strength {
            Some(cp) => out.push_str(&format!("  CP {cp}")),
            None => out.push_str("  CP –"),
        }
        if !hit.entity.tags.is_empty() {
            out.push_str("  ");
            out.push_str(&hit.entity.tags.join(", "));
        }
        out.push('\n');
    }
    out
}
