//! Setlists: ordered song references with optional per-song keys
//!
//! A setlist travels as a single comma-separated string of `UUID[:KEY]`
//! items, e.g. `3f2b...-9c1d:Am,7a41...-0e55`.

use crate::chordsheet::layout::RenderOptions;
use crate::chordsheet::parser::ParseError;
use crate::chordsheet::song::{render_song_article, Song};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const SONG_SEPARATOR: &str = r#"<hr class="song-separator">"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetlistEntry {
    pub id: Uuid,
    /// Key to show the song in; `None` keeps its default key
    pub key: Option<String>,
}

#[derive(Debug, Error)]
pub enum SetlistError {
    #[error("invalid song id '{id}': {source}")]
    InvalidId {
        id: String,
        #[source]
        source: uuid::Error,
    },
    #[error("unknown song {0}")]
    UnknownSong(Uuid),
    #[error("song {id}: {source}")]
    Parse {
        id: Uuid,
        #[source]
        source: ParseError,
    },
}

/// Split a raw setlist string into entries
///
/// Blank items are skipped and an empty key (`id:`) means no key.
pub fn parse_setlist(raw: &str) -> Result<Vec<SetlistEntry>, SetlistError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(item: &str) -> Result<SetlistEntry, SetlistError> {
    let (id_part, key_part) = match item.split_once(':') {
        Some((id, key)) => (id.trim(), Some(key.trim())),
        None => (item, None),
    };
    let id = Uuid::parse_str(id_part).map_err(|source| SetlistError::InvalidId {
        id: id_part.to_string(),
        source,
    })?;
    Ok(SetlistEntry {
        id,
        key: key_part.filter(|k| !k.is_empty()).map(str::to_string),
    })
}

/// Render every entry as a song article, separated by `<hr>` rules
///
/// `lookup` resolves ids to songs; a missing song fails the whole setlist.
pub fn render_setlist<'a, F>(
    entries: &[SetlistEntry],
    lookup: F,
    options: &RenderOptions,
) -> Result<String, SetlistError>
where
    F: Fn(&Uuid) -> Option<&'a Song>,
{
    let mut blocks = Vec::with_capacity(entries.len());
    for entry in entries {
        let song = lookup(&entry.id).ok_or(SetlistError::UnknownSong(entry.id))?;
        let article = render_song_article(song, entry.key.as_deref(), options).map_err(
            |source| SetlistError::Parse {
                id: entry.id,
                source,
            },
        )?;
        blocks.push(article);
    }
    tracing::debug!(songs = blocks.len(), "rendered setlist");
    Ok(blocks.join(SONG_SEPARATOR))
}
