//! Song records and their page markup
//!
//! A [Song] is the stored form of a chord sheet with its catalogue metadata.
//! [render_song_article] turns one into the self-contained `<article>` block a
//! song page is built from: a header with the title stack, the effective key
//! and streaming links, followed by the rendered body.

use crate::chordsheet::formats::{escape_html, render_html};
use crate::chordsheet::layout::{render, RenderOptions};
use crate::chordsheet::music::{Key, Transposition};
use crate::chordsheet::parser::{parse_document, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const KEY_LABEL: &str = "Тональність";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    /// Chord sheet source
    pub content: String,
    pub default_key: String,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub songlink_url: Option<String>,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        default_key: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            original_title: None,
            artist: None,
            content: content.into(),
            default_key: default_key.into(),
            youtube_url: None,
            songlink_url: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = Some(original_title.into());
        self
    }

    pub fn with_links(mut self, youtube_url: Option<String>, songlink_url: Option<String>) -> Self {
        self.youtube_url = youtube_url;
        self.songlink_url = songlink_url;
        self
    }

    /// The key the song is shown in: the requested one, else its default
    pub fn effective_key<'a>(&'a self, target_key: Option<&'a str>) -> &'a str {
        target_key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(&self.default_key)
    }
}

/// Why a song cannot be stored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("default key is required")]
    MissingKey,
    #[error("'{0}' is not a valid key (e.g. C, F#, Eb, Em)")]
    UnknownKey(String),
}

/// Check a sheet and its default key before they are saved
///
/// The content must parse and the key must be a readable key name.
pub fn validate_song(content: &str, default_key: &str) -> Result<(), SongError> {
    parse_document(content)?;
    let key = default_key.trim();
    if key.is_empty() {
        return Err(SongError::MissingKey);
    }
    if Key::parse(key).is_none() {
        return Err(SongError::UnknownKey(key.to_string()));
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Icon anchors for the streaming links that are present
pub fn render_stream_links(youtube_url: Option<&str>, songlink_url: Option<&str>) -> String {
    let mut links = String::new();
    if let Some(url) = youtube_url.filter(|u| !u.is_empty()) {
        links.push_str(&format!(
            r#"<a class="icon-link youtube" href="{}" target="_blank" rel="noopener" title="YouTube" aria-label="YouTube"></a>"#,
            escape_html(url)
        ));
    }
    if let Some(url) = songlink_url.filter(|u| !u.is_empty()) {
        links.push_str(&format!(
            r#"<a class="icon-link spotify" href="{}" target="_blank" rel="noopener" title="Streaming" aria-label="Streaming"></a>"#,
            escape_html(url)
        ));
    }
    links
}

fn title_stack(song: &Song) -> String {
    let mut parts = format!(
        r#"<div class="song-title">{}</div>"#,
        escape_html(&song.title)
    );
    if let Some(original) = non_empty(&song.original_title) {
        parts.push_str(&format!(
            r#"<div class="song-sub original">{}</div>"#,
            escape_html(original)
        ));
    }
    if let Some(artist) = non_empty(&song.artist) {
        parts.push_str(&format!(
            r#"<div class="song-sub artist">{}</div>"#,
            escape_html(artist)
        ));
    }
    format!(r#"<div class="song-stack">{parts}</div>"#)
}

fn key_block(song: &Song, effective_key: &str) -> String {
    let label = if effective_key.is_empty() {
        "&nbsp;".to_string()
    } else {
        escape_html(effective_key)
    };
    let button = |dir: &str, caption: &str| {
        format!(
            r#"<button type="button" class="icon-btn key-btn transpose-btn" data-dir="{dir}" aria-label="{caption}" title="{caption}"><span class="icon icon-chev-{dir}" aria-hidden="true"></span></button>"#
        )
    };
    format!(
        r#"<div class="song-key" data-song-id="{}" data-default-key="{}" data-effective-key="{}">{}<div class="key-label">{KEY_LABEL}: {label}</div>{}</div>"#,
        song.id,
        escape_html(&song.default_key),
        escape_html(effective_key),
        button("up", "Transpose up"),
        button("down", "Transpose down"),
    )
}

/// Parse, transpose and render a song into its `<article class="song">` block
///
/// The key controls are only emitted when chords are shown.
pub fn render_song_article(
    song: &Song,
    target_key: Option<&str>,
    options: &RenderOptions,
) -> Result<String, ParseError> {
    let doc = parse_document(&song.content)?;
    let transposition = Transposition::between(Some(&song.default_key), target_key);
    let body = render_html(&render(&transposition.apply(&doc), options));

    let effective_key = song.effective_key(target_key);
    let key_html = if options.show_chords {
        key_block(song, effective_key)
    } else {
        String::new()
    };
    let links = render_stream_links(non_empty(&song.youtube_url), non_empty(&song.songlink_url));

    Ok(format!(
        r#"<article class="song"><header class="song-header">{}{key_html}<div class="song-links">{links}</div></header><div class="song-body">{body}</div></article>"#,
        title_stack(song)
    ))
}
