use crate::types::{TelegramAudio, TelegramMessage, TrackCandidate};

const ARTIST_TITLE_SEPARATORS: [char; 3] = ['-', '–', '—'];

pub fn extract_track_query(content: Option<&str>) -> Option<String> {
    let cleaned = content?.trim();
    if cleaned.is_empty() {
        return None;
    }

    // collapse any run of whitespace to a single space
    let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

pub fn split_artist_title(query: &str) -> Option<(String, String)> {
    // split at the first separator only; titles may contain further dashes
    let idx = query.find(&ARTIST_TITLE_SEPARATORS[..])?;
    let sep_len = query[idx..].chars().next()?.len_utf8();

    let artist = query[..idx].trim();
    let title = query[idx + sep_len..].trim();
    if artist.is_empty() || title.is_empty() {
        return None;
    }

    Some((artist.to_string(), title.to_string()))
}

pub fn build_track_candidate(content: Option<&str>) -> Option<TrackCandidate> {
    let raw = content?;
    let query = extract_track_query(Some(raw))?;

    let (artist, title) = match split_artist_title(&query) {
        Some((artist, title)) => (Some(artist), Some(title)),
        None => (None, None),
    };

    Some(TrackCandidate {
        raw_content: raw.to_string(),
        query: Some(query),
        artist,
        title,
    })
}

pub fn message_text(message: &TelegramMessage) -> Option<String> {
    if let Some(caption) = &message.caption {
        if !caption.trim().is_empty() {
            return Some(caption.clone());
        }
    }
    if let Some(text) = &message.text {
        if !text.trim().is_empty() {
            return Some(text.clone());
        }
    }

    message.audio.as_ref().and_then(audio_text)
}

fn audio_text(audio: &TelegramAudio) -> Option<String> {
    let performer = audio.performer.as_deref().map(str::trim).unwrap_or("");
    let title = audio.title.as_deref().map(str::trim).unwrap_or("");

    if !performer.is_empty() && !title.is_empty() {
        return Some(format!("{performer} - {title}"));
    }
    if !performer.is_empty() {
        return Some(performer.to_string());
    }
    if !title.is_empty() {
        return Some(title.to_string());
    }

    // last resort: derive something readable from the file name
    let file_name = audio.file_name.as_deref()?;
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let cleaned = stem.replace('_', " ").trim().to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
