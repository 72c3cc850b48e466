use spotify_linker::utils::{build_track_candidate, extract_track_query, split_artist_title};

#[test]
fn test_extract_track_query_none() {
    assert_eq!(extract_track_query(None), None);
}

#[test]
fn test_extract_track_query_blank_inputs() {
    assert_eq!(extract_track_query(Some("")), None);
    assert_eq!(extract_track_query(Some("   ")), None);
    assert_eq!(extract_track_query(Some("\t\n  ")), None);
    // ideographic space and tab only
    assert_eq!(extract_track_query(Some("\u{3000}\t ")), None);
}

#[test]
fn test_extract_track_query_trims_ends() {
    assert_eq!(
        extract_track_query(Some("  Daft Punk  ")),
        Some("Daft Punk".to_string())
    );
}

#[test]
fn test_extract_track_query_collapses_whitespace_runs() {
    assert_eq!(
        extract_track_query(Some("Artist   -\t\tTitle")),
        Some("Artist - Title".to_string())
    );
    assert_eq!(
        extract_track_query(Some("one\ntwo\r\n three")),
        Some("one two three".to_string())
    );
}

#[test]
fn test_extract_track_query_passthrough_when_already_clean() {
    assert_eq!(
        extract_track_query(Some("Artist - Title")),
        Some("Artist - Title".to_string())
    );
}

#[test]
fn test_split_artist_title_hyphen_with_spaces() {
    assert_eq!(
        split_artist_title("Artist - Title"),
        Some(("Artist".to_string(), "Title".to_string()))
    );
}

#[test]
fn test_split_artist_title_hyphen_without_spaces() {
    assert_eq!(
        split_artist_title("Artist-Title"),
        Some(("Artist".to_string(), "Title".to_string()))
    );
}

#[test]
fn test_split_artist_title_en_and_em_dash() {
    assert_eq!(
        split_artist_title("Artist – Title"),
        Some(("Artist".to_string(), "Title".to_string()))
    );
    assert_eq!(
        split_artist_title("Artist — Title"),
        Some(("Artist".to_string(), "Title".to_string()))
    );
}

#[test]
fn test_split_artist_title_splits_only_once() {
    assert_eq!(
        split_artist_title("Artist - Title - Live"),
        Some(("Artist".to_string(), "Title - Live".to_string()))
    );
}

#[test]
fn test_split_artist_title_rejects_empty_sides() {
    assert_eq!(split_artist_title("Artist - "), None);
    assert_eq!(split_artist_title(" - Title"), None);
    assert_eq!(split_artist_title("-"), None);
}

#[test]
fn test_split_artist_title_no_separator() {
    assert_eq!(split_artist_title("NoSeparator"), None);
}

#[test]
fn test_build_track_candidate_none_and_blank() {
    assert_eq!(build_track_candidate(None), None);
    assert_eq!(build_track_candidate(Some("   ")), None);
}

#[test]
fn test_build_track_candidate_full_data() {
    let candidate = build_track_candidate(Some("Artist - Title")).unwrap();

    assert_eq!(candidate.raw_content, "Artist - Title");
    assert_eq!(candidate.query.as_deref(), Some("Artist - Title"));
    assert_eq!(candidate.artist.as_deref(), Some("Artist"));
    assert_eq!(candidate.title.as_deref(), Some("Title"));
}

#[test]
fn test_build_track_candidate_without_separator() {
    let candidate = build_track_candidate(Some("Just a song")).unwrap();

    assert_eq!(candidate.query.as_deref(), Some("Just a song"));
    assert_eq!(candidate.artist, None);
    assert_eq!(candidate.title, None);
}

#[test]
fn test_build_track_candidate_preserves_raw_content() {
    let candidate = build_track_candidate(Some("  Artist   -   Title  ")).unwrap();

    // raw content is untouched, query is normalized
    assert_eq!(candidate.raw_content, "  Artist   -   Title  ");
    assert_eq!(candidate.query.as_deref(), Some("Artist - Title"));
}
