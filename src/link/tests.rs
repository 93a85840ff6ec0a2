use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// --- parse_link ---

#[test]
fn parse_short_youtube_link() {
    assert_eq!(
        parse_link("http://youtu.be/OEoXaMPEzfM"),
        Link::Youtube {
            id: "OEoXaMPEzfM".into()
        }
    );
}

#[test]
fn parse_youtube_variants() {
    for url in [
        "https://www.youtube.com/watch?v=OEoXaMPEzfM",
        "youtube.com/watch?feature=share&v=OEoXaMPEzfM",
        "https://youtube.com/embed/OEoXaMPEzfM",
        "http://www.youtube.com/v/OEoXaMPEzfM?start=10",
        "youtu.be/OEoXaMPEzfM",
    ] {
        assert!(parse_link(url).is_youtube(), "{url}");
    }
}

#[test]
fn parse_youtube_wrong_id_length() {
    assert_eq!(parse_link("http://youtu.be/12345678"), Link::Incorrect);
}

#[test]
fn parse_html5_link() {
    assert_eq!(
        parse_link("http://example.org/media/video.MP4"),
        Link::Html5 {
            video: "video".into(),
            format: "mp4".into()
        }
    );
    assert_eq!(
        parse_link("video.webm"),
        Link::Html5 {
            video: "video".into(),
            format: "webm".into()
        }
    );
}

#[test]
fn parse_unknown_link() {
    assert_eq!(parse_link("http://example.org/page.html"), Link::Incorrect);
    assert_eq!(parse_link(""), Link::Incorrect);
}

// --- ids and codec ---

#[test]
fn youtube_id_shape() {
    assert!(is_youtube_id("OEoXaMPEzfM"));
    assert!(is_youtube_id("a_b-c_d-e_f"));
    assert!(!is_youtube_id("1234567890"));
    assert!(!is_youtube_id("123456789012"));
    assert!(!is_youtube_id("12345 78901"));
}

#[test]
fn youtube_link_default_base() {
    assert_eq!(youtube_link("OEoXaMPEzfM"), "http://youtu.be/OEoXaMPEzfM");
}

#[test]
fn codec_base_gets_trailing_slash() {
    let codec = LinkCodec::new("https://youtu.be");
    assert_eq!(codec.base_url(), "https://youtu.be/");
    assert_eq!(codec.encode("OEoXaMPEzfM"), "https://youtu.be/OEoXaMPEzfM");
}

#[test]
fn codec_decodes_custom_base() {
    let codec = LinkCodec::new("https://video.example.org/yt/");
    assert_eq!(
        codec.decode("https://video.example.org/yt/OEoXaMPEzfM"),
        Some("OEoXaMPEzfM".into())
    );
    assert_eq!(codec.decode("https://video.example.org/yt/short"), None);
    assert_eq!(codec.decode("http://youtu.be/OEoXaMPEzfM"), Some("OEoXaMPEzfM".into()));
}

// --- compose_video_list ---

#[test]
fn compose_full_list() {
    let list = LinkCodec::default().compose_video_list(
        Some("OEoXaMPEzfM"),
        &strings(&["default.mp4", "default.webm"]),
    );
    assert_eq!(
        list,
        strings(&["http://youtu.be/OEoXaMPEzfM", "default.mp4", "default.webm"])
    );
}

#[test]
fn compose_bad_id_leaves_empty_slot() {
    let codec = LinkCodec::default();
    let sources = strings(&["default.mp4", "default.webm"]);
    assert_eq!(codec.compose_video_list(Some("12345678"), &sources)[0], "");
    assert_eq!(codec.compose_video_list(None, &sources)[0], "");
    assert_eq!(codec.compose_video_list(Some(""), &sources)[0], "");
}

#[test]
fn compose_pads_and_truncates_sources() {
    let codec = LinkCodec::default();
    assert_eq!(
        codec.compose_video_list(None, &strings(&["a.mp4"])),
        strings(&["", "a.mp4", ""])
    );
    assert_eq!(codec.compose_video_list(None, &[]), strings(&["", "", ""]));
    assert_eq!(
        codec.compose_video_list(None, &strings(&["a.mp4", "b.webm", "c.ogv"])),
        strings(&["", "a.mp4", "b.webm"])
    );
}

// --- split_video_list ---

#[test]
fn split_full_list() {
    let sources = LinkCodec::default().split_video_list(&strings(&[
        "http://youtu.be/12345678901",
        "video.mp4",
        "video.webm",
    ]));
    assert_eq!(sources.youtube_id, "12345678901");
    assert_eq!(sources.html5_sources, strings(&["video.mp4", "video.webm"]));
}

#[test]
fn split_without_youtube_link() {
    let sources = LinkCodec::default().split_video_list(&strings(&["video.mp4", "video.webm"]));
    assert_eq!(sources.youtube_id, "");
    assert_eq!(sources.html5_sources, strings(&["video.mp4", "video.webm"]));
}

#[test]
fn split_drops_empty_slots() {
    let sources = LinkCodec::default().split_video_list(&strings(&["", "video.mp4", ""]));
    assert_eq!(sources.youtube_id, "");
    assert_eq!(sources.html5_sources, strings(&["video.mp4"]));
}

#[test]
fn split_keeps_only_first_youtube_link() {
    let sources = LinkCodec::default().split_video_list(&strings(&[
        "http://youtu.be/AAAAAAAAAAA",
        "http://youtu.be/BBBBBBBBBBB",
    ]));
    assert_eq!(sources.youtube_id, "AAAAAAAAAAA");
    assert!(sources.html5_sources.is_empty());
}

#[test]
fn split_caps_sources_at_two() {
    let sources = LinkCodec::default().split_video_list(&strings(&["a.mp4", "b.webm", "c.ogv"]));
    assert_eq!(sources.youtube_id, "");
    assert_eq!(sources.html5_sources, strings(&["a.mp4", "b.webm"]));
}

#[test]
fn split_keeps_sources_verbatim() {
    let sources = LinkCodec::default().split_video_list(&strings(&["  ", " a.mp4", "page.html"]));
    assert_eq!(sources.html5_sources, strings(&[" a.mp4", "page.html"]));
}

#[test]
fn decode_accepts_any_eleven_characters_under_base() {
    let codec = LinkCodec::default();
    assert_eq!(codec.decode("http://youtu.be/abc.def.ghi"), Some("abc.def.ghi".into()));
    assert_eq!(codec.decode("http://youtu.be/abc.def.gh"), None);
}

#[test]
fn built_link_with_unusual_id_splits_back() {
    let codec = LinkCodec::default();
    let list = codec.compose_video_list(
        Some("abc.def.ghi"),
        &strings(&["default.mp4", "default.webm"]),
    );
    let sources = codec.split_video_list(&list);
    assert_eq!(sources.youtube_id, "abc.def.ghi");
    assert_eq!(sources.html5_sources, strings(&["default.mp4", "default.webm"]));
}

// --- proptest ---

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compose_then_split_restores_sources(
            id in proptest::collection::vec(any::<char>(), 11)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
            a in "[a-z]{1,8}\\.mp4",
            b in "[a-z]{1,8}\\.webm"
        ) {
            let codec = LinkCodec::default();
            let list = codec.compose_video_list(Some(&id), &[a.clone(), b.clone()]);
            let sources = codec.split_video_list(&list);
            prop_assert_eq!(sources.youtube_id, id);
            prop_assert_eq!(sources.html5_sources, vec![a, b]);
        }

        #[test]
        fn split_never_yields_more_than_two_sources(
            entries in proptest::collection::vec("[a-z]{0,6}(\\.mp4)?", 0..6)
        ) {
            let sources = LinkCodec::default().split_video_list(&entries);
            prop_assert!(sources.html5_sources.len() <= 2);
        }

        #[test]
        fn compose_rejects_other_lengths(id in "[A-Za-z0-9]{0,30}") {
            prop_assume!(id.len() != YOUTUBE_ID_LEN);
            let list = LinkCodec::default().compose_video_list(Some(&id), &[]);
            prop_assert_eq!(list[0].as_str(), "");
        }
    }
}
