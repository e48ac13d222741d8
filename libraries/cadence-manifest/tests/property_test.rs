//! Property-based tests for the manifest parser

use cadence_manifest::parse;
use proptest::prelude::*;

fn manifest_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "#EXTINF:-?[0-9]{1,3},[A-Za-z ()-]{0,20}",
        "#EXTINF:[0-9]{1,3}",
        "#EXTM3U",
        "#[A-Z]{3,8}:[a-z]{0,5}",
        "https://cdn\\.example\\.com/[a-z]{1,8}\\.mp3",
        "[ \t]{0,3}",
    ]
}

proptest! {
    /// Property: never more tracks than directives, never a bad locator
    #[test]
    fn output_bounded_by_directives(lines in prop::collection::vec(manifest_line(), 0..40)) {
        let text = lines.join("\n");
        let directives = lines
            .iter()
            .filter(|l| l.trim().starts_with("#EXTINF:"))
            .count();

        let tracks = parse(&text);

        prop_assert!(tracks.len() <= directives);
        for track in &tracks {
            prop_assert!(!track.url.is_empty());
            prop_assert!(!track.url.starts_with('#'));
            prop_assert!(!track.title.is_empty());
        }
    }

    /// Property: arbitrary input never panics
    #[test]
    fn never_panics(text in "\\PC{0,200}") {
        let _ = parse(&text);
    }
}
