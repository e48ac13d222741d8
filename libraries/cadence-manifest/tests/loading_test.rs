//! Integration tests for playlist loading
//!
//! Exercise the store against every manifest source, including failure
//! isolation between playlists.

use cadence_core::{CadenceError, ErrorKind, PlaylistId};
use cadence_manifest::{
    FileManifestSource, HttpManifestSource, ManifestError, ManifestSource, MemoryManifestSource,
    PlaylistCatalog, PlaylistSpec, PlaylistStore,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALL_MANIFEST: &str = "#EXTM3U\n\
#EXTINF:-1,Son Tung M-TP - Lac Troi\n\
https://cdn.example.com/lac-troi.mp3\n\
#EXTINF:-1,Hoa (Cover)\n\
https://cdn.example.com/hoa.mp3\n\
#EXTINF:-1,Broken entry\n\
#EXTINF:-1,Instrumental\n\
https://cdn.example.com/instrumental.mp3\n";

const VN_MANIFEST: &str = "#EXTM3U\n#EXTINF:-1,My Tam - Uoc Gi\nvn/uoc-gi.mp3\n";

fn catalog() -> PlaylistCatalog {
    PlaylistCatalog::default()
}

// =============================================================================
// Isolated loading
// =============================================================================

mod isolated {
    use super::*;

    #[tokio::test]
    async fn loads_every_playlist() {
        let source = MemoryManifestSource::new()
            .with("All_Music.m3u8", ALL_MANIFEST)
            .with("VN_Music.m3u8", VN_MANIFEST)
            .with("Nhac_Hoa.m3u8", "#EXTM3U\n");

        let report = PlaylistStore::load(&source, &catalog()).await;
        assert!(report.is_complete());

        let store = report.store;
        assert_eq!(store.len(), 3);

        let all = store.switch(&PlaylistId::new("all"));
        let titles: Vec<&str> = all.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Son Tung M-TP - Lac Troi", "Hoa (Cover)", "Instrumental"]);
        assert_eq!(all.tracks[0].artist, "Son Tung M-TP");
        assert_eq!(all.tracks[1].artist, "Hoa");
        assert_eq!(all.tracks[2].artist, "Unknown Artist");
        assert_eq!(all.title, "All Music");

        assert_eq!(store.switch(&PlaylistId::new("vn")).len(), 1);
        assert!(store.switch(&PlaylistId::new("chinese")).is_empty());
    }

    #[tokio::test]
    async fn failure_is_isolated_to_its_playlist() {
        // VN manifest missing: other playlists must still load
        let source = MemoryManifestSource::new()
            .with("All_Music.m3u8", ALL_MANIFEST)
            .with("Nhac_Hoa.m3u8", VN_MANIFEST);

        let report = PlaylistStore::load(&source, &catalog()).await;
        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id.as_str(), "vn");
        assert_eq!(report.failures[0].error.kind(), ErrorKind::ManifestUnavailable);

        let notifications = report.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, ErrorKind::ManifestUnavailable);
        assert!(notifications[0].message.contains("Vietnamese Music"));

        let store = &report.store;
        assert_eq!(store.switch(&PlaylistId::new("all")).len(), 3);
        let vn = store.switch(&PlaylistId::new("vn"));
        assert!(vn.is_empty());
        assert_eq!(vn.title, "Vietnamese Music");
        assert_eq!(store.switch(&PlaylistId::new("chinese")).len(), 1);
    }

    #[tokio::test]
    async fn every_source_failing_still_yields_store() {
        let report = PlaylistStore::load(&MemoryManifestSource::new(), &catalog()).await;
        assert_eq!(report.failures.len(), 3);
        assert_eq!(report.store.len(), 3);
        assert!(report.store.ids().iter().all(|id| report.store.switch(id).is_empty()));
    }
}

// =============================================================================
// Strict loading
// =============================================================================

mod strict {
    use super::*;

    #[tokio::test]
    async fn succeeds_when_all_available() {
        let source = MemoryManifestSource::new()
            .with("All_Music.m3u8", ALL_MANIFEST)
            .with("VN_Music.m3u8", VN_MANIFEST)
            .with("Nhac_Hoa.m3u8", "");

        let store = PlaylistStore::load_strict(&source, &catalog()).await.unwrap();
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn first_failure_aborts() {
        let source = MemoryManifestSource::new()
            .with("All_Music.m3u8", ALL_MANIFEST)
            .with("Nhac_Hoa.m3u8", VN_MANIFEST);

        let err = PlaylistStore::load_strict(&source, &catalog())
            .await
            .unwrap_err();

        match err {
            CadenceError::ManifestUnavailable { playlist, .. } => assert_eq!(playlist, "vn"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

// =============================================================================
// HTTP source
// =============================================================================

mod http {
    use super::*;

    #[tokio::test]
    async fn fetches_relative_to_base() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/music/All_Music.m3u8"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ALL_MANIFEST))
            .mount(&server)
            .await;

        let source = HttpManifestSource::new(&format!("{}/music", server.uri())).unwrap();
        let text = source.fetch("All_Music.m3u8").await.unwrap();
        assert_eq!(text, ALL_MANIFEST);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/VN_Music.m3u8"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<html>not found</html>"))
            .mount(&server)
            .await;

        let source = HttpManifestSource::new(&server.uri()).unwrap();
        match source.fetch("VN_Music.m3u8").await {
            Err(ManifestError::Status { status, location }) => {
                assert_eq!(status, 404);
                assert_eq!(location, "VN_Music.m3u8");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_isolates_http_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/All_Music.m3u8"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ALL_MANIFEST))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/VN_Music.m3u8"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Nhac_Hoa.m3u8"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VN_MANIFEST))
            .mount(&server)
            .await;

        let source = HttpManifestSource::new(&server.uri()).unwrap();
        let report = PlaylistStore::load(&source, &catalog()).await;

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.store.switch(&"all".into()).len(), 3);
        assert!(report.store.switch(&"vn".into()).is_empty());
        assert_eq!(report.store.switch(&"chinese".into()).len(), 1);
    }
}

// =============================================================================
// File source
// =============================================================================

mod file {
    use super::*;

    #[tokio::test]
    async fn reads_from_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mine.m3u8"), VN_MANIFEST).unwrap();

        let catalog = PlaylistCatalog::new(vec![
            PlaylistSpec::new("mine", "Mine", "mine.m3u8"),
            PlaylistSpec::new("gone", "Gone", "gone.m3u8"),
        ]);

        let source = FileManifestSource::new(dir.path());
        let report = PlaylistStore::load(&source, &catalog).await;

        assert_eq!(report.store.switch(&"mine".into()).len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id.as_str(), "gone");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileManifestSource::new(dir.path());
        assert!(matches!(
            source.fetch("nope.m3u8").await,
            Err(ManifestError::Io { .. })
        ));
    }
}
