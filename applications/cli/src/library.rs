//! Playlist loading for the front-end

use cadence_core::{Notification, Playlist};
use cadence_manifest::{ManifestSource, PlaylistCatalog, PlaylistStore};
use tracing::info;

/// Loaded playlists plus anything the user should be told about
#[derive(Debug)]
pub struct Library {
    pub store: PlaylistStore,
    pub notifications: Vec<Notification>,
}

/// Load every catalog playlist
///
/// Isolated loading reports one notification per failed playlist. Strict
/// loading gives up on the first failure, leaves every playlist empty and
/// reports a single notification.
pub async fn load_library(
    source: &dyn ManifestSource,
    catalog: &PlaylistCatalog,
    strict: bool,
) -> Library {
    if strict {
        return match PlaylistStore::load_strict(source, catalog).await {
            Ok(store) => Library {
                store,
                notifications: Vec::new(),
            },
            Err(_) => Library {
                store: PlaylistStore::from_playlists(
                    catalog
                        .iter()
                        .map(|spec| Playlist::empty(spec.id.clone(), spec.title.clone())),
                ),
                notifications: vec![Notification::manifest_unavailable()],
            },
        };
    }

    let report = PlaylistStore::load(source, catalog).await;
    let notifications = report.notifications();
    info!(
        playlists = report.store.len(),
        failed = report.failures.len(),
        "Library loaded"
    );

    Library {
        store: report.store,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::ErrorKind;
    use cadence_manifest::MemoryManifestSource;

    fn source() -> MemoryManifestSource {
        MemoryManifestSource::new()
            .with("All_Music.m3u8", "#EXTINF:-1,A - One\none.mp3\n")
            .with("Nhac_Hoa.m3u8", "#EXTINF:-1,B - Two\ntwo.mp3\n")
    }

    #[tokio::test]
    async fn isolated_load_reports_each_failure() {
        let library = load_library(&source(), &PlaylistCatalog::default(), false).await;

        assert_eq!(library.store.len(), 3);
        assert_eq!(library.store.switch(&"all".into()).len(), 1);
        assert!(library.store.switch(&"vn".into()).is_empty());
        assert_eq!(library.notifications.len(), 1);
        assert!(library.notifications[0].message.contains("Vietnamese Music"));
    }

    #[tokio::test]
    async fn strict_load_empties_everything() {
        let library = load_library(&source(), &PlaylistCatalog::default(), true).await;

        assert_eq!(library.store.len(), 3);
        assert!(library
            .store
            .ids()
            .iter()
            .all(|id| library.store.switch(id).is_empty()));
        assert_eq!(
            library.notifications,
            vec![Notification::manifest_unavailable()]
        );
        assert_eq!(library.notifications[0].kind, ErrorKind::ManifestUnavailable);
    }
}
