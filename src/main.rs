// src/main.rs
//
// Composition root: wires storage → repositories → services, loads the
// persisted state, and leaves everything behind an AppState for callers.

use std::sync::Arc;

use animelib::application::AppState;
use animelib::events::{AnimeAdded, AnimeDeleted, EventBus, LibraryLoaded};
use animelib::repositories::{
    KvLibraryRepository, KvSettingsRepository, LibraryRepository, SettingsRepository,
};
use animelib::services::{LibraryService, PlaybackService, SettingsService};
use animelib::storage::{FsKeyValueStore, KeyValueStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    let store: Arc<dyn KeyValueStore> = Arc::new(FsKeyValueStore::open_default()?);

    // 2. REPOSITORIES
    let library_repo: Arc<dyn LibraryRepository> =
        Arc::new(KvLibraryRepository::new(store.clone()));
    let settings_repo: Arc<dyn SettingsRepository> =
        Arc::new(KvSettingsRepository::new(store.clone()));

    // 3. SERVICES
    let library_service = Arc::new(LibraryService::new(library_repo, event_bus.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo, event_bus.clone()));
    let playback_service = Arc::new(PlaybackService::new(
        library_service.clone(),
        event_bus.clone(),
    ));

    // 4. EVENT HANDLER REGISTRATION (observability wiring)
    event_bus.subscribe::<LibraryLoaded, _>(|event| {
        log::info!("library loaded with {} anime", event.anime_count);
    });
    event_bus.subscribe::<AnimeAdded, _>(|event| {
        log::info!("anime added: {} ({})", event.title, event.anime_id);
    });
    event_bus.subscribe::<AnimeDeleted, _>(|event| {
        log::info!("anime deleted: {}", event.anime_id);
    });

    // 5. STARTUP LOAD
    library_service.load().await;
    settings_service.load().await;

    // 6. APPLICATION STATE
    let app_state = AppState {
        event_bus,
        library_service,
        settings_service,
        playback_service,
    };

    log::info!(
        "ready: {} anime in the library, language {:?}, theme {:?}",
        app_state.library_service.anime_count(),
        app_state.settings_service.current().language,
        app_state.settings_service.current().theme,
    );

    Ok(())
}
