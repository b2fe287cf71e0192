#![allow(dead_code)]

use std::sync::Arc;

use minisite_manager::application::commands::PublishVersionCommand;
use minisite_manager::application::rewrite::RouteRegistrar;
use minisite_manager::application::services::{
    ConfigService, MinisiteService, ReviewService, VersionService,
};
use minisite_manager::domain::entities::{Minisite, NewMinisite, Version};
use minisite_manager::infrastructure::memory::{
    MemoryConfigRepository, MemoryMinisiteRepository, MemoryReviewRepository, MemoryStore,
    MemoryVersionRepository,
};
use minisite_manager::state::AppState;

/// Builds an [`AppState`] over the in-memory backend, plus the store for
/// tests that need to poke at it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    let minisite_repo = Arc::new(MemoryMinisiteRepository::new(store.clone()));
    let version_repo = Arc::new(MemoryVersionRepository::new(store.clone()));
    let review_repo = Arc::new(MemoryReviewRepository::new(store.clone()));
    let config_repo = Arc::new(MemoryConfigRepository::new(store.clone()));

    let state = AppState {
        minisite_service: Arc::new(MinisiteService::new(minisite_repo.clone())),
        version_service: Arc::new(VersionService::new(minisite_repo.clone(), version_repo)),
        review_service: Arc::new(ReviewService::new(minisite_repo, review_repo)),
        config_service: Arc::new(ConfigService::new(config_repo)),
        registrar: Arc::new(RouteRegistrar::new()),
    };

    (state, store)
}

/// Creates a minisite (with its initial draft version) through the service.
pub async fn create_test_minisite(
    state: &AppState,
    owner: i64,
    business: &str,
    location: &str,
) -> Minisite {
    state
        .minisite_service
        .create_minisite(NewMinisite {
            business_slug: business.to_string(),
            location_slug: location.to_string(),
            title: format!("{business} {location}"),
            owner_user_id: owner,
            site_json: serde_json::json!({ "headline": "hello" }),
        })
        .await
        .unwrap()
}

/// Publishes the newest version of a minisite.
pub async fn publish_latest_version(state: &AppState, owner: i64, site_id: &str) -> Version {
    let versions = state
        .version_service
        .list_versions(site_id, owner, 50, 0)
        .await
        .unwrap();
    let draft = versions.first().expect("minisite has no versions");

    state
        .version_service
        .publish_version(PublishVersionCommand::new(site_id, draft.id, owner).unwrap())
        .await
        .unwrap()
}
