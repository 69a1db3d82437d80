#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use short_url_service::domain::entities::{LookupKey, NewUrlMapping, UrlMapping};
use short_url_service::domain::repositories::UrlMappingRepository;
use short_url_service::error::AppError;
use short_url_service::infrastructure::persistence::InMemoryUrlMappingRepository;
use short_url_service::routes::routes;
use short_url_service::state::AppState;

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlMappingRepository>) {
    let repository = Arc::new(InMemoryUrlMappingRepository::new());
    let state = AppState::from_repository(repository.clone(), 3);

    (state, repository)
}

pub fn create_state_with(repository: Arc<dyn UrlMappingRepository>) -> AppState {
    AppState::from_repository(repository, 3)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app: Router = routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_mapping(
    repository: &InMemoryUrlMappingRepository,
    long_url: &str,
    short_url: &str,
) -> UrlMapping {
    repository
        .insert(NewUrlMapping {
            long_url: long_url.to_string(),
            short_url: short_url.to_string(),
        })
        .await
        .unwrap()
}

/// Store whose every call fails, as if the database were unreachable.
pub struct UnreachableRepository;

#[async_trait]
impl UrlMappingRepository for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_one(&self, _key: &LookupKey) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

/// Store that reports every short code as already taken.
pub struct SaturatedRepository;

#[async_trait]
impl UrlMappingRepository for SaturatedRepository {
    async fn find_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(Vec::new())
    }

    async fn find_one(&self, key: &LookupKey) -> Result<Option<UrlMapping>, AppError> {
        match key {
            LookupKey::ShortUrl(code) => Ok(Some(UrlMapping::new(
                1,
                "https://taken.example".to_string(),
                code.clone(),
            ))),
            LookupKey::LongUrl(_) => Ok(None),
        }
    }

    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        panic!("insert must not be reached when every code is taken");
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
