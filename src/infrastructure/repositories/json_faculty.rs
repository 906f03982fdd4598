// src/infrastructure/repositories/json_faculty.rs
use super::FACULTY_IDENTITIES_FILE;
use crate::domain::errors::DomainResult;
use crate::domain::faculty::{FacultyIdentities, FacultyIdentityRepository};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};

pub struct JsonFacultyIdentityRepository {
    store: Arc<JsonStore>,
}

impl JsonFacultyIdentityRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FacultyIdentityRepository for JsonFacultyIdentityRepository {
    async fn load(&self) -> DomainResult<FacultyIdentities> {
        let raw: BTreeMap<String, String> = self.store.read(FACULTY_IDENTITIES_FILE).await?;
        Ok(FacultyIdentities::new(raw))
    }
}
