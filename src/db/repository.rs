use async_trait::async_trait;

use crate::db::models::{AnalyticsEvent, ContactSubmission};
use crate::error::AppError;

/// Repository trait for contact-form submissions.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a submission and return its id.
    async fn insert(&self, contact: ContactSubmission) -> Result<String, AppError>;

    /// Total number of stored submissions.
    async fn count(&self) -> Result<u64, AppError>;

    /// The most recent submissions, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ContactSubmission>, AppError>;
}

/// Repository trait for page-view analytics events.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn insert(&self, event: AnalyticsEvent) -> Result<(), AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}

/// MongoDB implementation of the ContactRepository.
///
/// Only available when the `ssr` feature is enabled (i.e., server-side).
#[cfg(feature = "ssr")]
pub struct MongoContactRepository {
    collection: mongodb::Collection<ContactSubmission>,
}

#[cfg(feature = "ssr")]
impl MongoContactRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("contacts"),
        }
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn insert(&self, contact: ContactSubmission) -> Result<String, AppError> {
        let id = contact.id.clone();
        self.collection
            .insert_one(&contact)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(id)
    }

    async fn count(&self) -> Result<u64, AppError> {
        use mongodb::bson::doc;

        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ContactSubmission>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let options = FindOptions::builder()
            .sort(doc! { "submitted_at": -1 })
            .limit(limit as i64)
            .build();

        let mut cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut contacts = Vec::new();
        use futures::TryStreamExt;
        while let Some(contact) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            contacts.push(contact);
        }

        Ok(contacts)
    }
}

/// MongoDB implementation of the AnalyticsRepository.
#[cfg(feature = "ssr")]
pub struct MongoAnalyticsRepository {
    collection: mongodb::Collection<AnalyticsEvent>,
}

#[cfg(feature = "ssr")]
impl MongoAnalyticsRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("analytics"),
        }
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl AnalyticsRepository for MongoAnalyticsRepository {
    async fn insert(&self, event: AnalyticsEvent) -> Result<(), AppError> {
        self.collection
            .insert_one(&event)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        use mongodb::bson::doc;

        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// In-memory ContactRepository, used when no database is configured
/// (demo mode) and by the integration tests.
#[derive(Default)]
pub struct MemoryContactRepository {
    contacts: std::sync::Mutex<Vec<ContactSubmission>>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn insert(&self, contact: ContactSubmission) -> Result<String, AppError> {
        let id = contact.id.clone();
        self.contacts
            .lock()
            .map_err(|_| AppError::Internal("contact store poisoned".into()))?
            .push(contact);
        Ok(id)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self
            .contacts
            .lock()
            .map_err(|_| AppError::Internal("contact store poisoned".into()))?
            .len() as u64)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ContactSubmission>, AppError> {
        let contacts = self
            .contacts
            .lock()
            .map_err(|_| AppError::Internal("contact store poisoned".into()))?;
        Ok(contacts.iter().rev().take(limit).cloned().collect())
    }
}

/// In-memory AnalyticsRepository counterpart of [`MemoryContactRepository`].
#[derive(Default)]
pub struct MemoryAnalyticsRepository {
    events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryAnalyticsRepository {
    async fn insert(&self, event: AnalyticsEvent) -> Result<(), AppError> {
        self.events
            .lock()
            .map_err(|_| AppError::Internal("analytics store poisoned".into()))?
            .push(event);
        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self
            .events
            .lock()
            .map_err(|_| AppError::Internal("analytics store poisoned".into()))?
            .len() as u64)
    }
}
