//! Advertisement Service
//!
//! CRUD orchestration over the advertisement document store. This service is
//! the only place where documents and `Advertisement` values are converted
//! into each other.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::{
    Advertisement, AdvertisementDocument, AdvertisementRepository, Page, PageRequest,
    ValidationError,
};
use crate::infrastructure::metrics;
use crate::shared::error::StoreError;

/// Advertisement service trait
#[async_trait]
pub trait AdvertisementService: Send + Sync {
    /// Get one page of advertisements in store order
    async fn get_advertisements(
        &self,
        request: PageRequest,
    ) -> Result<Page<Advertisement>, AdvertisementError>;

    /// Get advertisement by ID
    async fn get_advertisement(&self, ad_id: &str) -> Result<Advertisement, AdvertisementError>;

    /// Create a new advertisement under a freshly generated ID
    async fn create_advertisement(
        &self,
        advertisement: Advertisement,
    ) -> Result<Advertisement, AdvertisementError>;

    /// Delete advertisement by ID
    async fn delete_advertisement(&self, ad_id: &str) -> Result<(), AdvertisementError>;

    /// Replace every field of an existing advertisement, keeping its ID
    async fn update_advertisement(
        &self,
        ad_id: &str,
        advertisement: Advertisement,
    ) -> Result<Advertisement, AdvertisementError>;
}

/// Advertisement service errors
#[derive(Debug, thiserror::Error)]
pub enum AdvertisementError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Generic(String),
}

impl AdvertisementError {
    fn not_found(ad_id: &str) -> Self {
        Self::NotFound(format!("Advertisement with id: {} not found", ad_id))
    }

    /// Label used for the operation outcome metric.
    fn outcome(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::Generic(_) => "generic_error",
        }
    }
}

impl From<StoreError> for AdvertisementError {
    fn from(err: StoreError) -> Self {
        Self::Generic(err.to_string())
    }
}

/// AdvertisementService implementation
pub struct AdvertisementServiceImpl {
    repo: Arc<dyn AdvertisementRepository>,
}

impl AdvertisementServiceImpl {
    pub fn new(repo: Arc<dyn AdvertisementRepository>) -> Self {
        Self { repo }
    }

    async fn find_document(&self, ad_id: &str) -> Result<AdvertisementDocument, AdvertisementError> {
        match self.repo.find_by_id(ad_id).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => {
                debug!(ad_id, "Advertisement not found");
                Err(AdvertisementError::not_found(ad_id))
            }
            Err(e) => {
                error!(ad_id, error = %e, "Error loading advertisement");
                Err(e.into())
            }
        }
    }

    async fn save_document(
        &self,
        operation: &'static str,
        document: AdvertisementDocument,
    ) -> Result<Advertisement, AdvertisementError> {
        let ad_id = document.id.clone();
        let stored = self.repo.save(document).await.map_err(|e| {
            error!(ad_id = %ad_id, error = %e, "Error on {} advertisement", operation);
            AdvertisementError::from(e)
        })?;
        to_advertisement(stored)
    }
}

/// Rehydrate a stored document; one that fails validation is a generic error.
fn to_advertisement(document: AdvertisementDocument) -> Result<Advertisement, AdvertisementError> {
    let ad_id = document.id.clone();
    document.into_advertisement().map_err(|e| {
        error!(ad_id = %ad_id, error = %e, "Stored advertisement failed validation");
        AdvertisementError::Generic(format!("Stored advertisement {} is invalid: {}", ad_id, e))
    })
}

/// Report a request that never reached the store because its advertisement
/// failed validation.
pub fn reject_invalid(operation: &'static str, err: ValidationError) -> AdvertisementError {
    let err = AdvertisementError::from(err);
    metrics::record_operation(operation, err.outcome());
    debug!(operation, error = %err, "Advertisement rejected");
    err
}

fn observe<T>(
    operation: &'static str,
    result: Result<T, AdvertisementError>,
) -> Result<T, AdvertisementError> {
    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.outcome(),
    };
    metrics::record_operation(operation, outcome);
    result
}

#[async_trait]
impl AdvertisementService for AdvertisementServiceImpl {
    async fn get_advertisements(
        &self,
        request: PageRequest,
    ) -> Result<Page<Advertisement>, AdvertisementError> {
        let (number, size) = (request.page, request.size);
        let result: Result<Page<Advertisement>, AdvertisementError> = async {
            let page = self.repo.find_page(request).await.map_err(|e| {
                error!(page = number, size, error = %e, "Error loading advertisements");
                AdvertisementError::from(e)
            })?;
            debug!(
                page = page.number,
                returned = page.content.len(),
                total = page.total_elements,
                "Advertisements page loaded"
            );
            page.try_map(to_advertisement)
        }
        .await;

        observe("list", result)
    }

    async fn get_advertisement(&self, ad_id: &str) -> Result<Advertisement, AdvertisementError> {
        let result = match self.find_document(ad_id).await {
            Ok(document) => to_advertisement(document),
            Err(e) => Err(e),
        };

        observe("get", result)
    }

    async fn create_advertisement(
        &self,
        advertisement: Advertisement,
    ) -> Result<Advertisement, AdvertisementError> {
        let ad_id = Uuid::new_v4().to_string();
        let document = AdvertisementDocument::from_advertisement(ad_id.as_str(), &advertisement);

        let result = self.save_document("create", document).await;
        if result.is_ok() {
            info!(ad_id = %ad_id, "Advertisement created");
        }

        observe("create", result)
    }

    async fn delete_advertisement(&self, ad_id: &str) -> Result<(), AdvertisementError> {
        let result: Result<(), AdvertisementError> = async {
            self.find_document(ad_id).await?;

            let deleted = self.repo.delete(ad_id).await.map_err(|e| {
                error!(ad_id, error = %e, "Error deleting advertisement");
                AdvertisementError::from(e)
            })?;

            // Removed by someone else between the lookup and the delete.
            if !deleted {
                return Err(AdvertisementError::not_found(ad_id));
            }

            info!(ad_id, "Advertisement deleted");
            Ok(())
        }
        .await;

        observe("delete", result)
    }

    async fn update_advertisement(
        &self,
        ad_id: &str,
        advertisement: Advertisement,
    ) -> Result<Advertisement, AdvertisementError> {
        let result: Result<Advertisement, AdvertisementError> = async {
            let mut document = self.find_document(ad_id).await?;
            document.overwrite_with(&advertisement);

            let updated = self.save_document("update", document).await?;
            info!(ad_id, "Advertisement updated");
            Ok(updated)
        }
        .await;

        observe("update", result)
    }
}
