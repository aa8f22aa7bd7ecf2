use serde_json::json;
use std::marker::PhantomData;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, ADMIN_PREFIX};
use crate::model::{Featurable, HasStatus, Resource};
use crate::reorder::{OrderAssignment, Orderable, ReorderPlan, SwapPersistence};

/// CRUD plus single-field patches for one entity type.
pub struct ResourceService<E> {
    client: ApiClient,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Resource> ResourceService<E> {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `/api/admin/<entity>`
    #[must_use]
    pub fn collection_path() -> String {
        format!("{ADMIN_PREFIX}/{}", E::PATH)
    }

    /// `/api/admin/<entity>/{id}`
    #[must_use]
    pub fn item_path(id: &E::Id) -> String {
        format!("{ADMIN_PREFIX}/{}/{id}", E::PATH)
    }

    /// Rows in backend order.
    pub async fn list(&self) -> Result<Vec<E>, ApiError> {
        let rows: Vec<E> = self.client.get(&Self::collection_path()).await?;
        debug!(entity = E::PATH, count = rows.len(), "Listed rows");
        Ok(rows)
    }

    pub async fn get(&self, id: &E::Id) -> Result<E, ApiError> {
        self.client.get(&Self::item_path(id)).await
    }

    pub async fn create(&self, input: &E::Input) -> Result<(), ApiError> {
        self.client.post(&Self::collection_path(), input).await
    }

    /// Full-body update.
    pub async fn update(&self, id: &E::Id, input: &E::Input) -> Result<(), ApiError> {
        self.client.put(&Self::item_path(id), input).await
    }

    pub async fn delete(&self, id: &E::Id) -> Result<(), ApiError> {
        self.client.delete(&Self::item_path(id)).await
    }
}

impl<E: HasStatus> ResourceService<E> {
    /// Any value of the status set may be sent; the backend decides which
    /// transitions it accepts.
    pub async fn set_status(&self, id: &E::Id, status: E::Status) -> Result<(), ApiError> {
        let path = format!("{}/status", Self::item_path(id));
        self.client.patch(&path, &json!({ "status": status })).await
    }
}

impl<E: Featurable> ResourceService<E> {
    pub async fn set_featured(&self, id: &E::Id, featured: bool) -> Result<(), ApiError> {
        let path = format!("{}/featured", Self::item_path(id));
        self.client.patch(&path, &json!({ "is_featured": featured })).await
    }
}

impl<E: Orderable> ResourceService<E> {
    pub async fn patch_display_order(&self, id: &E::Id, display_order: u32) -> Result<(), ApiError> {
        let path = format!("{}/display-order", Self::item_path(id));
        self.client
            .patch(&path, &json!({ "display_order": display_order }))
            .await
    }

    pub async fn reorder_batch(&self, assignments: &[OrderAssignment<E::Id>]) -> Result<(), ApiError> {
        let path = format!("{}/reorder", Self::collection_path());
        self.client.patch(&path, assignments).await
    }

    /// Write a planned move back.
    ///
    /// A sequential swap whose second call fails leaves the backend with a
    /// duplicated order until the next successful move; nothing is rolled
    /// back.
    pub async fn persist(
        &self,
        plan: &ReorderPlan<E::Id>,
        persistence: SwapPersistence,
    ) -> Result<(), ApiError> {
        match (plan, persistence) {
            (ReorderPlan::Adopt { target }, _) => {
                self.patch_display_order(&target.id, target.display_order).await
            }
            (ReorderPlan::Swap { .. }, SwapPersistence::Batched) => {
                self.reorder_batch(&plan.assignments()).await
            }
            (ReorderPlan::Swap { target, partner }, SwapPersistence::Sequential) => {
                self.patch_display_order(&target.id, target.display_order).await?;
                if let Err(e) = self
                    .patch_display_order(&partner.id, partner.display_order)
                    .await
                {
                    warn!(
                        entity = E::PATH,
                        moved = %target.id,
                        neighbor = %partner.id,
                        "Swap half-applied: {}", e
                    );
                    return Err(e);
                }
                Ok(())
            }
        }
    }
}
