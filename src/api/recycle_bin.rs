//! Recycle Bin Endpoints

use gravita_core::domain::{Task, TaskId};
use gravita_core::wire::{BatchRestoreRequest, BatchRestoreResponse, Confirmation, TaskListing};
use gravita_core::TodoResult;

use super::RestClient;

impl RestClient {
    pub async fn fetch_recycle_bin(&self) -> TodoResult<Vec<Task>> {
        let listing: TaskListing = self.send(self.client.get(self.url("/recycle-bin"))).await?;
        Ok(listing.into_tasks())
    }

    pub async fn post_restore(&self, id: TaskId) -> TodoResult<Task> {
        let url = self.url(&format!("/recycle-bin/{}/restore", id));
        self.send(self.client.post(url)).await
    }

    pub async fn post_batch_restore(&self, ids: &[TaskId]) -> TodoResult<BatchRestoreResponse> {
        let body = BatchRestoreRequest {
            todo_ids: ids.to_vec(),
        };
        let url = self.url("/recycle-bin/batch-restore");
        self.send(self.client.post(url).json(&body)).await
    }

    pub async fn delete_recycled(&self, id: TaskId) -> TodoResult<Confirmation> {
        let url = self.url(&format!("/recycle-bin/{}", id));
        self.send(self.client.delete(url)).await
    }

    pub async fn delete_all_recycled(&self) -> TodoResult<Confirmation> {
        self.send(self.client.delete(self.url("/recycle-bin"))).await
    }
}
