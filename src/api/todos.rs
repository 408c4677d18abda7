//! Todo Endpoints
//!
//! `/todos` resource: listing, create, patch, toggle and soft delete.

use gravita_core::domain::{Task, TaskDraft, TaskId, TaskPatch};
use gravita_core::wire::{DeleteReceipt, TaskListing};
use gravita_core::TodoResult;

use super::RestClient;

impl RestClient {
    pub async fn fetch_todos(&self) -> TodoResult<Vec<Task>> {
        let listing: TaskListing = self.send(self.client.get(self.url("/todos"))).await?;
        Ok(listing.into_tasks())
    }

    pub async fn post_todo(&self, draft: &TaskDraft) -> TodoResult<Task> {
        self.send(self.client.post(self.url("/todos")).json(draft)).await
    }

    pub async fn patch_todo(&self, id: TaskId, patch: &TaskPatch) -> TodoResult<Task> {
        let url = self.url(&format!("/todos/{}", id));
        self.send(self.client.patch(url).json(patch)).await
    }

    pub async fn patch_toggle(&self, id: TaskId) -> TodoResult<Task> {
        let url = self.url(&format!("/todos/{}/toggle", id));
        self.send(self.client.patch(url)).await
    }

    /// Moves the task into the recycle bin server-side
    pub async fn soft_delete(&self, id: TaskId) -> TodoResult<DeleteReceipt> {
        let url = self.url(&format!("/todos/{}", id));
        self.send(self.client.delete(url)).await
    }
}
