//! REST Backend Client
//!
//! HTTP bindings to the to-do backend, organized by resource.

mod recycle_bin;
mod todos;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use gravita_core::domain::{Task, TaskDraft, TaskId, TaskPatch};
use gravita_core::wire::{error_detail, BatchRestoreResponse, Confirmation, DeleteReceipt};
use gravita_core::{TodoApi, TodoError, TodoResult};

/// Shared HTTP client bound to one API base URL
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base: String,
}

impl RestClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send a request and decode a JSON body, mapping non-2xx answers to
    /// the backend's `detail` message
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> TodoResult<T> {
        let response = request
            .send()
            .await
            .map_err(|err| TodoError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_detail(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            });
            return Err(TodoError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| TodoError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoApi for RestClient {
    async fn list_todos(&self) -> TodoResult<Vec<Task>> {
        self.fetch_todos().await
    }

    async fn create_todo(&self, draft: &TaskDraft) -> TodoResult<Task> {
        self.post_todo(draft).await
    }

    async fn update_todo(&self, id: TaskId, patch: &TaskPatch) -> TodoResult<Task> {
        self.patch_todo(id, patch).await
    }

    async fn toggle_todo(&self, id: TaskId) -> TodoResult<Task> {
        self.patch_toggle(id).await
    }

    async fn delete_todo(&self, id: TaskId) -> TodoResult<DeleteReceipt> {
        self.soft_delete(id).await
    }

    async fn list_recycle_bin(&self) -> TodoResult<Vec<Task>> {
        self.fetch_recycle_bin().await
    }

    async fn restore_todo(&self, id: TaskId) -> TodoResult<Task> {
        self.post_restore(id).await
    }

    async fn batch_restore(&self, ids: &[TaskId]) -> TodoResult<BatchRestoreResponse> {
        self.post_batch_restore(ids).await
    }

    async fn purge_todo(&self, id: TaskId) -> TodoResult<Confirmation> {
        self.delete_recycled(id).await
    }

    async fn clear_recycle_bin(&self) -> TodoResult<Confirmation> {
        self.delete_all_recycled().await
    }
}
