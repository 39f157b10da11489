//! Creates a new thread.

use std::sync::Arc;

use serde_json::Value;

use domains::error::Result;
use domains::models::{AddThread, AddedThread};
use domains::traits::ThreadRepository;

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread> {
        let add_thread = AddThread::parse(payload)?;
        self.thread_repository.add_thread(&add_thread).await
    }
}
