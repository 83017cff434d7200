use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One pending erasure request: the match id to forget and the data
/// mappers it applies to (all of them when empty).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionQueueItem {
    #[serde(rename = "MatchId")]
    pub match_id: String,
    #[serde(rename = "DataMappers", default)]
    pub data_mappers: Vec<String>,
}

/// Keyed record store backing the queue. The production store lives
/// outside this crate; tests and the in-process default use memory.
pub trait QueueStore {
    fn put(&mut self, item: DeletionQueueItem) -> Result<()>;
    fn scan(&self) -> Result<Vec<DeletionQueueItem>>;
    fn delete(&mut self, match_id: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryQueueStore {
    items: HashMap<String, DeletionQueueItem>,
}

impl QueueStore for MemoryQueueStore {
    fn put(&mut self, item: DeletionQueueItem) -> Result<()> {
        self.items.insert(item.match_id.clone(), item);
        Ok(())
    }

    // Sorted by match id so listings are deterministic.
    fn scan(&self) -> Result<Vec<DeletionQueueItem>> {
        let mut items: Vec<_> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.match_id.cmp(&b.match_id));
        Ok(items)
    }

    fn delete(&mut self, match_id: &str) -> Result<()> {
        self.items.remove(match_id);
        Ok(())
    }
}

/// Starts the deletion workflow over the queued match ids.
pub trait JobRunner {
    /// Returns the execution ARN of the started workflow.
    fn start_execution(&self, input: &str) -> Result<String>;
}

pub struct DeletionQueue<S> {
    store: S,
}

impl<S: QueueStore> DeletionQueue<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores the request and echoes it back.
    pub fn enqueue(&mut self, item: DeletionQueueItem) -> Result<DeletionQueueItem> {
        info!(match_id = %item.match_id, "queueing deletion");
        self.store.put(item.clone())?;
        Ok(item)
    }

    pub fn list(&self) -> Result<Vec<DeletionQueueItem>> {
        self.store.scan()
    }

    /// Cancelling an id that was never queued is not an error.
    pub fn cancel(&mut self, match_id: &str) -> Result<()> {
        info!(match_id, "cancelling deletion");
        self.store.delete(match_id)
    }

    /// Kicks off a deletion job over everything currently queued and
    /// returns the job id: the trailing segment of the execution ARN.
    pub fn process<R: JobRunner>(&self, runner: &R) -> Result<String> {
        let input = serde_json::to_string(&self.list()?)?;
        let arn = runner.start_execution(&input)?;
        let job_id = arn.rsplit(':').next().unwrap_or(&arn).to_owned();
        info!(%job_id, "deletion job started");
        Ok(job_id)
    }
}
