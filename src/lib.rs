pub mod config;
pub mod error;
pub mod exec;
pub mod model;
pub mod query;
pub mod queue;

pub use config::Config;
pub use error::Error;
pub use exec::{execute_query, ExecuteQueryInput, QueryExecutor};
pub use model::{MatchGroup, PartitionConstraint, QuerySpec, ScalarValue};
pub use query::{build_query, escape};
pub use queue::{DeletionQueue, DeletionQueueItem, JobRunner, MemoryQueueStore, QueueStore};
