use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::model::QuerySpec;
use crate::query::build_query;

/// Blocking submission seam to the external query engine. Transient
/// engine failures surface as errors; retry policy belongs to the
/// caller's infrastructure, not here.
pub trait QueryExecutor {
    fn start_query_execution(
        &self,
        query: &str,
        output_location: &str,
        workgroup: &str,
    ) -> Result<String>;
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExecuteQueryInput {
    #[serde(rename = "QueryData")]
    pub query_data: QuerySpec,
    #[serde(rename = "Bucket")]
    pub bucket: String,
    #[serde(rename = "Prefix")]
    pub prefix: String,
}

/// Builds the deletion query for `input` and submits it, directing
/// results under `s3://<bucket>/<prefix>/`. Returns the engine's
/// execution identifier verbatim.
pub fn execute_query<E: QueryExecutor>(
    executor: &E,
    input: &ExecuteQueryInput,
    config: &Config,
) -> Result<String> {
    let query = build_query(&input.query_data);
    let output_location = format!("s3://{}/{}/", input.bucket, input.prefix);
    debug!(%output_location, workgroup = %config.workgroup, "submitting query");
    let execution_id =
        executor.start_query_execution(&query, &output_location, &config.workgroup)?;
    info!(%execution_id, "query submitted");
    Ok(execution_id)
}
