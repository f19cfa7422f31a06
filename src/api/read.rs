//! Read operations: datalog queries and entity pulls.

use crate::client::RoamBackendClient;
use crate::error::Result;
use crate::protocol::{constants::routes, graph_path};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<&'a [String]>,
}

#[derive(Serialize)]
struct PullBody<'a> {
    eid: &'a str,
    selector: &'a str,
}

/// Run a datalog query and return the `result` field of the response.
///
/// `args` are the query's positional inputs; when `None` the body carries
/// only `query`.
///
/// # Examples
///
/// ```ignore
/// let titles = q(
///     &client,
///     "[:find ?t :in $ ?s :where [?p :node/title ?t] [(clojure.string/includes? ?t ?s)]]",
///     Some(vec!["apple".to_string()]),
/// )
/// .await?;
/// ```
pub async fn q(client: &RoamBackendClient, query: &str, args: Option<Vec<String>>) -> Result<Value> {
    let path = graph_path(client.graph(), routes::Q);
    let body = QueryBody {
        query,
        args: args.as_deref(),
    };

    let response = client.api(&path, Method::POST, &body).await?;
    Ok(take_result(response.json()?))
}

/// [`q`], with the result deserialized into `T`.
pub async fn q_as<T: DeserializeOwned>(
    client: &RoamBackendClient,
    query: &str,
    args: Option<Vec<String>>,
) -> Result<T> {
    let result = q(client, query, args).await?;
    Ok(serde_json::from_value(result)?)
}

/// Pull the entity `eid` shaped by the selector `pattern`.
///
/// `eid` is an entity id or lookup ref such as `[:block/uid "08-30-2022"]`.
pub async fn pull(client: &RoamBackendClient, pattern: &str, eid: &str) -> Result<Value> {
    let path = graph_path(client.graph(), routes::PULL);
    let body = PullBody {
        eid,
        selector: pattern,
    };

    let response = client.api(&path, Method::POST, &body).await?;
    Ok(take_result(response.json()?))
}

/// [`pull`], with the result deserialized into `T`.
pub async fn pull_as<T: DeserializeOwned>(
    client: &RoamBackendClient,
    pattern: &str,
    eid: &str,
) -> Result<T> {
    let result = pull(client, pattern, eid).await?;
    Ok(serde_json::from_value(result)?)
}

// Missing `result` reads as null.
fn take_result(mut body: Value) -> Value {
    body.get_mut("result").map(Value::take).unwrap_or(Value::Null)
}
