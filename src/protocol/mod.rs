//! Wire-level constants and helpers for the Roam backend API.
//!
//! # Routes
//!
//! | Route | Method | Body | Response |
//! |-------|--------|------|----------|
//! | `/api/graph/{graph}/q` | POST | `{query, args?}` | `{result}` |
//! | `/api/graph/{graph}/pull` | POST | `{eid, selector}` | `{result}` |
//! | `/api/graph/{graph}/write` | POST | `{action, block?, page?, location?}` | - |
//!
//! All requests carry the bearer token twice, under `Authorization` and
//! `x-authorization`, because some environments strip the standard header.

mod headers;

pub use headers::{bearer_value, default_headers, extract_peer};

/// Protocol constants.
pub mod constants {
    /// Primary backend base URL.
    pub const DEFAULT_BASE_URL: &str = "https://api.roamresearch.com";

    /// Content type sent with every request body.
    pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

    /// Route suffixes under `/api/graph/{graph}`.
    pub mod routes {
        /// Datalog query
        pub const Q: &str = "q";
        /// Entity pull
        pub const PULL: &str = "pull";
        /// All mutations
        pub const WRITE: &str = "write";
    }

    /// Header names.
    pub mod headers {
        use http::HeaderName;

        pub use http::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};

        /// Secondary authorization header
        pub const X_AUTHORIZATION: HeaderName = HeaderName::from_static("x-authorization");
    }
}

/// Path of a graph-scoped route, e.g. `/api/graph/my-graph/q`.
pub fn graph_path(graph: &str, route: &str) -> String {
    format!("/api/graph/{}/{}", graph, route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_path() {
        assert_eq!(graph_path("notes", constants::routes::Q), "/api/graph/notes/q");
        assert_eq!(
            graph_path("notes", constants::routes::WRITE),
            "/api/graph/notes/write"
        );
    }
}
