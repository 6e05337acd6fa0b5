//! Request dispatch module
//!
//! Entry point for HTTP request processing. There is no route table: every request,
//! whatever its method, goes through the same JSON file lookup.

use crate::config::Config;
use crate::handler::static_files;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The whole origin-form target, query string included, is joined onto the root,
/// so `/data.json?x=1` names a file literally called `data.json?x=1`. The request
/// body is ignored.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let target = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
    Ok(static_files::serve_json(&config.files.root_dir, target).await)
}
