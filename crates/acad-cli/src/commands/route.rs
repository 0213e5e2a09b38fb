use acad_core::routes::Route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteResponse {
    view: &'static str,
    path: String,
    route: Route,
}

/// Resolve a path the way the browser router would; unknown paths land home.
pub fn handle(args: &RouteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let parsed = Route::parse(&args.path);
    if let Route::NotFound { path } = &parsed {
        tracing::debug!(%path, "unknown path, redirecting home");
    }
    let route = parsed.resolve();
    output(
        &RouteResponse {
            view: route.view_name(),
            path: route.to_path(),
            route,
        },
        flags.format,
    )
}
