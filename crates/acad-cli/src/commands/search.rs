use acad_api::Endpoint;
use acad_core::entities::{Institution, ProgramListing};
use acad_core::routes::Route;
use acad_search::{ActiveChip, FilterState};
use serde::Serialize;

use crate::cli::root_commands::SearchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::failure::api_failure;
use crate::commands::shared::filters::filter_state;
use crate::commands::shared::limit::truncate;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct SearchResponse {
    route: String,
    term: String,
    active_filters: Vec<ActiveChip>,
    total_programs: usize,
    total_institutions: usize,
    programs: Vec<ProgramListing>,
    institutions: Vec<Institution>,
}

/// Handle `academia search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filters = filter_state(args)?;
    run(&filters, ctx, flags).await
}

/// Run a search and print the results view. Shared with the assistant's
/// forward to search.
pub async fn run(filters: &FilterState, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.search();
    let results = with_spinner("Buscando programas", service.search(filters))
        .await
        .map_err(api_failure(Endpoint::Programs))?;

    let mut programs = results.programs;
    let mut institutions = results.institutions;
    truncate(&mut programs, flags.limit);
    truncate(&mut institutions, flags.limit);

    if flags.format == OutputFormat::Table {
        return output(&programs, flags.format);
    }

    let term = filters.term().trim();
    output(
        &SearchResponse {
            route: Route::Search {
                query: (!term.is_empty()).then(|| term.to_string()),
            }
            .to_path(),
            term: term.to_string(),
            active_filters: filters.active_chips(),
            total_programs: results.total_programs,
            total_institutions: results.total_institutions,
            programs,
            institutions,
        },
        flags.format,
    )
}
