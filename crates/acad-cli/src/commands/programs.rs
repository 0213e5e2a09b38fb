use acad_api::{Endpoint, ProgramQuery};
use anyhow::bail;

use crate::cli::subcommands::programs::{ProgramCommands, ProgramListArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::failure::api_failure;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn handle(
    action: &ProgramCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgramCommands::List(args) => list(args, ctx, flags).await,
        ProgramCommands::Show { id } => show(id, ctx, flags).await,
    }
}

/// Raw listing: API-side filters only, no local predicate or enrichment.
async fn list(args: &ProgramListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = ProgramQuery {
        level: args.level.clone(),
        modality: args.modality.clone(),
        institution_id: args.institution.clone(),
        municipality: args.municipality.clone(),
        duration: args.duration.clone(),
        limit: Some(effective_limit(args.limit, flags.limit, ctx.config.general.default_limit)),
        next_token: args.next_token.clone(),
    };
    let page = with_spinner("Cargando programas", ctx.client.list_programs(&query))
        .await
        .map_err(api_failure(Endpoint::Programs))?;

    if flags.format == OutputFormat::Table {
        return output(&page.programs, flags.format);
    }
    output(&page, flags.format)
}

async fn show(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.search();
    let listing = with_spinner("Cargando programa", service.program(id))
        .await
        .map_err(api_failure(Endpoint::Programs))?;

    let Some(listing) = listing else {
        bail!("No se encontró el programa '{id}'");
    };
    output(&listing, flags.format)
}
