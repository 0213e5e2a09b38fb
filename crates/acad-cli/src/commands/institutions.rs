use acad_api::{Endpoint, InstitutionQuery};
use anyhow::bail;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::institutions::{InstitutionCommands, InstitutionListArgs};
use crate::commands::shared::failure::api_failure;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn handle(
    action: &InstitutionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InstitutionCommands::List(args) => list(args, ctx, flags).await,
        InstitutionCommands::Show { id } => show(id, ctx, flags).await,
    }
}

async fn list(args: &InstitutionListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = InstitutionQuery {
        city: args.city.clone(),
        institution_type: args.institution_type.clone(),
        limit: Some(effective_limit(args.limit, flags.limit, ctx.config.general.default_limit)),
        next_token: args.next_token.clone(),
    };
    let page = with_spinner("Cargando instituciones", ctx.client.list_institutions(&query))
        .await
        .map_err(api_failure(Endpoint::Institutions))?;

    if flags.format == OutputFormat::Table {
        return output(&page.institutions, flags.format);
    }
    output(&page, flags.format)
}

/// `/institucion/:id`: profile plus the programs it offers.
async fn show(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.search();
    let detail = with_spinner("Cargando institución", service.institution_detail(id))
        .await
        .map_err(api_failure(Endpoint::Institutions))?;

    let Some(detail) = detail else {
        bail!("No se encontró la institución '{id}'");
    };
    output(&detail, flags.format)
}
