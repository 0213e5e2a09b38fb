use acad_api::Endpoint;
use acad_forms::{APPLICATION_RECEIVED, ApplicationForm};
use anyhow::{Context, bail};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplyArgs;
use crate::commands::shared::failure::api_failure;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct ApplyResponse {
    program_id: String,
    program_name: String,
    message: &'static str,
}

/// Handle `academia apply`: validate, look up the program card, submit.
pub async fn handle(args: &ApplyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = ApplicationForm {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(anyhow::Error::new(errors).context("La solicitud tiene campos inválidos"));
    }

    let service = ctx.search();
    let listing = with_spinner("Cargando programa", service.program(&args.program))
        .await
        .map_err(api_failure(Endpoint::Programs))?;
    let Some(listing) = listing else {
        bail!("No se encontró el programa '{}'", args.program);
    };

    let submission = form
        .submit(&listing)
        .context("La solicitud tiene campos inválidos")?;
    with_spinner("Enviando solicitud", ctx.client.submit_application(&submission))
        .await
        .map_err(api_failure(Endpoint::Application))?;

    output(
        &ApplyResponse {
            program_id: submission.program_id,
            program_name: submission.program_name,
            message: APPLICATION_RECEIVED,
        },
        flags.format,
    )
}
