use acad_api::Endpoint;
use acad_core::routes::Route;
use acad_forms::{
    AdminLoginForm, AdminRegistrationForm, RESEND_SUCCESS, VERIFIED_REDIRECT_DELAY,
    VerificationForm,
};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::{AdminCommands, AdminRegisterArgs};
use crate::commands::shared::failure::api_failure;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::{Progress, with_spinner};

#[derive(Debug, Serialize)]
struct StepResponse {
    message: String,
    next: String,
}

#[derive(Debug, Serialize)]
struct Dashboard {
    title: &'static str,
    description: &'static str,
    quick_actions: [&'static str; 4],
}

const DASHBOARD: Dashboard = Dashboard {
    title: "Bienvenido al Panel de Administración",
    description: "Este es el panel de control para administradores de la plataforma Academia.net.",
    quick_actions: [
        "Ver listado de aspirantes",
        "Administrar programas académicos",
        "Configurar períodos de inscripción",
        "Ajustes del sistema",
    ],
};

pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Register(args) => register(args, ctx, flags).await,
        AdminCommands::Verify { username, code } => verify(username, code, ctx, flags).await,
        AdminCommands::Resend { username } => resend(username, ctx, flags).await,
        AdminCommands::Login { email, password } => login(email, password, ctx, flags),
        AdminCommands::Dashboard => output(&DASHBOARD, flags.format),
    }
}

/// `/admin/registro`: on success the next view is verification for the
/// returned username.
async fn register(
    args: &AdminRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = AdminRegistrationForm {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        institution_legal_name: args.institution.clone(),
        institution_abbreviation: args.abbreviation.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        password_confirmation: args.password_confirmation.clone(),
    };
    let registration = form
        .submit()
        .context("El registro tiene campos inválidos")?;

    let receipt = with_spinner("Registrando administrador", ctx.client.register_admin(&registration))
        .await
        .map_err(api_failure(Endpoint::Register))?;

    let next = Route::AdminVerification {
        username: Some(receipt.username),
    };
    output(
        &StepResponse {
            message: receipt.message,
            next: next.to_path(),
        },
        flags.format,
    )
}

/// `/admin/verificar`: confirm the code, pause, then hand off to the dashboard.
async fn verify(
    username: &str,
    code: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = VerificationForm::for_route(&Route::AdminVerification {
        username: Some(username.to_string()),
    });
    form.code.paste(code);
    let request = form.request()?;

    let status = with_spinner("Verificando código", ctx.client.verify_email(&request))
        .await
        .map_err(api_failure(Endpoint::VerifyEmail))?;

    let pause = Progress::spinner("Redirigiendo al panel");
    tokio::time::sleep(VERIFIED_REDIRECT_DELAY).await;
    pause.finish_clear();

    output(
        &StepResponse {
            message: status.message,
            next: Route::AdminDashboard.to_path(),
        },
        flags.format,
    )
}

async fn resend(username: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = VerificationForm::for_route(&Route::AdminVerification {
        username: Some(username.to_string()),
    });
    let username = form.username()?;

    with_spinner("Reenviando código", ctx.client.resend_verification_code(username))
        .await
        .map_err(api_failure(Endpoint::ResendCode))?;

    output(
        &StepResponse {
            message: RESEND_SUCCESS.to_string(),
            next: Route::AdminVerification {
                username: Some(username.to_string()),
            }
            .to_path(),
        },
        flags.format,
    )
}

/// `/admin`: credentials are checked against the configured account.
fn login(email: &str, password: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.config.admin.is_configured() {
        tracing::warn!("no dashboard account configured; set ACADEMIA_ADMIN__EMAIL and ACADEMIA_ADMIN__PASSWORD");
    }
    let form = AdminLoginForm {
        email: email.to_string(),
        password: password.to_string(),
    };
    let next = form.submit(&ctx.config.admin)?;
    output(
        &StepResponse {
            message: String::from("Inicio de sesión exitoso"),
            next: next.to_path(),
        },
        flags.format,
    )
}
