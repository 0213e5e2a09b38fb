use std::io::Write;

use acad_api::AcademiaClient;
use acad_chat::{ChatError, ChatSession, SendOutcome, SystemPrompt, assist};
use acad_core::entities::ChatMessage;
use acad_core::routes::Route;
use acad_search::FilterState;
use anyhow::Context;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::cli::subcommands::ChatCommands;
use crate::commands::search;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::{Progress, with_spinner};

const EXIT: &str = "/salir";
const SEARCH_THIS: &str = "/buscar";

#[derive(Debug, Serialize)]
struct QueryResponse {
    question: String,
    query: String,
}

#[derive(Debug, Serialize)]
struct TopicsResponse {
    topics: Vec<String>,
}

pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut settings = ctx.chat_settings()?;
    if let Some(prompt) = &args.prompt {
        settings.system_prompt = SystemPrompt::parse(prompt).map_err(chat_failure)?;
    }

    match &args.action {
        Some(ChatCommands::Query { question }) => {
            let progress = Progress::spinner("Generando búsqueda");
            let query =
                assist::generate_search_query(&ctx.client, &settings.model_id, question).await;
            progress.finish_clear();
            output(
                &QueryResponse {
                    question: question.clone(),
                    query,
                },
                flags.format,
            )
        }
        Some(ChatCommands::Topics { messages }) => {
            let progress = Progress::spinner("Analizando temas");
            let topics = assist::analyze_topics(&ctx.client, &settings.model_id, messages).await;
            progress.finish_clear();
            output(&TopicsResponse { topics }, flags.format)
        }
        None => {
            let mut session = ChatSession::new(&ctx.client, settings);
            match &args.message {
                Some(message) => single_turn(&mut session, message, ctx, flags).await,
                None => conversation(&mut session, ctx, flags).await,
            }
        }
    }
}

async fn single_turn(
    session: &mut ChatSession<'_, AcademiaClient>,
    message: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = with_spinner("Consultando al asistente", session.send(message))
        .await
        .map_err(chat_failure)?;
    show_outcome(&outcome);
    match outcome.forward {
        Some(pending) => {
            let route = session.follow(pending).await;
            open_search(&route, ctx, flags).await
        }
        None => Ok(()),
    }
}

/// Line-based conversation on stdin. `/buscar` accepts the latest
/// recommendation, `/salir` closes the session.
async fn conversation(
    session: &mut ChatSession<'_, AcademiaClient>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    session.open();
    for message in session.messages() {
        show(message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("tú> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        match line.trim() {
            "" => {}
            EXIT => break,
            SEARCH_THIS => match session.accept_recommendation() {
                Some(route) => return open_search(&route, ctx, flags).await,
                None => println!("(todavía no hay una búsqueda recomendada)"),
            },
            text => match with_spinner("Pensando", session.send(text)).await {
                Ok(outcome) => {
                    show_outcome(&outcome);
                    if let Some(pending) = outcome.forward {
                        let route = session.follow(pending).await;
                        return open_search(&route, ctx, flags).await;
                    }
                }
                Err(error @ (ChatError::EmptyMessage | ChatError::AwaitingReply)) => {
                    eprintln!("{}", error.user_message());
                }
                Err(error) => {
                    if let Some(apology) = session.messages().last() {
                        show(apology);
                    }
                    eprintln!("{}", error.user_message());
                }
            },
        }
    }

    session.close();
    Ok(())
}

async fn open_search(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Route::Search { query } = route else {
        return Ok(());
    };
    tracing::debug!(path = %route, "assistant forwarded to search");
    let filters = FilterState::with_term(query.clone().unwrap_or_default());
    search::run(&filters, ctx, flags).await
}

fn show_outcome(outcome: &SendOutcome) {
    show(&outcome.reply);
    if let Some(offer) = &outcome.recommendation {
        show(offer);
    }
}

fn show(message: &ChatMessage) {
    let speaker = if message.is_from_assistant() {
        "asistente"
    } else {
        "tú"
    };
    println!("{speaker}> {}", message.text);
}

fn chat_failure(error: ChatError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}
