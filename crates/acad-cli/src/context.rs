use acad_api::AcademiaClient;
use acad_chat::ChatSettings;
use acad_config::AcademiaConfig;
use acad_search::SearchService;
use anyhow::Context;

/// Shared resources built once per invocation.
pub struct AppContext {
    pub config: AcademiaConfig,
    pub client: AcademiaClient,
}

impl AppContext {
    pub fn init(config: AcademiaConfig) -> anyhow::Result<Self> {
        let client = AcademiaClient::new(&config.api).context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    /// Search service over the live API, fetching full catalog pages.
    pub const fn search(&self) -> SearchService<'_, AcademiaClient> {
        SearchService::new(&self.client, self.config.general.catalog_page_size)
    }

    pub fn chat_settings(&self) -> anyhow::Result<ChatSettings> {
        ChatSettings::from_config(&self.config.chat).context("invalid [chat] configuration")
    }
}
