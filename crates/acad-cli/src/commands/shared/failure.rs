use acad_api::{ApiError, Endpoint};

/// Wrap an API error so the printed chain leads with the localized message
/// for `endpoint` and keeps the technical cause after it.
pub fn api_failure(endpoint: Endpoint) -> impl FnOnce(ApiError) -> anyhow::Error {
    move |error| {
        let message = error.user_message(endpoint);
        anyhow::Error::new(error).context(message)
    }
}
