//! Applicant interest form (`POST /submit-application`).

use acad_core::entities::{ApplicationSubmission, StatusMessage};

use crate::{
    AcademiaClient, Endpoint,
    error::ApiError,
    http::{decode, send},
};

impl AcademiaClient {
    /// Submit an application for one program.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the endpoint rejects it.
    pub async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<StatusMessage, ApiError> {
        let url = self.url(Endpoint::Application.path());
        tracing::debug!(program_id = %submission.program_id, "submitting application");
        decode(send(self.http.post(&url).json(submission)).await?).await
    }
}
