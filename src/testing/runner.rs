//! Test runner implementation
//!
//! Each step builds one request, awaits the full response and prints its
//! report before the next step begins. The shoot identifier produced by the
//! create step is passed explicitly into every step that needs it.

use crate::api::types::{CREATED_LOCATION_NAME, UPDATED_LOCATION_NAME};
use crate::api::{ApiClient, ApiRequest, CreatedShoot, PhotoId, ShootId, ShootRecord};
use crate::common::Error;

use super::outcome::{classify, Outcome, RunSummary, StepKind, StepReport};

/// Drives the fixed photoshoot sequence against one client
pub struct TestRunner<C> {
    client: C,
    photo_id: PhotoId,
}

impl<C: ApiClient> TestRunner<C> {
    pub fn new(client: C, photo_id: PhotoId) -> Self {
        Self { client, photo_id }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run all seven steps in order
    ///
    /// Steps 3-7 always run. When create yields no identifier they run
    /// against `ShootId::default()`.
    pub async fn run(&self) -> RunSummary {
        println!("Starting integration tests...");
        tracing::info!(photo_id = %self.photo_id, "starting photoshoot sequence");

        let mut reports = Vec::with_capacity(StepKind::ALL.len());

        reports.push(self.list_shoots().await);

        let created = self.create_shoot().await;
        let shoot_id = match created.extracted_id {
            Some(id) => id,
            None => {
                let id = ShootId::default();
                tracing::warn!(%id, "create returned no shoot id; continuing with default");
                id
            }
        };
        reports.push(created);

        reports.push(self.read_shoot(shoot_id).await);
        reports.push(self.update_shoot(shoot_id).await);
        reports.push(self.attach_photo(shoot_id, &self.photo_id).await);
        reports.push(self.list_shoot_photos(shoot_id).await);
        reports.push(self.delete_shoot(shoot_id).await);

        let summary = RunSummary { shoot_id, reports };
        tracing::info!(
            passed = summary.passed(),
            total = summary.reports.len(),
            "photoshoot sequence finished"
        );
        println!("Integration tests completed.");
        summary
    }

    /// GET /photoshoot
    pub async fn list_shoots(&self) -> StepReport {
        let report = self
            .call(StepKind::ListShoots, ApiRequest::get(["photoshoot"]), None)
            .await;
        finish(report)
    }

    /// POST /photoshoot, extracting the new identifier on success
    pub async fn create_shoot(&self) -> StepReport {
        let record = ShootRecord::now(CREATED_LOCATION_NAME);
        let mut report = self
            .call(StepKind::CreateShoot, ApiRequest::post(["photoshoot"]), Some(&record))
            .await;

        if report.outcome.is_success() {
            let body = report.body.as_deref().unwrap_or_default();
            match serde_json::from_str::<CreatedShoot>(body) {
                Ok(created) => report.extracted_id = Some(created.photoshoot_id),
                Err(e) => {
                    report.outcome = Outcome::exception(&Error::decode("create response", e));
                }
            }
        }

        finish(report)
    }

    /// GET /photoshoot/{id}
    pub async fn read_shoot(&self, id: ShootId) -> StepReport {
        let id = id.to_string();
        let request = ApiRequest::get(["photoshoot", id.as_str()]);
        finish(self.call(StepKind::ReadShoot, request, None).await)
    }

    /// PUT /photoshoot/{id} with a full replacement record
    pub async fn update_shoot(&self, id: ShootId) -> StepReport {
        let record = ShootRecord::now(UPDATED_LOCATION_NAME);
        let id = id.to_string();
        let request = ApiRequest::put(["photoshoot", id.as_str()]);
        finish(self.call(StepKind::UpdateShoot, request, Some(&record)).await)
    }

    /// POST /photoshoot/{id}/addPhoto/{photo}
    pub async fn attach_photo(&self, id: ShootId, photo: &PhotoId) -> StepReport {
        let id = id.to_string();
        let photo = photo.to_string();
        let request = ApiRequest::post(["photoshoot", id.as_str(), "addPhoto", photo.as_str()]);
        finish(self.call(StepKind::AttachPhoto, request, None).await)
    }

    /// GET /photoshoot/{id}/photo
    pub async fn list_shoot_photos(&self, id: ShootId) -> StepReport {
        let id = id.to_string();
        let request = ApiRequest::get(["photoshoot", id.as_str(), "photo"]);
        finish(self.call(StepKind::ListShootPhotos, request, None).await)
    }

    /// DELETE /photoshoot/{id}
    pub async fn delete_shoot(&self, id: ShootId) -> StepReport {
        let id = id.to_string();
        let request = ApiRequest::delete(["photoshoot", id.as_str()]);
        finish(self.call(StepKind::DeleteShoot, request, None).await)
    }

    /// Send one request and classify it by status code
    ///
    /// A payload that cannot be encoded is reported as an exception without
    /// reaching the client.
    async fn call(
        &self,
        step: StepKind,
        request: ApiRequest,
        payload: Option<&ShootRecord>,
    ) -> StepReport {
        let method = request.method.clone();
        let path = request.path();

        let result = match payload {
            Some(record) => match request.with_json(record) {
                Ok(request) => self.client.send(request).await,
                Err(e) => Err(e),
            },
            None => self.client.send(request).await,
        };

        let outcome = classify(&result);
        let (status, body) = match result {
            Ok(response) => (Some(response.status), Some(response.body)),
            Err(_) => (None, None),
        };

        StepReport {
            step,
            method,
            path,
            status,
            body,
            extracted_id: None,
            outcome,
        }
    }
}

/// Log and print a finished step
fn finish(report: StepReport) -> StepReport {
    match &report.outcome {
        Outcome::Success => {}
        Outcome::Failed { status } => {
            tracing::warn!(step = %report.step, path = %report.path, %status, "step failed");
        }
        Outcome::Exception { message } => {
            tracing::warn!(step = %report.step, path = %report.path, error = %message, "step raised");
        }
    }
    report.print();
    report
}
