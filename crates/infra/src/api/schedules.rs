//! Typed client for the schedules resource
//!
//! The backend returns flat slot lists; the per-weekday grid is built
//! locally with [`build_weekly_schedule`].

use std::sync::Arc;

use studyhall_domain::{
    build_weekly_schedule, NewSchedule, NewScheduleSlot, Result, Schedule, ScheduleSlot,
    ScheduleSlotUpdate, ScheduleWithSlots, WeeklySchedule,
};

use super::client::BackendClient;

/// `/api/schedules` surface
#[derive(Debug)]
pub struct SchedulesApi {
    client: Arc<BackendClient>,
}

impl SchedulesApi {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Schedule>> {
        self.client.get("/api/schedules").await
    }

    /// One schedule with its slots expanded
    pub async fn get(&self, id: &str) -> Result<ScheduleWithSlots> {
        self.client.get(&format!("/api/schedules/{id}")).await
    }

    /// The active schedule with its slots, if one is active
    pub async fn active(&self) -> Result<Option<ScheduleWithSlots>> {
        self.client.get("/api/schedules/active").await
    }

    /// Flat slot list of one schedule
    pub async fn slots(&self, schedule_id: &str) -> Result<Vec<ScheduleSlot>> {
        self.client.get(&format!("/api/schedules/{schedule_id}/slots")).await
    }

    /// The active schedule rendered as a per-weekday grid
    pub async fn active_week(&self) -> Result<Option<WeeklySchedule>> {
        let active = self.active().await?;
        Ok(active.map(|schedule| build_weekly_schedule(schedule.slots)))
    }

    pub async fn create(&self, schedule: &NewSchedule) -> Result<Schedule> {
        self.client.post("/api/schedules", schedule).await
    }

    /// Mark a schedule as active; the backend deactivates the others
    pub async fn activate(&self, id: &str) -> Result<Schedule> {
        self.client.post(&format!("/api/schedules/{id}/activate"), &()).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/schedules/{id}")).await
    }

    pub async fn add_slot(&self, schedule_id: &str, slot: &NewScheduleSlot) -> Result<ScheduleSlot> {
        self.client.post(&format!("/api/schedules/{schedule_id}/slots"), slot).await
    }

    pub async fn update_slot(
        &self,
        slot_id: &str,
        update: &ScheduleSlotUpdate,
    ) -> Result<ScheduleSlot> {
        self.client.put(&format!("/api/schedules/slots/{slot_id}"), update).await
    }

    pub async fn delete_slot(&self, slot_id: &str) -> Result<()> {
        self.client.delete(&format!("/api/schedules/slots/{slot_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use studyhall_domain::WeekDay;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;

    fn api(server: &MockServer) -> SchedulesApi {
        let http = HttpClient::new().expect("http client");
        SchedulesApi::new(Arc::new(BackendClient::from_parts(http, server.uri())))
    }

    fn slot_json(id: &str, day: &str, number: u8) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "schedule_id": "s1",
            "day": day,
            "slot_number": number,
            "start_time": "08:00:00",
            "end_time": "08:45:00",
            "slot_type": "CLASS",
            "class_id": "c1",
        })
    }

    #[tokio::test]
    async fn active_week_builds_the_grid_from_flat_slots() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedules/active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "s1",
                "name": "Term 1",
                "year": "2026",
                "is_active": true,
                "created_at": "2026-08-30T10:00:00Z",
                "updated_at": "2026-08-30T10:00:00Z",
                "slots": [
                    slot_json("sl2", "MONDAY", 2),
                    slot_json("sl1", "MONDAY", 1),
                    slot_json("sl3", "THURSDAY", 1),
                ],
            })))
            .mount(&server)
            .await;

        let week = api(&server).active_week().await.expect("request").expect("active schedule");

        let monday: Vec<u8> = week.day(WeekDay::Monday).iter().map(|s| s.slot_number).collect();
        assert_eq!(monday, vec![1, 2]);
        assert_eq!(week.day(WeekDay::Thursday).len(), 1);
        assert!(week.day(WeekDay::Friday).is_empty());
    }

    #[tokio::test]
    async fn active_returns_none_when_backend_has_no_active_schedule() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedules/active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
            .mount(&server)
            .await;

        let active = api(&server).active().await.expect("request");
        assert!(active.is_none());
    }
}
