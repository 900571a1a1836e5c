//! Typed client for the homework resource

use std::sync::Arc;

use serde::Serialize;
use studyhall_domain::constants::DEFAULT_UPCOMING_DAYS;
use studyhall_domain::{Homework, HomeworkQuery, HomeworkUpdate, NewHomework, Result};

use super::client::BackendClient;

#[derive(Debug, Serialize)]
struct UpcomingQuery {
    days: u32,
}

/// `/api/homework` surface
#[derive(Debug)]
pub struct HomeworkApi {
    client: Arc<BackendClient>,
}

impl HomeworkApi {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// List homework, filtered by the query's present fields
    pub async fn list(&self, query: &HomeworkQuery) -> Result<Vec<Homework>> {
        self.client.get_with_query("/api/homework", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Homework> {
        self.client.get(&format!("/api/homework/{id}")).await
    }

    /// Homework due within the next `days` days (backend default window
    /// when `None`)
    pub async fn upcoming(&self, days: Option<u32>) -> Result<Vec<Homework>> {
        let query = UpcomingQuery { days: days.unwrap_or(DEFAULT_UPCOMING_DAYS) };
        self.client.get_with_query("/api/homework/upcoming", &query).await
    }

    pub async fn due_today(&self) -> Result<Vec<Homework>> {
        self.client.get("/api/homework/due-today").await
    }

    pub async fn overdue(&self) -> Result<Vec<Homework>> {
        self.client.get("/api/homework/overdue").await
    }

    /// Mark an item completed; the backend stamps `completed_at`
    pub async fn complete(&self, id: &str) -> Result<Homework> {
        self.client.post(&format!("/api/homework/{id}/complete"), &()).await
    }

    /// Reopen a completed item back to pending
    pub async fn reopen(&self, id: &str) -> Result<Homework> {
        self.client.post(&format!("/api/homework/{id}/reopen"), &()).await
    }

    pub async fn create(&self, homework: &NewHomework) -> Result<Homework> {
        self.client.post("/api/homework", homework).await
    }

    pub async fn update(&self, id: &str, update: &HomeworkUpdate) -> Result<Homework> {
        self.client.put(&format!("/api/homework/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/homework/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use studyhall_domain::{HomeworkStatus, Priority};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;

    fn api(server: &MockServer) -> HomeworkApi {
        let http = HttpClient::new().expect("http client");
        HomeworkApi::new(Arc::new(BackendClient::from_parts(http, server.uri())))
    }

    fn homework_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "class_id": "c1",
            "title": "Read chapter 4",
            "description": null,
            "assigned_date": "2026-08-28",
            "due_date": "2026-09-02",
            "due_time": "17:00:00",
            "priority": "MEDIUM",
            "status": status,
            "google_calendar_event_id": null,
            "created_at": "2026-08-28T10:00:00Z",
            "updated_at": "2026-08-28T10:00:00Z",
            "completed_at": null,
        })
    }

    #[tokio::test]
    async fn list_forwards_only_present_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/homework"))
            .and(query_param("status", "PENDING"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([homework_json("h1", "PENDING")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let query = HomeworkQuery { status: Some(HomeworkStatus::Pending), ..Default::default() };
        let items = api(&server).list(&query).await.expect("list");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, HomeworkStatus::Pending);
        assert_eq!(items[0].priority, Priority::Medium);

        // The absent filters must not appear as query parameters at all
        let requests = server.received_requests().await.unwrap();
        let raw_query = requests[0].url.query().unwrap_or_default();
        assert!(!raw_query.contains("class_id"));
        assert!(!raw_query.contains("priority"));
    }

    #[tokio::test]
    async fn upcoming_defaults_the_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/homework/upcoming"))
            .and(query_param("days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let items = api(&server).upcoming(None).await.expect("upcoming");
        assert!(items.is_empty());
    }
}
