//! Typed client for the classes resource

use std::sync::Arc;

use studyhall_domain::{Class, ClassUpdate, Homework, NewClass, Result};

use super::client::BackendClient;

/// `/api/classes` surface
#[derive(Debug)]
pub struct ClassesApi {
    client: Arc<BackendClient>,
}

impl ClassesApi {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Class>> {
        self.client.get("/api/classes").await
    }

    pub async fn get(&self, id: &str) -> Result<Class> {
        self.client.get(&format!("/api/classes/{id}")).await
    }

    pub async fn create(&self, class: &NewClass) -> Result<Class> {
        self.client.post("/api/classes", class).await
    }

    pub async fn update(&self, id: &str, update: &ClassUpdate) -> Result<Class> {
        self.client.put(&format!("/api/classes/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/classes/{id}")).await
    }

    /// Homework assigned for one class
    pub async fn homework(&self, id: &str) -> Result<Vec<Homework>> {
        self.client.get(&format!("/api/classes/{id}/homework")).await
    }
}

#[cfg(test)]
mod tests {
    use studyhall_domain::ClassType;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;

    fn api(server: &MockServer) -> ClassesApi {
        let http = HttpClient::new().expect("http client");
        ClassesApi::new(Arc::new(BackendClient::from_parts(http, server.uri())))
    }

    #[tokio::test]
    async fn create_serializes_class_type_in_backend_spelling() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/classes"))
            .and(body_partial_json(serde_json::json!({"class_type": "COMPUTER_SCIENCE"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "c1",
                "name": "Programming",
                "teacher": "Ms. Reed",
                "year": "2026",
                "half_group": null,
                "color": "#3B82F6",
                "class_type": "COMPUTER_SCIENCE",
                "created_at": "2026-08-30T10:00:00Z",
                "updated_at": "2026-08-30T10:00:00Z",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let class = api(&server)
            .create(&NewClass {
                name: "Programming".to_string(),
                teacher: "Ms. Reed".to_string(),
                year: "2026".to_string(),
                half_group: None,
                color: None,
                class_type: ClassType::ComputerScience,
            })
            .await
            .expect("create");

        assert_eq!(class.id, "c1");
        assert_eq!(class.class_type, ClassType::ComputerScience);
    }
}
