//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use studyhall_domain::StudyHallError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub StudyHallError);

impl From<InfraError> for StudyHallError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<StudyHallError> for InfraError {
    fn from(value: StudyHallError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoStudyHallError {
    fn into_studyhall(self) -> StudyHallError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → StudyHallError */
/* -------------------------------------------------------------------------- */

impl IntoStudyHallError for HttpError {
    fn into_studyhall(self) -> StudyHallError {
        if self.is_timeout() {
            return StudyHallError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return StudyHallError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return map_status(status.as_u16(), status.canonical_reason());
        }

        StudyHallError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_studyhall())
    }
}

/// Map an HTTP status code to the domain error taxonomy
pub(crate) fn map_status(code: u16, reason: Option<&str>) -> StudyHallError {
    let message = format!("HTTP {} {}", code, reason.unwrap_or("unknown status"));

    match code {
        401 | 403 => StudyHallError::Auth(message),
        404 => StudyHallError::NotFound(message),
        429 => StudyHallError::Network(message),
        400..=499 => StudyHallError::InvalidInput(message),
        _ => StudyHallError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn status_401_maps_to_auth_error() {
        match map_status(401, Some("Unauthorized")) {
            StudyHallError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(map_status(404, Some("Not Found")), StudyHallError::NotFound(_)));
    }

    #[test]
    fn status_422_maps_to_invalid_input() {
        assert!(matches!(
            map_status(422, Some("Unprocessable Entity")),
            StudyHallError::InvalidInput(_)
        ));
    }

    #[test]
    fn status_500_maps_to_network_error() {
        assert!(matches!(
            map_status(500, Some("Internal Server Error")),
            StudyHallError::Network(_)
        ));
    }

    #[tokio::test]
    async fn reqwest_status_error_maps_through_the_taxonomy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().expect("client");
        let error =
            client.get(server.uri()).send().await.expect("response").error_for_status().unwrap_err();

        let mapped: StudyHallError = InfraError::from(error).into();
        match mapped {
            StudyHallError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }
}
