use once_cell::sync::Lazy;
use portfolio::configuration::get_configuration;
use portfolio::startup::Application;
use portfolio::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let tracing_subscriber = get_subscriber("test".into(), "info".into());
        init_subscriber(tracing_subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute contact request")
    }

    pub async fn get_home(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute home page request")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // The mock server stands in for the mail provider
    let email_server = MockServer::start().await;

    // Get config for app start
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let application = Application::build(&configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    // Spawn a new task inside tokio runtime
    // tokio's runtime is spun up by actix_rt
    //
    // Cleanup not required as all tokio tasks are dropped when tokio runtime is shut down
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
    }
}

pub fn valid_contact_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello there",
        "message": "I would like to collaborate on a project."
    })
}

pub fn accepted_email_response() -> wiremock::ResponseTemplate {
    wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "To": "someone@example.com",
        "SubmittedAt": "2024-01-01T00:00:00.000Z",
        "MessageID": "0a129aee-e1cd-480d-b08d-4f48548ff48d",
        "ErrorCode": 0,
        "Message": "OK"
    }))
}
