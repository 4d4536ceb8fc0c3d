#![allow(dead_code)]

use analysis_gateway::config::{
    AnalysisServiceSettings, GatewayConfig, ObservabilitySettings, UploadSettings,
};
use analysis_gateway::startup::Application;
use reqwest::multipart;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the gateway pointed at `downstream_url` with default settings.
    pub async fn spawn(downstream_url: &str) -> Self {
        Self::spawn_with(AnalysisServiceSettings {
            url: downstream_url.to_string(),
            ..Default::default()
        })
        .await
    }

    pub async fn spawn_with(analysis_service: AnalysisServiceSettings) -> Self {
        let config = GatewayConfig {
            common: CoreConfig { port: 0 }, // Random port for testing
            analysis_service,
            upload: UploadSettings::default(),
            observability: ObservabilitySettings {
                log_level: "debug".to_string(),
                otlp_endpoint: None,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_analyze(&self, form: multipart::Form) -> reqwest::Response {
        self.client
            .post(format!("{}/api/analyze", self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// A form with a single `file` part.
pub fn file_form(file_name: &str, data: Vec<u8>) -> multipart::Form {
    multipart::Form::new().percent_encode_noop().part(
        "file",
        multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("text/plain")
            .unwrap(),
    )
}

/// Base URL of a port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
