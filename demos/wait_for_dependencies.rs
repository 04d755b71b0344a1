//! Wait-for-Dependencies Demo
//!
//! This demo runs one readiness check against configured upstream services:
//! - Validates the client configuration (host + port per service)
//! - Probes each service concurrently until available, timed out, or cancelled
//! - Publishes client handles on an all-available verdict
//!
//! Ctrl-C aborts all in-flight probing cleanly.
//!
//! Usage:
//!   RUST_LOG=info cargo run --example wait_for_dependencies

use anyhow::Result;
use readygate::{BootstrapConfig, ClientName, ClientRegistry, ReadinessGate};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const CONFIG: &str = r#"
clients:
  core-metadata:
    host: localhost
    port: 59881
  core-data:
    host: localhost
    port: 59880
service:
  request_timeout_ms: 5000
  startup:
    duration_secs: 10
    interval_secs: 1
"#;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Dependency Readiness Demo ===\n");

    let config = Arc::new(BootstrapConfig::from_yaml_str(CONFIG)?);
    let cancel = CancellationToken::new();

    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    let gate = ReadinessGate::new(config);
    let mut clients = ClientRegistry::new();

    println!("Probing upstream services (Ctrl-C to abort)...\n");
    if gate.initialize(&cancel, &mut clients).await {
        println!("All dependencies reachable. Published clients:");
        for name in ClientName::METADATA_CLIENTS {
            if let Some(handle) = clients.get(name) {
                println!("  {:<18} -> {}", name.to_string(), handle.base_url());
            }
        }
        if let Some(handle) = clients.get(ClientName::Event) {
            println!("  {:<18} -> {}", ClientName::Event.to_string(), handle.base_url());
        }
    } else {
        println!("Dependencies not ready; no clients were published.");
    }

    Ok(())
}
