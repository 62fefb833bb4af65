//! End-to-end check that a failing history server never affects the
//! displayed calculation.

use std::time::Duration;

use chrono::NaiveDate;
use sleepwise_client::api_client::HistoryClient;
use sleepwise_client::config::ClientConfig;
use sleepwise_client::state::{update, Action, CalculatorState, Effect};
use sleepwise_client::sync::HistorySync;

#[tokio::test]
async fn unreachable_server_leaves_results_intact() {
    // Nothing listens on the discard port.
    let config = ClientConfig {
        api_url: "http://127.0.0.1:9".into(),
        request_timeout_secs: 1,
        sync_buffer: 4,
    };
    let client = HistoryClient::new(&config).unwrap();
    let (sender, handle) = HistorySync::spawn(client, config.sync_buffer);

    let now = NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap();
    let (state, effect) = update(CalculatorState::new(now), Action::Calculate);

    if let Some(Effect::Persist(summary)) = effect {
        assert!(sender.submit(summary));
    }

    let results = state.results.as_ref().expect("results are shown immediately");
    assert_eq!(results.len(), 4);

    drop(sender);
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("sync task should finish after its sender is dropped")
        .unwrap();

    assert_eq!(state.results.unwrap().len(), 4);
}
