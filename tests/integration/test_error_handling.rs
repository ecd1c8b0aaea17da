// エラーハンドリングの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::mocks::{FailingSink, RecordingReporter};
use fixtures::{sample_orders, test_config};
use order_pipeline::core::ErrorSeverity;
use order_pipeline::engine::collector::{collect_results, CollectOptions};
use order_pipeline::engine::worker::spawn_worker;
use order_pipeline::services::{MemoryOrderSink, NoOpProgressReporter};
use order_pipeline::{
    create_quiet_engine, ClosePolicy, DefaultPipelineConfig, Order, PipelineEngine, PipelineError,
};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_close_after_five_of_six_is_rejected() {
    let config = test_config().with_close_policy(ClosePolicy::Fixed(5));
    let engine = PipelineEngine::new(config, RecordingReporter::new(), MemoryOrderSink::new());

    let error = engine.run(sample_orders()).await.unwrap_err();

    match &error {
        PipelineError::ThresholdMismatch {
            threshold,
            input_len,
        } => {
            assert_eq!(*threshold, 5);
            assert_eq!(*input_len, 6);
        }
        other => panic!("ThresholdMismatchを期待しました: {other:?}"),
    }
    assert!(!error.is_recoverable());
    // 何も調理されず、エラーだけが報告される
    assert_eq!(engine.sink().delivered_count(), 0);
    let events = engine.reporter().events();
    assert_eq!(events.len(), 1);
    assert!(events[0].starts_with("error:"));
}

#[tokio::test]
async fn test_request_queue_smaller_than_input() {
    let config = test_config().with_request_capacity(2);
    let engine = create_quiet_engine(config);

    let error = engine.run(sample_orders()).await.unwrap_err();

    assert!(matches!(
        error,
        PipelineError::CapacityExceeded {
            capacity: 2,
            requested: 6
        }
    ));
    assert_eq!(error.severity(), ErrorSeverity::High);
    assert_eq!(engine.sink().delivered_count(), 0);
}

#[tokio::test]
async fn test_zero_capacity_is_configuration_error() {
    let engine = create_quiet_engine(DefaultPipelineConfig::fast().with_result_capacity(0));

    let error = engine.run_labels(&["a"]).await.unwrap_err();

    assert!(matches!(error, PipelineError::ConfigurationError { .. }));
}

#[tokio::test]
async fn test_sink_failure_stops_the_run() {
    let engine = PipelineEngine::new(
        test_config(),
        NoOpProgressReporter::new(),
        FailingSink::new(3),
    );

    let error = engine.run(sample_orders()).await.unwrap_err();

    assert!(matches!(error, PipelineError::SinkError { .. }));
    assert_eq!(engine.sink().delivered(), 2);
}

#[tokio::test]
async fn test_worker_closing_early_exhausts_results() {
    let (request_tx, request_rx) = mpsc::channel(3);
    let (result_tx, mut result_rx) = mpsc::channel(3);
    for order in Order::from_labels(["a", "b", "c"]) {
        request_tx.send(order).await.unwrap();
    }
    drop(request_tx);

    // 2件で結果キューを閉じるワーカーに対して3件を待つ
    let worker = spawn_worker(request_rx, result_tx, Duration::ZERO, 2);
    let error = collect_results(
        &mut result_rx,
        CollectOptions::new(3),
        &NoOpProgressReporter,
        &MemoryOrderSink::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        error,
        PipelineError::ResultsExhausted {
            expected: 3,
            received: 2
        }
    ));
    assert_eq!(worker.await.unwrap().unwrap().processed, 2);
}

#[tokio::test]
async fn test_stalled_result_queue_is_reported_as_deadlock() {
    // 送信側は生きているが何も送られない
    let (_result_tx, mut result_rx) = mpsc::channel::<Order>(1);

    let error = collect_results(
        &mut result_rx,
        CollectOptions::new(1).with_receive_timeout(Some(Duration::from_millis(30))),
        &NoOpProgressReporter,
        &MemoryOrderSink::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, PipelineError::DeadlockDetected { .. }));
    assert_eq!(error.severity(), ErrorSeverity::Critical);
}

#[tokio::test]
async fn test_unknown_preset_is_rejected() {
    let error = DefaultPipelineConfig::preset("slowest").unwrap_err();

    assert!(matches!(error, PipelineError::ConfigurationError { .. }));
    assert!(error.to_string().contains("slowest"));
}
