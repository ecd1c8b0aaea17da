// 並行処理の統合テスト
// 複数パイプラインの同時実行、周期タスク、ファンイン、デッドロック検出
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::test_config;
use order_pipeline::core::{Tick, TickerStop};
use order_pipeline::engine::{
    detect_deadlock, run_station_group, spawn_fan_in, spawn_ticker, TickerConfig,
};
use order_pipeline::{create_quiet_engine, Order, PipelineError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_independent_pipelines_run_concurrently() {
    let mut handles = Vec::new();
    for run in 0..4 {
        handles.push(tokio::spawn(async move {
            let labels: Vec<String> = (0..5).map(|i| format!("{run}-{i}")).collect();
            let engine = create_quiet_engine(test_config());
            let summary = engine.run(Order::from_labels(labels.clone())).await.unwrap();
            (labels, summary, engine.sink().delivered_labels())
        }));
    }

    for handle in handles {
        let (labels, summary, delivered) = handle.await.unwrap();
        assert_eq!(summary.served, 5);
        // 各パイプラインは自分の注文だけを投入順に返す
        assert_eq!(delivered, labels);
    }
}

#[tokio::test]
async fn test_result_queue_of_one_keeps_order_under_backpressure() {
    let labels: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let config = test_config()
        .with_request_capacity(labels.len())
        .with_result_capacity(1)
        .with_delay(Duration::from_millis(2));
    let engine = create_quiet_engine(config);

    engine.run(Order::from_labels(labels.clone())).await.unwrap();

    assert_eq!(engine.sink().delivered_labels(), labels);
}

#[tokio::test]
async fn test_cancel_stops_running_tickers() {
    let token = CancellationToken::new();
    let handles: Vec<_> = ["炒饭", "炒时蔬"]
        .iter()
        .map(|label| {
            spawn_ticker(
                TickerConfig::new(*label, Duration::from_millis(5)),
                token.child_token(),
                None,
            )
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(30)).await;
    token.cancel();

    for handle in handles {
        let report = timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(report.stop, TickerStop::Cancelled);
        assert!(report.ticks >= 1);
    }
}

#[tokio::test]
async fn test_station_group_waits_for_everyone() {
    let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let (tick_tx, mut tick_rx) = mpsc::channel::<Tick>(16);

    let reports = run_station_group(
        &labels,
        Duration::from_millis(2),
        4,
        CancellationToken::new(),
        Some(tick_tx),
    )
    .await
    .unwrap();

    assert_eq!(
        reports.iter().map(|r| r.label.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    assert!(reports.iter().all(|r| r.stop == TickerStop::Exhausted));

    let mut total = 0;
    while let Some(_tick) = tick_rx.recv().await {
        total += 1;
    }
    assert_eq!(total, 12);
}

#[tokio::test]
async fn test_fan_in_preserves_per_source_order() {
    let mut sources = Vec::new();
    for source in 0..3 {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move {
            for i in 0..5 {
                tx.send((source, i)).await.unwrap();
            }
        });
        sources.push(rx);
    }

    let (mut merged_rx, handle) = spawn_fan_in(sources, 2).unwrap();
    let mut per_source = vec![Vec::new(); 3];
    while let Some(merged) = merged_rx.recv().await {
        assert_eq!(merged.source, merged.item.0);
        per_source[merged.source].push(merged.item.1);
    }

    assert_eq!(handle.await.unwrap(), 15);
    for items in per_source {
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }
}

#[tokio::test]
async fn test_double_send_on_capacity_one_is_detected() {
    // 受信側が読まないまま容量1のキューへ2回送ると永久に待つ
    let (tx, _rx) = mpsc::channel::<Order>(1);

    let error = detect_deadlock("double_send", Duration::from_millis(50), async {
        tx.send(Order::new("炒饭")).await.ok();
        tx.send(Order::new("炒时蔬")).await.ok();
    })
    .await
    .unwrap_err();

    match error {
        PipelineError::DeadlockDetected { operation, .. } => assert_eq!(operation, "double_send"),
        other => panic!("DeadlockDetectedを期待しました: {other:?}"),
    }
}
