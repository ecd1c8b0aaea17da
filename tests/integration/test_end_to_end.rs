// エンドツーエンド統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::mocks::RecordingReporter;
use fixtures::{sample_orders, test_config};
use order_pipeline::cli::{build_pipeline_config, execute_run, RunConfig};
use order_pipeline::services::MemoryOrderSink;
use order_pipeline::{
    create_quiet_engine, ClosePolicy, Order, PipelineConfig, PipelineEngine, PipelineSummary,
};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_six_dish_menu_is_served_in_order() {
    let engine = create_quiet_engine(test_config());

    let summary = engine.run(sample_orders()).await.unwrap();

    assert_eq!(summary.total_orders, 6);
    assert_eq!(summary.served, 6);
    assert_eq!(
        engine.sink().delivered_labels(),
        vec!["炒饭", "炒时蔬", "水煮肉片", "炒饭", "炒时蔬", "水煮肉片"]
    );
    assert!(engine.sink().is_finished());
}

#[tokio::test]
async fn test_progress_events_follow_serving_order() {
    let engine = PipelineEngine::new(
        test_config(),
        RecordingReporter::new(),
        MemoryOrderSink::new(),
    );

    engine.run_labels(&["a", "b", "c"]).await.unwrap();

    assert_eq!(
        engine.reporter().events(),
        vec![
            "started:3",
            "served:1/3:a",
            "served:2/3:b",
            "served:3/3:c",
            "completed:3/3",
        ]
    );
}

#[tokio::test]
async fn test_cooking_time_is_sequential() {
    // 1人の料理人なので、3件で少なくとも3回分の調理時間がかかる
    let config = test_config().with_delay(Duration::from_millis(20));
    let engine = create_quiet_engine(config);

    let summary = engine.run_labels(&["a", "b", "c"]).await.unwrap();

    assert!(summary.total_time_ms >= 60);
    assert_eq!(engine.sink().delivered_count(), 3);
}

#[tokio::test]
async fn test_fixed_policy_matching_input_runs() {
    let config = test_config().with_close_policy(ClosePolicy::Fixed(4));
    let engine = create_quiet_engine(config);

    let summary = engine.run_labels(&["a", "b", "c", "d"]).await.unwrap();

    assert_eq!(summary.served, 4);
}

#[tokio::test]
async fn test_engine_can_run_repeatedly() {
    let engine = create_quiet_engine(test_config());

    engine.run_labels(&["a"]).await.unwrap();
    engine.sink().clear();
    let summary = engine.run(Order::from_labels(["b", "c"])).await.unwrap();

    assert_eq!(summary.served, 2);
    assert_eq!(engine.sink().delivered_labels(), vec!["b", "c"]);
}

#[tokio::test]
async fn test_run_command_with_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pipeline.json");
    fs::write(
        &path,
        r#"{ "preset": "fast", "request_capacity": 3, "result_capacity": 1, "progress": false }"#,
    )
    .unwrap();

    let options = RunConfig {
        labels: vec!["a".into(), "b".into(), "c".into()],
        config: Some(path),
        quiet: true,
        ..RunConfig::default()
    };

    let config = build_pipeline_config(&options).unwrap();
    assert_eq!(config.request_capacity(), 3);
    assert_eq!(config.result_capacity(), 1);

    let summary = execute_run(options).await.unwrap();
    assert_eq!(summary.served, 3);
}

#[tokio::test]
async fn test_summary_serializes_to_json() {
    let engine = create_quiet_engine(test_config());
    let summary = engine.run_labels(&["a", "b"]).await.unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let restored: PipelineSummary = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.total_orders, 2);
    assert_eq!(restored.served, 2);
}
