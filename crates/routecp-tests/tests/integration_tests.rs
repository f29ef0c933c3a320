//! Integration tests for routecp
//!
//! These tests drive the routing stage the way the surrounding pipeline
//! would: file objects in, transformed file objects out, with the
//! filesystem as the observable side effect.

use routecp_config::StageConfig;
use routecp_io::TransferOptions;
use routecp_stage::CopyStage;
use routecp_tests::test_utils::{generate_content, Workspace};
use routecp_types::{CopyOutcome, ErrorKind, FileObject};
use std::fs;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_fixed_destination_end_to_end() {
    let ws = Workspace::new();
    let stage = CopyStage::new(StageConfig::fixed(ws.dest("out"))).unwrap();

    let mut file = ws.content_object("src/a.txt", "hi");
    let outcome = stage.process(&mut file).await.unwrap();

    assert!(matches!(outcome, CopyOutcome::Copied { bytes_copied: 2, .. }));
    assert_eq!(file.path, ws.dest("out").join("src/a.txt"));
    assert_eq!(ws.read_dest("out", "src/a.txt"), "hi");
}

#[tokio::test]
async fn test_prefix_stripping_end_to_end() {
    let ws = Workspace::new();
    let config = StageConfig::builder()
        .destination(ws.dest("out"))
        .prefix(1)
        .build()
        .unwrap();
    let stage = CopyStage::new(config).unwrap();

    let mut file = ws.content_object("src/a.txt", "hi");
    stage.process(&mut file).await.unwrap();

    assert_eq!(ws.read_dest("out", "a.txt"), "hi");
    assert!(!ws.dest_exists("out", "src"));
}

#[tokio::test]
async fn test_routed_destinations_end_to_end() {
    let ws = Workspace::new();
    let config = StageConfig::builder()
        .route("*.js", ws.dest("js-out"))
        .route("*.css", ws.dest("css-out"))
        .build()
        .unwrap();
    let stage = CopyStage::new(config).unwrap();

    let mut script = ws.content_object("app.js", "let x;");
    stage.process(&mut script).await.unwrap();
    assert_eq!(ws.read_dest("js-out", "app.js"), "let x;");

    let mut style = ws.content_object("app.css", "body {}");
    stage.process(&mut style).await.unwrap();
    assert_eq!(ws.read_dest("css-out", "app.css"), "body {}");

    let mut image = ws.content_object("app.png", "png");
    let error = stage.process(&mut image).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoDestinationMatch);
    assert!(!ws.dest_exists("js-out", "app.png"));
    assert!(!ws.dest_exists("css-out", "app.png"));
}

#[tokio::test]
async fn test_stream_content_is_rejected_without_writes() {
    let ws = Workspace::new();
    let stage = CopyStage::new(StageConfig::fixed(ws.dest("out"))).unwrap();

    let source = ws.write_source("live.log", "tail");
    let mut file = FileObject::with_stream(ws.base(), source);
    let error = stage.process(&mut file).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::StreamingUnsupported);
    assert!(!ws.dest("out").exists());
}

#[tokio::test]
async fn test_large_file_round_trip() {
    let ws = Workspace::new();
    let stage = CopyStage::new(StageConfig::fixed(ws.dest("out")))
        .unwrap()
        .with_transfer_options(TransferOptions { buffer_size: 4096 });

    let content = generate_content(256 * 1024);
    let source = ws.base().join("blob.bin");
    fs::create_dir_all(ws.base()).unwrap();
    fs::write(&source, &content).unwrap();

    let mut file = FileObject::with_content(ws.base(), &source);
    let outcome = stage.process(&mut file).await.unwrap();

    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            target: ws.dest("out").join("blob.bin"),
            bytes_copied: content.len() as u64,
        }
    );
    assert_eq!(fs::read(ws.dest("out").join("blob.bin")).unwrap(), content);
}

#[tokio::test]
async fn test_reprocessing_overwrites_the_target() {
    let ws = Workspace::new();
    let stage = CopyStage::new(StageConfig::fixed(ws.dest("out"))).unwrap();

    let mut first = ws.content_object("src/a.txt", "old content");
    stage.process(&mut first).await.unwrap();

    let mut second = ws.content_object("src/a.txt", "new");
    stage.process(&mut second).await.unwrap();

    assert_eq!(ws.read_dest("out", "src/a.txt"), "new");
}

#[tokio::test]
async fn test_shared_destination_directory_is_provisioned_once() {
    let ws = Workspace::new();
    let stage = CopyStage::new(StageConfig::fixed(ws.dest("out"))).unwrap();

    // Both files land in the same directory; the second copy must tolerate
    // the tree already existing.
    let mut first = ws.content_object("src/a.txt", "a");
    let mut second = ws.content_object("src/b.txt", "b");
    stage.process(&mut first).await.unwrap();
    stage.process(&mut second).await.unwrap();

    assert_eq!(ws.read_dest("out", "src/a.txt"), "a");
    assert_eq!(ws.read_dest("out", "src/b.txt"), "b");
}

#[tokio::test]
async fn test_stage_loop_over_a_mixed_run() {
    let ws = Workspace::new();
    let config = StageConfig::builder()
        .route("**/*.js", ws.dest("js-out"))
        .route("**", ws.dest("rest-out"))
        .build()
        .unwrap();
    let stage = CopyStage::new(config).unwrap();

    let script = ws.content_object("src/app.js", "let x;");
    let readme = ws.content_object("README.md", "# readme");
    let marker = FileObject::empty(ws.base(), ws.base().join("src"));

    let (input_tx, input_rx) = mpsc::channel(1);
    let (output_tx, mut output_rx) = mpsc::channel(1);

    let feed = async move {
        for file in [script, marker, readme] {
            input_tx.send(file).await.unwrap();
        }
    };
    let collect = async move {
        let mut forwarded = Vec::new();
        while let Some(file) = output_rx.recv().await {
            forwarded.push(file);
        }
        forwarded
    };

    let (stats, (), forwarded) = tokio::join!(stage.run(input_rx, output_tx), feed, collect);
    let stats = stats.unwrap();

    assert_eq!(stats.files_copied, 2);
    assert_eq!(stats.files_passed_through, 1);

    assert_eq!(forwarded.len(), 3);
    assert_eq!(forwarded[0].path, ws.dest("js-out").join("src/app.js"));
    assert_eq!(forwarded[1].path, ws.base().join("src"));
    assert_eq!(forwarded[2].path, ws.dest("rest-out").join("README.md"));

    assert_eq!(ws.read_dest("js-out", "src/app.js"), "let x;");
    assert_eq!(ws.read_dest("rest-out", "README.md"), "# readme");
}

#[tokio::test]
async fn test_configuration_from_deserialized_input() {
    let ws = Workspace::new();
    let raw = format!(
        r#"{{ "destination": "{}", "prefix": 1 }}"#,
        ws.dest("out").display()
    );
    let config: StageConfig = serde_json::from_str(&raw).unwrap();
    let stage = CopyStage::new(config).unwrap();

    let mut file = ws.content_object("src/a.txt", "hi");
    stage.process(&mut file).await.unwrap();
    assert_eq!(ws.read_dest("out", "a.txt"), "hi");
}

#[tokio::test]
async fn test_over_stripping_collapses_into_the_root() {
    let ws = Workspace::new();
    let config = StageConfig::builder()
        .destination(ws.dest("out"))
        .prefix(10)
        .build()
        .unwrap();
    let stage = CopyStage::new(config).unwrap();

    // Historical degenerate behavior: stripping past the last separator
    // leaves the bare filename, so the file lands directly in the root.
    let mut file = ws.content_object("src/deep/a.txt", "hi");
    stage.process(&mut file).await.unwrap();

    assert_eq!(ws.read_dest("out", "a.txt"), "hi");
}
