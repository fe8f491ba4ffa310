mod common;

use std::fs;

use common::{ScriptedBackend, gedcom_file, session_with, trace};
use famsun_client::ViewerError;
use famsun_client::api::ViewerSession;
use famsun_client::chart::{ChartHost, NullChartHost};
use famsun_client::core::ChartData;
use famsun_client::export::{
    DirDownloadSink, DownloadSink, EXPORT_FILE_NAME, ExportArtifact, ImageFormat,
    MemoryDownloadSink,
};

async fn session_with_mounted_chart() -> (ViewerSession<ScriptedBackend>, NullChartHost) {
    let mut session = session_with(vec![Ok(ChartData::new(vec![trace("root")]))]);
    session.select_file(gedcom_file());
    session.generate().await.expect("generate succeeds");

    let mut host = NullChartHost::default();
    let figure = session.figure().expect("figure composes");
    let handle = host.mount(&figure).expect("mount succeeds");
    session.chart_mounted(handle);
    (session, host)
}

#[tokio::test]
async fn export_without_chart_fails_and_leaves_sink_untouched() {
    let session = session_with(vec![]);
    let mut host = NullChartHost::default();
    let mut sink = MemoryDownloadSink::default();

    let err = session
        .export_chart(&mut host, &mut sink)
        .await
        .expect_err("nothing rendered yet");
    assert!(matches!(err, ViewerError::NoChart));
    assert!(sink.delivered.is_empty());
}

#[tokio::test]
async fn export_without_live_handle_fails_and_leaves_sink_untouched() {
    let mut session = session_with(vec![Ok(ChartData::new(vec![trace("root")]))]);
    session.select_file(gedcom_file());
    session.generate().await.expect("generate succeeds");

    let mut host = NullChartHost::default();
    let mut sink = MemoryDownloadSink::default();

    let err = session
        .export_chart(&mut host, &mut sink)
        .await
        .expect_err("data exists but no instance registered");
    assert!(matches!(err, ViewerError::NoLiveHandle));
    assert!(sink.delivered.is_empty());
}

#[tokio::test]
async fn export_delivers_fixed_format_artifact() {
    let (session, mut host) = session_with_mounted_chart().await;
    let mut sink = MemoryDownloadSink::default();

    let artifact = session
        .export_chart(&mut host, &mut sink)
        .await
        .expect("export succeeds");

    assert_eq!(artifact.filename, EXPORT_FILE_NAME);
    assert!(!artifact.bytes.is_empty());
    assert_eq!(sink.delivered, vec![artifact]);

    let options = host.last_encode_options.expect("encode options recorded");
    assert_eq!(options.format, ImageFormat::Svg);
    assert_eq!(options.width_px, 1200);
    assert_eq!(options.height_px, 800);
    assert_eq!(options.scale, 2.0);
}

#[tokio::test]
async fn export_with_stale_handle_fails_with_encoding_error() {
    let (mut session, mut host) = session_with_mounted_chart().await;

    // The host replaces the instance; the session never learns about the
    // remount, so its registered handle goes stale.
    let figure = session.figure().expect("figure composes");
    let fresh = host.mount(&figure).expect("remount succeeds");

    let mut sink = MemoryDownloadSink::default();
    let err = session
        .export_chart(&mut host, &mut sink)
        .await
        .expect_err("stale handle must not encode");
    assert!(matches!(err, ViewerError::Encoding(_)));
    assert!(sink.delivered.is_empty());

    // Re-registering the fresh handle recovers the pipeline.
    session.chart_mounted(fresh);
    session
        .export_chart(&mut host, &mut sink)
        .await
        .expect("export succeeds after re-registration");
    assert_eq!(sink.delivered.len(), 1);
}

#[test]
fn dir_sink_writes_artifact_bytes() {
    let dir = std::env::temp_dir().join(format!("famsun-export-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create sink dir");

    let artifact = ExportArtifact {
        bytes: b"<svg/>".to_vec(),
        filename: EXPORT_FILE_NAME.to_owned(),
    };
    let mut sink = DirDownloadSink::new(&dir);
    sink.deliver(&artifact);

    let written = fs::read(dir.join(EXPORT_FILE_NAME)).expect("artifact on disk");
    assert_eq!(written, artifact.bytes);

    fs::remove_dir_all(&dir).expect("cleanup sink dir");
}
