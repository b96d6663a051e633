use lumos_artifacts::{
    bundles, ArtifactEmitter, ArtifactError, BundleKind, LocalStorage, VerifyStatus,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_output_directory_fails_with_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("dist");
    let emitter = ArtifactEmitter::new(LocalStorage::new(&missing));
    let selected = bundles::select(&[BundleKind::Infra]).unwrap();
    let mut out = Vec::new();

    let err = emitter.emit_all(&selected, &mut out).unwrap_err();

    match &err {
        ArtifactError::WriteError { path, source } => {
            assert!(path.ends_with("package.json"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(out.is_empty());
    assert!(!missing.exists());
}

#[test]
fn test_failure_stops_the_bundle() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where Dockerfile should go makes the second write fail.
    fs::create_dir(temp_dir.path().join("Dockerfile")).unwrap();

    let emitter = ArtifactEmitter::new(LocalStorage::new(temp_dir.path()));
    let selected = bundles::select(&[BundleKind::Infra]).unwrap();
    let mut out = Vec::new();

    let result = emitter.emit_all(&selected, &mut out);

    assert!(matches!(result, Err(ArtifactError::WriteError { .. })));
    assert!(temp_dir.path().join("package.json").is_file());
    assert!(!temp_dir.path().join("docker-compose.yml").exists());
    assert_eq!(String::from_utf8(out).unwrap(), "✅ Package.json criado!\n");
}

#[test]
fn test_verify_after_emit_and_tampering() {
    let temp_dir = TempDir::new().unwrap();
    let emitter = ArtifactEmitter::new(LocalStorage::new(temp_dir.path()));
    let bundle = bundles::build(BundleKind::Docs).unwrap();

    let before: Vec<_> = bundle
        .artifacts
        .iter()
        .map(|a| emitter.verify(a).unwrap())
        .collect();
    assert!(before.iter().all(|s| *s == VerifyStatus::Missing));

    emitter.emit_bundle(&bundle, &mut std::io::sink()).unwrap();
    for artifact in &bundle.artifacts {
        assert_eq!(emitter.verify(artifact).unwrap(), VerifyStatus::UpToDate);
    }

    fs::write(temp_dir.path().join(".env.example"), "PORT=8080\n").unwrap();
    let env_artifact = &bundle.artifacts[2];
    assert_eq!(emitter.verify(env_artifact).unwrap(), VerifyStatus::Stale);
}
