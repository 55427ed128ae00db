//! Integration tests for the apply command covering the built-in rules, rule files and policies.

use super::*;

#[test]
#[serial]
/// Patches the hardcoded target relative to the working directory.
fn test_apply_patches_default_target() {
    let temp_path = tempdir().unwrap();
    let _guard = ChangeDirGuard::new(temp_path.path());
    test::ensure_file(DEFAULT_TARGET, &test::sample_property_test());

    apply::execute(ApplyArgs::default()).unwrap();

    let patched = fs::read_to_string(DEFAULT_TARGET).unwrap();
    let lines: Vec<&str> = patched.lines().collect();
    let anchor = lines
        .iter()
        .position(|l| l.contains("DocumentPreviewService documentPreviewService = mock("))
        .unwrap();
    assert_eq!(lines[anchor + 1], INJECTED);
    assert!(patched.contains(
        "new DocumentServiceImpl(\n            documentRepository, fileStorageService, storageQuotaService, documentPreviewService, systemLogService);"
    ));
}

#[test]
/// Minimal snippet: the anchor line plus a constructor call split after `(`.
fn test_apply_minimal_snippet() {
    let snippet = "DocumentPreviewService documentPreviewService = mock(DocumentPreviewService.class);\n\nx = new DocumentServiceImpl(\n documentRepository, fileStorageService, storageQuotaService, documentPreviewService);\n";
    let (_dir, path) = scratch_file("Snippet.java", snippet);

    apply::execute(ApplyArgs {
        path: Some(path.clone()),
        ..Default::default()
    })
    .unwrap();

    let expected = format!(
        "DocumentPreviewService documentPreviewService = mock(DocumentPreviewService.class);\n{INJECTED}\n\nx = new DocumentServiceImpl(\n            documentRepository, fileStorageService, storageQuotaService, documentPreviewService, systemLogService);\n"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
/// Running twice duplicates the mock and leaves the constructor alone.
fn test_apply_twice_duplicates_mock_declaration() {
    let (_dir, path) = scratch_file("T.java", &test::sample_property_test());
    let args = ApplyArgs {
        path: Some(path.clone()),
        ..Default::default()
    };

    apply::execute(args.clone()).unwrap();
    let once = fs::read_to_string(&path).unwrap();
    apply::execute(args).unwrap();
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once.matches(INJECTED).count(), 1);
    assert_eq!(twice.matches(INJECTED).count(), 2);
    assert_eq!(twice.matches("systemLogService)").count(), 1);
}

#[test]
/// Under --strict a second run fails and the file is left as the first run wrote it.
fn test_apply_strict_second_run_fails() {
    let (_dir, path) = scratch_file("T.java", &test::sample_property_test());
    let args = ApplyArgs {
        path: Some(path.clone()),
        strict: true,
        ..Default::default()
    };

    apply::execute(args.clone()).unwrap();
    let once = fs::read_to_string(&path).unwrap();

    let err = apply::execute(args).unwrap_err();
    assert!(matches!(err, PatchError::AnchorNotFound { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
/// A file with no anchors comes back byte-for-byte identical.
fn test_apply_without_anchors_is_identity() {
    let content = "class Unrelated {\n    int x = 1;\n}\n";
    let (_dir, path) = scratch_file("U.java", content);

    apply::execute(ApplyArgs {
        path: Some(path.clone()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
/// Rules and target both come from a TOML rule file.
fn test_apply_with_rule_file_target() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("Foo.java");
    fs::write(&target, "call(a);\ncall(b);\n").unwrap();
    let rules_path = dir.path().join("rules.toml");
    fs::write(
        &rules_path,
        format!(
            "target = {:?}\n\n[[rule]]\nname = \"wrap\"\npattern = 'call\\((\\w)\\)'\nreplacement = 'invoke(${{1}}, ctx)'\n",
            target.display().to_string()
        ),
    )
    .unwrap();

    apply::execute(ApplyArgs {
        rules: Some(rules_path),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "invoke(a, ctx);\ninvoke(b, ctx);\n"
    );
}

#[test]
/// A missing target surfaces as FileNotFound and nothing is created.
fn test_apply_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Nope.java");

    let err = apply::execute(ApplyArgs {
        path: Some(path.clone()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, PatchError::FileNotFound(ref p) if *p == path));
    assert!(!path.exists());
}

#[test]
/// CRLF and lone-CR files come back with `\n` line endings only.
fn test_apply_crlf_and_cr_files_are_written_with_lf() {
    let crlf = "DocumentPreviewService documentPreviewService = mock(DocumentPreviewService.class);\r\nx = new DocumentServiceImpl(\r\n documentRepository, fileStorageService, storageQuotaService, documentPreviewService);\r\n";
    let expected = format!(
        "DocumentPreviewService documentPreviewService = mock(DocumentPreviewService.class);\n{INJECTED}\nx = new DocumentServiceImpl(\n            documentRepository, fileStorageService, storageQuotaService, documentPreviewService, systemLogService);\n"
    );

    for (name, content) in [("Crlf.java", crlf.to_string()), ("Cr.java", crlf.replace("\r\n", "\r"))] {
        let (_dir, path) = scratch_file(name, &content);

        apply::execute(ApplyArgs {
            path: Some(path.clone()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(fs::read(&path).unwrap(), expected.as_bytes(), "{name}");
    }
}
