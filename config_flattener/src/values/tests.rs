//! Unit tests for fragment merging and loading.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use tempfile::TempDir;

use super::{Fragment, FragmentComposer, FragmentSource, load_fragment, merge_value};
use crate::FlattenError;

#[rstest]
#[case(json!({"a": 1}), json!({"b": 2}), json!({"a": 1, "b": 2}))]
#[case(json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), json!({"a": {"x": 1, "y": 2}}))]
#[case(json!({"a": [1, 2]}), json!({"a": [3]}), json!({"a": [3]}))]
#[case(json!({"a": 1}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case(json!({"a": {"x": 1}}), json!({"a": null}), json!({"a": null}))]
fn overlays_later_fragments(#[case] base: Value, #[case] layer: Value, #[case] expected: Value) {
    let mut target = base;
    merge_value(&mut target, layer);
    assert_eq!(target, expected);
}

#[rstest]
fn empty_composer_merges_to_empty_mapping() {
    let composer = FragmentComposer::new();
    assert!(composer.is_empty());
    assert_eq!(composer.merged(), json!({}));
}

#[rstest]
fn collects_from_iterators_in_order() {
    let composer: FragmentComposer = [json!({"port": 1}), json!({"port": 2})]
        .into_iter()
        .collect();
    assert_eq!(composer.len(), 2);
    assert_eq!(composer.merged(), json!({"port": 2}));
    assert!(
        composer
            .into_iter()
            .all(|fragment| fragment.source() == &FragmentSource::Inline)
    );
}

#[rstest]
fn prepared_fragments_keep_their_source() {
    let mut composer = FragmentComposer::new();
    composer.push_fragment(Fragment::file(
        json!({"db": {"host": "from-file", "port": 5432}}),
        "conf/app.toml".into(),
    ));
    composer.push(json!({"db": {"host": "override"}}));
    assert_eq!(
        composer.merged(),
        json!({"db": {"host": "override", "port": 5432}})
    );
    let sources: Vec<String> = composer
        .fragments()
        .iter()
        .map(|fragment| fragment.source().to_string())
        .collect();
    assert_eq!(sources, ["conf/app.toml", "inline"]);
    let values: Vec<Value> = composer.into_iter().map(Fragment::into_value).collect();
    assert_eq!(values[1], json!({"db": {"host": "override"}}));
}

fn write(dir: &TempDir, name: &str, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).with_context(|| format!("write {name}"))?;
    Ok(path)
}

#[rstest]
fn loads_toml_fragments() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let path = write(&dir, "app.toml", "[servers.a]\nhost = \"alpha\"\nport = 80\n")?;
    let value = load_fragment(&path)
        .map_err(|err| anyhow::anyhow!(err.to_string()))?
        .context("file exists")?;
    ensure!(value == json!({"servers": {"a": {"host": "alpha", "port": 80}}}));
    Ok(())
}

#[rstest]
fn missing_files_are_skipped() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let missing = dir.path().join("absent.toml");
    ensure!(load_fragment(&missing).map_err(|e| anyhow::anyhow!(e.to_string()))?.is_none());
    let mut composer = FragmentComposer::new();
    ensure!(!composer.push_file(&missing).map_err(|e| anyhow::anyhow!(e.to_string()))?);
    ensure!(composer.is_empty());
    Ok(())
}

#[rstest]
fn records_file_provenance() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let path = write(&dir, "base.toml", "name = \"demo\"\n")?;
    let mut composer = FragmentComposer::new();
    composer.push(json!({"name": "inline", "debug": true}));
    ensure!(composer.push_file(&path).map_err(|e| anyhow::anyhow!(e.to_string()))?);
    let recorded = composer
        .fragments()
        .last()
        .and_then(|fragment| fragment.path())
        .map(|p| p.as_std_path().to_path_buf());
    ensure!(recorded.as_deref() == Some(path.as_path()));
    ensure!(composer.merged() == json!({"name": "demo", "debug": true}));
    Ok(())
}

#[rstest]
fn reports_parse_failures_with_path() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let path = write(&dir, "broken.toml", "name = \n")?;
    let err = load_fragment(&path).expect_err("invalid TOML must fail");
    match &*err {
        FlattenError::File { path: reported, .. } => ensure!(reported == &path),
        other => anyhow::bail!("unexpected error: {other}"),
    }
    Ok(())
}

#[cfg(not(feature = "json5"))]
#[rstest]
fn json_requires_the_json5_feature() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let path = write(&dir, "app.json", "{\"name\": \"demo\"}")?;
    let err = load_fragment(Path::new(&path)).expect_err("json5 feature disabled");
    ensure!(err.to_string().contains("json5 feature disabled"));
    Ok(())
}

#[cfg(feature = "json5")]
#[rstest]
fn loads_json_fragments() -> Result<()> {
    let dir = TempDir::new().context("create temp dir")?;
    let path = write(&dir, "app.json5", "{name: 'demo', // comment\n}")?;
    let value = load_fragment(Path::new(&path))
        .map_err(|err| anyhow::anyhow!(err.to_string()))?
        .context("file exists")?;
    ensure!(value == json!({"name": "demo"}));
    Ok(())
}
