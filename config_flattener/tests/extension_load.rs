//! Loading fragments through `ParameterExtension` implementations.

mod common;

use std::path::Path;

use anyhow::Result;
use config_flattener::schema::NodeDefinition;
use config_flattener::values::FragmentComposer;
use config_flattener::{
    FlattenError, FlattenerConfig, Parameter, ParameterExtension, ResultIntoFigment,
};
use rstest::rstest;
use serde_json::json;
use test_helpers::figment::{with_jail, write_fragment};
use test_helpers::params::{ParamMap, expect_params};

struct Application {
    config: FlattenerConfig,
}

impl ParameterExtension for Application {
    fn schema(&self) -> NodeDefinition {
        common::application()
    }

    fn config(&self) -> FlattenerConfig {
        self.config.clone()
    }
}

#[rstest]
fn later_fragments_override_earlier_ones() -> Result<()> {
    let extension = Application {
        config: FlattenerConfig::default(),
    };
    let mut params = ParamMap::new();
    let written = extension
        .load(
            [
                json!({ "name": "demo", "db": { "host": "localhost", "port": 5432 } }),
                json!({ "db": { "host": "db.internal" } }),
                json!({ "items": { "a": { "name": "first" } } }),
            ],
            &mut params,
        )
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    assert_eq!(written, 4);
    expect_params(
        &params,
        &[
            ("app.name", json!("demo")),
            ("app.db.host", json!("db.internal")),
            ("app.db.port", json!(5432)),
            ("app.items.a.name", json!("first")),
        ],
    )
}

#[rstest]
fn uses_the_configured_separator_for_schema_paths() -> Result<()> {
    let extension = Application {
        config: FlattenerConfig::new(3, "/"),
    };
    let mut params: Vec<Parameter> = Vec::new();
    extension
        .load([json!({ "items": { "k": { "name": "n" } } })], &mut params)
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    assert_eq!(params, vec![Parameter::new("app/items/k/name", json!("n"))]);
    Ok(())
}

#[rstest]
fn empty_separator_aborts_loading() {
    let extension = Application {
        config: FlattenerConfig::new(3, ""),
    };
    let mut params = ParamMap::new();
    let err = extension
        .load([json!({ "name": "demo" })], &mut params)
        .expect_err("separator must not be empty");
    assert!(matches!(&*err, FlattenError::InvalidSeparator));
    assert!(params.is_empty());
}

#[rstest]
fn loads_file_fragments_in_order() -> Result<()> {
    let (fragments, params) = with_jail(|jail| {
        let base = write_fragment(
            jail,
            "base.toml",
            r#"name = "demo"
debug = false

[db]
host = "localhost"
port = 5432

[plugins.audit]
path = "/opt/audit"
"#,
        )?;
        let local = write_fragment(
            jail,
            "local.toml",
            r#"debug = true

[items.a]
name = "first"

[items.a.tags.x]
weight = 3
"#,
        )?;
        let mut composer = FragmentComposer::new();
        for file in [base.as_path(), local.as_path(), Path::new("missing.toml")] {
            composer.push_file(file).to_figment()?;
        }
        let extension = Application {
            config: FlattenerConfig::default(),
        };
        let mut params = ParamMap::new();
        extension
            .load_composed(&composer, &mut params)
            .to_figment()?;
        Ok((composer.len(), params))
    })?;
    assert_eq!(fragments, 2, "missing file should be skipped");
    expect_params(
        &params,
        &[
            ("app.name", json!("demo")),
            ("app.debug", json!(true)),
            ("app.db.host", json!("localhost")),
            ("app.db.port", json!(5432)),
            ("app.plugins", json!({ "audit": { "path": "/opt/audit" } })),
            ("app.items.a.name", json!("first")),
            ("app.items.a.tags.x.weight", json!(3)),
        ],
    )
}

#[rstest]
fn file_drift_reports_the_offending_key() -> Result<()> {
    let outcome = with_jail(|jail| {
        let path = write_fragment(jail, "app.toml", "[db]\nusername = \"root\"\n")?;
        let mut composer = FragmentComposer::new();
        composer.push_file(&path).to_figment()?;
        let extension = Application {
            config: FlattenerConfig::default(),
        };
        let mut params = ParamMap::new();
        Ok(extension
            .load_composed(&composer, &mut params)
            .map_err(|err| err.to_string()))
    })?;
    let Err(message) = outcome else {
        anyhow::bail!("drifted file should fail");
    };
    assert!(message.contains("\"username\""), "unexpected message: {message}");
    Ok(())
}
