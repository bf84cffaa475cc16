//! Unit tests for schema definitions and path joining.

use rstest::{fixture, rstest};

use super::{NodeDefinition, SchemaNode, TreeBuilder};
use crate::FlattenError;

#[fixture]
fn services() -> NodeDefinition {
    NodeDefinition::array(
        "app",
        [
            NodeDefinition::scalar("name"),
            NodeDefinition::prototyped(
                "servers",
                NodeDefinition::array("server", [NodeDefinition::scalar("host")]).force_flatten(),
            ),
        ],
    )
}

fn build(root: NodeDefinition, separator: &str) -> SchemaNode {
    TreeBuilder::new(root)
        .with_separator(separator)
        .build()
        .expect("separator is valid")
}

#[rstest]
#[case(".", "app.servers..host")]
#[case("/", "app/servers//host")]
#[case("::", "app::servers::::host")]
fn prototype_children_carry_doubled_separator(
    services: NodeDefinition,
    #[case] separator: &str,
    #[case] expected: &str,
) {
    let tree = build(services, separator);
    let servers = &tree.children()[1];
    let prototype = servers.prototype().expect("servers is prototyped");
    assert_eq!(prototype.name(), "");
    assert!(prototype.force_flatten());
    assert_eq!(prototype.children()[0].path(), expected);
}

#[rstest]
fn root_path_is_its_name(services: NodeDefinition) {
    let tree = build(services, ".");
    assert_eq!(tree.path(), "app");
    assert_eq!(tree.children()[0].path(), "app.name");
    assert!(tree.is_array_kind());
    assert!(!tree.children()[0].is_array_kind());
}

#[rstest]
fn child_appends_only_to_arrays() {
    let array = NodeDefinition::array("a", []).child(NodeDefinition::scalar("b"));
    let scalar = NodeDefinition::scalar("s").child(NodeDefinition::scalar("ignored"));
    assert_eq!(build(array, ".").children().len(), 1);
    assert!(build(scalar, ".").children().is_empty());
}

#[rstest]
fn rejects_empty_separator(services: NodeDefinition) {
    let err = TreeBuilder::new(services)
        .with_separator("")
        .build()
        .expect_err("empty separator must fail");
    assert!(matches!(&*err, FlattenError::InvalidSeparator));
}

#[rstest]
fn scalars_never_force_flatten() {
    let tree = build(NodeDefinition::scalar("leaf").force_flatten(), ".");
    assert!(!tree.force_flatten());
    assert!(tree.prototype().is_none());
}

#[rstest]
#[case(true, true)]
#[case(false, false)]
fn nested_prototypes_fail_only_when_split(#[case] split_inner: bool, #[case] fails: bool) {
    let plain = NodeDefinition::prototyped("", NodeDefinition::array("", []).force_flatten());
    let inner = if split_inner { plain.force_flatten() } else { plain };
    let result = TreeBuilder::new(NodeDefinition::prototyped("m", inner)).build();
    assert_eq!(result.is_err(), fails);
    if let Err(err) = result {
        assert!(matches!(&*err, FlattenError::NestedPrototype { path } if path == "m"));
    }
}
