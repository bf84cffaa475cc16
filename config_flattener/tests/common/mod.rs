//! Shared schema fixtures for integration tests.

use config_flattener::schema::NodeDefinition;

/// Application schema with nested arrays and both kinds of prototype.
pub fn application() -> NodeDefinition {
    NodeDefinition::array(
        "app",
        [
            NodeDefinition::scalar("name"),
            NodeDefinition::scalar("debug"),
            NodeDefinition::array(
                "db",
                [
                    NodeDefinition::scalar("host"),
                    NodeDefinition::scalar("port"),
                    NodeDefinition::array(
                        "pool",
                        [
                            NodeDefinition::scalar("min"),
                            NodeDefinition::array("timeouts", [NodeDefinition::scalar("idle")]),
                        ],
                    ),
                ],
            ),
            NodeDefinition::prototyped(
                "plugins",
                NodeDefinition::array("plugin", [NodeDefinition::scalar("path")]),
            ),
            NodeDefinition::prototyped(
                "items",
                NodeDefinition::array(
                    "item",
                    [
                        NodeDefinition::scalar("name"),
                        NodeDefinition::prototyped(
                            "tags",
                            NodeDefinition::array("tag", [NodeDefinition::scalar("weight")])
                                .force_flatten(),
                        ),
                    ],
                )
                .force_flatten(),
            ),
        ],
    )
}
