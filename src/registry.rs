//! Device registry — Homie nodes, properties, and the advertisement phase.
//!
//! The registry is populated during setup (`register`), advertised exactly
//! once (`advertise`, which also publishes retained `unit` metadata), and
//! sealed before the sampling loop starts.  After sealing it is immutable;
//! publishing to a property that was never advertised is a programming
//! error caught by a debug assertion, not a runtime condition.

use log::info;

use crate::app::ports::PublisherPort;
use crate::error::{PublishError, RegistryError};

/// Fixed capacity for the node table.
pub const MAX_NODES: usize = 8;
/// Fixed capacity for properties per node.
pub const MAX_PROPERTIES: usize = 4;

/// Advertised metadata for one publishable property.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub id: &'static str,
    /// Unit string published once as retained `unit` metadata (`%`, `°C`).
    pub unit: Option<&'static str>,
    pub retained: bool,
}

/// One Homie node: a named group of properties of a common kind.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: &'static str,
    pub kind: &'static str,
    pub properties: heapless::Vec<Property, MAX_PROPERTIES>,
}

impl Node {
    pub fn new(id: &'static str, kind: &'static str) -> Self {
        Self {
            id,
            kind,
            properties: heapless::Vec::new(),
        }
    }

    /// Attach a `state` property with the given unit.
    pub fn with_state(mut self, unit: Option<&'static str>) -> Self {
        let pushed = self.properties.push(Property {
            id: "state",
            unit,
            retained: true,
        });
        debug_assert!(pushed.is_ok(), "property table full");
        self
    }
}

/// Owns all node/property metadata.  Mutable during setup, frozen after.
pub struct DeviceRegistry {
    nodes: heapless::Vec<Node, MAX_NODES>,
    sealed: bool,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            nodes: heapless::Vec::new(),
            sealed: false,
        }
    }

    /// Add a node.  Only legal before [`advertise`](Self::advertise).
    pub fn register(&mut self, node: Node) -> Result<(), RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed);
        }
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(RegistryError::DuplicateNode);
        }
        info!("registry: node '{}' ({})", node.id, node.kind);
        self.nodes.push(node).map_err(|_| RegistryError::Full)
    }

    /// One-time advertisement: publish retained `unit` metadata for every
    /// property that carries a unit, then seal the registry.
    ///
    /// Runs after the transport signals ready, before the sampling loop.
    pub fn advertise(&mut self, publisher: &mut impl PublisherPort) -> crate::error::Result<()> {
        for node in &self.nodes {
            for prop in &node.properties {
                if let Some(unit) = prop.unit {
                    if !publisher.publish(node.id, "unit", unit, true) {
                        return Err(PublishError {
                            node: node.id,
                            property: "unit",
                        }
                        .into());
                    }
                }
            }
        }
        self.sealed = true;
        info!("registry: advertised {} nodes, sealed", self.nodes.len());
        Ok(())
    }

    /// Whether `(node, property)` was advertised.  The sampling path checks
    /// this under `debug_assert!` only.
    pub fn has_property(&self, node_id: &str, property_id: &str) -> bool {
        self.nodes
            .iter()
            .find(|n| n.id == node_id)
            .is_some_and(|n| n.properties.iter().any(|p| p.id == property_id))
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed node set of the multisensor board: luminosity, motion,
/// temperature, and humidity, each exposing one retained `state` property.
pub fn multisensor_nodes() -> crate::error::Result<DeviceRegistry> {
    let mut registry = DeviceRegistry::new();
    registry.register(Node::new("luminosity", "luminosity").with_state(Some("%")))?;
    registry.register(Node::new("motion", "motion").with_state(None))?;
    registry.register(Node::new("temperature", "temperature").with_state(Some("°C")))?;
    registry.register(Node::new("humidity", "humidity").with_state(Some("%")))?;
    Ok(registry)
}
