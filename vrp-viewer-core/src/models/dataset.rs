#[cfg(test)]
#[path = "../../tests/unit/models/dataset_test.rs"]
mod dataset_test;

use super::{PartnerIndex, Selection};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A customer (node) identifier, unique within a dataset.
pub type CustomerId = i64;

/// A vehicle visit order expressed as customer ids.
pub type Route = Vec<CustomerId>;

/// Maps pickup id to its delivery id. The reverse direction is not stored.
///
/// Keys are iterated in ascending order which is the order used when searching by delivery.
pub type PdPairs = BTreeMap<CustomerId, CustomerId>;

/// A node on the plane.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Customer {
    /// Unique id.
    pub id: CustomerId,
    /// Logical x coordinate.
    pub x: f64,
    /// Logical y coordinate, increasing upwards.
    pub y: f64,
    /// Signed demand: its sign classifies the node.
    #[serde(default)]
    pub demand: f64,
}

impl Customer {
    /// Returns node kind derived from demand sign.
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_demand(self.demand)
    }

    /// Returns logical coordinate.
    pub fn coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// A node classification derived from demand sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Positive demand.
    Pickup,
    /// Negative demand.
    Delivery,
    /// Zero demand: route start/end or neutral node.
    Depot,
}

impl NodeKind {
    /// Classifies a node by its demand.
    pub fn from_demand(demand: f64) -> Self {
        if demand > 0. {
            NodeKind::Pickup
        } else if demand < 0. {
            NodeKind::Delivery
        } else {
            NodeKind::Depot
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Pickup => "pickup",
            NodeKind::Delivery => "delivery",
            NodeKind::Depot => "depot",
        };

        write!(f, "{name}")
    }
}

/// A single solution snapshot as it is served for a (case, step) pair.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    /// All nodes.
    pub customers: Vec<Customer>,
    /// Vehicle routes in vehicle order.
    pub routes: Vec<Route>,
    /// Pickup to delivery mapping.
    #[serde(rename = "PD_pairs", default)]
    pub pd_pairs: PdPairs,
    /// Depot ids as declared by the producer.
    #[serde(default)]
    pub depot_id_list: Vec<CustomerId>,
    /// Amount of vehicles per fleet (logistics provider), in route order.
    #[serde(default)]
    pub vehicle_num_list: Vec<usize>,
}

impl Dataset {
    /// Deserializes dataset from json value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// A dataset with lookup indices built once per load.
#[derive(Clone, Debug)]
pub struct IndexedDataset {
    dataset: Dataset,
    positions: FxHashMap<CustomerId, usize>,
    partners: PartnerIndex,
}

impl IndexedDataset {
    /// Creates a new instance of `IndexedDataset`.
    pub fn new(dataset: Dataset) -> Self {
        let positions = dataset.customers.iter().enumerate().map(|(idx, customer)| (customer.id, idx)).collect();
        let partners = PartnerIndex::new(&dataset.pd_pairs);

        Self { dataset, positions, partners }
    }

    /// Returns the underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns customer by its id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.positions.get(&id).map(|&idx| &self.dataset.customers[idx])
    }

    /// Returns logical coordinate of the customer.
    pub fn coord(&self, id: CustomerId) -> Option<(f64, f64)> {
        self.customer(id).map(Customer::coord)
    }

    /// Returns node kind of the customer.
    pub fn kind(&self, id: CustomerId) -> Option<NodeKind> {
        self.customer(id).map(Customer::kind)
    }

    /// Returns paired node id in either direction.
    pub fn partner(&self, id: CustomerId) -> Option<CustomerId> {
        self.partners.resolve(id)
    }

    /// Resolves a clicked node into a selection. Returns `None` for an unknown node.
    pub fn select(&self, id: CustomerId) -> Option<Selection> {
        let coord = self.coord(id)?;
        let partner_id = self.partner(id);
        let partner_coord = partner_id.and_then(|partner_id| self.coord(partner_id));

        Some(Selection { node_id: id, coord, partner_id, partner_coord })
    }

    /// Returns true if every node of the route is a depot (or the route is empty).
    pub fn is_idle_route(&self, route: &Route) -> bool {
        route.iter().all(|&id| matches!(self.kind(id), Some(NodeKind::Depot)))
    }
}

impl From<Dataset> for IndexedDataset {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}
