#[cfg(test)]
#[path = "../../tests/unit/models/pairing_test.rs"]
mod pairing_test;

use super::{CustomerId, IndexedDataset, NodeKind, PdPairs};
use rustc_hash::FxHashMap;
use std::fmt;

/// Finds a paired node treating `node_id` first as a pickup and then as a delivery.
///
/// The delivery direction is a linear search over the mapping which returns the first matching pickup.
pub fn resolve_partner(node_id: CustomerId, pd_pairs: &PdPairs) -> Option<CustomerId> {
    pd_pairs.get(&node_id).copied().or_else(|| {
        pd_pairs.iter().find(|&(_, &delivery)| delivery == node_id).map(|(&pickup, _)| pickup)
    })
}

/// A helper struct which keeps both directions of pickup/delivery mapping.
///
/// Gives the same answers as [`resolve_partner`], but in constant time.
#[derive(Clone, Debug, Default)]
pub struct PartnerIndex {
    direct_index: FxHashMap<CustomerId, CustomerId>,
    reverse_index: FxHashMap<CustomerId, CustomerId>,
}

impl PartnerIndex {
    /// Creates a new instance of `PartnerIndex`.
    pub fn new(pd_pairs: &PdPairs) -> Self {
        let direct_index = pd_pairs.iter().map(|(&pickup, &delivery)| (pickup, delivery)).collect();
        let reverse_index = pd_pairs.iter().fold(FxHashMap::default(), |mut acc, (&pickup, &delivery)| {
            // first pickup in iteration order wins, as the linear search does
            acc.entry(delivery).or_insert(pickup);
            acc
        });

        Self { direct_index, reverse_index }
    }

    /// Returns partner of the node, if any.
    pub fn resolve(&self, node_id: CustomerId) -> Option<CustomerId> {
        self.direct_index.get(&node_id).or_else(|| self.reverse_index.get(&node_id)).copied()
    }

    /// Returns amount of known pairs.
    pub fn len(&self) -> usize {
        self.direct_index.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.direct_index.is_empty()
    }
}

/// A transient state created by clicking a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Clicked node.
    pub node_id: CustomerId,
    /// Logical coordinate of clicked node.
    pub coord: (f64, f64),
    /// Paired node, if any.
    pub partner_id: Option<CustomerId>,
    /// Logical coordinate of paired node. Absent when the partner id is not a known customer.
    pub partner_coord: Option<(f64, f64)>,
}

/// Information shown for a selected node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
    /// The selection details are built from.
    pub selection: Selection,
    /// Node kind of selected node.
    pub kind: NodeKind,
    /// Demand of selected node.
    pub demand: f64,
}

impl NodeDetails {
    /// Creates node details for the selection if the node is known in dataset.
    pub fn new(dataset: &IndexedDataset, selection: &Selection) -> Option<Self> {
        dataset.customer(selection.node_id).map(|customer| Self {
            selection: selection.clone(),
            kind: customer.kind(),
            demand: customer.demand,
        })
    }
}

impl fmt::Display for NodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Selection { node_id, coord: (x, y), partner_id, partner_coord } = &self.selection;

        writeln!(f, "id: {node_id}")?;
        writeln!(f, "coordinate: ({x:.1}, {y:.1})")?;
        writeln!(f, "type: {}", self.kind)?;
        writeln!(f, "demand: {}", self.demand)?;

        match (partner_id, partner_coord) {
            (Some(partner_id), Some((px, py))) => {
                writeln!(f, "partner id: {partner_id}")?;
                writeln!(f, "partner coordinate: ({px:.1}, {py:.1})")
            }
            (Some(partner_id), None) => writeln!(f, "partner id: {partner_id} (unknown node)"),
            _ => writeln!(f, "partner: none"),
        }
    }
}
