use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait RoutingSystem {
    /// Address of the node on the routing network, MUST be globally unique
    type NodeAddress: Ord + PartialOrd + LsData + LsKey;
    /// Identifies a physical link between two nodes, the pair (link, addr) should be unique
    type Link: LsKey + LsData;
    fn config() -> ProtocolParams {
        Default::default()
    }
}

pub trait LsData: Clone + Serialize + DeserializeOwned + Sized {}
pub trait LsKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> LsKey for T {}
impl<T: Clone + Serialize + DeserializeOwned + Sized> LsData for T {}

/// Value of the externally driven simulated clock. Monotonically non-decreasing.
pub type Tick = u64;

/// Non-negative weight of a direct link. Lower is better.
pub type LinkCost = u32;

/// Protocol Parameters
pub struct ProtocolParams {
    /// Number of ticks after which a node assumes the network-wide flood has
    /// completed and shortest paths may be computed. This is a heuristic, not
    /// a proof of convergence: it must be generous relative to the expected
    /// network diameter.
    pub flood_horizon: Tick,
}
impl Default for ProtocolParams {
    fn default() -> Self {
        Self { flood_horizon: 10 }
    }
}
