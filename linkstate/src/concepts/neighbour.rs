use serde::{Deserialize, Serialize};

use crate::framework::{LinkCost, RoutingSystem};

#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Neighbour<T: RoutingSystem + ?Sized> {
    /// the routing network address
    pub addr: T::NodeAddress,
    /// Direct link cost to this neighbour. Fixed for the lifetime of the run.
    pub link_cost: LinkCost,
}

impl<T: RoutingSystem + ?Sized> Neighbour<T> {
    pub fn new(addr: T::NodeAddress, link_cost: LinkCost) -> Self {
        Neighbour { addr, link_cost }
    }
}
