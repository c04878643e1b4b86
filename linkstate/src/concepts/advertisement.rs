use std::collections::BTreeMap;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::framework::{LinkCost, RoutingSystem};

/// One node's direct connections: neighbour address to link cost.
/// Ordered so that the shortest-path engine discovers vertices in a
/// reproducible order.
pub type LinkMap<T> = BTreeMap<<T as RoutingSystem>::NodeAddress, LinkCost>;

/// A link-state advertisement: a node's declaration of its direct neighbour
/// links and their costs. This is the only payload that ever travels between
/// node instances.
#[serde_as]
#[derive(Serialize, Deserialize, Educe)]
#[educe(Clone(bound()))]
#[serde(bound = "")]
pub struct Advertisement<T: RoutingSystem + ?Sized> {
    /// the router whose links this advertisement describes, which is usually
    /// not the router that forwarded it to us
    pub originator: T::NodeAddress,
    #[serde_as(as = "Vec<(_, _)>")]
    pub links: LinkMap<T>,
}

/// An advertisement queued for delivery to a specific neighbour.
#[derive(Serialize, Deserialize, Educe)]
#[educe(Clone(bound()))]
#[serde(bound = "")]
pub struct OutboundAdvertisement<T: RoutingSystem + ?Sized> {
    /// send over this link
    pub link: T::Link,
    // to this neighbour
    pub dest: T::NodeAddress,
    pub advertisement: Advertisement<T>,
}
