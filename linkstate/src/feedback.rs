use educe::Educe;
use thiserror::Error;

use crate::framework::RoutingSystem;

/// These are contract violations. A destination that is simply unreachable
/// must be absent from the forwarding table, so hitting one of these means
/// next-hop reconstruction was asked a question it must never be asked.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug)]
pub enum RoutingError<T: RoutingSystem + ?Sized> {
    /// A next hop is only defined for destinations other than the local node.
    #[error("Next hop requested for the local node itself.")]
    NextHopForSelf { addr: T::NodeAddress },
    /// The predecessor chain for this destination never reaches the local
    /// node, so the destination is disconnected from it.
    #[error("Next hop requested for a destination with no path from the local node.")]
    UnreachableDestination { addr: T::NodeAddress },
}
