use crate::concepts::advertisement::{Advertisement, LinkMap, OutboundAdvertisement};
use crate::concepts::neighbour::Neighbour;
use crate::feedback::RoutingError;
use crate::framework::{RoutingSystem, Tick};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::serde_as;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Convergence gate state. A router floods until the flood horizon passes,
/// computes its forwarding table exactly once, then goes permanently inert.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Flooding,
    Computed,
}

#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Router<T: RoutingSystem + ?Sized> {
    #[serde_as(as = "Vec<(_, _)>")]
    pub links: HashMap<T::Link, Neighbour<T>>,
    pub address: T::NodeAddress,
    /// The accumulating topology snapshot: the most recently received link
    /// map of every originator we know of, seeded with our own. Entries are
    /// only ever added or overwritten, never removed.
    #[serde_as(as = "Vec<(_, _)>")]
    pub advertisements: BTreeMap<T::NodeAddress, LinkMap<T>>,
    /// Originator -> whether we have already re-flooded its advertisement.
    /// Monotonic per originator, false to true exactly once.
    #[serde_as(as = "Vec<(_, _)>")]
    pub broadcasted: BTreeMap<T::NodeAddress, bool>,
    /// Destination -> next hop, for every reachable destination other than
    /// ourselves. Empty until the convergence gate fires.
    #[serde_as(as = "Vec<(_, _)>")]
    pub fwd_table: BTreeMap<T::NodeAddress, T::NodeAddress>,
    /// Advertisements waiting for the driver to deliver them. The driver must
    /// drain this within the same tick the entries were queued on.
    pub outbound_advertisements: Vec<OutboundAdvertisement<T>>,
    pub phase: Phase,
}

/// A tentative entry on the Dijkstra frontier. Stale entries are discarded on
/// pop instead of being decreased in place.
struct Candidate<T: RoutingSystem + ?Sized> {
    distance: u64,
    /// insertion order, the strict tie-break between equal distances
    seq: u64,
    node: T::NodeAddress,
    /// the vertex this candidate was relaxed from
    via: T::NodeAddress,
}

impl<T: RoutingSystem + ?Sized> Eq for Candidate<T> {}

impl<T: RoutingSystem + ?Sized> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl<T: RoutingSystem + ?Sized> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed on both keys, BinaryHeap is a max-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T: RoutingSystem + ?Sized> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RoutingSystem> Router<T> {
    pub fn new(address: T::NodeAddress) -> Self {
        let mut advertisements = BTreeMap::new();
        advertisements.insert(address.clone(), LinkMap::<T>::new());
        let mut broadcasted = BTreeMap::new();
        broadcasted.insert(address.clone(), false);
        Self {
            links: HashMap::new(),
            advertisements,
            broadcasted,
            fwd_table: BTreeMap::new(),
            outbound_advertisements: Vec::new(),
            address,
            phase: Phase::Flooding,
        }
    }

    /// Advances this node by one simulated tick. `now` comes from the
    /// driver's clock and must be non-decreasing across calls.
    pub fn advance(&mut self, now: Tick) -> Result<(), RoutingError<T>> {
        match self.phase {
            Phase::Flooding => {
                if now >= T::config().flood_horizon {
                    self.compute_routes()?;
                } else {
                    self.refresh_own_advertisement();
                    self.flood_pending();
                }
            }
            // the gate has fired, every further tick is a no-op
            Phase::Computed => {}
        }
        Ok(())
    }

    /// Stores an advertisement received from a neighbour. Last write wins:
    /// the entry for the originator is overwritten unconditionally, with no
    /// versioning and no rejection of stale data. Reception never resets
    /// broadcast status, so an advertisement we already re-flooded stays
    /// flooded, and one arriving after the convergence gate has fired is
    /// silently absorbed: stored, but never re-flooded and never recomputed
    /// over.
    pub fn handle_advertisement(&mut self, advertisement: &Advertisement<T>) {
        self.advertisements.insert(
            advertisement.originator.clone(),
            advertisement.links.clone(),
        );
        self.broadcasted
            .entry(advertisement.originator.clone())
            .or_insert(false);
    }

    /// Our own links are authoritative, so our own entry is re-derived from
    /// them before every flooding pass.
    fn refresh_own_advertisement(&mut self) {
        let own: LinkMap<T> = self
            .links
            .values()
            .map(|n| (n.addr.clone(), n.link_cost))
            .collect();
        self.advertisements.insert(self.address.clone(), own);
    }

    /// Queues every advertisement we have not re-flooded yet to all
    /// neighbours except the advertisement's own originator, then marks it
    /// flooded. Each originator is therefore re-transmitted by us at most
    /// once, no matter how often its advertisement is re-received.
    fn flood_pending(&mut self) {
        let pending: Vec<T::NodeAddress> = self
            .advertisements
            .keys()
            .filter(|id| !self.broadcasted.get(*id).copied().unwrap_or(false))
            .cloned()
            .collect();
        for originator in pending {
            let Some(links) = self.advertisements.get(&originator) else {
                continue;
            };
            let advertisement = Advertisement {
                originator: originator.clone(),
                links: links.clone(),
            };
            let mut sent = 0;
            for (link, neigh) in &self.links {
                // never send an advertisement back to its own originator
                if neigh.addr == originator {
                    continue;
                }
                self.outbound_advertisements.push(OutboundAdvertisement {
                    link: link.clone(),
                    dest: neigh.addr.clone(),
                    advertisement: advertisement.clone(),
                });
                sent += 1;
            }
            debug!(
                "{} flooded advertisement of {} to {sent} neighbours",
                json!(self.address),
                json!(originator)
            );
            self.broadcasted.insert(originator, true);
        }
    }

    /// Runs the shortest-path computation over the assembled topology and
    /// populates the forwarding table. Runs at most once per router lifetime;
    /// a second call observes the computed phase and leaves the table
    /// untouched.
    pub fn compute_routes(&mut self) -> Result<(), RoutingError<T>> {
        if self.phase == Phase::Computed {
            return Ok(());
        }

        let mut seq: u64 = 0;
        let mut tentative: BinaryHeap<Candidate<T>> = BinaryHeap::new();
        // vertex -> its predecessor on the shortest path from us
        let mut confirmed: BTreeMap<T::NodeAddress, T::NodeAddress> = BTreeMap::new();

        tentative.push(Candidate {
            distance: 0,
            seq,
            node: self.address.clone(),
            via: self.address.clone(),
        });
        seq += 1;

        while let Some(Candidate {
            distance,
            node,
            via,
            ..
        }) = tentative.pop()
        {
            if confirmed.contains_key(&node) {
                continue; // stale frontier entry, lazily discarded
            }
            confirmed.insert(node.clone(), via);

            // a vertex we only know as somebody's neighbour has no link map
            // of its own; it is reachable but contributes no outgoing edges
            if let Some(links) = self.advertisements.get(&node) {
                for (neigh, cost) in links {
                    if confirmed.contains_key(neigh) {
                        continue;
                    }
                    tentative.push(Candidate {
                        distance: distance + *cost as u64,
                        seq,
                        node: neigh.clone(),
                        via: node.clone(),
                    });
                    seq += 1;
                }
            }
        }

        for dest in confirmed.keys() {
            if *dest == self.address {
                continue;
            }
            let hop = self.next_hop(dest, &confirmed)?;
            self.fwd_table.insert(dest.clone(), hop);
        }
        debug!(
            "{} computed routes to {} destinations",
            json!(self.address),
            self.fwd_table.len()
        );
        self.phase = Phase::Computed;
        Ok(())
    }

    /// Walks the predecessor chain from `dst` back toward this router and
    /// returns the vertex adjacent to us on it. Iterative on purpose, the
    /// chain can be as long as the network diameter.
    pub fn next_hop(
        &self,
        dst: &T::NodeAddress,
        prev: &BTreeMap<T::NodeAddress, T::NodeAddress>,
    ) -> Result<T::NodeAddress, RoutingError<T>> {
        if *dst == self.address {
            return Err(RoutingError::NextHopForSelf { addr: dst.clone() });
        }
        let mut cur = dst;
        loop {
            let Some(pred) = prev.get(cur) else {
                return Err(RoutingError::UnreachableDestination { addr: dst.clone() });
            };
            if *pred == self.address {
                return Ok(cur.clone());
            }
            if pred == cur {
                // a vertex that is its own predecessor, and is not us, can
                // never lie on a path from us
                return Err(RoutingError::UnreachableDestination { addr: dst.clone() });
            }
            cur = pred;
        }
    }
}
