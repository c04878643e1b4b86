use std::collections::HashMap;

use anyhow::Result;
use linkstate::concepts::advertisement::OutboundAdvertisement;
use linkstate::concepts::neighbour::Neighbour;
use linkstate::framework::RoutingSystem;
use linkstate::router::Router;
use log::info;

struct RingExample {} // just a type to inform linkstate of your network parameters
impl RoutingSystem for RingExample {
    type NodeAddress = String; // our nodes have string names
    type Link = i32;
}

fn main() -> Result<()> {
    env_logger::init();

    // a four node ring, every link cost 1:
    // alice <-> bob <-> carol <-> dave <-> alice
    let ring = ["alice", "bob", "carol", "dave"];
    let mut nodes = HashMap::new();
    for (i, name) in ring.iter().enumerate() {
        let mut router = Router::<RingExample>::new(name.to_string());
        let prev_link = ((i + ring.len() - 1) % ring.len()) as i32;
        let next_link = i as i32;
        let prev = ring[(i + ring.len() - 1) % ring.len()];
        let next = ring[(i + 1) % ring.len()];
        router.links.insert(prev_link, Neighbour::new(prev.to_string(), 1));
        router.links.insert(next_link, Neighbour::new(next.to_string(), 1));
        nodes.insert(*name, router);
    }

    // drive the simulated clock up to and past the flood horizon
    let horizon = RingExample::config().flood_horizon;
    for now in 0..=horizon {
        for node in nodes.values_mut() {
            node.advance(now)?;
        }

        // deliver every queued advertisement within the same tick
        let outbound: Vec<OutboundAdvertisement<RingExample>> = nodes
            .values_mut()
            .flat_map(|node| node.outbound_advertisements.drain(..))
            .collect();
        let delivered = outbound.len();
        for out in outbound {
            if let Some(node) = nodes.get_mut(out.dest.as_str()) {
                node.handle_advertisement(&out.advertisement);
            }
        }
        info!("tick {now}: delivered {delivered} advertisements");
    }

    for name in ring {
        println!("{name}'s forwarding table:");
        for (dest, hop) in &nodes[name].fwd_table {
            println!(" - {dest}: via {hop}");
        }
    }

    // OUTPUT (hops to the opposite corner depend on the deterministic
    // tie-break, both ring directions cost 2):
    // alice's forwarding table:
    //  - bob: via bob
    //  - carol: via bob
    //  - dave: via dave
    // ...
    Ok(())
}
