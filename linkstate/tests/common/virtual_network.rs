use linkstate::concepts::advertisement::OutboundAdvertisement;
use linkstate::concepts::neighbour::Neighbour;
use linkstate::framework::{LinkCost, RoutingSystem, Tick};
use linkstate::router::Router;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct VirtualSystem {
    pub routers: Vec<Router<VirtualSystem>>,
    pub now: Tick,
}

impl VirtualSystem {
    pub fn create(nodes: &[&str], links: &[(i32, &str, &str, LinkCost)]) -> VirtualSystem {
        let routers: Vec<Router<VirtualSystem>> = nodes
            .iter()
            .map(|id| {
                let mut router = Router::new(id.to_string());
                for (lid, a, b, cost) in links {
                    if a == id || b == id {
                        let nid = {
                            if a == id {
                                b
                            } else {
                                a
                            }
                        };
                        router.links.insert(*lid, Neighbour::new(nid.to_string(), *cost));
                    }
                }
                router
            })
            .collect();
        VirtualSystem { routers, now: 0 }
    }

    pub fn get_node(&mut self, node: &str) -> &mut Router<Self> {
        self.routers.iter_mut().find(|r| r.address == node).unwrap()
    }

    pub fn get_next_hop(&self, cur: &str, dst: &str) -> String {
        let router = self
            .routers
            .iter()
            .find(|r| r.address == cur)
            .unwrap_or_else(|| panic!("No node {cur} found"));
        router
            .fwd_table
            .get(dst)
            .unwrap_or_else(|| panic!("No route found to {dst}"))
            .to_string()
    }

    pub fn has_route(&self, cur: &str, dst: &str) -> bool {
        let router = self
            .routers
            .iter()
            .find(|r| r.address == cur)
            .unwrap_or_else(|| panic!("No node {cur} found"));
        router.fwd_table.contains_key(dst)
    }

    /// delivers every queued advertisement to its destination router
    pub fn deliver_advertisements(&mut self) {
        let outbound: Vec<OutboundAdvertisement<VirtualSystem>> = self
            .routers
            .iter_mut()
            .flat_map(|r| r.outbound_advertisements.drain(..))
            .collect();
        for out in outbound {
            if let Some(router) = self.routers.iter_mut().find(|r| r.address == out.dest) {
                router.handle_advertisement(&out.advertisement);
            }
        }
    }

    /// one simulated tick: advance every router, then deliver everything they
    /// queued within the same tick
    pub fn tick(&mut self) {
        let now = self.now;
        for router in &mut self.routers {
            router.advance(now).expect("Failed to advance router");
        }
        self.deliver_advertisements();
        self.now += 1;
    }

    pub fn tick_n(&mut self, times: i32) {
        for _ in 0..times {
            self.tick();
        }
    }

    pub fn freeze(&mut self) -> String {
        serde_json::to_string(&self).unwrap()
    }

    pub fn restore(state: String) -> VirtualSystem {
        serde_json::from_str(&state).unwrap()
    }
}

impl RoutingSystem for VirtualSystem {
    type NodeAddress = String;
    type Link = i32;
}
