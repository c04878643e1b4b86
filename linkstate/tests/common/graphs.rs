use crate::common::virtual_network::VirtualSystem;

pub fn vnet_triangle() -> VirtualSystem {
    VirtualSystem::create(
        &["A", "B", "C"],
        &[
            (0, "A", "B", 1),
            (1, "B", "C", 1),
            (2, "A", "C", 5),
        ],
    )
}

pub fn vnet_simple_weighted() -> VirtualSystem {
    VirtualSystem::create(
        &["1", "2", "3", "4", "5"],
        &[
            (0, "1", "2", 2),
            (1, "1", "3", 1),
            (2, "2", "3", 4),
            (3, "2", "4", 5),
            (4, "3", "4", 100),
            (5, "3", "5", 8),
            (6, "4", "5", 1),
        ],
    )
}

pub fn vnet_ring4() -> VirtualSystem {
    VirtualSystem::create(
        &["A", "B", "C", "D"],
        &[
            (0, "A", "B", 1),
            (1, "B", "C", 1),
            (2, "C", "D", 1),
            (3, "D", "A", 1),
        ],
    )
}

/// two components with no link between them
pub fn vnet_split() -> VirtualSystem {
    VirtualSystem::create(
        &["A", "B", "C", "D"],
        &[
            (0, "A", "B", 1),
            (1, "C", "D", 1),
        ],
    )
}
