pub mod advertisement;
pub mod neighbour;
