pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod router;
