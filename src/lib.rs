pub mod cluster;
pub mod component;
pub mod tree;
pub mod utils;
