pub mod change_recorder;
pub mod change_store;
pub mod lifecycle;
pub mod mutation_bridge;
pub mod position_tracker;
