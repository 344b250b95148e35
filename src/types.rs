pub mod change_id;
pub mod mutation;
pub mod origin;
pub mod tracked_change;
