pub mod intake;
pub mod reconcile;
pub mod roster;
