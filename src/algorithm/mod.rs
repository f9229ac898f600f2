/// Grid generation from category pools
pub mod composer;
/// Special tile limit repair for the middle segment
pub mod constraint;
/// Weighted random tile selection
pub mod selection;
