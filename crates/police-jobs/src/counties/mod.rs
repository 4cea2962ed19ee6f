pub mod aliases;
mod classifier;
pub mod gazetteer;
mod grouping;

pub use classifier::classify;
pub use gazetteer::{county_named, County, COUNTIES};
pub use grouping::CountyGroups;
