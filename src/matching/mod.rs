pub mod distance;
pub mod matcher;
