pub mod analysis;
pub mod display;
pub mod features;
pub mod forest;
pub mod pipeline;
