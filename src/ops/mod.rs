pub mod navigator;
pub mod notify;
pub mod pipeline;
pub mod registry;
pub mod session;
