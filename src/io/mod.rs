pub mod config_io;
pub mod files;
pub mod logging;
pub mod scan;
