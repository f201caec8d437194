//! Utility module for configforge.

mod paths;

pub use paths::{
    config_dir, display_relative, global_config_file, local_config_file, LOCAL_CONFIG_NAME,
};
