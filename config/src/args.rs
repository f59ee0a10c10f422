use clap::Parser;
use std::path::PathBuf;

/// In-call chat TUI
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version = version(), about, long_about = None)]
pub struct Args {
    /// Conference snapshot (YAML) with participants, tracks and messages.
    /// The bundled demo conference is used when omitted.
    #[clap(long, value_name = "FILE")]
    pub conference: Option<PathBuf>,

    /// Ticks per second.
    #[clap(long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frames per second.
    #[clap(long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,

    /// Write the resulting configuration to the config directory.
    #[clap(long = "save-config", action)]
    pub save_config: bool,

    /// Enables debug mode.
    ///  - lowers the log level to debug
    ///  - prints full backtraces on panic
    #[clap(long = "debug", action)]
    pub debug: bool,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(conference) = &self.conference {
                cache.insert("conference".to_string(), conference.display().to_string().into());
            }
            if let Some(tick_rate) = self.tick_rate {
                cache.insert("tick_rate".to_string(), tick_rate.into());
            }
            if let Some(frame_rate) = self.frame_rate {
                cache.insert("frame_rate".to_string(), frame_rate.into());
            }
            if self.debug {
                cache.insert("debug".to_string(), true.into());
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();
    let data_dir_path = crate::get_data_dir().display().to_string();

    format!(
        "\
Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
