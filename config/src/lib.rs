#[macro_use]
extern crate tracing;

mod app_config;
mod args;
mod labels;

use app_config::AppConfig;
pub use app_config::{
    get_config_dir,
    get_data_dir,
};
pub use args::Args;
use color_eyre::Result;
use eyre::Context as _;
pub use labels::{
    ChatLabels,
    DialogLabels,
    Labels,
    TabLabels,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::path::{
    Path,
    PathBuf,
};

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten, skip_serializing)]
    pub app_config: AppConfig,
    /// Conference snapshot to load instead of the bundled demo conference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<PathBuf>,
    #[serde(default)]
    pub labels: Labels,
    pub tick_rate: f64,
    pub frame_rate: f64,
    #[serde(default)]
    pub debug: bool,
}

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

impl Default for Config {
    fn default() -> Self {
        serde_yml::from_str(DEFAULT_CONFIG).expect("Failed to parse default config")
    }
}

impl Config {
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        Self::with_dirs(args, get_config_dir(), get_data_dir())
    }

    /// Layers the bundled defaults, `config.yaml` in `config_dir` (if present)
    /// and the command line arguments, in that order.
    pub fn with_dirs(
        args: Args,
        config_dir: impl AsRef<Path>,
        data_dir: impl AsRef<Path>,
    ) -> Result<Self, config::ConfigError> {
        let config_dir = config_dir.as_ref();
        let data_dir = data_dir.as_ref();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.display().to_string())?
            .set_default("config_dir", config_dir.display().to_string())?;

        builder = builder.add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml));

        let config_files = [(CONFIG_FILE_NAME, config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;
        debug!(config_dir = %config_dir.display(), conference = ?cfg.conference, "Configuration loaded");

        Ok(cfg)
    }

    pub fn data_dir(&self) -> &Path {
        &self.app_config.data_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }

    pub fn save(&self) -> Result<()> {
        // Only save the parts that have changed from the default.
        let default = serde_yml::to_value(Self::default()).context("Failed to serialize default config")?;
        let mut content = serde_yml::to_value(self).context("Failed to serialize config")?;
        if let (serde_yml::Value::Mapping(current), serde_yml::Value::Mapping(default)) = (&mut content, &default) {
            current.retain(|key, value| default.get(key) != Some(value));
        }

        std::fs::create_dir_all(self.config_dir()).context("Failed to create config directory")?;
        let path = self.config_dir().join(CONFIG_FILE_NAME);
        let content = serde_yml::to_string(&content).context("Failed to serialize config")?;
        std::fs::write(&path, content).wrap_err_with(|| format!("Failed to write config to {:?}", path))?;
        info!(?path, "Configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use temp_dir::TempDir;

    #[test]
    fn default_config_has_tab_labels() {
        let config = Config::default();
        assert_eq!(config.labels.text("chat.tabs.chat"), "Chat");
        assert_eq!(config.labels.text("chat.tabs.participants"), "Participants");
        assert!(config.conference.is_none());
    }

    #[test]
    fn config_file_and_args_override_defaults() {
        let config_dir = TempDir::new().unwrap();
        let data_dir = TempDir::new().unwrap();
        std::fs::write(
            config_dir.path().join(CONFIG_FILE_NAME),
            "frame_rate: 10.0\nlabels:\n  chat:\n    tabs:\n      chat: Messages\n",
        )
        .unwrap();

        let args = Args {
            conference: Some(PathBuf::from("/tmp/conference.yaml")),
            debug: true,
            ..Default::default()
        };
        let config = Config::with_dirs(args, config_dir.path(), data_dir.path()).unwrap();

        assert_eq!(config.frame_rate, 10.0);
        assert_eq!(config.tick_rate, 4.0);
        assert_eq!(config.labels.text("chat.tabs.chat"), "Messages");
        assert_eq!(config.labels.text("chat.tabs.participants"), "Participants");
        assert_eq!(config.conference, Some(PathBuf::from("/tmp/conference.yaml")));
        assert!(config.debug);
        assert_eq!(config.data_dir(), data_dir.path());
    }

    #[test]
    fn save_only_writes_changed_values() {
        let config_dir = TempDir::new().unwrap();
        let data_dir = TempDir::new().unwrap();
        let args = Args {
            frame_rate: Some(12.0),
            ..Default::default()
        };
        let config = Config::with_dirs(args, config_dir.path(), data_dir.path()).unwrap();
        config.save().unwrap();

        let written = std::fs::read_to_string(config_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(written.trim(), "frame_rate: 12.0");

        let reloaded = Config::with_dirs(Args::default(), config_dir.path(), data_dir.path()).unwrap();
        assert_eq!(reloaded, config);
    }
}
