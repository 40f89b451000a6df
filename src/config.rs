/// Application configuration
///
/// Settings are read from a JSON file in the user's config directory:
/// - Linux: ~/.config/photo-carousel/config.json
/// - macOS: ~/Library/Application Support/photo-carousel/config.json
/// - Windows: %APPDATA%\photo-carousel\config.json
///
/// A missing file means defaults. Command line arguments can point at
/// another file and replace the image list.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::state::{CarouselError, Gallery};

const APP_DIR: &str = "photo-carousel";
const CONFIG_FILE: &str = "config.json";

/// Extensions picked up when scanning a folder
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Images shown when nothing else is configured
const DEFAULT_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb",
    "https://images.unsplash.com/photo-1491553895911-0055eca6402d",
    "https://images.unsplash.com/photo-1519125323398-675f0ddb6308",
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee",
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to scan image folder: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("invalid arguments: {0}")]
    Args(#[from] pico_args::Error),

    #[error(transparent)]
    Gallery(#[from] CarouselError),
}

/// User-facing settings of the carousel window
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Heading shown above the carousel
    pub title: String,
    /// Hint line under the heading
    pub subtitle: String,
    /// Ordered image references (URLs or file paths)
    pub images: Vec<String>,
    /// Duration of the slide fade/scale animation
    pub slide_transition_ms: u64,
    /// Duration of the fullscreen fade-in
    pub overlay_transition_ms: u64,
    /// Decoded images larger than this (in pixels, either side) are downscaled
    pub max_dimension: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Interactive Photo Carousel".to_string(),
            subtitle: "Click a photo to view it in fullscreen and zoom".to_string(),
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            slide_transition_ms: 800,
            overlay_transition_ms: 300,
            max_dimension: 2560,
        }
    }
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// `--config <PATH>`
    pub config: Option<PathBuf>,
    /// `--dir <FOLDER>`
    pub dir: Option<PathBuf>,
    /// Positional image references
    pub images: Vec<String>,
}

impl Args {
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self, ConfigError> {
        let config = args.opt_value_from_str("--config")?;
        let dir = args.opt_value_from_str("--dir")?;
        let images = args
            .finish()
            .into_iter()
            .map(|arg: OsString| arg.to_string_lossy().into_owned())
            .collect();

        Ok(Self { config, dir, images })
    }
}

impl Config {
    /// Resolve the final configuration from the command line.
    ///
    /// Order: config file (explicit or default location), then `--dir`,
    /// then positional images. Later sources replace the image list.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };

        if let Some(dir) = &args.dir {
            config.images = scan_folder(dir)?;
            tracing::info!(
                "🔍 Found {} images in {}",
                config.images.len(),
                dir.display()
            );
        }

        if !args.images.is_empty() {
            config.images = args.images.clone();
        }

        Ok(config)
    }

    /// Build the image collection; an empty list is rejected here
    pub fn gallery(&self) -> Result<Gallery, ConfigError> {
        Ok(Gallery::new(self.images.iter().cloned())?)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Get the path where the config file is expected
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Recursively collect image files under `folder`, sorted by path
pub fn scan_folder(folder: &Path) -> Result<Vec<String>, ConfigError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(folder).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));

        if is_image {
            images.push(path.to_path_buf());
        }
    }

    images.sort();
    Ok(images
        .into_iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}
