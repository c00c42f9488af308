use artisan_blocks_config::Config;
use artisan_blocks_engine::{RenderOptions, io};
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

/// Resolved at startup and handed to the root component as context
#[derive(Debug, Clone)]
struct LaunchSettings {
    posts_path: PathBuf,
    options: RenderOptions,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("artisan-blocks starting up");

    let config_path = Config::config_path();
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "artisan-blocks-dioxus".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    // The config file is still read when a folder is given, for the
    // raw markup setting
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (posts_path, from_config) = match (args.as_slice(), &config) {
        ([path], _) => {
            log::info!("Using posts path from CLI argument: {path}");
            (PathBuf::from(path), false)
        }
        ([], Some(config)) => {
            log::info!("Loaded posts path from config: {}", config.posts_path.display());
            (config.posts_path.clone(), true)
        }
        ([], None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("Usage: {program_name} <posts-folder-path>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {program_name} [posts-folder-path]");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{source} is invalid: {e}",
            posts_path.display()
        );
        process::exit(1);
    }

    let options = config
        .as_ref()
        .map(Config::render_options)
        .unwrap_or_default();
    log::info!("Raw markup policy: {:?}", options.raw_markup);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(LaunchSettings {
            posts_path,
            options,
        })
        .launch(app_root);
}

fn app_root() -> Element {
    let settings = use_context::<LaunchSettings>();

    rsx! {
        App {
            posts_path: settings.posts_path.clone(),
            options: settings.options,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Artisan Connect posts")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
