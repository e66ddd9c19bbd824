use crate::config;
use crate::context::AppContext;
use crate::format::{self, OutputFormat};

/// Handle the config init subcommand
pub fn handle_init(ctx: &AppContext) {
    let config_path = config::get_config_path();
    match config::init_config(&config_path) {
        Ok(_) => {
            format::success(
                ctx,
                &format!("Initialized config file at: {}", config_path.display()),
            );
        }
        Err(e) => format::fail(ctx, &e),
    }
}

/// Handle the config get subcommand
pub fn handle_get(ctx: &AppContext, key: Option<&str>, fmt: OutputFormat) {
    let config_path = config::get_config_path();

    match key {
        Some(k) => match config::get_config_value(&config_path, k) {
            Ok(value) => println!("{}", value),
            Err(e) => format::fail(ctx, &e),
        },
        None => match config::display_config(&config_path) {
            Ok(cfg) => format::emit(ctx, &cfg, fmt),
            Err(e) => format::fail(ctx, &e),
        },
    }
}

/// Handle the config set subcommand
pub fn handle_set(ctx: &AppContext, key: &str, value: &str) {
    let config_path = config::get_config_path();
    match config::set_config_value(&config_path, key, value) {
        Ok(_) => format::success(ctx, &format!("Set {} = {}", key, value)),
        Err(e) => format::fail(ctx, &e),
    }
}

/// Handle the config path subcommand
pub fn handle_path() {
    println!("{}", config::get_config_path().display());
}
