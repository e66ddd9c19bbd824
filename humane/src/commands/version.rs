/// Get the version string for humane and libhumane
pub fn get_version_string() -> String {
    format!(
        "humane {}\nlibhumane {}",
        env!("CARGO_PKG_VERSION"),
        libhumane::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
