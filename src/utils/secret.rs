use std::{env, fs};

use tracing::error;

/// Reads a secret from the file named by `file_env_var_name`, falling back to
/// the plain `env_var_name` variable. Docker-style secret files win when both are set.
pub fn get_secret(file_env_var_name: &str, env_var_name: &str) -> Option<String> {
    resolve_secret(file_env_var_name, env_var_name, |name| env::var(name).ok())
}

fn resolve_secret(
    file_env_var_name: &str,
    env_var_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(secret_file_path) = lookup(file_env_var_name) {
        match fs::read_to_string(&secret_file_path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                None
            }
        }
    } else {
        lookup(env_var_name).filter(|s| !s.is_empty())
    }
}
