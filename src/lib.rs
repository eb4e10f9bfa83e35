use shell_config::ShellConfig;
use worker::*;

pub mod bundle;
pub mod shell;
pub mod shell_config;
mod utils;

/// Read the head-section configuration from the `SHELL_CONFIG` var.
/// An absent var means the plain shell.
fn get_shell_config(env: &Env) -> anyhow::Result<ShellConfig> {
    match env.var("SHELL_CONFIG") {
        Ok(var) => ShellConfig::from_json(&var.to_string()),
        _ => Ok(ShellConfig::default()),
    }
}

#[event(fetch)]
async fn main(_req: Request, env: Env, _ctx: Context) -> Result<Response> {
    // Every request gets the shell; method, path, headers and body are ignored.
    let Ok(config) = get_shell_config(&env) else {
        return Response::error("internal server error: shell config", 500);
    };
    shell::route_shell(&config)
}
