use std::sync::OnceLock;

use minijinja::{context, Environment};
use worker::{Response, Result};

use crate::bundle;
use crate::shell_config::ShellConfig;
use crate::utils::into_workers_err;

const SHELL_HTML: &str = include_str!("templates/shell.html");

/// Id of the element the Elm application mounts into. The markup and the
/// init snippet both take it from the same template variable.
pub const MOUNT_ID: &str = "elm";

// Rendered once per isolate; every request shares the same bytes.
static DOCUMENT: OnceLock<String> = OnceLock::new();

/// Render the shell with its head-section variants applied. The substitution
/// marker is still literal in the output.
pub fn render_shell(config: &ShellConfig) -> anyhow::Result<String> {
    let ShellConfig {
        title,
        viewport,
        icon,
        stylesheet,
    } = config;
    let mount_id = MOUNT_ID;

    let mut env = Environment::new();
    env.add_template("shell.html", SHELL_HTML)?;
    let tmpl = env.get_template("shell.html")?;
    let html = tmpl.render(context!(title, viewport, icon, stylesheet, mount_id))?;
    Ok(html)
}

/// The full served document: the rendered shell with the bundle injected
/// over the marker.
pub fn render_document(config: &ShellConfig) -> anyhow::Result<String> {
    let shell = render_shell(config)?;
    bundle::inject(&shell, bundle::BUNDLE)
}

fn document(config: &ShellConfig) -> anyhow::Result<&'static str> {
    if let Some(doc) = DOCUMENT.get() {
        return Ok(doc.as_str());
    }
    let rendered = render_document(config)?;
    Ok(DOCUMENT.get_or_init(|| rendered).as_str())
}

/// Answer with the shell document: status 200, `Content-Type: text/html`.
pub fn route_shell(config: &ShellConfig) -> Result<Response> {
    let doc = document(config).map_err(into_workers_err)?;
    let mut resp = Response::from_bytes(doc.as_bytes().to_vec())?;
    let _ = resp.headers_mut().delete("Content-Type");
    let _ = resp.headers_mut().append("Content-Type", "text/html");
    Ok(resp)
}
