use anyhow::{Context, Result};
use std::process::Command;

/// Příkaz, kterým daný OS otevírá URL v defaultním prohlížeči
fn browser_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Otevře dashboard v prohlížeči
pub fn open_browser(url: &str) -> Result<()> {
    browser_command(url)
        .spawn()
        .with_context(|| format!("Failed to open browser for {}", url))?;

    tracing::info!("Opened browser: {}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_command_passes_url() {
        let cmd = browser_command("http://127.0.0.1:3000");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().unwrap().to_str(), Some("http://127.0.0.1:3000"));
    }
}
