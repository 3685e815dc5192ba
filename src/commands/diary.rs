use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;

use filmdiary::config::Config;
use filmdiary::models::DiarySummary;
use filmdiary::service::DiaryService;
use filmdiary::utils::sanitize_username;

pub async fn diary(
    config: &Config,
    username: &str,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let username = sanitize_username(username);
    if username.is_empty() {
        bail!("Please enter a username");
    }

    let service = DiaryService::from_config(config).context("Failed to build diary service")?;

    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let entries = service
        .get_diary_until(&username, cancel)
        .await
        .with_context(|| format!("Failed to fetch diary for {username}"))?;

    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), entries = entries.len(), "Diary written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    eprintln!("{}", DiarySummary::from_entries(&entries));
    Ok(())
}
