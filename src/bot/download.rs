use anyhow::Result;
use std::path::Path;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::Document;

/// Downloads a Telegram document to `dest`, creating parent directories as
/// needed.
pub async fn download_document(bot: &Bot, document: &Document, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let file = bot.get_file(document.file.id.clone()).await?;
    let mut target = tokio::fs::File::create(dest).await?;
    bot.download_file(&file.path, &mut target).await?;
    Ok(())
}
