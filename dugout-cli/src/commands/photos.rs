use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(signed: bool, expires: u64) -> Result<()> {
    let (config, client, _session) = super::signed_in_client()?;

    let objects = client.list_objects(&config.photos_bucket).await?;
    if objects.is_empty() {
        println!("No photos in the gallery yet.");
        return Ok(());
    }

    println!("{} ({} photos)", "Gallery".bold(), objects.len());
    for object in &objects {
        let url = if signed {
            client
                .signed_url(&config.photos_bucket, &object.name, expires)
                .await?
        } else {
            client.public_url(&config.photos_bucket, &object.name)
        };
        println!("  {}  {}", object.name, url.dimmed());
    }

    Ok(())
}
