use rust_embed::Embed;

#[derive(Embed)]
#[folder = "resources/"]
#[include = "banner.txt"]
struct Assets;

/// The banner art drawn at the top of every frame, one entry per line.
///
/// Returns an empty banner if the asset is missing, the HUD then starts at
/// the header.
#[must_use]
pub fn embedded_banner() -> Vec<String> {
    Assets::get("banner.txt")
        .map(|file| {
            String::from_utf8_lossy(&file.data)
                .lines()
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
