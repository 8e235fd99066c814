//! Startup asset check
//!
//! The font is required; sound files are optional and a missing one only
//! silences its cue.

use std::path::Path;

use crate::audio::SoundEffect;
use crate::error::{Error, Result};

/// Font file every screen's text needs
pub const FONT_FILE: &str = "arial.ttf";

/// Verify the asset directory; returns the cues whose sound files exist
pub fn check_assets(dir: &Path) -> Result<Vec<SoundEffect>> {
    let font = dir.join(FONT_FILE);
    if !font.is_file() {
        log::error!("Font not found at {}", font.display());
        return Err(Error::MissingFont { path: font });
    }

    let available: Vec<SoundEffect> = SoundEffect::ALL
        .into_iter()
        .filter(|effect| {
            let path = dir.join(effect.file_name());
            let found = path.is_file();
            if !found {
                log::warn!("Sound not found at {}", path.display());
            }
            found
        })
        .collect();

    log::info!(
        "Assets checked in {} ({} of {} sounds)",
        dir.display(),
        available.len(),
        SoundEffect::ALL.len()
    );
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh scratch directory under the system temp dir
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("snake-arena-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_font_is_fatal() {
        let dir = scratch("nofont");
        std::fs::write(dir.join("eat.wav"), b"").unwrap();
        let err = check_assets(&dir).unwrap_err();
        assert!(matches!(err, Error::MissingFont { ref path } if path.ends_with(FONT_FILE)));
    }

    #[test]
    fn test_missing_sound_disables_cue() {
        let dir = scratch("nosound");
        std::fs::write(dir.join(FONT_FILE), b"").unwrap();
        std::fs::write(dir.join("eat.wav"), b"").unwrap();
        assert_eq!(check_assets(&dir).unwrap(), vec![SoundEffect::Eat]);
    }

    #[test]
    fn test_all_assets_present() {
        let dir = scratch("all");
        for name in [FONT_FILE, "eat.wav", "gameover.wav"] {
            std::fs::write(dir.join(name), b"").unwrap();
        }
        assert_eq!(check_assets(&dir).unwrap(), SoundEffect::ALL.to_vec());
    }
}
