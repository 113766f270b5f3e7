use std::path::{Path, PathBuf};

use gpui::{Action, App, SharedString};
use gpui_component::{Theme, ThemeMode, ThemeRegistry};

#[derive(Action, Clone, PartialEq)]
#[action(namespace = themes, no_json)]
pub struct SwitchTheme(pub SharedString);

#[derive(Action, Clone, PartialEq)]
#[action(namespace = themes, no_json)]
pub struct SwitchThemeMode(pub ThemeMode);

fn dir_has_theme_files(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };

    entries.flatten().any(|entry| {
        entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    })
}

/// The configured directory when given, otherwise the first of `./themes` and
/// `../themes` holding theme files, falling back to `./themes`.
fn resolve_theme_dir(configured: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = configured {
        return dir;
    }

    let local_dir = PathBuf::from("./themes");
    let parent_dir = PathBuf::from("../themes");
    if dir_has_theme_files(&local_dir) {
        local_dir
    } else if dir_has_theme_files(&parent_dir) {
        parent_dir
    } else {
        local_dir
    }
}

pub fn init(theme_dir: Option<PathBuf>, cx: &mut App) {
    let theme_dir = resolve_theme_dir(theme_dir);
    if !theme_dir.exists() {
        if let Err(err) = std::fs::create_dir_all(&theme_dir) {
            tracing::warn!("failed to create theme dir {}: {err}", theme_dir.display());
        }
    }

    if let Err(err) = ThemeRegistry::watch_dir(theme_dir.clone(), cx, |_| {}) {
        tracing::warn!("failed to watch theme dir {}: {err:#}", theme_dir.display());
    }

    cx.on_action(|switch: &SwitchTheme, cx| {
        let theme_name = switch.0.clone();
        if let Some(theme_config) = ThemeRegistry::global(cx).themes().get(&theme_name).cloned() {
            Theme::global_mut(cx).apply_config(&theme_config);
        }
        cx.refresh_windows();
    });

    cx.on_action(|switch: &SwitchThemeMode, cx| {
        Theme::change(switch.0, None, cx);
        cx.refresh_windows();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_dir_wins() {
        let dir = PathBuf::from("/opt/gallery/themes");
        assert_eq!(resolve_theme_dir(Some(dir.clone())), dir);
    }

    #[test]
    fn detects_json_theme_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!dir_has_theme_files(dir.path()));

        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        assert!(!dir_has_theme_files(dir.path()));

        std::fs::write(dir.path().join("ocean.JSON"), "{}").unwrap();
        assert!(dir_has_theme_files(dir.path()));
    }
}
