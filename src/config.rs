use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// How the editor is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Terminal,
    Windowed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub presentation: Option<Presentation>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            presentation: other.presentation.or(self.presentation),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

/// Decide the presentation mode from the requested mode and the environment.
///
/// Without an explicit request the terminal is used. A windowed request is
/// only honoured when a display surface exists.
pub const fn resolve_presentation(
    requested: Option<Presentation>,
    display_available: bool,
) -> Presentation {
    match requested {
        Some(Presentation::Windowed) if display_available => Presentation::Windowed,
        _ => Presentation::Terminal,
    }
}

/// Whether a graphical display surface is reachable from this process.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("notepadgtx").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("notepadgtx")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("notepadgtx").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("notepadgtx")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".notepadgtxrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# notepadgtx defaults (saved with --save)".to_string()];
    match flags.presentation {
        Some(Presentation::Terminal) => lines.push("--cli".to_string()),
        Some(Presentation::Windowed) => lines.push("--gui".to_string()),
        None => {}
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract the persistable flags from raw argument tokens.
///
/// Unknown tokens (including the file path) are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--cli" | "-c" => flags.presentation = Some(Presentation::Terminal),
            "--gui" | "-g" => flags.presentation = Some(Presentation::Windowed),
            "--log-file" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.log_file = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--log-file=") {
                    flags.log_file = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "notepadgtx".to_string(),
            "--gui".to_string(),
            "--log-file".to_string(),
            "editor.log".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.presentation, Some(Presentation::Windowed));
        assert_eq!(flags.log_file, Some(PathBuf::from("editor.log")));
    }

    #[test]
    fn test_parse_flag_tokens_last_mode_wins() {
        let args = vec!["-g".to_string(), "-c".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.presentation, Some(Presentation::Terminal));
    }

    #[test]
    fn test_config_union_prefers_other_for_options() {
        let file = ConfigFlags {
            presentation: Some(Presentation::Windowed),
            log_file: Some(PathBuf::from("file.log")),
        };
        let cli = ConfigFlags {
            presentation: Some(Presentation::Terminal),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.presentation, Some(Presentation::Terminal));
        assert_eq!(merged.log_file, Some(PathBuf::from("file.log")));
    }

    #[test]
    fn test_resolve_presentation_defaults_to_terminal() {
        assert_eq!(resolve_presentation(None, true), Presentation::Terminal);
        assert_eq!(resolve_presentation(None, false), Presentation::Terminal);
    }

    #[test]
    fn test_resolve_presentation_windowed_needs_display() {
        assert_eq!(
            resolve_presentation(Some(Presentation::Windowed), true),
            Presentation::Windowed
        );
        assert_eq!(
            resolve_presentation(Some(Presentation::Windowed), false),
            Presentation::Terminal
        );
        assert_eq!(
            resolve_presentation(Some(Presentation::Terminal), true),
            Presentation::Terminal
        );
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            presentation: Some(Presentation::Terminal),
            log_file: Some(PathBuf::from("editor.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
