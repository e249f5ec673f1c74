use crate::cli::commands::SettingsArgs;
use crate::cli::output::format_settings;
use crate::ops::TaskStore;

/// Show settings, or apply any given overrides and save them.
pub fn cmd_settings(
    store: &mut TaskStore,
    args: SettingsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = store.settings().clone();
    let mut changed = false;

    if let Some(family) = args.font_family {
        let family = family.trim().to_string();
        if family.is_empty() {
            return Err("font family cannot be empty".into());
        }
        settings.font_family = family;
        changed = true;
    }
    if let Some(size) = args.font_size {
        settings.set_font_size(size);
        changed = true;
    }
    if let Some(dark) = args.dark_mode {
        settings.dark_mode = dark;
        changed = true;
    }

    if changed {
        store.apply_settings(settings)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(store.settings())?);
    } else {
        println!("{}", format_settings(store.settings()));
    }
    Ok(())
}
