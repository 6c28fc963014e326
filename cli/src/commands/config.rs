use super::ui;
use anyhow::Result;
use clap::Subcommand;
use console::Style;
use repolens_config::profiles::mask_api_key;
use repolens_config::{Profile, ProfileStore};

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Add or replace a profile
    AddProfile {
        name: String,

        #[arg(long, default_value = "https://api.openai.com/v1")]
        api_base: String,

        #[arg(long)]
        api_key: String,

        #[arg(long, default_value = "gpt-3.5-turbo")]
        model: String,
    },
    /// List stored profiles
    ListProfiles,
    /// Make a profile the default
    UseProfile { name: String },
}

pub fn handle_config(command: ConfigCommand) -> Result<()> {
    let mut store = ProfileStore::load()?;
    apply(&mut store, command)
}

fn apply(store: &mut ProfileStore, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::AddProfile {
            name,
            api_base,
            api_key,
            model,
        } => {
            store.add_profile(
                name.clone(),
                Profile {
                    api_base,
                    api_key,
                    model,
                },
            )?;
            store.save()?;
            ui::print_success(&format!("Profile '{}' saved", name));
        }
        ConfigCommand::ListProfiles => print_profiles(store),
        ConfigCommand::UseProfile { name } => {
            store.set_default_profile(&name)?;
            store.save()?;
            ui::print_success(&format!("Default profile set to '{}'", name));
        }
    }
    Ok(())
}

fn print_profiles(store: &ProfileStore) {
    if store.profiles.is_empty() {
        println!("No profiles configured. Add one with `repolens config add-profile`.");
        return;
    }

    ui::print_header("Profiles");
    for (name, profile) in &store.profiles {
        let is_default = store.default_profile.as_deref() == Some(name.as_str());
        let marker = if is_default { "*" } else { " " };
        println!(
            "{} {}",
            Style::new().green().bold().apply_to(marker),
            Style::new().bold().apply_to(name)
        );
        ui::print_key_value("    api_base", &profile.api_base);
        ui::print_key_value("    model", &profile.model);
        ui::print_key_value("    api_key", &mask_api_key(&profile.api_key));
    }
}
