//! Polkit Explorer CLI
//!
//! Terminal viewer for PolicyKit action-definition files: lists the
//! action ids of a `.policy` document, filters them, and prints the
//! per-action detail view (localized description, defaults, and the
//! tag/value explanations).
//!
//! # Usage
//!
//! ```bash
//! # List every action in a policy file
//! polkit-explorer show /usr/share/polkit-1/actions/org.freedesktop.login1.policy
//!
//! # Case-insensitive filter over the action ids
//! polkit-explorer show file.policy --filter reboot
//!
//! # Full detail view for one action, with a forced locale
//! polkit-explorer show file.policy --action org.freedesktop.login1.reboot --locale de-DE
//!
//! # Recently opened files
//! polkit-explorer recent
//! polkit-explorer recent --clear
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polkit_explorer_core::{filter, locale, Explanations, JsonFileStore, PolicyDocument, RecentFiles};
use std::path::PathBuf;

const SETTINGS_ORG: &str = "PolkitExplorer";
const SETTINGS_APP: &str = "Explorer";

#[derive(Parser)]
#[command(name = "polkit-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Terminal viewer for PolicyKit action-definition files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a policy file and list its actions
    Show {
        /// Path to the .policy XML file
        file: PathBuf,

        /// Only list action ids containing this substring (case-insensitive)
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Locale tag for description resolution (default: host locale)
        #[arg(long)]
        locale: Option<String>,

        /// Print the full detail view for this action id
        #[arg(short, long)]
        action: Option<String>,

        /// Emit the loaded document as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show or clear the recently opened files
    Recent {
        /// Forget all remembered paths
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Show {
            file,
            filter,
            locale,
            action,
            json,
        } => show(file, &filter, locale, action.as_deref(), json),
        Commands::Recent { clear } => recent(clear),
    }
}

fn show(
    file: PathBuf,
    needle: &str,
    locale_override: Option<String>,
    action: Option<&str>,
    json: bool,
) -> Result<()> {
    let locale = locale_override.unwrap_or_else(locale::system_locale);
    let doc = PolicyDocument::load(&file, &locale)
        .with_context(|| format!("loading {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else if let Some(wanted) = action {
        print_detail(&doc, wanted)?;
    } else {
        let ids = doc.action_ids();
        let matches = filter::filter(&ids, needle);
        for &idx in &matches {
            println!("{}", ids[idx]);
        }
        eprintln!("{} of {} actions (locale {locale})", matches.len(), doc.len());
    }

    remember(&file);
    Ok(())
}

fn print_detail(doc: &PolicyDocument, wanted: &str) -> Result<()> {
    let Some(action) = doc.actions().iter().find(|a| a.id == wanted) else {
        bail!("no action with id {wanted}");
    };

    let explain = Explanations::standard();
    println!("{}", action.id);
    println!("  Description: {}", action.description);
    if action.defaults.is_empty() {
        println!("  Defaults: (none)");
    } else {
        println!("  Defaults:");
        for (tag, value) in &action.defaults {
            println!("    {tag} = {value}");
            println!("      {tag}: {}", explain.tag(tag));
            println!("      {value}: {}", explain.value(value));
        }
    }
    Ok(())
}

fn recent(clear: bool) -> Result<()> {
    let Some(store) = settings_store() else {
        bail!("no settings directory available (set XDG_CONFIG_HOME or HOME)");
    };
    let mut recents = RecentFiles::new(store);
    if clear {
        recents.clear()?;
    } else {
        for path in recents.list() {
            println!("{path}");
        }
    }
    Ok(())
}

/// Move a successfully opened file to the front of the recents list.
/// Failure to persist never fails the view itself.
fn remember(file: &std::path::Path) {
    let Some(store) = settings_store() else {
        tracing::warn!("no settings directory, recent files not persisted");
        return;
    };
    if let Err(err) = RecentFiles::new(store).touch(file) {
        tracing::warn!(%err, "could not update recent files");
    }
}

fn settings_store() -> Option<JsonFileStore> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(JsonFileStore::new(base, SETTINGS_ORG, SETTINGS_APP))
}
