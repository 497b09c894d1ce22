//! `byd config` subcommands.
//!
//! The handlers are generic over [`ConfigManager`] and print to any
//! [`Write`], so they run against [`BydConfig`] in the binary and against
//! buffers in tests. Keys are dotted paths into the TOML document, e.g.
//! `quiz.mastery_threshold`.

use byd_core::ConfigManager;
use std::io::Write;
use std::path::{Path, PathBuf};
use toml::Value;
use toml::map::Map;

use crate::cli::ConfigAction;
use crate::config::BydConfig;
use crate::error::Result;

type CoreError = byd_core::Error;

// ============================================================================
// Dispatch
// ============================================================================

/// Runs a config subcommand against [`BydConfig`].
///
/// `init` writes to `--file` when given, then to `--config`, then to the
/// platform default.
pub fn handle_config_command<W: Write>(
    out: &mut W,
    config_path: Option<&str>,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<BydConfig, _>(out, config_path),
        ConfigAction::Get { key } => cmd_config_get::<BydConfig, _>(out, config_path, &key),
        ConfigAction::Set { key, value } => {
            cmd_config_set::<BydConfig, _>(out, config_path, &key, &value)
        }
        ConfigAction::Init { file, force } => {
            cmd_config_init::<BydConfig, _>(out, file.as_deref().or(config_path), force)
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Prints the config file path that would be used.
pub fn cmd_config_path<C: ConfigManager, W: Write>(
    out: &mut W,
    config_path: Option<&str>,
) -> Result<()> {
    let path = resolve::<C>(config_path)?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        writeln!(
            out,
            "(not created yet; `{} config init` writes the defaults)",
            C::project_name()
        )?;
    }
    Ok(())
}

/// Prints the effective value of a dotted key, defaults included.
pub fn cmd_config_get<C: ConfigManager, W: Write>(
    out: &mut W,
    config_path: Option<&str>,
    key: &str,
) -> Result<()> {
    let config = C::load(config_path)?;
    let document = Value::try_from(&config).map_err(|e| CoreError::config(e.to_string()))?;
    let value = get_nested_value(&document, key)
        .ok_or_else(|| CoreError::config(format!("Unknown key '{key}'")))?;
    writeln!(out, "{}", format_toml_value(value))?;
    Ok(())
}

/// Changes one dotted key in an existing config file.
///
/// The edited document has to load and validate as `C`; otherwise the file
/// is left as it was.
pub fn cmd_config_set<C: ConfigManager, W: Write>(
    out: &mut W,
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<()> {
    let path = resolve::<C>(config_path)?;
    if !path.exists() {
        return Err(CoreError::config(format!(
            "No config file at {}; run `{} config init` first",
            path.display(),
            C::project_name()
        ))
        .into());
    }

    let mut document = read_document(&path)?;
    set_nested_value(&mut document, key, parse_value(value))?;

    let rendered =
        toml::to_string_pretty(&document).map_err(|e| CoreError::config(e.to_string()))?;
    let updated: C = toml::from_str(&rendered)
        .map_err(|e| CoreError::config(format!("Invalid value for '{key}': {e}")))?;
    updated.validate()?;
    std::fs::write(&path, rendered).map_err(|e| CoreError::io_with_path(e, &path))?;

    writeln!(out, "{key} = {value} ({})", path.display())?;
    Ok(())
}

/// Writes a config file holding every default value.
pub fn cmd_config_init<C: ConfigManager, W: Write>(
    out: &mut W,
    file: Option<&str>,
    force: bool,
) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| CoreError::config("No config directory on this platform"))?,
    };

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }
    let rendered = C::default().to_toml_string()?;
    std::fs::write(&path, rendered).map_err(|e| CoreError::io_with_path(e, &path))?;

    writeln!(out, "Wrote default configuration to {}", path.display())?;
    Ok(())
}

fn resolve<C: ConfigManager>(config_path: Option<&str>) -> Result<PathBuf> {
    C::resolve_config_path(config_path)
        .ok_or_else(|| CoreError::config("No config directory on this platform").into())
}

fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::io_with_path(e, path))?;
    let document = toml::from_str(&content)
        .map_err(|e| CoreError::config(format!("Failed to parse {}: {e}", path.display())))?;
    Ok(document)
}

// ============================================================================
// Dotted keys
// ============================================================================

/// Looks up `section.key` in a TOML tree.
pub fn get_nested_value<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(root, |node, part| node.as_table()?.get(part))
}

/// Stores `value` at `section.key`, creating missing tables on the way.
pub fn set_nested_value(root: &mut Value, key: &str, value: Value) -> byd_core::Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(CoreError::config(format!("Malformed key '{key}'")));
    }
    let Some((leaf, sections)) = parts.split_last() else {
        return Err(CoreError::config("Empty key"));
    };

    let mut node = root;
    for section in sections {
        node = node
            .as_table_mut()
            .ok_or_else(|| CoreError::config(format!("'{key}' passes through a plain value")))?
            .entry((*section).to_string())
            .or_insert(Value::Table(Map::new()));
    }
    node.as_table_mut()
        .ok_or_else(|| CoreError::config(format!("'{key}' passes through a plain value")))?
        .insert((*leaf).to_string(), value);
    Ok(())
}

/// Reads a command-line value as a boolean, integer, float or string, in that
/// order.
pub fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => raw
            .parse::<i64>()
            .map(Value::Integer)
            .or_else(|_| raw.parse::<f64>().map(Value::Float))
            .unwrap_or_else(|_| Value::String(raw.to_string())),
    }
}

/// Renders a value for `config get`: scalars bare, tables as TOML.
pub fn format_toml_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(dt) => dt.to_string(),
        Value::Array(_) | Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
