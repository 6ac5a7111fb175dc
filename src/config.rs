//! Startup configuration checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use log::{error, info};
use rocket::fairing::{AdHoc, Fairing};
use rocket::figment::value::magic::RelativePathBuf;
use rocket::{Build, Rocket};

use crate::error;

/// Where templates are looked up when `template_dir` is not configured.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Templates the routes render. Launch is refused if any is missing.
pub const REQUIRED_TEMPLATES: &[&str] = &["index", "dashboard"];

/// Checks the template directory before the first request is served.
pub struct TemplateCheck;

impl TemplateCheck {
    pub fn fairing() -> impl Fairing {
        AdHoc::try_on_ignite("Template Check", |rocket| async move {
            let dir = template_dir(&rocket);
            match check_templates(&dir, REQUIRED_TEMPLATES) {
                Ok(()) => {
                    info!("Templates found in {}", dir.display());
                    Ok(rocket)
                }
                Err(e) => {
                    error!("Template check failed: {}", e);
                    Err(rocket)
                }
            }
        })
    }
}

/// The configured `template_dir`, resolved relative to the config file
/// that set it, the same way the template fairing resolves it.
pub fn template_dir(rocket: &Rocket<Build>) -> PathBuf {
    rocket
        .figment()
        .extract_inner::<RelativePathBuf>("template_dir")
        .map(|dir| dir.relative())
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_DIR))
}

/// Verify that every name in `required` has a template file in `dir`.
///
/// A template named `index` may be stored as `index.html.tera` or
/// `index.tera`; only the file stem up to the first dot is compared.
pub fn check_templates(dir: &Path, required: &[&str]) -> error::Result {
    let entries = fs::read_dir(dir)
        .map_err(|e| anyhow!("cannot read template dir {}: {}", dir.display(), e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(stem) = file_name.to_str().and_then(|n| n.split('.').next()) {
            found.push(stem.to_string());
        }
    }

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !found.iter().any(|f| f == name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "missing template(s) in {}: {}",
            dir.display(),
            missing.join(", ")
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use rocket::figment::Figment;

    use super::*;

    #[test]
    fn shipped_templates_are_complete() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TEMPLATE_DIR);
        assert!(check_templates(&dir, REQUIRED_TEMPLATES).is_ok());
    }

    #[test]
    fn missing_template_is_reported() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TEMPLATE_DIR);
        let err = check_templates(&dir, &["index", "settings"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("settings"), "{}", message);
        assert!(!message.contains("index,"), "{}", message);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-template-dir");
        let err = check_templates(&dir, REQUIRED_TEMPLATES).unwrap_err();
        assert!(err.to_string().contains("cannot read template dir"));
    }

    #[test]
    fn template_dir_defaults_when_unset() {
        let figment = Figment::from(rocket::Config::default());
        let rocket = rocket::custom(figment);
        assert_eq!(template_dir(&rocket), PathBuf::from(DEFAULT_TEMPLATE_DIR));
    }

    #[test]
    fn template_dir_follows_configuration() {
        let figment = Figment::from(rocket::Config::default())
            .merge(("template_dir", "views"));
        let rocket = rocket::custom(figment);
        assert!(template_dir(&rocket).ends_with("views"));
    }
}
