//! Zip JAR Inspector
//!
//! Reads the JDBC service registration and manifest version out of a JAR.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::domain::gateways::JarInspector;
use crate::domain::models::driver_detail::JarMetadata;
use crate::shared::errors::DomainError;

const DRIVER_SERVICE_ENTRY: &str = "META-INF/services/java.sql.Driver";
const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// Largest inflated size accepted for the service file or the manifest
pub const MAX_METADATA_ENTRY_BYTES: u64 = 64 * 1024;

/// JarInspector backed by the `zip` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipJarInspector;

impl ZipJarInspector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl JarInspector for ZipJarInspector {
    fn inspect(&self, content: &[u8]) -> Result<JarMetadata, DomainError> {
        let mut archive = ZipArchive::new(Cursor::new(content)).map_err(invalid_jar)?;

        let driver_classes = read_entry(&mut archive, DRIVER_SERVICE_ENTRY)?
            .map(|text| parse_service_file(&text))
            .unwrap_or_default();
        let version = read_entry(&mut archive, MANIFEST_ENTRY)?.and_then(|text| manifest_version(&text));

        Ok(JarMetadata { version, driver_classes })
    }
}

fn invalid_jar(err: ZipError) -> DomainError {
    DomainError::InvalidJar(err.to_string())
}

fn read_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<Option<String>, DomainError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(invalid_jar(err)),
    };

    if entry.size() > MAX_METADATA_ENTRY_BYTES {
        return Err(oversized_entry(name));
    }

    // The declared size can lie; cap what is actually inflated as well
    let mut bytes = Vec::new();
    entry
        .by_ref()
        .take(MAX_METADATA_ENTRY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| DomainError::InvalidJar(format!("{name}: {e}")))?;
    if bytes.len() as u64 > MAX_METADATA_ENTRY_BYTES {
        return Err(oversized_entry(name));
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

fn oversized_entry(name: &str) -> DomainError {
    DomainError::InvalidJar(format!("{name} exceeds {MAX_METADATA_ENTRY_BYTES} bytes"))
}

/// Class names listed in a service provider file, without comments or blanks
fn parse_service_file(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Implementation-Version` from the main section, else `Specification-Version`
fn manifest_version(text: &str) -> Option<String> {
    let attributes = main_attributes(text);
    let lookup = |key: &str| {
        attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    };
    lookup("Implementation-Version").or_else(|| lookup("Specification-Version"))
}

/// Attributes of the manifest main section, with continuation lines joined
fn main_attributes(text: &str) -> Vec<(String, String)> {
    let mut attributes: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(continued) = line.strip_prefix(' ') {
            if let Some((_, value)) = attributes.last_mut() {
                value.push_str(continued);
            }
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            attributes.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    attributes
}
