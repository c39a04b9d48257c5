// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: image descriptions, albums and contact details.
//!
//! Content is read once at startup from three JSON documents in the content
//! directory. Nothing here is ever written back.

mod focus;

pub use focus::FocusPoint;

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

pub const HOME_FILE: &str = "home.json";
pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const CONTACT_FILE: &str = "contact.json";

/// One photograph as described by the content files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageAsset {
    pub file_id: String,
    pub extension: String,
    /// Natural width of the full-resolution image.
    pub width: u32,
    /// Natural height of the full-resolution image.
    pub height: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_focus")]
    pub focus: Option<FocusPoint>,
}

impl ImageAsset {
    /// Height divided by width; 1.0 for degenerate sizes.
    pub fn inverse_aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.height as f32 / self.width as f32
        }
    }

    pub fn focus_or_center(&self) -> FocusPoint {
        self.focus.unwrap_or_default()
    }
}

fn deserialize_focus<'de, D>(deserializer: D) -> std::result::Result<Option<FocusPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<f32>> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some([x, y]) => Some(FocusPoint::new(*x, *y)),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HomeContent {
    #[serde(default)]
    pub slideshow: Vec<ImageAsset>,
    pub photos: Vec<ImageAsset>,
}

/// A named, ordered group of photographs.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub name: String,
    pub photos: Vec<ImageAsset>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioContent {
    /// Albums in the order they appear in `portfolio.json`.
    pub albums: Vec<Album>,
}

impl<'de> Deserialize<'de> for PortfolioContent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            photos: serde_json::Map<String, serde_json::Value>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let albums = raw
            .photos
            .into_iter()
            .map(|(name, value)| {
                serde_json::from_value::<Vec<ImageAsset>>(value)
                    .map(|photos| Album { name, photos })
                    .map_err(serde::de::Error::custom)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { albums })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    #[serde(default)]
    pub instagram: String,
    /// Name shown in the copyright line.
    #[serde(default)]
    pub owner: String,
    /// First year of the copyright range.
    #[serde(default)]
    pub since: Option<i32>,
}

impl ContactDetails {
    /// Copyright years: `"2025"` or `"2025 - 2027"`.
    pub fn copyright_years(&self, current_year: i32) -> String {
        match self.since {
            Some(since) if since < current_year => format!("{since} - {current_year}"),
            _ => current_year.to_string(),
        }
    }

    /// Profile address for the Instagram handle, if one is set.
    pub fn instagram_url(&self) -> Option<String> {
        let handle = self.instagram.trim().trim_start_matches('@');
        (!handle.is_empty()).then(|| format!("https://instagram.com/{handle}"))
    }
}

/// Everything the pages render, loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub home: HomeContent,
    pub portfolio: PortfolioContent,
    pub contact: ContactDetails,
}

/// Reads the three content documents from `dir`.
pub fn load_from_dir(dir: &Path) -> Result<Content> {
    Ok(Content {
        home: read_json(dir, HOME_FILE)?,
        portfolio: read_json(dir, PORTFOLIO_FILE)?,
        contact: read_json(dir, CONTACT_FILE)?,
    })
}

fn read_json<T>(dir: &Path, file: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = dir.join(file);
    let text = fs::read_to_string(&path).map_err(|err| Error::Content {
        file: path.display().to_string(),
        reason: err.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|err| Error::Content {
        file: path.display().to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PHOTO: &str = r#"{"file_id":"a1","extension":"jpg","width":1600,"height":900,"description":"Harbour at dusk"}"#;

    fn write_content(dir: &Path, home: &str, portfolio: &str, contact: &str) {
        fs::write(dir.join(HOME_FILE), home).unwrap();
        fs::write(dir.join(PORTFOLIO_FILE), portfolio).unwrap();
        fs::write(dir.join(CONTACT_FILE), contact).unwrap();
    }

    #[test]
    fn image_asset_parses_focus_pair() {
        let asset: ImageAsset = serde_json::from_str(
            r#"{"file_id":"b2","extension":"webp","width":800,"height":1200,"focus":[0.25,0.8]}"#,
        )
        .unwrap();
        assert_eq!(asset.focus, Some(FocusPoint::new(0.25, 0.8)));
        assert!(asset.description.is_empty());
    }

    #[test]
    fn malformed_focus_is_treated_as_absent() {
        let asset: ImageAsset = serde_json::from_str(
            r#"{"file_id":"b2","extension":"jpg","width":10,"height":10,"focus":[0.5]}"#,
        )
        .unwrap();
        assert_eq!(asset.focus, None);
        assert_eq!(asset.focus_or_center(), FocusPoint::CENTER);
    }

    #[test]
    fn degenerate_size_has_square_ratio() {
        let asset = ImageAsset {
            file_id: "z".into(),
            extension: "jpg".into(),
            width: 0,
            height: 300,
            description: String::new(),
            focus: None,
        };
        assert_eq!(asset.inverse_aspect_ratio(), 1.0);
    }

    #[test]
    fn copyright_years_collapse_to_single_year() {
        let mut contact = ContactDetails {
            email: "a@b.c".into(),
            ..ContactDetails::default()
        };
        assert_eq!(contact.copyright_years(2026), "2026");
        contact.since = Some(2026);
        assert_eq!(contact.copyright_years(2026), "2026");
        contact.since = Some(2025);
        assert_eq!(contact.copyright_years(2027), "2025 - 2027");
    }

    #[test]
    fn instagram_handle_becomes_profile_url() {
        let mut contact = ContactDetails::default();
        assert_eq!(contact.instagram_url(), None);
        contact.instagram = "@studio".into();
        assert_eq!(contact.instagram_url().as_deref(), Some("https://instagram.com/studio"));
    }

    #[test]
    fn portfolio_preserves_album_order() {
        let json = format!(
            r#"{{"photos":{{"Zebra":[{PHOTO}],"Alps":[],"Marina":[{PHOTO},{PHOTO}]}}}}"#
        );
        let portfolio: PortfolioContent = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = portfolio.albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Zebra", "Alps", "Marina"]);
        assert_eq!(portfolio.albums[2].photos.len(), 2);
    }

    #[test]
    fn load_from_dir_reads_all_documents_and_ignores_extra_fields() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            &format!(r#"{{"photos":[{PHOTO}],"bio":"ignored","quotes":[]}}"#),
            &format!(r#"{{"photos":{{"Coast":[{PHOTO}]}}}}"#),
            r#"{"email":"hello@example.com","instagram":"someone"}"#,
        );

        let content = load_from_dir(dir.path()).unwrap();
        assert_eq!(content.home.photos.len(), 1);
        assert!(content.home.slideshow.is_empty());
        assert_eq!(content.portfolio.albums[0].name, "Coast");
        assert_eq!(content.contact.instagram, "someone");
    }

    #[test]
    fn missing_document_names_the_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(HOME_FILE), r#"{"photos":[]}"#).unwrap();

        match load_from_dir(dir.path()) {
            Err(Error::Content { file, .. }) => assert!(file.ends_with(PORTFOLIO_FILE)),
            other => panic!("expected content error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_a_content_error() {
        let dir = tempdir().unwrap();
        write_content(dir.path(), r#"{"photos": 3}"#, r#"{"photos":{}}"#, r#"{"email":""}"#);

        assert!(matches!(
            load_from_dir(dir.path()),
            Err(Error::Content { ref file, .. }) if file.ends_with(HOME_FILE)
        ));
    }
}
