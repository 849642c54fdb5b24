use crate::{catalog, models::RepoCard, Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export format options
///
/// JSON is what the page templates consume; Markdown is for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Exporter for display cards
pub struct Exporter;

impl Exporter {
    /// Export cards to a file with automatic format detection
    pub fn export_to_file<P: AsRef<Path>>(cards: &[RepoCard], path: P) -> Result<()> {
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| {
                Error::ConfigError(
                    "Could not determine export format from extension. Use .json or .md"
                        .to_string(),
                )
            })?;

        Self::export_to_file_with_format(cards, path, format)
    }

    /// Export cards to a file with explicit format
    pub fn export_to_file_with_format<P: AsRef<Path>>(
        cards: &[RepoCard],
        path: P,
        format: ExportFormat,
    ) -> Result<()> {
        let content = match format {
            ExportFormat::Json => Self::to_json(cards)?,
            ExportFormat::Markdown => Self::to_markdown(cards),
        };

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Export cards to JSON format
    pub fn to_json(cards: &[RepoCard]) -> Result<String> {
        Ok(serde_json::to_string_pretty(cards)?)
    }

    /// Export cards to Markdown format
    pub fn to_markdown(cards: &[RepoCard]) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {} — projects\n\n", catalog::SITE_TITLE));
        output.push_str(&format!("{}\n\n---\n\n", catalog::SITE_DESCRIPTION));

        for card in cards {
            match &card.github_url {
                Some(url) => output.push_str(&format!("## [{}]({})\n\n", card.title, url)),
                None => output.push_str(&format!("## {}\n\n", card.title)),
            }

            output.push_str(&format!("{}\n\n", card.description));

            match (&card.version, card.version_source) {
                (Some(version), Some(source)) => {
                    output.push_str(&format!("**Version:** {} (via {})\n\n", version, source));
                }
                _ if card.unreleased => {
                    output.push_str("**Version:** unreleased\n\n");
                }
                _ => {}
            }

            if let Some(stars) = card.stars {
                output.push_str(&format!("⭐ {}", Self::format_number(stars)));
                if let Some(issues) = card.open_issues {
                    output.push_str(&format!(" | 🐛 {} open issues", issues));
                }
                if let Some(lang) = &card.primary_language {
                    output.push_str(&format!(" | 💻 {}", lang));
                }
                if let Some(license) = &card.license {
                    output.push_str(&format!(" | 📜 {}", license));
                }
                output.push_str("\n\n");
            }

            if let Some(updated) = card.last_updated {
                output.push_str(&format!(
                    "Last pushed: {}\n\n",
                    updated.format("%Y-%m-%d")
                ));
            }

            if let Some(npm_url) = &card.npm_url {
                output.push_str(&format!("[npm]({})", npm_url));
                if let Some(main_url) = &card.main_url {
                    output.push_str(&format!(" | [website]({})", main_url));
                }
                output.push_str("\n\n");
            } else if let Some(main_url) = &card.main_url {
                output.push_str(&format!("[website]({})\n\n", main_url));
            }

            if !card.tags.is_empty() {
                output.push_str("**Topics:** ");
                for (i, tag) in card.tags.iter().enumerate() {
                    if i > 0 {
                        output.push_str(", ");
                    }
                    output.push_str(&format!("`{}`", tag));
                }
                output.push_str("\n\n");
            }

            output.push_str("---\n\n");
        }

        output
    }

    /// Format numbers with K/M suffixes
    fn format_number(num: u32) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}k", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}
