use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is a valid regex")
});

pub const MAX_SLUG_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug must contain only lowercase letters, digits and single hyphens: {0}")]
    Invalid(String),

    #[error("Slug exceeds {MAX_SLUG_LEN} characters")]
    TooLong,
}

/// URL-safe article key: lowercase ASCII words joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let candidate = raw.trim();

        if candidate.len() > MAX_SLUG_LEN {
            return Err(SlugError::TooLong);
        }

        if !SLUG_PATTERN.is_match(candidate) {
            return Err(SlugError::Invalid(candidate.to_string()));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Derives a slug from a human title, folding Swedish vowels to ASCII.
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        let mut out = String::with_capacity(title.len());
        let mut pending_hyphen = false;

        for ch in title.trim().chars().flat_map(char::to_lowercase) {
            let mapped = match ch {
                'å' | 'ä' | 'à' | 'á' | 'â' => Some('a'),
                'ö' | 'ø' | 'ó' | 'ò' | 'ô' => Some('o'),
                'é' | 'è' | 'ê' | 'ë' => Some('e'),
                'ü' | 'ú' | 'ù' => Some('u'),
                'í' | 'ì' | 'ï' => Some('i'),
                c if c.is_ascii_alphanumeric() => Some(c),
                _ => None,
            };

            match mapped {
                Some(c) => {
                    if pending_hyphen && !out.is_empty() {
                        out.push('-');
                    }
                    pending_hyphen = false;
                    out.push(c);
                }
                None => pending_hyphen = true,
            }
        }

        if out.len() > MAX_SLUG_LEN {
            out.truncate(MAX_SLUG_LEN);
            while out.ends_with('-') {
                out.pop();
            }
        }

        Self::parse(&out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
