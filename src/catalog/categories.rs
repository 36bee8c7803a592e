//! The five HTTP status classes and their display metadata.
//!
//! `CodeCategory` is the closed identity used throughout the catalog; the
//! kebab-case tokens (`info`, `success`, `redirect`, `client-error`,
//! `server-error`) are the wire values and must not drift, since they double
//! as deep-link identifiers for consumers. `Category` carries the authored
//! display metadata for each class.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Color returned when a category lookup has no metadata row.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6B6B6B";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeCategory {
    Info,
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl CodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeCategory::Info => "info",
            CodeCategory::Success => "success",
            CodeCategory::Redirect => "redirect",
            CodeCategory::ClientError => "client-error",
            CodeCategory::ServerError => "server-error",
        }
    }

    /// Numeric classification of any status code, catalog contents aside.
    ///
    /// This is the canonical definition of the class invariant: every catalog
    /// entry's declared category must agree with `from_code(entry.code)`.
    pub fn from_code(code: u16) -> Self {
        if code < 200 {
            CodeCategory::Info
        } else if code < 300 {
            CodeCategory::Success
        } else if code < 400 {
            CodeCategory::Redirect
        } else if code < 500 {
            CodeCategory::ClientError
        } else {
            CodeCategory::ServerError
        }
    }
}

impl TryFrom<&str> for CodeCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "info" => Ok(CodeCategory::Info),
            "success" => Ok(CodeCategory::Success),
            "redirect" => Ok(CodeCategory::Redirect),
            "client-error" => Ok(CodeCategory::ClientError),
            "server-error" => Ok(CodeCategory::ServerError),
            other => bail!("Unknown category: {other}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
/// Authored display metadata for one status class.
pub struct Category {
    pub id: CodeCategory,
    pub label: &'static str,
    pub range: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [Category; 5] = [
    Category {
        id: CodeCategory::Info,
        label: "Informativos",
        range: "1xx",
        color: "#5C6378",
        description: "Respuestas provisionales. El servidor recibió la petición y el cliente debe continuar.",
    },
    Category {
        id: CodeCategory::Success,
        label: "Éxito",
        range: "2xx",
        color: "#4A6B5A",
        description: "La petición fue recibida, entendida y aceptada correctamente.",
    },
    Category {
        id: CodeCategory::Redirect,
        label: "Redirección",
        range: "3xx",
        color: "#7B6B3A",
        description: "El cliente debe tomar acción adicional para completar la petición.",
    },
    Category {
        id: CodeCategory::ClientError,
        label: "Error del Cliente",
        range: "4xx",
        color: "#7B4A4A",
        description: "La petición tiene un error por parte del cliente.",
    },
    Category {
        id: CodeCategory::ServerError,
        label: "Error del Servidor",
        range: "5xx",
        color: "#6B2A2A",
        description: "El servidor falló al procesar una petición aparentemente válida.",
    },
];

/// Metadata row for a category id, if one is authored.
pub fn category(id: CodeCategory) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn category_color(id: CodeCategory) -> &'static str {
    category(id).map(|c| c.color).unwrap_or(FALLBACK_CATEGORY_COLOR)
}

pub fn category_label(id: CodeCategory) -> &'static str {
    category(id).map(|c| c.label).unwrap_or("")
}

pub fn category_range(id: CodeCategory) -> &'static str {
    category(id).map(|c| c.range).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tokens_round_trip() {
        for cat in [
            CodeCategory::Info,
            CodeCategory::Success,
            CodeCategory::Redirect,
            CodeCategory::ClientError,
            CodeCategory::ServerError,
        ] {
            assert_eq!(CodeCategory::try_from(cat.as_str()).expect("token parses"), cat);
        }
        assert!(CodeCategory::try_from("informational").is_err());
    }

    #[test]
    fn classification_covers_every_boundary() {
        assert_eq!(CodeCategory::from_code(100), CodeCategory::Info);
        assert_eq!(CodeCategory::from_code(199), CodeCategory::Info);
        assert_eq!(CodeCategory::from_code(200), CodeCategory::Success);
        assert_eq!(CodeCategory::from_code(299), CodeCategory::Success);
        assert_eq!(CodeCategory::from_code(300), CodeCategory::Redirect);
        assert_eq!(CodeCategory::from_code(399), CodeCategory::Redirect);
        assert_eq!(CodeCategory::from_code(400), CodeCategory::ClientError);
        assert_eq!(CodeCategory::from_code(499), CodeCategory::ClientError);
        assert_eq!(CodeCategory::from_code(500), CodeCategory::ServerError);
        assert_eq!(CodeCategory::from_code(599), CodeCategory::ServerError);
    }

    #[test]
    fn classification_holds_for_codes_outside_the_catalog() {
        assert_eq!(CodeCategory::from_code(150), CodeCategory::Info);
        assert_eq!(CodeCategory::from_code(290), CodeCategory::Success);
        assert_eq!(CodeCategory::from_code(599), CodeCategory::ServerError);
    }

    #[test]
    fn metadata_lookups_are_deterministic() {
        assert_eq!(category_color(CodeCategory::ClientError), "#7B4A4A");
        assert_eq!(category_color(CodeCategory::ClientError), "#7B4A4A");
        assert_eq!(category_label(CodeCategory::Success), "Éxito");
        assert_eq!(category_range(CodeCategory::Info), "1xx");
        assert_eq!(CATEGORIES.len(), 5);
    }

    #[test]
    fn metadata_agrees_with_enum_identity() {
        for row in &CATEGORIES {
            assert_eq!(category(row.id).expect("row present").label, row.label);
        }
    }
}
