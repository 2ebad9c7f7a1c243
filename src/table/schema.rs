use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TableError;
use crate::table::model::Table;
use crate::translation::core::PayloadKind;

// @module: Output column naming convention and schema resolution

// @const: "{language_code} {field}" column name regex
static LANGUAGE_COLUMN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<code>\S+) (?P<field>name|description)$").unwrap()
});

/// Build the output column name for a language code and field
pub fn language_column(code: &str, kind: PayloadKind) -> String {
    format!("{} {}", code, kind.field_label())
}

/// Discover the language codes that have an output column for a field
///
/// Scans the column names for the `"{language_code} {field}"` pattern and
/// returns the codes in column order. The bare source column ("name" or
/// "description" without a code prefix) never matches.
pub fn discover_languages(table: &Table, kind: PayloadKind) -> Vec<String> {
    table.columns().iter()
        .filter_map(|column| {
            let captures = LANGUAGE_COLUMN_REGEX.captures(column)?;
            if &captures["field"] == kind.field_label() {
                Some(captures["code"].to_string())
            } else {
                None
            }
        })
        .collect()
}

/// One resolved output column
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageColumn {
    /// The language code
    pub code: String,

    /// Position of the code in the requested language list; translations
    /// are matched to this position
    pub request_pos: usize,

    /// Position of the output column in the table
    pub column: usize,
}

/// The validated mapping from requested language codes to output columns
/// for one field
///
/// Resolution happens once per job. `resolve_strict` is used when the
/// caller explicitly requested languages and treats an unmapped code as an
/// error; `resolve_lenient` keeps the historical merge contract of skipping
/// codes without a matching column.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageColumns {
    entries: Vec<LanguageColumn>,
}

impl LanguageColumns {
    /// Resolve requested codes against the table, failing on unmapped codes
    pub fn resolve_strict(table: &Table, codes: &[String], kind: PayloadKind) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(codes.len());
        for (request_pos, code) in codes.iter().enumerate() {
            let column_name = language_column(code, kind);
            let column = table.column_index(&column_name)
                .ok_or_else(|| TableError::UnmappedLanguage {
                    code: code.clone(),
                    column: column_name.clone(),
                })?;
            entries.push(LanguageColumn {
                code: code.clone(),
                request_pos,
                column,
            });
        }
        Ok(LanguageColumns { entries })
    }

    /// Resolve requested codes against the table, skipping unmapped codes
    ///
    /// The request order of the surviving codes is preserved, and each entry
    /// remembers its original position so translations can be matched
    /// positionally.
    pub fn resolve_lenient(table: &Table, codes: &[String], kind: PayloadKind) -> Self {
        let entries = codes.iter().enumerate()
            .filter_map(|(request_pos, code)| {
                let column = table.column_index(&language_column(code, kind))?;
                Some(LanguageColumn {
                    code: code.clone(),
                    request_pos,
                    column,
                })
            })
            .collect();
        LanguageColumns { entries }
    }

    /// The resolved columns in request order
    pub fn entries(&self) -> &[LanguageColumn] {
        &self.entries
    }

    /// The resolved language codes in request order
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    /// Whether no requested code resolved to a column
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of resolved columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
