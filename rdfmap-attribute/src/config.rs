//! Codec and model configuration
//!
//! Pure data structures, loaded from JSON with `serde_json`. Absent keys fall
//! back to defaults.
//!
//! ```json
//! {
//!   "codec": { "defaultLocale": "en", "allLocalesToken": "*" },
//!   "fields": {
//!     "label": { "predicate": "http://www.w3.org/2000/01/rdf-schema#label", "localized": true }
//!   }
//! }
//! ```

use crate::error::{AttributeError, Result};
use crate::field::{FieldDecl, FieldDescriptor};
use crate::locale::LocaleSelector;
use crate::resolver::FieldMap;
use serde::{Deserialize, Serialize};

/// Default locale when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Default textual token for the "all locales" selector
pub const DEFAULT_ALL_LOCALES_TOKEN: &str = "*";

/// Codec settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodecConfig {
    /// Locale used when callers do not pass a selector
    pub default_locale: String,
    /// Text that [`selector`](Self::selector) maps to [`LocaleSelector::All`]
    pub all_locales_token: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            all_locales_token: DEFAULT_ALL_LOCALES_TOKEN.to_string(),
        }
    }
}

impl CodecConfig {
    /// Parse and validate from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate from a JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty locale settings
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            return Err(AttributeError::config("defaultLocale must not be empty"));
        }
        if self.all_locales_token.trim().is_empty() {
            return Err(AttributeError::config("allLocalesToken must not be empty"));
        }
        Ok(())
    }

    /// Selector for reads that do not name a locale
    pub fn default_selector(&self) -> LocaleSelector {
        self.selector(&self.default_locale)
    }

    /// Parse a caller-supplied locale string
    pub fn selector(&self, locale: &str) -> LocaleSelector {
        LocaleSelector::parse(locale, &self.all_locales_token)
    }
}

/// A model's codec settings plus its declared fields
///
/// Fields keep the order they are declared in. An invalid declaration fails
/// the whole load with [`AttributeError::Field`].
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    /// Codec settings
    pub codec: CodecConfig,
    /// Field declarations by name
    pub fields: FieldMap,
}

/// Wire form of a model, before field declarations are validated
#[derive(Default, Deserialize)]
#[serde(default)]
struct ModelDecl {
    codec: CodecConfig,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<ModelDecl> for ModelConfig {
    type Error = AttributeError;

    fn try_from(decl: ModelDecl) -> Result<Self> {
        decl.codec.validate()?;

        let mut fields = FieldMap::new();
        for (name, value) in decl.fields {
            let field_decl: FieldDecl = serde_json::from_value(value)?;
            let field = FieldDescriptor::try_from(field_decl).map_err(|e| {
                tracing::debug!(field = %name, error = %e, "rejecting field declaration");
                e
            })?;
            fields.insert(name, field);
        }

        Ok(Self {
            codec: decl.codec,
            fields,
        })
    }
}

impl ModelConfig {
    /// Parse and validate from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        let decl: ModelDecl = serde_json::from_str(s)?;
        Self::try_from(decl)
    }

    /// Parse and validate from a JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let decl: ModelDecl = serde_json::from_value(value)?;
        Self::try_from(decl)
    }

    /// Build the field map, in declaration order
    pub fn field_map(&self) -> FieldMap {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldError;
    use crate::resolver::FieldResolver;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.default_selector(), LocaleSelector::locale("en"));
        assert_eq!(config.selector("*"), LocaleSelector::All);
    }

    #[test]
    fn test_custom_values() {
        let config = CodecConfig::from_json_value(json!({
            "defaultLocale": "fr",
            "allLocalesToken": "all"
        }))
        .unwrap();
        assert_eq!(config.default_selector(), LocaleSelector::locale("fr"));
        assert_eq!(config.selector("all"), LocaleSelector::All);
        assert_eq!(config.selector("*"), LocaleSelector::locale("*"));
    }

    #[test]
    fn test_default_locale_may_be_all() {
        let config = CodecConfig::from_json_value(json!({ "defaultLocale": "*" })).unwrap();
        assert!(config.default_selector().is_all());
    }

    #[test]
    fn test_rejects_empty_locale() {
        let err = CodecConfig::from_json_value(json!({ "defaultLocale": " " })).unwrap_err();
        assert!(matches!(err, AttributeError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CodecConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AttributeError::Json(_)));
    }

    #[test]
    fn test_model_config_fields() {
        let config = ModelConfig::from_json_value(json!({
            "codec": { "defaultLocale": "de" },
            "fields": {
                "title": { "predicate": "http://purl.org/dc/terms/title", "localized": true },
                "creator": { "predicate": "http://purl.org/dc/terms/creator", "uri": true, "multivalued": true }
            }
        }))
        .unwrap();

        assert_eq!(config.codec.default_locale, "de");
        let fields = config.field_map();
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["title", "creator"]);
        assert!(fields.resolve("creator").unwrap().is_uri());
        assert!(fields.resolve("title").unwrap().is_localized());
    }

    #[test]
    fn test_model_config_keeps_declaration_order() {
        let config = ModelConfig::from_json_str(
            r#"{
                "fields": {
                    "zeta": { "predicate": "http://example.org/zeta" },
                    "alpha": { "predicate": "http://example.org/alpha" },
                    "mu": { "predicate": "http://example.org/mu" }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.field_map().names().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mu"]
        );
    }

    #[test]
    fn test_model_config_rejects_invalid_field() {
        let err = ModelConfig::from_json_value(json!({
            "fields": {
                "creator": { "predicate": "http://purl.org/dc/terms/creator", "uri": true, "datatype": "http://www.w3.org/2001/XMLSchema#string" }
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            AttributeError::Field(FieldError::ConflictingKind { .. })
        ));
        assert_eq!(err.error_type(), "err:attr/InvalidField");

        let err = ModelConfig::from_json_str(
            r#"{ "fields": { "creator": { "predicate": "", "localized": true } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, AttributeError::Field(FieldError::EmptyPredicate)));
    }

    #[test]
    fn test_model_config_shape_errors_stay_json() {
        let err = ModelConfig::from_json_value(json!({
            "fields": { "creator": { "uri": true } }
        }))
        .unwrap_err();
        assert!(matches!(err, AttributeError::Json(_)));
        assert_eq!(err.error_type(), "err:config/InvalidConfig");
    }

    #[test]
    fn test_model_config_rejects_empty_codec_setting() {
        let err = ModelConfig::from_json_value(json!({
            "codec": { "allLocalesToken": "" }
        }))
        .unwrap_err();
        assert!(matches!(err, AttributeError::Config(_)));
    }
}
