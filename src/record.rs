use csv::StringRecord;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref PLUGIN_META_HEADERS: StringRecord =
        Field::ALL.iter().map(|f| f.label()).collect();
}

/// Fallback values for fields the page didn't provide, in column order.
pub const DEFAULTS: [(Field, &str); 10] = [
    (Field::Url, "N/A"),
    (Field::Name, "Unknown"),
    (Field::Version, "0.0.0"),
    (Field::LastUpdated, "N/A"),
    (Field::ActiveInstalls, "N/A"),
    (Field::MinWpVersion, "N/A"),
    (Field::TestedUpTo, "N/A"),
    (Field::MinPhpVersion, "N/A"),
    (Field::Languages, "N/A"),
    (Field::Tags, "N/A"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    Name,
    Version,
    LastUpdated,
    ActiveInstalls,
    MinWpVersion,
    TestedUpTo,
    MinPhpVersion,
    Languages,
    Tags,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Self::Url,
        Self::Name,
        Self::Version,
        Self::LastUpdated,
        Self::ActiveInstalls,
        Self::MinWpVersion,
        Self::TestedUpTo,
        Self::MinPhpVersion,
        Self::Languages,
        Self::Tags,
    ];

    /// Column header used in the output table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Name => "Name",
            Self::Version => "Version",
            Self::LastUpdated => "Last Updated",
            Self::ActiveInstalls => "Active Installations",
            Self::MinWpVersion => "WordPress Version",
            Self::TestedUpTo => "Tested Up To",
            Self::MinPhpVersion => "PHP Version",
            Self::Languages => "Languages",
            Self::Tags => "Tags",
        }
    }

    pub fn default_value(self) -> &'static str {
        DEFAULTS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, value)| *value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluginMetadataRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
    #[serde(rename = "Active Installations")]
    pub active_installs: String,
    #[serde(rename = "WordPress Version")]
    pub min_wp_version: String,
    #[serde(rename = "Tested Up To")]
    pub tested_up_to: String,
    #[serde(rename = "PHP Version")]
    pub min_php_version: String,
    #[serde(rename = "Languages")]
    pub languages: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl PluginMetadataRecord {
    /// Record standing in for a page that couldn't be scraped.
    pub fn placeholder(url: &str) -> Self {
        let mut record = Self {
            url: url.to_string(),
            ..Default::default()
        };
        record.fill_defaults();
        record
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Name => &self.name,
            Field::Version => &self.version,
            Field::LastUpdated => &self.last_updated,
            Field::ActiveInstalls => &self.active_installs,
            Field::MinWpVersion => &self.min_wp_version,
            Field::TestedUpTo => &self.tested_up_to,
            Field::MinPhpVersion => &self.min_php_version,
            Field::Languages => &self.languages,
            Field::Tags => &self.tags,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Url => &mut self.url,
            Field::Name => &mut self.name,
            Field::Version => &mut self.version,
            Field::LastUpdated => &mut self.last_updated,
            Field::ActiveInstalls => &mut self.active_installs,
            Field::MinWpVersion => &mut self.min_wp_version,
            Field::TestedUpTo => &mut self.tested_up_to,
            Field::MinPhpVersion => &mut self.min_php_version,
            Field::Languages => &mut self.languages,
            Field::Tags => &mut self.tags,
        }
    }

    /// Replaces every empty field with its entry from [`DEFAULTS`], logs
    /// each assignment and returns the fields that were filled.
    pub fn fill_defaults(&mut self) -> Vec<Field> {
        let mut filled = vec![];
        for (field, default) in DEFAULTS {
            let value = self.get_mut(field);
            if value.is_empty() {
                *value = default.to_string();
                log::info!("Set default value: {}={default}", field.label());
                filled.push(field);
            }
        }
        filled
    }

    pub fn to_row(&self) -> StringRecord {
        Field::ALL.iter().map(|&f| self.get(f)).collect()
    }
}
