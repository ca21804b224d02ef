use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::traits::{Displayable, ToSerdeMap};

// ---------------- sources ----------------
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FtpSource {
    pub host: String,
    #[serde(default = "default_ftp_port")]
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub file_regex: Option<String>,
    #[serde(default)]
    pub delete_loaded: bool,
}
impl ToSerdeMap for FtpSource {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SftpSource {
    pub host: String,
    #[serde(default = "default_sftp_port")]
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    #[serde(skip_serializing, default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub file_regex: Option<String>,
    #[serde(default)]
    pub delete_loaded: bool,
}
impl ToSerdeMap for SftpSource {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FolderSource {
    pub path: String,
    #[serde(default)]
    pub file_regex: Option<String>,
    #[serde(default)]
    pub recursive: bool,
}
impl ToSerdeMap for FolderSource {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiSource {
    pub base_url: String,
    pub endpoint: String,
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}
impl ToSerdeMap for ApiSource {}

/// Where a task reads its data from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    Ftp(FtpSource),
    Sftp(SftpSource),
    Folder(FolderSource),
    Api(ApiSource),
}

impl Display for SourceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceConfig::Ftp(_) => write!(f, "FTP"),
            SourceConfig::Sftp(_) => write!(f, "SFTP"),
            SourceConfig::Folder(_) => write!(f, "Folder"),
            SourceConfig::Api(_) => write!(f, "API"),
        }
    }
}

impl Displayable for SourceConfig {
    fn name(&self) -> String {
        self.to_string()
    }

    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        match self {
            SourceConfig::Ftp(c) => c.display_settings(),
            SourceConfig::Sftp(c) => c.display_settings(),
            SourceConfig::Folder(c) => c.display_settings(),
            SourceConfig::Api(c) => c.display_settings(),
        }
    }
}

// ---------------- targets ----------------
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DatarootTarget {
    pub path: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub add_timestamp: bool,
}
impl ToSerdeMap for DatarootTarget {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SftpTarget {
    pub host: String,
    #[serde(default = "default_sftp_port")]
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    #[serde(skip_serializing, default)]
    pub private_key: Option<String>,
    pub directory: String,
}
impl ToSerdeMap for SftpTarget {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DatabaseTarget {
    pub connection: String,
    pub table: String,
    #[serde(default)]
    pub truncate: bool,
}
impl ToSerdeMap for DatabaseTarget {}

/// Where a task writes its output.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetConfig {
    Dataroot(DatarootTarget),
    Sftp(SftpTarget),
    Database(DatabaseTarget),
}

impl Display for TargetConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetConfig::Dataroot(_) => write!(f, "Site data directory"),
            TargetConfig::Sftp(_) => write!(f, "SFTP"),
            TargetConfig::Database(_) => write!(f, "Database"),
        }
    }
}

impl Displayable for TargetConfig {
    fn name(&self) -> String {
        self.to_string()
    }

    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        match self {
            TargetConfig::Dataroot(c) => c.display_settings(),
            TargetConfig::Sftp(c) => c.display_settings(),
            TargetConfig::Database(c) => c.display_settings(),
        }
    }
}

// ---------------- processors ----------------
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PassthroughProcessor {}
impl ToSerdeMap for PassthroughProcessor {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CsvProcessor {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub skip_header: bool,
    #[serde(default)]
    pub columns: Vec<String>,
}
impl ToSerdeMap for CsvProcessor {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JsonLinesProcessor {
    #[serde(default)]
    pub fields: Vec<String>,
}
impl ToSerdeMap for JsonLinesProcessor {}

/// How a task transforms what it read before writing it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessorConfig {
    Passthrough(PassthroughProcessor),
    Csv(CsvProcessor),
    JsonLines(JsonLinesProcessor),
}

impl Display for ProcessorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorConfig::Passthrough(_) => write!(f, "Passthrough"),
            ProcessorConfig::Csv(_) => write!(f, "CSV"),
            ProcessorConfig::JsonLines(_) => write!(f, "JSON lines"),
        }
    }
}

impl Displayable for ProcessorConfig {
    fn name(&self) -> String {
        self.to_string()
    }

    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        match self {
            ProcessorConfig::Passthrough(c) => c.display_settings(),
            ProcessorConfig::Csv(c) => c.display_settings(),
            ProcessorConfig::JsonLines(c) => c.display_settings(),
        }
    }
}

fn default_ftp_port() -> u16 {
    21
}

fn default_sftp_port() -> u16 {
    22
}

fn default_delimiter() -> String {
    ",".to_string()
}
