use std::path::PathBuf;
use super::ValueParser;

#[derive(Clone, Debug)]
pub struct StringParser { }

impl ValueParser<String> for StringParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }
}

pub const STRING: StringParser = StringParser {};

#[derive(Clone, Debug)]
pub struct BoolParser { }

impl ValueParser<bool> for BoolParser {
    fn parse(&self, value: &str) -> Result<bool, String> {
        value.parse::<bool>()
            .map_err(|_| format!("invalid boolean value: {value}"))
    }
}

pub const BOOL: BoolParser = BoolParser {};

#[derive(Clone, Debug)]
pub struct FilePathParser { }

impl ValueParser<PathBuf> for FilePathParser {
    fn parse(&self, value: &str) -> Result<PathBuf, String> {
        Ok(PathBuf::from(shellexpand::tilde(value).into_owned()))
    }
}

pub const FILE_PATH: FilePathParser = FilePathParser {};

#[derive(Clone, Debug)]
pub struct WebPortParser { }

impl ValueParser<u16> for WebPortParser {
    fn parse(&self, value: &str) -> Result<u16, String> {
        value.parse::<u16>()
            .map_err(|_| format!("invalid port number: {value}"))
    }
}

pub const WEB_PORT: WebPortParser = WebPortParser {};

/// Parser for a dataset source: a filesystem path (tilde-expanded) or a
/// URL, passed through to the engine's JSON reader as-is.
#[derive(Clone, Debug)]
pub struct DatasetSourceParser { }

impl ValueParser<String> for DatasetSourceParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        if value.contains("://") {
            Ok(value.to_owned())
        } else {
            Ok(shellexpand::tilde(value).into_owned())
        }
    }
}

pub const DATASET_SOURCE: DatasetSourceParser = DatasetSourceParser {};
