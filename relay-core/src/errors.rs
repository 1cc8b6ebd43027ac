use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RelayError {
    message: String,
}

impl RelayError {
    pub fn new(message: impl Into<String>) -> RelayError {
        RelayError { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for RelayError {}

// reqwest 的 Display 不带 source，这里把整条链拼起来，DNS/连接失败的原因才看得到
impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        let mut message = format!("request error: {}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        RelayError { message }
    }
}

impl From<url::ParseError> for RelayError {
    fn from(error: url::ParseError) -> Self {
        RelayError {
            message: format!("invalid url: {}", error),
        }
    }
}

impl From<config::ConfigError> for RelayError {
    fn from(error: config::ConfigError) -> Self {
        RelayError {
            message: format!("configuration error: {}", error),
        }
    }
}
