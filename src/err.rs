use std::fmt;
use std::io;

use crate::defaults;

//--------------------------------------------------------------------------------------------------

/// Problems with the byte stream the terminals are read from.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    OpenFile(String),
    TerminalCount,
    Terminal(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Io(e) => e.fmt(f),
            InputError::OpenFile(msg) => msg.fmt(f),
            InputError::TerminalCount => write!(f, "failed to read number of terminals"),
            InputError::Terminal(terminal) => write!(f, "failed to read terminal {}", terminal),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

//--------------------------------------------------------------------------------------------------

/// A well-formed instance outside of the compile-time limits.
#[derive(Debug)]
pub enum ConfigError {
    TooManyTerminals(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::TooManyTerminals(count) => write!(
                f,
                "too many terminals: {} are given, but at most {} are supported",
                count,
                defaults::MAX_TERMINALS
            ),
        }
    }
}

//--------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub enum Error {
    Input(InputError),
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Input(e) => e.fmt(f),
            Error::Config(e) => e.fmt(f),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Input(InputError::Io(e))
    }
}
