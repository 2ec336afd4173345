use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable held a value that could not be used.
    #[error("invalid {key}={value:?}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The listening socket could not be opened, usually because the port is taken.
    #[error("could not listen on {addr}; is another process already using this port?")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
