//! libcurl-backed fetcher: one Easy2 handle per body, driven through a private
//! multi handle from `Read::read` on the caller's thread.

use std::io::{self, Read};
use std::time::Duration;

use curl::easy::Easy2;
use curl::multi::{Easy2Handle, Multi};

use crate::config::TransportConfig;
use crate::error::TransportError;

use super::handler::BodyHandler;
use super::{IndexBody, IndexFetcher};

/// Upper bound for one `Multi::wait` call while the reader is starved.
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// Blocking HTTP fetcher. Holds only configuration, so one instance can be
/// shared between threads; every `open` gets its own connection.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    config: TransportConfig,
}

impl CurlFetcher {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    fn build_easy(&self, url: &str) -> Result<Easy2<BodyHandler>, TransportError> {
        let cfg = &self.config;
        let mut easy = Easy2::new(BodyHandler::new(cfg.buffer_limit));
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(cfg.max_redirections)?;
        easy.connect_timeout(cfg.connect_timeout())?;
        easy.low_speed_limit(cfg.low_speed_limit)?;
        easy.low_speed_time(cfg.low_speed_time())?;
        easy.timeout(cfg.timeout())?;
        if let Some(ref agent) = cfg.user_agent {
            easy.useragent(agent)?;
        }
        Ok(easy)
    }
}

impl IndexFetcher for CurlFetcher {
    type Body = CurlBody;

    /// Registers the transfer. Nothing is sent until the body is first read,
    /// so connection failures surface from `read`.
    fn open(&self, url: &str) -> Result<CurlBody, TransportError> {
        let easy = self.build_easy(url)?;
        let multi = Multi::new();
        let handle = multi.add2(easy)?;
        tracing::debug!("opened index transfer for {}", url);
        Ok(CurlBody {
            handle: Some(handle),
            multi,
            url: url.to_string(),
            finished: false,
        })
    }
}

/// Streaming response body of a [`CurlFetcher`] transfer.
pub struct CurlBody {
    // Declared before `multi` so the handle is detached first on drop.
    handle: Option<Easy2Handle<BodyHandler>>,
    multi: Multi,
    url: String,
    finished: bool,
}

impl CurlBody {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Runs one perform/messages/wait round of the multi loop.
    fn drive(&mut self) -> Result<(), TransportError> {
        let running = self.multi.perform()?;
        let handle = match self.handle.as_ref() {
            Some(h) => h,
            None => return Ok(()),
        };

        let mut outcome = None;
        self.multi.messages(|msg| {
            if let Some(result) = msg.result_for2(handle) {
                outcome = Some(result);
            }
        });

        if let Some(result) = outcome {
            self.finished = true;
            let handler = handle.get_ref();
            if let Some(code) = handler.failed_status() {
                tracing::warn!("GET {} returned HTTP {}", self.url, code);
                return Err(TransportError::Http(code));
            }
            if let Err(e) = result {
                tracing::warn!("GET {} failed: {}", self.url, e);
                return Err(TransportError::Curl(e));
            }
            tracing::debug!("received {} bytes from {}", handler.received, self.url);
            return Ok(());
        }

        if running > 0 && handle.get_ref().is_empty() {
            self.multi.wait(&mut [], WAIT_SLICE)?;
        }
        Ok(())
    }
}

impl Read for CurlBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            let handle = match self.handle.as_mut() {
                Some(h) => h,
                None => return Ok(0),
            };
            let n = handle.get_mut().drain_into(buf);
            if n > 0 {
                return Ok(n);
            }
            if self.finished {
                return Ok(0);
            }
            if handle.get_ref().paused {
                handle.get_mut().paused = false;
                handle
                    .unpause_write()
                    .map_err(|e| TransportError::Curl(e).into_io())?;
            }
            self.drive().map_err(TransportError::into_io)?;
        }
    }
}

impl IndexBody for CurlBody {
    fn close(mut self) -> Result<(), TransportError> {
        if let Some(handle) = self.handle.take() {
            self.multi.remove2(handle)?;
            tracing::debug!("closed index transfer for {}", self.url);
        }
        Ok(())
    }
}
