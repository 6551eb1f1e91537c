use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::caller::CallerInfo;
use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::Sink;
use crate::time::rfc3339_now;

/// Destination used by [`UdpLogger::new`] when no address is given.
pub const DEFAULT_UDP_ADDR: &str = "127.0.0.1:514";

/// Sink that sends each formatted line as one datagram. `UdpSocket::send_to`
/// takes `&self`, so concurrent writes are safe; delivery is fire-and-forget.
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl Sink for UdpSink {
    fn write_message(&self, message: &str) -> io::Result<()> {
        self.socket.send_to(message.as_bytes(), self.peer).map(|_| ())
    }
}

/// Backend that ships log lines to a remote collector over UDP.
#[derive(Debug)]
pub struct UdpLogger {
    min: Severity,
    sink: UdpSink,
}

impl UdpLogger {
    pub fn new(config: &LogConfig) -> Result<Self, ConfigError> {
        Self::to_addr(config, DEFAULT_UDP_ADDR)
    }

    /// Builds a logger targeting an explicit `host:port` destination.
    pub fn to_addr(config: &LogConfig, addr: impl ToSocketAddrs) -> Result<Self, ConfigError> {
        let min = config.min_severity()?;
        let backend_err = |source: io::Error| ConfigError::Backend {
            config: config.clone(),
            source,
        };

        let peer = addr
            .to_socket_addrs()
            .map_err(backend_err)?
            .next()
            .ok_or_else(|| backend_err(io::Error::other("destination resolved to no address")))?;
        let socket = UdpSocket::bind(("0.0.0.0", 0)).map_err(backend_err)?;

        Ok(Self {
            min,
            sink: UdpSink { socket, peer },
        })
    }
}

impl Logger for UdpLogger {
    fn sink(&self, severity: Severity) -> Option<&dyn Sink> {
        (severity >= self.min).then_some(&self.sink as &dyn Sink)
    }

    /// Richer form for remote collectors: timestamp, severity, caller, message.
    fn format_message(
        &self,
        severity: Severity,
        caller: &CallerInfo,
        args: fmt::Arguments<'_>,
    ) -> String {
        format!("{} {severity} {caller} {args}\n", rfc3339_now())
    }

    fn identity(&self) -> String {
        format!("udpLogger({})", self.min)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    use std::time::Duration;

    fn receiver() -> (UdpSocket, SocketAddr) {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let addr = socket.local_addr().unwrap();
        (socket, addr)
    }

    fn recv_line(socket: &UdpSocket) -> String {
        let mut buf = [0u8; 1024];
        let (n, _) = socket.recv_from(&mut buf).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn identity_encodes_the_canonical_minimum() {
        let (_socket, addr) = receiver();
        let logger = UdpLogger::to_addr(&LogConfig::new("udp", "error"), addr).unwrap();
        assert_eq!(logger.identity(), "udpLogger(ERROR)");
    }

    #[test]
    fn each_message_arrives_as_one_datagram() {
        let (socket, addr) = receiver();
        let logger = UdpLogger::to_addr(&LogConfig::new("udp", "info"), addr).unwrap();

        logger.error(format_args!("hello {}", "world"));

        let line = recv_line(&socket);
        assert!(line.contains(" ERROR "), "got {line}");
        assert!(line.ends_with("hello world\n"), "got {line}");
        // Leading RFC3339 UTC timestamp.
        assert_eq!(&line[10..11], "T");
        assert_eq!(&line[19..20], "Z");
    }

    #[test]
    fn messages_below_the_minimum_send_nothing() {
        let (socket, addr) = receiver();
        socket
            .set_read_timeout(Some(Duration::from_millis(200)))
            .unwrap();
        let logger = UdpLogger::to_addr(&LogConfig::new("udp", "error"), addr).unwrap();

        assert!(logger.sink(Severity::Info).is_none());
        logger.info(format_args!("dropped"));

        let mut buf = [0u8; 64];
        assert!(socket.recv_from(&mut buf).is_err(), "no datagram expected");
    }

    #[test]
    fn unresolvable_destination_fails_construction() {
        let err = UdpLogger::to_addr(&LogConfig::new("udp", "info"), "no.such.host.invalid:514")
            .expect_err("should fail");
        match err {
            ConfigError::Backend { config, .. } => assert_eq!(config.name, "udp"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
