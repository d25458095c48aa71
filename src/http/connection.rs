use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::StaticHandler;
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection<'a> {
    stream: TcpStream,
    buffer: BytesMut,
    handler: &'a StaticHandler,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, handler: &'a StaticHandler, max_request_bytes: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            handler,
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through exactly one request/response exchange.
    ///
    /// A client that connects and sends nothing is closed without a response.
    /// Any fault while reading or parsing the request is reported to the
    /// operational log and answered with a 500 before closing.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await {
                        Ok(Some(req)) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        Ok(None) => {
                            self.state = ConnectionState::Closed;
                        }
                        Err(e) => {
                            tracing::error!("Failed to read request: {}", e);
                            let writer = ResponseWriter::new(&Response::internal_error());
                            self.state = ConnectionState::Writing(writer);
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(req).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One exchange per connection: always close after writing.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Enforce the cap before parsing: a request that needs more than
            // the budget to complete must fail the same way every time,
            // regardless of how reads are chunked.
            if self.buffer.len() >= self.max_request_bytes {
                return Err(anyhow::anyhow!(
                    "request exceeds {} bytes",
                    self.max_request_bytes
                ));
            }

            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    // Remove consumed bytes
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → protocol error
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client connected and sent nothing
                    return Ok(None);
                }
                return Err(anyhow::anyhow!(
                    "connection closed before a complete request was received"
                ));
            }
        }
    }
}
