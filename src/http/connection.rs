use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::StaticHandler;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: S,
    handler: Arc<StaticHandler>,
    read_buffer_size: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<StaticHandler>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            handler,
            read_buffer_size,
            state: ConnectionState::Reading,
        }
    }

    /// Runs the exchange to completion: at most one request, one response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(Ok(req)) => ConnectionState::Processing(req),
                        Some(Err(response)) => {
                            ConnectionState::Writing(ResponseWriter::new(&response))
                        }
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.handler.serve(req).await;
                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single read and parses it.
    ///
    /// `None` means the client closed without sending anything. A parse
    /// failure yields the 400 response to send instead of a request.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, Response>>> {
        let mut buf = vec![0u8; self.read_buffer_size];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        match parse_http_request(&buf[..n]) {
            Ok(request) => Ok(Some(Ok(request))),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request");
                Ok(Some(Err(Response::bad_request())))
            }
        }
    }
}
