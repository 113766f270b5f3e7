//! HTTP client installed on the application so `img` can fetch remote images.

use std::any::type_name;
use std::io::{self, Read as _};
use std::time::Duration;

use anyhow::Context as _;
use futures::channel::oneshot;
use futures::future::BoxFuture;
use futures::{AsyncReadExt as _, FutureExt as _};
use gpui::http_client::http::{HeaderValue, request::Parts};
use gpui::http_client::{AsyncBody, HttpClient, RedirectPolicy, Request, Response, Url};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: u32 = 5;
const USER_AGENT: &str = concat!("image-gallery/", env!("CARGO_PKG_VERSION"));

/// Largest response body accepted.
pub const MAX_RESPONSE_BYTES: usize = 32 * 1024 * 1024;

/// [`HttpClient`] backed by blocking `ureq` agents.
///
/// Each request runs on its own thread so gpui's executors never block on the
/// network.
pub struct UreqHttpClient {
    following: ureq::Agent,
    direct: ureq::Agent,
    user_agent: HeaderValue,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        Self {
            following: build_agent(MAX_REDIRECTS),
            direct: build_agent(0),
            user_agent: HeaderValue::from_static(USER_AGENT),
        }
    }

    fn agent(&self, policy: Option<&RedirectPolicy>) -> ureq::Agent {
        match policy {
            Some(RedirectPolicy::FollowAll | RedirectPolicy::FollowLimit(_)) => {
                self.following.clone()
            }
            Some(RedirectPolicy::NoFollow) | None => self.direct.clone(),
        }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_agent(redirects: u32) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .timeout_write(WRITE_TIMEOUT)
        .redirects(redirects)
        .user_agent(USER_AGENT)
        .build()
}

impl HttpClient for UreqHttpClient {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn user_agent(&self) -> Option<&HeaderValue> {
        Some(&self.user_agent)
    }

    fn proxy(&self) -> Option<&Url> {
        None
    }

    fn send(
        &self,
        req: Request<AsyncBody>,
    ) -> BoxFuture<'static, anyhow::Result<Response<AsyncBody>>> {
        let agent = self.agent(req.extensions().get::<RedirectPolicy>());
        let (parts, mut body) = req.into_parts();

        async move {
            let mut payload = Vec::new();
            body.read_to_end(&mut payload).await?;

            let (tx, rx) = oneshot::channel();
            std::thread::Builder::new()
                .name("image-gallery-http".into())
                .spawn(move || {
                    let _ = tx.send(send_blocking(&agent, &parts, &payload));
                })
                .context("spawning http worker")?;

            rx.await.context("http worker exited without a response")?
        }
        .boxed()
    }
}

fn send_blocking(
    agent: &ureq::Agent,
    parts: &Parts,
    payload: &[u8],
) -> anyhow::Result<Response<AsyncBody>> {
    let url = parts.uri.to_string();
    let mut request = agent.request(parts.method.as_str(), &url);
    for (name, value) in &parts.headers {
        if let Ok(value) = value.to_str() {
            request = request.set(name.as_str(), value);
        }
    }

    let result = if payload.is_empty() {
        request.call()
    } else {
        request.send_bytes(payload)
    };
    let response = match result {
        Ok(response) => response,
        // gpui reports the status itself.
        Err(ureq::Error::Status(_, response)) => response,
        Err(err) => return Err(err).with_context(|| format!("requesting {url}")),
    };
    tracing::debug!(%url, status = response.status(), "http response");

    into_http_response(response)
}

fn into_http_response(response: ureq::Response) -> anyhow::Result<Response<AsyncBody>> {
    let mut builder = Response::builder().status(response.status());
    for name in response.headers_names() {
        for value in response.all(&name) {
            builder = builder.header(name.as_str(), value);
        }
    }
    let bytes = read_response_bytes(response, MAX_RESPONSE_BYTES)?;
    Ok(builder.body(AsyncBody::from(bytes))?)
}

/// Read a response into memory, enforcing a maximum byte size.
fn read_response_bytes(response: ureq::Response, max_bytes: usize) -> io::Result<Vec<u8>> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> io::Result<()> {
    let Some(length) = response
        .header("Content-Length")
        .and_then(|length| length.parse::<u64>().ok())
    else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response too large: {length} bytes"),
        ));
    }
    Ok(())
}
