// Pattern 4: HTTP Handler Testing
// Demonstrates exercising a hyper handler in-process: build a Request, call
// the handler, assert on the Response. No listener, no client, no ports.
// main() serves the same handler for manual poking with curl.

use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpListener;

use testing_patterns::login::login_handler;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();
    let listener = TcpListener::bind(addr).await?;
    println!("Login endpoint on http://{}", addr);
    println!(
        "Try: curl -i -d '{{\"code\":\"a@example.com\",\"password\":\"password\"}}' http://{}/",
        addr
    );

    loop {
        let (tcp, _) = listener.accept().await?;
        let io = TokioIo::new(tcp);

        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .timer(TokioTimer::new())
                .serve_connection(io, service_fn(login_handler))
                .await
            {
                tracing::warn!(error = %err, "error serving connection");
            }
        });
    }
}
