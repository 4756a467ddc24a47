use axum::Router;
use std::future::Future;
use tokio::net::UnixListener;
use tower::Service;
use tracing::{error, info};

/// Serve `app` on a Unix socket until `shutdown` resolves.
///
/// Once `shutdown` fires no new connections are accepted; connections already
/// being served finish on their own tasks.
pub async fn serve_unix<F>(listener: UnixListener, app: Router, shutdown: F)
where
    F: Future<Output = ()> + Send,
{
    let mut make_service = app.into_make_service();
    tokio::pin!(shutdown);

    loop {
        let socket = tokio::select! {
            _ = &mut shutdown => {
                info!("Unix socket listener stopped accepting connections");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((socket, _remote_addr)) => socket,
                Err(e) => {
                    error!(error = %e, "Failed to accept Unix socket connection");
                    continue;
                }
            },
        };

        let tower_service = match make_service.call(&socket).await {
            Ok(svc) => svc,
            Err(infallible) => match infallible {},
        };

        tokio::spawn(async move {
            let socket = hyper_util::rt::TokioIo::new(socket);

            let hyper_service = hyper::service::service_fn(move |request: hyper::Request<hyper::body::Incoming>| {
                tower_service.clone().call(request)
            });

            if let Err(err) = hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection(socket, hyper_service)
                .await
            {
                error!(error = %err, "Error serving Unix socket connection");
            }
        });
    }
}
