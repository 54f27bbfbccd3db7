//! Middleware to verify bearer credentials and stamp the caller id on the
//! request

use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::extract::Request;
use axum::http::Response;
use axum::http::header::AUTHORIZATION;
use axum::response::IntoResponse;
use tower::{Layer, Service};

use crate::token::Claims;
use crate::{AppState, Error, UserId};

/// Middleware layer that guarantees a request carries a valid
/// `Authorization: Bearer` credential
///
/// On success the caller's account id is stored as an
/// [`Extension`](axum::Extension)
///
/// This layer does not touch the database; controllers that need the caller's
/// account should ask for an [`Identity`](crate::identity::Identity) in their
/// arguments
#[derive(Clone)]
pub struct AuthLayer {
	state: AppState,
}

impl AuthLayer {
	#[must_use]
	pub fn new(state: AppState) -> Self { Self { state } }
}

impl<S> Layer<S> for AuthLayer {
	type Service = AuthMiddleware<S>;

	fn layer(&self, inner: S) -> Self::Service {
		AuthMiddleware { inner, state: self.state.clone() }
	}
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
	inner: S,
	state: AppState,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
	S: Service<Request, Response = Response<Body>> + Clone + Send + 'static,
	S::Future: Send + 'static,
{
	type Error = S::Error;
	type Future = Pin<
		Box<
			dyn Future<Output = Result<Self::Response, Self::Error>>
				+ Send
				+ 'static,
		>,
	>;
	type Response = S::Response;

	fn poll_ready(
		&mut self,
		cx: &mut Context<'_>,
	) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	#[instrument(skip_all)]
	fn call(&mut self, mut req: Request<Body>) -> Self::Future {
		let cloned_inner = self.inner.clone();
		let mut inner = std::mem::replace(&mut self.inner, cloned_inner);

		let state = self.state.clone();

		Box::pin(async move {
			let bearer = req
				.headers()
				.get(AUTHORIZATION)
				.and_then(|header| header.to_str().ok())
				.and_then(|header| header.strip_prefix("Bearer "));

			let Some(token) = bearer else {
				info!("got request without bearer credential");

				return Ok(Error::Unauthorized("missing bearer token")
					.into_response());
			};

			let claims = match Claims::verify(token, &state.config) {
				Ok(c) => c,
				Err(e) => {
					return Ok(e.into_response());
				},
			};

			req.extensions_mut().insert(UserId(claims.sub));

			inner.call(req).await
		})
	}
}
