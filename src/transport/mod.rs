//! reqwest-backed [`Dispatcher`](crate::dispatch::Dispatcher).

mod http;

pub use http::HttpDispatcher;
