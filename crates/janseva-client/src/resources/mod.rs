//! Resource methods on [`ApiClient`](crate::ApiClient), one file per API
//! area. Each method shapes a request, dispatches it and decodes the reply.

mod analytics;
mod applications;
mod auth;
mod communications;
mod hierarchy;
mod karyakartas;
mod reports;
mod schemes;
mod voters;
