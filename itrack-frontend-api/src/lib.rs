use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod activity;
mod store;

pub use self::{activity::*, store::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0:?}")]
    Api(#[from] itrack_boundary::ApiError),

    #[error(transparent)]
    Convert(#[from] itrack_boundary::ConversionError),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<itrack_boundary::ApiError>().await?.into())
    }
}

async fn ensure_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(response.json::<itrack_boundary::ApiError>().await?.into())
    }
}
