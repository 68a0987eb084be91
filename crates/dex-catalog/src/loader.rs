//! Fetch a catalog from its source.

use dex_core::Entity;
use tokio::{io::AsyncReadExt, runtime::Handle, sync::oneshot};

use crate::{parse_catalog, CatalogError, CatalogSource, Result};

/// Load and validate the catalog behind `source`.
pub async fn load(source: &CatalogSource) -> Result<Vec<Entity>> {
    let bytes = fetch(source).await?;
    let entities = parse_catalog(&bytes)?;
    tracing::info!(%source, entities = entities.len(), "catalog loaded");
    Ok(entities)
}

/// Run [`load`] as a background task on `handle`.
///
/// The receiver yields exactly one outcome. Failures are logged here as
/// well, since the UI deliberately keeps showing its loading state when the
/// catalog never arrives.
pub fn spawn_load(handle: &Handle, source: CatalogSource) -> oneshot::Receiver<Result<Vec<Entity>>> {
    let (tx, rx) = oneshot::channel();
    handle.spawn(async move {
        let outcome = load(&source).await;
        if let Err(ref e) = outcome {
            tracing::error!(%source, error = %e, "catalog load failed");
        }
        if tx.send(outcome).is_err() {
            tracing::debug!("catalog receiver dropped before load finished");
        }
    });
    rx
}

async fn fetch(source: &CatalogSource) -> Result<Vec<u8>> {
    match source {
        CatalogSource::Url(url) => {
            tracing::debug!(%url, "fetching catalog");
            let response = reqwest::get(url.as_str()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            Ok(response.bytes().await?.to_vec())
        }
        CatalogSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading catalog file");
            tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })
        }
        CatalogSource::Stdin => {
            tracing::debug!("reading catalog from stdin");
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(CatalogError::Stdin)?;
            Ok(buf)
        }
    }
}
