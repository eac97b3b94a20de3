use super::response::SsidResponse;
use axum::{Json, extract::Path};
use ssid::{SsidConfig, SsidGenerator};
use std::time::Instant;
use tracing::info;

/// `GET /ssid`: one ID from the default configuration.
pub async fn generate_id() -> Json<SsidResponse> {
    Json(generate(1, &SsidConfig::default()))
}

/// `GET /ssid/{count}/{generator}`
pub async fn generate_ids(
    Path((count, generator)): Path<(String, String)>,
) -> Json<SsidResponse> {
    let count = match count.parse::<usize>() {
        Ok(count) => count,
        Err(e) => return Json(SsidResponse::failed(format!("invalid count `{count}`: {e}"))),
    };
    let generator_id = match generator.parse::<u16>() {
        Ok(generator_id) => generator_id,
        Err(e) => {
            return Json(SsidResponse::failed(format!(
                "invalid generator ID `{generator}`: {e}"
            )));
        }
    };

    Json(generate(count, &SsidConfig::new(generator_id)))
}

fn generate(count: usize, config: &SsidConfig) -> SsidResponse {
    let start = Instant::now();
    let response = match SsidGenerator::new(config) {
        Ok(generator) => match generator.try_next_ids(count) {
            Ok(ssids) => {
                info!(
                    "Generated {} IDs with generator {}",
                    ssids.len(),
                    config.generator_id
                );
                SsidResponse::generated(config, ssids)
            }
            Err(e) => SsidResponse::failed(e.source),
        },
        Err(e) => SsidResponse::failed(e),
    };
    info!("Finished in {:?}", start.elapsed());
    response
}
