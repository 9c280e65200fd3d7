use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use moodscope_instruments::error::InstrumentError;
use moodscope_instruments::scoring::Domain;
use moodscope_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            question_count: i.questions().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id).ok_or(InstrumentError::UnknownInstrument(id))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}
