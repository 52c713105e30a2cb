use crate::model::{Shift, ShiftId};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Source amont des shifts candidats. Transport, auth et retries sont l'affaire
/// de l'implémentation ; l'appelant ne voit qu'une liste ou une erreur.
pub trait ShiftDirectory {
    fn list_shifts(&self) -> anyhow::Result<Vec<Shift>>;
}

/// Enregistrement wire tel que servi par l'annuaire : instants RFC3339,
/// clés camelCase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireShift {
    id: String,
    area: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(default)]
    booked: bool,
}

/// Annuaire adossé à un fichier JSON (tableau d'enregistrements wire).
pub struct JsonDirectory {
    path: PathBuf,
}

impl JsonDirectory {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ShiftDirectory for JsonDirectory {
    fn list_shifts(&self) -> anyhow::Result<Vec<Shift>> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let records: Vec<WireShift> =
            serde_json::from_slice(&data).context("parsing shift directory")?;
        records
            .into_iter()
            .map(|w| {
                if w.end_time <= w.start_time {
                    anyhow::bail!("shift {} has end before start", w.id);
                }
                Ok(Shift {
                    id: ShiftId::new(w.id),
                    area: w.area,
                    start: w.start_time,
                    end: w.end_time,
                    booked: w.booked,
                })
            })
            .collect()
    }
}

/// Récupère les shifts en absorbant tout échec comme "rien de disponible" :
/// l'UI continue de rendre une liste vide plutôt que de propager une erreur
/// de transport.
pub fn fetch_or_empty(directory: &dyn ShiftDirectory) -> Vec<Shift> {
    match directory.list_shifts() {
        Ok(shifts) => shifts,
        Err(_err) => {
            #[cfg(feature = "logging")]
            tracing::warn!("shift directory fetch failed: {_err:#}");
            Vec::new()
        }
    }
}
