use chrono::{DateTime, Utc};

use crate::geo::Gazetteer;

pub struct AppState {
    pub gazetteer: &'static Gazetteer,
    pub started_at: DateTime<Utc>,
}
