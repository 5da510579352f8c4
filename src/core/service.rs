//! Request boundary around the chart engine: validation, cache, event
//! fetch and structured logging.

use crate::core::cache::{CacheKey, ChartCache};
use crate::core::calculator::breaks::normalize_breaks;
use crate::core::logic::Core;
use crate::core::source::EventSource;
use crate::errors::AppResult;
use crate::models::chart::ShiftChart;
use crate::models::shift::ShiftParameters;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub params: ShiftParameters,
    pub form_id: i64,
}

pub struct ChartService<S: EventSource> {
    source: S,
    cache: Option<ChartCache>,
}

impl<S: EventSource> ChartService<S> {
    /// A zero `cache_ttl` disables caching.
    pub fn new(source: S, cache_ttl: Duration) -> Self {
        let cache = if cache_ttl.is_zero() {
            None
        } else {
            Some(ChartCache::new(cache_ttl))
        };
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> Option<&ChartCache> {
        self.cache.as_ref()
    }

    #[instrument(skip(self, request), fields(
        date = %request.params.selected_date,
        shift = %request.params.shift,
        form_id = request.form_id
    ))]
    pub fn shift_chart(&self, request: &ChartRequest) -> AppResult<ShiftChart> {
        let params = &request.params;

        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected chart request");
            return Err(e);
        }

        for dropped in normalize_breaks(&params.breaks).dropped {
            warn!(break_name = %dropped.name, reason = %dropped.reason, "dropping unusable break");
        }

        let key = CacheKey::new(params, request.form_id);
        if let Some(chart) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            debug!("chart served from cache");
            return Ok(chart);
        }

        let events = self.source.fetch_events(
            params.selected_date,
            &params.start_time,
            &params.end_time,
            request.form_id,
        )?;
        debug!(events = events.len(), "fetched production events");

        let chart = match Core::compute_shift_chart(params, &events) {
            Ok(c) => c,
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "chart computation rejected input");
                } else {
                    error!(error = %e, "chart computation failed");
                }
                return Err(e);
            }
        };

        info!(
            buckets = chart.chart_data.len(),
            current_production = chart.current_production,
            target_parts = chart.target_parts,
            efficiency = chart.efficiency,
            "shift chart computed"
        );

        if let Some(cache) = &self.cache {
            cache.insert(key, chart.clone());
        }

        Ok(chart)
    }
}
