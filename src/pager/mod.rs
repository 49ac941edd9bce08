pub mod config;
pub mod query;
pub mod state;

use tracing::{debug, info};

pub use config::{Label, PaginatorConfig};
pub use query::{encode_params, QueryParams, QueryValue};
pub use state::PaginationState;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_RANGE: i64 = 3;

/// Input of a single pagination computation.
///
/// Numbers are signed so callers can pass raw request values; anything below
/// one is treated as one.
#[derive(Clone, Debug, PartialEq)]
pub struct PagerRequest {
    rows: i64,
    limit: i64,
    page: Option<i64>,
    range: i64,
    hash: Option<String>,
    params: QueryParams,
}

impl PagerRequest {
    pub fn new(rows: i64) -> Self {
        Self {
            rows,
            limit: DEFAULT_LIMIT,
            page: None,
            range: DEFAULT_RANGE,
            hash: None,
            params: QueryParams::new(),
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// `None` resolves to the last page. Callers coming from the PHP paginator
    /// should pass `Some(1)`, which is where its `null` page ended up.
    pub fn maybe_page(mut self, page: Option<i64>) -> Self {
        self.page = page;
        self
    }

    pub fn range(mut self, range: i64) -> Self {
        self.range = range;
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

/// Where the client has to go instead of the requested page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Outcome of [`Paginator::pager`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pager {
    Ready(PaginationState),
    /// Stop processing the request and redirect to the last valid page.
    Redirect(Redirect),
}

impl Pager {
    pub fn state(&self) -> Option<&PaginationState> {
        match self {
            Self::Ready(state) => Some(state),
            Self::Redirect(_) => None,
        }
    }

    pub fn into_state(self) -> Option<PaginationState> {
        match self {
            Self::Ready(state) => Some(state),
            Self::Redirect(_) => None,
        }
    }
}

/// Floors everything below one to one.
pub fn to_positive(number: i64) -> u64 {
    if number >= 1 {
        number as u64
    } else {
        1
    }
}

#[derive(Clone, Debug, Default)]
pub struct Paginator {
    config: PaginatorConfig,
}

impl Paginator {
    pub fn new(config: PaginatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    pub fn pager(&self, request: &PagerRequest) -> Pager {
        let rows = to_positive(request.rows);
        let limit = to_positive(request.limit);
        let range = to_positive(request.range);
        let pages = rows.div_ceil(limit);

        let page = match request.page {
            Some(page) if u64::try_from(page).map_or(true, |page| page <= pages) => {
                to_positive(page)
            }
            _ => pages,
        };

        let offset = (page - 1).saturating_mul(limit);

        if let Some(redirect) = self.overflow(rows, limit, offset) {
            info!(rows, offset, location = redirect.location(), "page out of bounds");
            return Pager::Redirect(redirect);
        }

        let hash = request
            .hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| format!("#{hash}"));

        let params = encode_params(&request.params);

        debug!(rows, limit, pages, page, offset, range, "pagination computed");

        Pager::Ready(PaginationState {
            rows,
            limit,
            range,
            pages,
            page,
            offset,
            hash,
            params,
        })
    }

    fn overflow(&self, rows: u64, limit: u64, offset: u64) -> Option<Redirect> {
        if rows > 0 && offset >= rows {
            Some(Redirect {
                location: format!("{}{}", self.config.link_base, rows.div_ceil(limit)),
            })
        } else {
            None
        }
    }
}
