use std::sync::Arc;

use dialtrace_core::CoreContext;

use crate::page::{
    ReportError,
    ReportRenderer,
};

#[derive(Clone)]
pub struct AppState {
    pub core: Arc<CoreContext>,
    pub report: Arc<ReportRenderer>,
}

impl AppState {
    pub fn new(core: CoreContext) -> Result<Self, ReportError> {
        Ok(Self {
            core: Arc::new(core),
            report: Arc::new(ReportRenderer::new()?),
        })
    }
}
