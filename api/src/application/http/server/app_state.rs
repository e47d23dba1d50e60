use std::sync::Arc;

use floorplan_core::application::FloorplanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FloorplanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FloorplanService) -> Self {
        Self { args, service }
    }
}
