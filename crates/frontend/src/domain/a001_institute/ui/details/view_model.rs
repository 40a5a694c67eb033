use crate::domain::a001_institute::api::fetch_by_id;
use contracts::domain::a001_institute::Institute;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct InstituteDetailsVm {
    pub institute: RwSignal<Option<Institute>>,
    pub active_tab: RwSignal<&'static str>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl InstituteDetailsVm {
    pub fn new() -> Self {
        Self {
            institute: RwSignal::new(None),
            active_tab: RwSignal::new("overview"),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, id: String) {
        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match fetch_by_id(&id).await {
                Ok(data) => vm.institute.set(Some(data)),
                Err(e) => {
                    log::warn!("institute {id} failed to load: {e}");
                    vm.error.set(Some(e));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn with_institute<R>(&self, f: impl FnOnce(&Institute) -> R) -> Option<R> {
        self.institute.with(|i| i.as_ref().map(f))
    }
}

impl Default for InstituteDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
