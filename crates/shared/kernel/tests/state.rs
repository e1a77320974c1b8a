use lendhub_database::Database;
use lendhub_domain::config::ApiConfig;
use lendhub_domain::registry::{FeatureSlice, InitializedSlice};
use lendhub_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct DummySlice {
    marker: u32,
}

impl FeatureSlice for DummySlice {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

async fn mem_db() -> Database {
    Database::builder()
        .url("sqlite::memory:")
        .init()
        .await
        .expect("in-memory database")
}

#[tokio::test]
async fn registered_slice_is_found_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(mem_db().await)
        .register_slice(InitializedSlice::new(DummySlice { marker: 42 }))
        .build()
        .expect("state");

    let slice = state.try_get_slice::<DummySlice>().expect("slice");
    assert_eq!(slice.marker, 42);

    let names: Vec<&str> = state.slice_names().collect();
    assert_eq!(names, vec!["dummy"]);
}

#[tokio::test]
async fn missing_slice_is_an_error() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(mem_db().await)
        .build()
        .expect("state");

    assert!(matches!(
        state.try_get_slice::<DummySlice>(),
        Err(ApiStateError::MissingSlice(_))
    ));
}

#[test]
fn builder_rejects_missing_database() {
    let result = ApiState::builder().config(ApiConfig::default()).build();

    assert!(matches!(result, Err(ApiStateError::Validation(_))));
}
