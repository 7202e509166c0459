use crate::form::PredictForm;
use crate::render::{render_page, Banner};
use crate::server::UiState;
use axum::{extract::State, response::Html, Form};
use tracing::info;

pub async fn health() -> &'static str {
    "OK"
}

/// Empty form with every field at 0.0
pub async fn index() -> Html<String> {
    Html(render_page(&PredictForm::default(), None))
}

/// Submit action: validate, call the service once, render the outcome
pub async fn submit(State(state): State<UiState>, Form(form): Form<PredictForm>) -> Html<String> {
    let features = match form.parse() {
        Ok(features) => features,
        Err(e) => {
            info!("Form rejected: {}", e);
            return Html(render_page(&form, Some(&Banner::from_form_error(&e))));
        }
    };

    let echoed = PredictForm::from_features(&features);
    let outcome = state.client.predict(features).await;
    info!("Prediction outcome: {:?}", outcome);

    Html(render_page(&echoed, Some(&Banner::from_outcome(&outcome))))
}
