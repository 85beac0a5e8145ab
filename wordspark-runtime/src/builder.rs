use std::sync::Arc;

use wordspark_core::config::{GenerationConfig, clamp_max_turns};
use wordspark_engine::controller::GenerationController;
use wordspark_engine::traits::TextModel;

use crate::mock::MockTextModel;
use crate::openai::OpenAiTextModel;
use crate::settings::Settings;

/// Builds a controller from settings: an OpenAI-compatible model when an
/// endpoint is configured, the offline scripted model otherwise.
///
/// The caller still has to probe availability (`refresh_availability`) before
/// the first `generate`.
pub fn build_controller(settings: &Settings, api_key: &str) -> GenerationController {
    let config = GenerationConfig {
        max_turns: clamp_max_turns(settings.max_turns),
        ..Default::default()
    };

    let model: Arc<dyn TextModel> = match &settings.base_url {
        Some(base_url) => {
            log::info!("using endpoint {base_url} (model {})", settings.model);
            Arc::new(OpenAiTextModel::new(base_url, api_key, &settings.model))
        }
        None => {
            log::info!("no endpoint configured, using the offline mock model");
            Arc::new(MockTextModel)
        }
    };

    GenerationController::new(model, config)
}
